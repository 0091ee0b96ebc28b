use clap::{Parser, Subcommand};
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(version, about = "Deploys, feeds and queries a std-reference contract")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deploys the contract, the relayer defaults to the wallet
    Deploy {
        #[arg(long)]
        relayer: Option<String>,
    },
    Upgrade,
    /// Relays updates written as SYMBOL:RATE:RESOLVE_TIME
    Relay {
        #[arg(required = true)]
        updates: Vec<RelayArg>,
    },
    SetRelayer {
        relayer: String,
    },
    Pause,
    Unpause,
    IsPaused,
    GetRelayer,
    GetSymbols,
    GetRefData {
        symbol: String,
    },
    GetReferenceData {
        base: String,
        quote: String,
    },
    /// Cross rate at 18 decimals
    GetReferenceDataE18 {
        base: String,
        quote: String,
    },
    /// Queries pairs written as BASE/QUOTE
    GetReferenceDataBulk {
        #[arg(required = true)]
        pairs: Vec<PairArg>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayArg {
    pub symbol: String,
    pub rate: u64,
    pub resolve_time: u64,
}

impl FromStr for RelayArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(symbol), Some(rate), Some(resolve_time), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected SYMBOL:RATE:RESOLVE_TIME, got `{s}`"));
        };
        if symbol.is_empty() {
            return Err(format!("missing symbol in `{s}`"));
        }

        let rate = rate
            .parse()
            .map_err(|err| format!("invalid rate `{rate}`: {err}"))?;
        let resolve_time = resolve_time
            .parse()
            .map_err(|err| format!("invalid resolve time `{resolve_time}`: {err}"))?;

        Ok(RelayArg {
            symbol: symbol.to_owned(),
            rate,
            resolve_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairArg {
    pub base: String,
    pub quote: String,
}

impl FromStr for PairArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() && !quote.contains('/') => {
                Ok(PairArg {
                    base: base.to_owned(),
                    quote: quote.to_owned(),
                })
            }
            _ => Err(format!("expected BASE/QUOTE, got `{s}`")),
        }
    }
}
