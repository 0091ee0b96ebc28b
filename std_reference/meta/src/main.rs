fn main() {
    multiversx_sc_meta_lib::cli_main::<std_reference::AbiProvider>();
}
