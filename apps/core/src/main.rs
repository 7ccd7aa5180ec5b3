fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match navhub_core::runtime::parse_cli_args(&args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("[navhub-core] {error}");
            std::process::exit(2);
        }
    };

    if let Err(error) = navhub_core::runtime::run_with_options(options) {
        eprintln!("[navhub-core] runtime failed: {error}");
        std::process::exit(1);
    }
}
