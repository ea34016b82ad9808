fn main() {
    if let Err(e) = entity_maker::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
