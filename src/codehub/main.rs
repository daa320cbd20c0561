mod cli;

fn main() {
    cli::logging::init();

    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
