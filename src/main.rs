mod cli;
mod engine;
mod format;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
