//! Newslens CLI binary entrypoint.

fn main() {
    if let Err(err) = newslens_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
