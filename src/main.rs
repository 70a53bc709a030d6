mod assets;
mod cli;
mod commands;
mod dashboard;
mod error;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
