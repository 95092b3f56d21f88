use clap::Parser;
use taskpad::cli::commands::Cli;
use taskpad::cli::handlers;
use taskpad::logging;

fn main() {
    let cli = Cli::parse();

    // No subcommand launches the TUI, which owns the terminal
    let interactive = cli.command.is_none();
    if let Err(e) = logging::init(cli.log_file.as_deref(), interactive) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
