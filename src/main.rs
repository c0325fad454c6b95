//! `edd` command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use edd::{
    edit,
    opener::SystemLauncher,
    prompt::{catch_interrupts, StdConsole},
    resolve::default_editor,
    Configuration, Outcome, Request,
};

#[derive(Parser, Debug)]
#[command(name = "edd", version, about = "Open aliased files in aliased editors")]
struct Cli {
    /// File alias or path to edit; `ask` or nothing shows the file menu
    #[arg(value_name = "FILE", default_value = "")]
    file: String,

    /// Tool alias or command to edit with; `ask` shows the tool menu
    #[arg(value_name = "TOOL", default_value = "")]
    tool: String,

    /// Path to the configuration file (default: ~/.config/edd)
    #[arg(long = "conf", value_name = "CONFIG_PATH")]
    conf: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    if let Err(e) = catch_interrupts() {
        log::warn!("could not install Ctrl-C handler: {e}");
    }
    let cli = Cli::parse();
    log::debug!("CLI args parsed: {cli:?}");

    let config = Configuration::load_from(cli.conf, dirs::home_dir());
    let request = Request {
        file: cli.file,
        tool: cli.tool,
    };

    let outcome = edit(
        &request,
        &config,
        &mut StdConsole,
        &mut SystemLauncher,
        &default_editor(),
    );
    report(&outcome);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(outcome: &Outcome) {
    let message = outcome.message();
    if outcome.is_clean() {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }
}
