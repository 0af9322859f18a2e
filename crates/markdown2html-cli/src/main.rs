use anyhow::{Context, Result};
use clap::Parser;
use markdown2html::{convert_file, ConvertError, ExitCode};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the markdown file to convert
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// Path of the HTML file to write (overwritten if present)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> std::process::ExitCode {
    init_logger();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            log::debug!("argument parsing failed: {:?}", err.kind());
            let usage = ConvertError::Usage;
            eprintln!("{usage}");
            return exit_with(usage.exit_code());
        }
    };

    match run(&cli) {
        Ok(()) => exit_with(ExitCode::Success),
        Err(err) => {
            eprintln!("{err:#}");
            exit_with(ExitCode::Failure)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    log::debug!(
        "converting {} into {}",
        cli.input.display(),
        cli.output.display()
    );

    match convert_file(&cli.input, &cli.output) {
        Ok(()) => Ok(()),
        Err(err @ ConvertError::MissingInput(_)) => Err(err.into()),
        Err(err) => Err(err).with_context(|| {
            format!(
                "Unable to convert {} into {}",
                cli.input.display(),
                cli.output.display()
            )
        }),
    }
}

fn init_logger() {
    if let Err(err) = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    ) {
        eprintln!("Failed to initialise logging: {err}");
    }
}

fn exit_with(code: ExitCode) -> std::process::ExitCode {
    std::process::ExitCode::from(code as u8)
}
