use std::process::ExitCode;

use clap::Parser;

use toolchain_env::cli::{Cli, ConfigurationMerger, execute_command};
use toolchain_env::config::ProcessEnv;
use toolchain_env::error::AppResult;
use toolchain_env::logger::init_logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    init_logger(&ConfigurationMerger::new(cli).logger_config())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli, ProcessEnv, &mut out)
}
