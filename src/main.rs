// CLI binary entry point for id3scan
//
// This is the main entry point for the id3scan command-line tool.

mod cli;

use clap::Parser;
use std::io;
use std::process;

use cli::{Commands, Config, OutputFormatter};

fn main() {
    lovely_env_logger::init_default();
    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("✗ {:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let options = config.parse_options()?;
    let formatter = OutputFormatter::new(config.format, config.quiet);
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let failures = match &config.command {
        Commands::Read { files, fields } => {
            cli::commands::command_read(files.as_slice(), fields.as_deref(), &options, &formatter, &mut writer)?
        }
        Commands::Header { files } => {
            cli::commands::command_header(files.as_slice(), &formatter, &mut writer)?
        }
    };

    if failures > 0 {
        anyhow::bail!("{} file(s) could not be read", failures);
    }
    Ok(())
}
