use crate::core::collector::collect;
use crate::domain::models::{CollectConfig, FilterRules};
use crate::infra::console::ConsoleReporter;
use crate::infra::logger::setup_logger;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "source-snap")]
#[command(about = "Flatten a project tree into a single snapshot file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    Collect {
        #[arg(long)]
        path: String,

        #[arg(long, default_value = "results.txt")]
        output: String,

        /// Print one exploration line per visited directory.
        #[arg(long)]
        debug: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    match cli.command {
        Commands::Collect { path, output, debug } => {
            info!("Starting collect command");
            debug!(
                "Command parameters: path={}, output={}, debug={}",
                path, output, debug
            );

            let config = CollectConfig {
                root: PathBuf::from(path),
                output: PathBuf::from(output),
                debug,
            };

            let mut reporter = ConsoleReporter::new();
            collect(&config, &FilterRules::standard(), &mut reporter);
        }
    }
    Ok(())
}
