// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean CSS
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Transform {
            input,
            mode,
            options,
            output,
        }) => commands::cmd_transform(&input, mode, &options, output.as_deref()),

        Some(Commands::Bundle {
            input,
            options,
            json,
            output,
        }) => commands::cmd_bundle(&input, &options, json, output.as_deref()),

        Some(Commands::Hash { input }) => commands::cmd_hash(&input),

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "hostcss", &mut std::io::stdout());
            Ok(())
        }

        None => {
            // No command provided, show help
            println!("hostcss v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'hostcss --help' for usage information");
            Ok(())
        }
    }
}
