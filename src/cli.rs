// src/cli.rs
//! CLI definitions for hostcss
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use hostcss::Mode;

#[derive(Parser)]
#[command(name = "hostcss")]
#[command(author = "hostcss Contributors")]
#[command(version)]
#[command(about = "Rewrite web-component :host stylesheets into plain CSS", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite :host selectors in a stylesheet
    Transform {
        /// Input stylesheet ("-" for stdin)
        input: String,

        /// Transformer to use (default: from config, else text)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        #[command(flatten)]
        options: TransformArgs,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Transform a stylesheet and name it by content, for CSS-in-JS
    Bundle {
        /// Input stylesheet ("-" for stdin)
        input: String,

        #[command(flatten)]
        options: TransformArgs,

        /// Print a JSON object with "name" and "css"
        #[arg(long)]
        json: bool,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the content name of a stylesheet as it is
    Hash {
        /// Input stylesheet ("-" for stdin)
        input: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Transform settings shared by `transform` and `bundle`
///
/// Flags override values from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Text substituted for :host (default: &)
    #[arg(long)]
    pub host_tag: Option<String>,

    /// Wrap the output in this cascade layer
    #[arg(short, long)]
    pub layer: Option<String>,

    /// Rename [attr] selectors to [data-attr]
    #[arg(short, long)]
    pub data_attributes: bool,

    /// Attribute name exempt from the data- remap (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Configuration file (default: ./hostcss.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Transformer selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Text,
    Tree,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => Mode::Text,
            ModeArg::Tree => Mode::Tree,
        }
    }
}
