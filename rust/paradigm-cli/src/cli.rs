use clap::{ArgAction, Args, Parser, Subcommand};
use paradigm_core::Alignment;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "paradigm")]
#[command(bin_name = "paradigm")]
#[command(about = "Agreement paradigms under Paradigmatic Generalisation", long_about = None)]
pub struct ParadigmCli {
    /// Log more; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl ParadigmCli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in languages
    List,

    /// Print the paradigm of a built-in language
    Table {
        language: String,

        #[command(flatten)]
        alignment: AlignmentArgs,

        /// Text shown in cells where no vocabulary item is inserted
        #[arg(long)]
        gap_marker: Option<String>,
    },

    /// Trace the realisation of a single cell, e.g. `3s>2p`
    Derive {
        language: String,

        cell: String,

        /// Wait for Enter between stages
        #[arg(long)]
        step: bool,

        #[command(flatten)]
        alignment: AlignmentArgs,
    },
}

#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct AlignmentArgs {
    /// Use ergative/absolutive case labels
    #[arg(long)]
    pub ergative: bool,

    /// Use nominative/accusative case labels
    #[arg(long)]
    pub accusative: bool,
}

impl AlignmentArgs {
    /// The requested alignment, or `default` when neither flag is given.
    pub fn resolve(&self, default: Alignment) -> Alignment {
        if self.ergative {
            Alignment::Ergative
        } else if self.accusative {
            Alignment::Accusative
        } else {
            default
        }
    }
}
