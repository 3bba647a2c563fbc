use crate::commands::cue::{InspectCommand, ValidateCommand};
use clap::{Parser, Subcommand};

pub mod cue;

/// CLI for reading and validating CUE sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Inspect(InspectCommand),
    Validate(ValidateCommand),
}
