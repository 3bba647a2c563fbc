use clap::Parser;
use std::path::PathBuf;

/// Prints the track and index layout of one or more cue sheets.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InspectCommand {
    /// Cue sheet files, or directories containing them
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Print the parsed sheets as JSON
    #[arg(long, short = 'j', value_name = "JSON", default_value_t = false)]
    pub json: bool,

    #[arg(
        value_name = "RECURSIVE",
        long,
        short = 'R',
        help = "recursively searches directories in PATHS for cue sheets",
        default_value = "false"
    )]
    pub recursive: bool,
}

/// Checks that one or more cue sheets parse without errors.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ValidateCommand {
    /// Cue sheet files, or directories containing them
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    #[arg(
        value_name = "RECURSIVE",
        long,
        short = 'R',
        help = "recursively searches directories in PATHS for cue sheets",
        default_value = "false"
    )]
    pub recursive: bool,
}
