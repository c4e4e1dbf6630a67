use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Highest verbosity that still changes the log level (DEBUG).
pub const MAX_VERBOSITY: u8 = 2;

/// Force GPS coordinates onto images that have none, so photo libraries order
/// them by the timezone you pick.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// filename of an image
    #[arg(value_name = "FILENAME")]
    pub files: Vec<PathBuf>,

    /// location alias (see --list_aliases)
    #[arg(short, long)]
    pub alias: Option<String>,

    /// manually enter coordinates (decimal format, separated by space)
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["LAT", "LONG"],
        allow_negative_numbers = true
    )]
    pub coordinates: Option<Vec<f64>>,

    /// modify every listed file, even those that already carry coordinates
    #[arg(short, long)]
    pub force: bool,

    /// list all available aliases and exit
    #[arg(short, long = "list_aliases", alias = "list-aliases")]
    pub list_aliases: bool,

    /// do nothing, just show what would be edited (useful with -v)
    #[arg(short = 'n', long = "do_nothing", alias = "do-nothing")]
    pub do_nothing: bool,

    /// overwrite original file(s) instead of keeping an exiftool backup
    #[arg(short, long)]
    pub overwrite: bool,

    /// copy coordinates from this file's existing GPS tags
    #[arg(
        short,
        long = "source_file",
        alias = "source-file",
        value_parser = existing_file
    )]
    pub source_file: Option<PathBuf>,

    /// verbose output, each 'v' increases verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Verbosity capped at [`MAX_VERBOSITY`].
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(MAX_VERBOSITY)
    }
}

fn existing_file(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("the file {} does not exist", arg))
    }
}
