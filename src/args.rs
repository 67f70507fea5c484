// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Command-line arguments parsed via clap.
///
/// The only argument is the directory; there are no flags, so `-x` or
/// `--help` is taken as a directory name like any other.
#[derive(Parser, Debug)]
#[command(
    name = "dirwatch",
    about = "Live listing of a directory, refreshed every 3 seconds until Ctrl-C",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Directory to watch
    #[arg(
        value_name = "DIRECTORY",
        value_hint = ValueHint::DirPath,
        allow_hyphen_values = true
    )]
    pub directory: PathBuf,
}
