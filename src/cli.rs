use clap::Parser;
use std::path::PathBuf;

/// Print the 100-byte header of a SQLite database file, one field per line.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    pub db_path: PathBuf,
}
