use anyhow::Result;
use clap::Parser;
use log::warn;
use sqlite_header::{db::DbFile, Cli};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let header = DbFile::from_path(&cli.db_path)?.file_header()?;
    print!("{header}");

    for finding in header.check() {
        warn!("{}: {finding}", cli.db_path.display());
    }

    Ok(())
}
