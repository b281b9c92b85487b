mod ext;
mod filename;
mod format;
mod stats;
mod summary;
mod timing;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use self::summary::Summary;

#[derive(Parser)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  Summarise {
    /// Directory containing the benchmark result files.
    #[arg(long, default_value = "./runtimes")]
    runtimes_dir: PathBuf,
  },
}

fn main() -> Result<()> {
  env_logger::init();

  match Args::parse().command {
    Command::Summarise { runtimes_dir } => {
      if !runtimes_dir.exists() {
        anyhow::bail!("{runtimes_dir:?} does not exist");
      }

      let mut summary = Summary::new(runtimes_dir);
      summary.summarise().context("summarise")?;

      print!("{}", format::format(&summary.stats).context("format")?);
    }
  }

  Ok(())
}
