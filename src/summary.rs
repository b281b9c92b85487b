use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::{
  filename::{self, Driver},
  stats::{Program, Stats},
  timing,
};

pub struct Summary {
  /// Directory holding the result files.
  runtimes_dir: PathBuf,
  /// Runtimes collected for each (size, parameter) group.
  pub stats: Stats,
}

impl Summary {
  pub fn new(runtimes_dir: PathBuf) -> Self {
    Self { runtimes_dir, stats: Stats::new() }
  }

  /// Scans the results directory and aggregates the runtimes of every
  /// combination that has a driver file.
  pub fn summarise(&mut self) -> Result<()> {
    for name in self.filenames().context("list result files")? {
      let Some(driver) = filename::parse_driver(&name).with_context(|| format!("filename {name:?}"))? else {
        continue;
      };

      debug!("collecting {driver:?}");
      self.collect(driver).with_context(|| format!("driver {name:?}"))?;
    }

    Ok(())
  }

  /// Reads the three per-program result files of one driver combination and
  /// appends their runtimes to the combination's group.
  fn collect(&mut self, driver: Driver) -> Result<()> {
    for program in Program::ALL {
      let path = self.runtimes_dir.join(driver.time_file(program));
      let durations = timing::read_file(&path)?;

      let group = self.stats.entry(driver.size).or_default().entry(driver.parameter).or_default();
      for seconds in durations {
        group.push(program, seconds);
      }
    }

    Ok(())
  }

  fn filenames(&self) -> Result<Vec<String>> {
    fs::read_dir(&self.runtimes_dir)
      .context("read dir")?
      .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
      .collect()
  }
}
