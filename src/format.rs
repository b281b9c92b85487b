use std::fmt::Write;

use anyhow::{anyhow, Result};

use crate::{
  ext::SecondsSliceExt,
  stats::{Program, Seconds, Stats},
};

struct Row {
  size: u32,
  parameter: u32,
  /// Mean runtimes in `Program::ALL` order.
  means: [Seconds; 3],
}

/// Renders one line per (size, parameter) group, ordered by parameter and then
/// size: the group's size, parameter, and per-program mean runtimes with two
/// decimals.
pub fn format(stats: &Stats) -> Result<String> {
  let mut rows = Vec::new();

  for (&size, parameters) in stats {
    for (&parameter, group) in parameters {
      let mut means = [0.0; 3];
      for (mean, program) in means.iter_mut().zip(Program::ALL) {
        *mean = group.times(program).mean().ok_or_else(|| {
          anyhow!("no runtimes for program {:?} at size {size} parameter {parameter}", program.kind())
        })?;
      }

      rows.push(Row { size, parameter, means });
    }
  }

  rows.sort_by_key(|row| (row.parameter, row.size));

  let mut table = String::new();
  for Row { size, parameter, means: [o, n, n2] } in rows {
    writeln!(table, "{size} {parameter} {o:.2} {n:.2} {n2:.2}")?;
  }

  Ok(table)
}
