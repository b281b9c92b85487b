use anyhow::{Context, Result};

use crate::stats::Program;

/// Prefix shared by every result filename.
const PREFIX: &str = "gr";
/// Kind token of the files that drive group discovery.
const DRIVER_KIND: &str = "n.time";

/// A (size, parameter, iteration) combination, discovered through its driver
/// file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Driver {
  pub size: u32,
  pub parameter: u32,
  pub iteration: u32,
}

impl Driver {
  /// The name of the result file holding `program`'s runtime for this
  /// combination.
  pub fn time_file(&self, program: Program) -> String {
    format!("{PREFIX}-{}-{}-{}-{}.time", self.size, self.parameter, self.iteration, program.kind())
  }
}

/// Parses a result filename of the form `gr-<size>-<parameter>-<iteration>-<kind>`,
/// returning `Ok(None)` for well-formed names whose kind is not the driver
/// sentinel.
///
/// # Errors
///
/// This will return an error if:
/// - the name does not split into exactly 5 fields,
/// - a numeric field of a driver name fails to parse.
pub fn parse_driver(name: &str) -> Result<Option<Driver>> {
  let tokens: Vec<&str> = name.split('-').collect();

  let &[_, size, parameter, iteration, kind] = tokens.as_slice() else {
    anyhow::bail!("expected 5 '-'-separated fields, found {}", tokens.len());
  };

  if kind != DRIVER_KIND {
    return Ok(None);
  }

  Ok(Some(Driver {
    size: size.parse().with_context(|| format!("size {size:?}"))?,
    parameter: parameter.parse().with_context(|| format!("parameter {parameter:?}"))?,
    iteration: iteration.parse().with_context(|| format!("iteration {iteration:?}"))?,
  }))
}
