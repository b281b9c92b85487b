use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::stats::Seconds;

/// First field of the lines carrying a wall-clock measurement.
const REAL: &str = "real";

/// Reads every `real` runtime recorded in the result file at `path`.
///
/// # Errors
///
/// This will return an error if:
/// - the file is missing or unreadable,
/// - a `real` line carries no duration field, or a malformed one.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<Seconds>> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;

  durations_in(&text).with_context(|| format!("{path:?}"))
}

/// Returns the duration of every line whose first field is `real`.
fn durations_in(text: &str) -> Result<Vec<Seconds>> {
  let mut durations = Vec::new();

  for line in text.lines() {
    let mut fields = line.split_whitespace();
    if fields.next() != Some(REAL) {
      continue;
    }

    let token = fields.next().with_context(|| format!("no duration field on {REAL:?} line"))?;
    durations.push(parse_duration(token).with_context(|| format!("duration {token:?}"))?);
  }

  Ok(durations)
}

/// Parses a `time(1)`-style duration of the form `<minutes>m<seconds>s` into
/// seconds.
pub fn parse_duration(token: &str) -> Result<Seconds> {
  let (minutes, rest) = token.split_once('m').context("missing 'm' separator")?;
  let seconds = rest.strip_suffix('s').context("missing trailing 's'")?;

  let minutes: u32 = minutes.parse().with_context(|| format!("minutes {minutes:?}"))?;
  let seconds: Seconds = seconds.parse().with_context(|| format!("seconds {seconds:?}"))?;

  Ok(Seconds::from(minutes) * 60.0 + seconds)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parses_minutes_and_seconds() {
    assert_eq!(parse_duration("2m3.5s").unwrap(), 123.5);
    assert_eq!(parse_duration("10m0.0s").unwrap(), 600.0);
    assert!((parse_duration("0m59.99s").unwrap() - 59.99).abs() < 1e-9);
  }

  #[test]
  fn test_rejects_malformed_durations() {
    assert!(parse_duration("123.5s").is_err());
    assert!(parse_duration("2m3.5").is_err());
    assert!(parse_duration("2m3m5s").is_err());
    assert!(parse_duration("xm1.0s").is_err());
    assert!(parse_duration("1mxs").is_err());
    assert!(parse_duration("").is_err());
  }

  #[test]
  fn test_formatted_durations_round_trip() {
    for minutes in [0u32, 1, 2, 59, 120] {
      for seconds in [0.0, 0.25, 3.5, 59.99] {
        let token = format!("{minutes}m{seconds}s");
        let total = parse_duration(&token).unwrap();

        assert!((total - (Seconds::from(minutes) * 60.0 + seconds)).abs() < 1e-9, "{token}");
      }
    }
  }

  #[test]
  fn test_extracts_the_real_line() {
    let text = "real\t2m3.5s\nuser\t1m0.0s\nsys\t0m0.3s\n";

    assert_eq!(durations_in(text).unwrap(), [123.5]);
  }

  #[test]
  fn test_collects_every_real_line() {
    let text = "real 0m1.0s\n\nreal 0m2.0s\n";

    assert_eq!(durations_in(text).unwrap(), [1.0, 2.0]);
  }

  #[test]
  fn test_no_real_line_yields_no_durations() {
    assert!(durations_in("user\t0m1.0s\nsys\t0m0.0s\n").unwrap().is_empty());
  }

  #[test]
  fn test_real_line_without_duration_is_an_error() {
    assert!(durations_in("real\n").is_err());
  }
}
