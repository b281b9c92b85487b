use std::collections::BTreeMap;

/// A wall-clock runtime in seconds, as reported by `time(1)`.
pub type Seconds = f64;

/// The benchmark program variants being compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Program {
  O,
  N,
  N2,
}

impl Program {
  /// Every program, in report column order.
  pub const ALL: [Program; 3] = [Program::O, Program::N, Program::N2];

  /// The kind label used in result filenames.
  pub fn kind(self) -> &'static str {
    match self {
      Program::O => "o",
      Program::N => "n",
      Program::N2 => "n2",
    }
  }
}

/// Runtimes collected for a single (size, parameter) group, one list per
/// program, across all iterations of the group.
#[derive(Debug, Default)]
pub struct Group {
  pub o: Vec<Seconds>,
  pub n: Vec<Seconds>,
  pub n2: Vec<Seconds>,
}

impl Group {
  pub fn push(&mut self, program: Program, seconds: Seconds) {
    self.times_mut(program).push(seconds);
  }

  pub fn times(&self, program: Program) -> &[Seconds] {
    match program {
      Program::O => &self.o,
      Program::N => &self.n,
      Program::N2 => &self.n2,
    }
  }

  fn times_mut(&mut self, program: Program) -> &mut Vec<Seconds> {
    match program {
      Program::O => &mut self.o,
      Program::N => &mut self.n,
      Program::N2 => &mut self.n2,
    }
  }
}

/// Collected runtimes, grouped by instance size and then by the generator
/// parameter.
pub type Stats = BTreeMap<u32, BTreeMap<u32, Group>>;
