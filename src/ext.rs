use crate::stats::Seconds;

#[extend::ext(name = SecondsSliceExt)]
pub impl [Seconds] {
  /// The arithmetic mean, or `None` for an empty slice.
  fn mean(&self) -> Option<Seconds> {
    if self.is_empty() {
      return None;
    }

    Some(self.iter().sum::<Seconds>() / self.len() as Seconds)
  }
}
