use serde::Serialize;

use crate::day::Day;
use crate::error::CoreError;

// Sprint-window types live here to keep main focused.

/// An inclusive calendar window. `start <= end` always holds, so `days()`
/// yields at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SprintWindow {
  pub start: Day,
  pub end: Day,
}

impl SprintWindow {
  pub fn new(start: Day, end: Day) -> Result<Self, CoreError> {
    if start > end {
      return Err(CoreError::InvalidRange { start, end });
    }
    Ok(SprintWindow { start, end })
  }

  /// Every day from `start` to `end` inclusive, in order.
  pub fn days(&self) -> Vec<Day> {
    let mut days = Vec::with_capacity(self.len_days());
    let mut current = self.start;

    while current <= self.end {
      days.push(current);
      current = current.succ();
    }

    days
  }

  pub fn len_days(&self) -> usize {
    (self.start.days_until(self.end) + 1) as usize
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn day(s: &str) -> Day {
    Day::parse_config(s).unwrap()
  }

  #[test]
  fn single_day_window_has_one_entry() {
    let w = SprintWindow::new(day("2025-03-01"), day("2025-03-01")).unwrap();
    assert_eq!(w.days(), vec![day("2025-03-01")]);
    assert_eq!(w.len_days(), 1);
  }

  #[test]
  fn days_are_inclusive_and_ordered() {
    let w = SprintWindow::new(day("2025-02-27"), day("2025-03-02")).unwrap();
    let days: Vec<String> = w.days().iter().map(|d| d.to_string()).collect();
    assert_eq!(days, vec!["2025-02-27", "2025-02-28", "2025-03-01", "2025-03-02"]);
  }

  #[test]
  fn reversed_bounds_are_rejected() {
    let err = SprintWindow::new(day("2025-03-02"), day("2025-03-01")).unwrap_err();
    assert!(matches!(err, CoreError::InvalidRange { .. }));
  }

  proptest! {
    // len(days) == (end - start) + 1 for every valid window.
    #[test]
    fn window_length_invariant(start_offset in 0i64..64, span in 0i64..400) {
      let mut start = day("2020-01-01");
      for _ in 0..start_offset {
        start = start.succ();
      }
      let mut end = start;
      for _ in 0..span {
        end = end.succ();
      }
      let w = SprintWindow::new(start, end).unwrap();
      prop_assert_eq!(w.days().len() as i64, span + 1);
      prop_assert_eq!(w.days().len(), w.len_days());
    }
  }
}
