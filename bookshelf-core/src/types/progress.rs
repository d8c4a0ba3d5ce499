//! Reading progress summary

use serde::{Deserialize, Serialize};

/// Percentages of a shelf that have been read and are still to read
///
/// Percentages are truncated, so `completed + to_read` may be 99.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Progress {
    /// Percent of books read
    pub completed: u32,

    /// Percent of books not yet read
    pub to_read: u32,

    /// Reserved; always 0
    pub in_progress: u32,
}

impl Progress {
    pub fn new(completed: u32, to_read: u32, in_progress: u32) -> Self {
        Self {
            completed,
            to_read,
            in_progress,
        }
    }

    /// Compute progress from a read count and a total.
    ///
    /// A total of zero yields 0/0/0 instead of dividing by zero. A read count
    /// above the total is treated as the total.
    pub(crate) fn from_counts(read: usize, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }

        let read = read.min(total);
        let to_read = total - read;
        Self::new(percent(read, total), percent(to_read, total), 0)
    }
}

fn percent(part: usize, total: usize) -> u32 {
    // part <= total, so the result is at most 100
    (part * 100 / total) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_of_five() {
        assert_eq!(Progress::from_counts(2, 5), Progress::new(40, 60, 0));
    }

    #[test]
    fn test_truncates() {
        assert_eq!(Progress::from_counts(1, 3), Progress::new(33, 66, 0));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(Progress::from_counts(0, 0), Progress::default());
    }

    #[test]
    fn test_read_above_total_is_clamped() {
        assert_eq!(Progress::from_counts(7, 5), Progress::new(100, 0, 0));
    }

    #[test]
    fn test_all_read() {
        assert_eq!(Progress::from_counts(4, 4), Progress::new(100, 0, 0));
    }
}
