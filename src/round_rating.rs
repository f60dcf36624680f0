use std::{cmp::Ordering, fmt};

use chrono::NaiveDate;

/// A single rated round: the round rating a player earned on a given date.
///
/// Two rounds on the same date with the same rating are indistinguishable,
/// and both may legitimately appear in a history (several rounds in one
/// event).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRating {
    pub date: NaiveDate,
    pub rating: i32,
}

impl RoundRating {
    #[inline]
    pub fn new(date: NaiveDate, rating: i32) -> RoundRating {
        RoundRating { date, rating }
    }
}

/// Canonical order: by date, then by rating, both ascending.
impl Ord for RoundRating {
    #[inline]
    fn cmp(&self, other: &RoundRating) -> Ordering {
        (self.date, self.rating).cmp(&(other.date, other.rating))
    }
}

impl PartialOrd for RoundRating {
    #[inline]
    fn partial_cmp(&self, other: &RoundRating) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RoundRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.rating, self.date)
    }
}

pub(crate) fn sort_canonical(rounds: &mut [RoundRating]) {
    rounds.sort_unstable();
}

/// Sum of all ratings, exact.
pub(crate) fn total(rounds: &[RoundRating]) -> i64 {
    rounds.iter().map(|r| i64::from(r.rating)).sum()
}
