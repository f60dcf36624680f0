use std::fmt;

use crate::{RatingError, RoundRating};

/// How a list of round ratings is ordered by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataOrder {
    /// No particular order. The rounds will be sorted by date.
    #[default]
    Unsorted,
    /// Most recent round first, as listed on the PDGA ratings detail page.
    RecentFirst,
    /// Oldest round first.
    RecentLast,
}

impl fmt::Display for DataOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DataOrder::Unsorted => "unsorted",
            DataOrder::RecentFirst => "sorted most recent first",
            DataOrder::RecentLast => "sorted most recent last",
        })
    }
}

impl DataOrder {
    /// Checks that `rounds` really are in this order.
    pub fn validate(self, rounds: &[RoundRating]) -> Result<(), RatingError> {
        let in_order = |earlier: &RoundRating, later: &RoundRating| match self {
            DataOrder::Unsorted => true,
            DataOrder::RecentFirst => earlier.date >= later.date,
            DataOrder::RecentLast => earlier.date <= later.date,
        };

        match rounds.windows(2).find(|pair| !in_order(&pair[0], &pair[1])) {
            Some(pair) => Err(RatingError::InconsistentOrder {
                order: self,
                earlier: pair[0],
                later: pair[1],
            }),
            None => Ok(()),
        }
    }

    /// Returns a copy of `rounds` sorted by date, oldest first. Rounds on the
    /// same date keep their relative order, unless they have to be reversed.
    pub fn to_ascending(self, rounds: &[RoundRating]) -> Result<Vec<RoundRating>, RatingError> {
        self.validate(rounds)?;
        let mut ascending = rounds.to_vec();
        match self {
            DataOrder::Unsorted => ascending.sort_by_key(|r| r.date),
            DataOrder::RecentFirst => ascending.reverse(),
            DataOrder::RecentLast => (),
        }
        Ok(ascending)
    }
}
