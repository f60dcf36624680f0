use log::debug;

use crate::{RatingSystem, RoundRating};

impl RatingSystem {
    /// Index of the first round that counts double, given `len` rounds
    /// sorted oldest first.
    pub fn doubling_cut(&self, len: usize) -> usize {
        if len < self.min_doubling_rounds {
            len
        } else {
            let cut = ((1.0 - self.doubled_fraction) * len as f64).ceil() as usize;
            cut.min(len)
        }
    }

    /// Appends a copy of the most recent quarter of `rounds`, which must be
    /// sorted oldest first.
    ///
    /// From the PDGA Ratings System Guide: "The most recent 25% (1/4) of
    /// rounds will count double once there are at least 9 round ratings."
    pub fn double_most_recent_quarter(&self, rounds: &[RoundRating]) -> Vec<RoundRating> {
        let cut = self.doubling_cut(rounds.len());

        let mut weighted = Vec::with_capacity(2 * rounds.len() - cut);
        weighted.extend_from_slice(rounds);
        weighted.extend_from_slice(&rounds[cut..]);

        debug!("doubled {} of {} rounds", rounds.len() - cut, rounds.len());
        weighted
    }
}
