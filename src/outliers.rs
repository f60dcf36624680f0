use log::{debug, trace};

use crate::{
    round_rating::{sort_canonical, total},
    RatingSystem, RoundRating,
};

/// Arithmetic mean and population standard deviation of the ratings.
///
/// Sums are accumulated as exact integers, so the result does not depend on
/// the order of `rounds`.
pub fn mean_and_deviation(rounds: &[RoundRating]) -> Option<(f64, f64)> {
    if rounds.is_empty() {
        return None;
    }

    let n = rounds.len() as i128;
    let sum = i128::from(total(rounds));
    let sum_sq: i128 = rounds
        .iter()
        .map(|r| i128::from(r.rating) * i128::from(r.rating))
        .sum();

    let mean = sum as f64 / n as f64;
    let variance = (n * sum_sq - sum * sum) as f64 / (n * n) as f64;
    Some((mean, variance.sqrt()))
}

impl RatingSystem {
    /// Removes rounds that are too far below average.
    ///
    /// From the PDGA Ratings System Guide: "Rounds more than 2.5 standard
    /// deviations or more than 100 points below a player's average are
    /// excluded from the player's rating if there are at least 7 rounds
    /// included in the player's rating."
    ///
    /// The average and standard deviation are computed once, over all given
    /// rounds. Rounds are then considered from best to worst, and the best
    /// 7 are always kept. The result is sorted by date, then by rating.
    pub fn filter_outliers(&self, rounds: &[RoundRating]) -> Vec<RoundRating> {
        if rounds.len() < self.min_outlier_rounds {
            return rounds.to_vec();
        }
        let Some((mean, deviation)) = mean_and_deviation(rounds) else {
            return Vec::new();
        };
        let max_below = f64::min(self.outlier_deviations * deviation, self.outlier_points);

        let mut by_rating = rounds.to_vec();
        by_rating.sort_by(|a, b| b.rating.cmp(&a.rating));

        let mut kept = Vec::with_capacity(by_rating.len());
        for round in by_rating {
            let below = mean - f64::from(round.rating);
            if below < max_below || kept.len() < self.min_outlier_rounds {
                kept.push(round);
            } else {
                trace!("outlier {round}: {below:.1} below average {mean:.1} (sd {deviation:.1})");
            }
        }

        debug!(
            "removed {} outliers from {} rounds",
            rounds.len() - kept.len(),
            rounds.len()
        );

        sort_canonical(&mut kept);
        kept
    }
}
