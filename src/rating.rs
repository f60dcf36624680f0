use chrono::NaiveDate;
use log::debug;

use crate::{
    round_rating::{sort_canonical, total},
    DataOrder, RatingError, RatingSystem, RoundRating,
};

/// How an average is rounded to a whole rating.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Ties go to the even neighbour: `1036.5` becomes `1036`.
    #[default]
    HalfEven,
    /// Ties go away from zero: `1036.5` becomes `1037`.
    HalfAwayFromZero,
}

impl Rounding {
    #[inline]
    pub fn round(self, value: f64) -> f64 {
        match self {
            Rounding::HalfEven => value.round_ties_even(),
            Rounding::HalfAwayFromZero => value.round(),
        }
    }
}

/// A player rating and the rounds it was calculated from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// The rating itself. Higher is better.
    pub value: i32,
    /// Date at which the rating is published, if known.
    pub as_of: Option<NaiveDate>,
    /// Rounds that were used to calculate the rating, sorted by date, then by
    /// rating. Rounds that counted double are listed only once.
    pub included: Vec<RoundRating>,
}

impl Rating {
    /// Recalculates the rating in place from a full round history.
    ///
    /// `as_of` is only replaced if a new date is given. On error, the rating
    /// is left unchanged.
    pub fn update(
        &mut self,
        rating_system: &RatingSystem,
        rounds: &[RoundRating],
        order: DataOrder,
        reference_date: Option<NaiveDate>,
        as_of: Option<NaiveDate>,
    ) -> Result<(), RatingError> {
        let Rating {
            value, included, ..
        } = rating_system.update(rounds, order, reference_date, None)?;
        self.value = value;
        self.included = included;
        if as_of.is_some() {
            self.as_of = as_of;
        }
        Ok(())
    }

    /// Dates of the oldest and the most recent included round.
    pub fn included_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.included.first()?.date, self.included.last()?.date))
    }
}

impl RatingSystem {
    /// Calculates a rating from a full round history.
    ///
    /// Selects the rounds in the rating window, removes outliers, doubles the
    /// most recent quarter and takes the average. See
    /// [`RatingSystem::select`], [`RatingSystem::filter_outliers`] and
    /// [`RatingSystem::double_most_recent_quarter`].
    ///
    /// Published round ratings are integers, while the PDGA calculates with
    /// the underlying real numbers, so the result can occasionally be off by
    /// one from the official rating.
    pub fn update(
        &self,
        rounds: &[RoundRating],
        order: DataOrder,
        reference_date: Option<NaiveDate>,
        as_of: Option<NaiveDate>,
    ) -> Result<Rating, RatingError> {
        let selected = self.select(rounds, order, reference_date)?;
        let mut included = self.filter_outliers(&selected);
        if included.is_empty() {
            return Err(RatingError::InsufficientData);
        }
        sort_canonical(&mut included);

        let weighted = self.double_most_recent_quarter(&included);
        let average = total(&weighted) as f64 / weighted.len() as f64;
        let value = self.rounding.round(average) as i32;

        debug!(
            "rating {} from {} rounds (average {:.3})",
            value,
            included.len(),
            average
        );

        Ok(Rating {
            value,
            as_of,
            included,
        })
    }
}
