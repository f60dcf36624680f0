//! Player ratings from dated round ratings, following the PDGA Ratings
//! System Guide.
//!
//! A rating is the average of the rounds played in the 12 months before the
//! most recent round (going back up to 24 months to find 8 rounds), after
//! removing rounds far below average and counting the most recent quarter
//! double.
//!
//! ```
//! use chrono::NaiveDate;
//! use pdga_rating::{DataOrder, RatingSystem, RoundRating};
//!
//! let date = |m, d| NaiveDate::from_ymd_opt(2021, m, d).unwrap();
//! let rounds = [
//!     RoundRating::new(date(9, 26), 1010),
//!     RoundRating::new(date(9, 26), 1053),
//!     RoundRating::new(date(9, 19), 1071),
//! ];
//!
//! let rating = RatingSystem::new()
//!     .update(&rounds, DataOrder::RecentFirst, None, None)
//!     .unwrap();
//! assert_eq!(rating.value, 1045);
//! assert_eq!(rating.included[0], RoundRating::new(date(9, 19), 1071));
//! ```

mod data_order;
mod error;
pub mod outliers;
mod rating;
mod rating_system;
mod round_rating;
mod weighting;
pub mod window;

pub use data_order::DataOrder;
pub use error::RatingError;
pub use rating::{Rating, Rounding};
pub use rating_system::{RatingSystem, RatingSystemBuilder};
pub use round_rating::RoundRating;

use chrono::NaiveDate;

/// Calculates a rating with the default [`RatingSystem`].
pub fn update(
    rounds: &[RoundRating],
    order: DataOrder,
    reference_date: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
) -> Result<Rating, RatingError> {
    RatingSystem::new().update(rounds, order, reference_date, as_of)
}
