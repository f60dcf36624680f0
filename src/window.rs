use chrono::{Months, NaiveDate};
use log::debug;

use crate::{DataOrder, RatingError, RatingSystem, RoundRating};

/// `date` moved back by whole calendar months. The day of month is clamped
/// to the length of the target month.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

impl RatingSystem {
    /// Selects the rounds that are eligible for a rating published for
    /// `reference_date`, sorted by date, oldest first.
    ///
    /// From the PDGA Ratings System Guide: "A player's PDGA rating is based
    /// on rounds in the 12 months prior to the date of their most recently
    /// rated round. [...] If a player has fewer than 8 rounds within the
    /// 12-month period, the system will go back up to 24 months until it
    /// either finds 8 total rounds, or all rounds within the 24-month period
    /// if fewer than 8."
    ///
    /// Both ends of the window are inclusive. If `reference_date` is `None`,
    /// the date of the most recent round is used. Rounds after the reference
    /// date are never selected.
    pub fn select(
        &self,
        rounds: &[RoundRating],
        order: DataOrder,
        reference_date: Option<NaiveDate>,
    ) -> Result<Vec<RoundRating>, RatingError> {
        let ascending = order.to_ascending(rounds)?;

        let reference_date = match (reference_date, ascending.last()) {
            (Some(reference_date), _) => reference_date,
            (None, Some(latest)) => latest.date,
            (None, None) => return Ok(Vec::new()),
        };

        let window_start = months_before(reference_date, self.window_months);
        let fallback_start = months_before(reference_date, self.fallback_window_months);

        let end = ascending.partition_point(|r| r.date <= reference_date);
        let mut begin = ascending[..end].partition_point(|r| r.date < window_start);
        let in_window = end - begin;

        while end - begin < self.min_window_rounds
            && begin > 0
            && ascending[begin - 1].date >= fallback_start
        {
            begin -= 1;
        }

        debug!(
            "selected {} of {} rounds for {} ({} within {} months)",
            end - begin,
            ascending.len(),
            reference_date,
            in_window,
            self.window_months
        );

        Ok(ascending[begin..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One round on the first of every month from 2020-01-01 to 2022-01-01,
    /// rated 900 and improving by 5 every month.
    fn monthly() -> Vec<RoundRating> {
        (0..25)
            .map(|x| RoundRating::new(date(2020 + x / 12, x as u32 % 12 + 1, 1), 900 + x * 5))
            .collect()
    }

    fn select(reference_date: Option<NaiveDate>) -> Vec<RoundRating> {
        RatingSystem::new()
            .select(&monthly(), DataOrder::RecentLast, reference_date)
            .unwrap()
    }

    #[test]
    fn test_months_before_clamps_day() {
        assert_eq!(months_before(date(2021, 3, 31), 1), date(2021, 2, 28));
        assert_eq!(months_before(date(2024, 2, 29), 12), date(2023, 2, 28));
        assert_eq!(months_before(date(2021, 10, 12), 24), date(2019, 10, 12));
    }

    #[test]
    fn test_twelve_months() {
        assert_eq!(select(Some(date(2020, 12, 1))), monthly()[0..12]);
    }

    #[test]
    fn test_defaults_to_most_recent_round() {
        assert_eq!(select(None), monthly()[12..]);
    }

    #[test]
    fn test_eight_rounds_within_twelve_months() {
        assert_eq!(select(Some(date(2022, 6, 1))), monthly()[17..]);
    }

    #[test]
    fn test_falls_back_to_eight_rounds() {
        // 7 and 6 rounds within 12 months.
        assert_eq!(select(Some(date(2022, 7, 1))), monthly()[17..]);
        assert_eq!(select(Some(date(2022, 8, 1))), monthly()[17..]);
    }

    #[test]
    fn test_takes_all_within_twenty_four_months() {
        assert_eq!(select(Some(date(2023, 7, 1))), monthly()[18..]);
    }

    #[test]
    fn test_takes_all_available() {
        assert_eq!(select(Some(date(2020, 7, 1))), monthly()[..7]);
    }

    #[test]
    fn test_nothing_within_twelve_months_unordered() {
        let monthly = monthly();
        let scrambled: Vec<_> = [6, 7, 5, 8, 4, 9, 3, 10]
            .into_iter()
            .map(|i| monthly[i])
            .collect();
        let reference_date = monthly[3].date.checked_add_months(Months::new(24)).unwrap();
        assert_eq!(
            RatingSystem::new()
                .select(&scrambled, DataOrder::Unsorted, Some(reference_date))
                .unwrap(),
            monthly[3..11]
        );
    }

    #[test]
    fn test_never_selects_after_reference_date() {
        let rounds = [
            RoundRating::new(date(2021, 1, 1), 1000),
            RoundRating::new(date(2021, 6, 1), 1010),
            RoundRating::new(date(2022, 6, 1), 1020),
        ];
        assert_eq!(
            RatingSystem::new()
                .select(&rounds, DataOrder::RecentLast, Some(date(2021, 12, 31)))
                .unwrap(),
            rounds[..2]
        );
        assert!(RatingSystem::new()
            .select(&rounds, DataOrder::RecentLast, Some(date(2020, 12, 31)))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let rounds = [
            RoundRating::new(date(2023, 2, 27), 990),
            RoundRating::new(date(2023, 2, 28), 1000),
            RoundRating::new(date(2024, 2, 29), 1010),
        ];
        let system = RatingSystem::builder().min_window_rounds(0).build();
        assert_eq!(
            system
                .select(&rounds, DataOrder::RecentLast, None)
                .unwrap(),
            rounds[1..]
        );
    }

    #[test]
    fn test_empty() {
        assert!(RatingSystem::new()
            .select(&[], DataOrder::Unsorted, Some(date(2021, 1, 1)))
            .unwrap()
            .is_empty());
    }
}
