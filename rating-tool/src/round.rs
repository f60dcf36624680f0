use std::{fmt, str::FromStr};

use chrono::{Datelike as _, Months, NaiveDate};
use pdga_rating::{DataOrder, RoundRating};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use thiserror::Error;

#[serde_as]
#[derive(Deserialize, Debug)]
pub struct RawRound {
    #[serde(default)]
    pub player: Option<String>,
    #[serde_as(as = "DisplayFromStr")]
    pub date: RoundDate,
    pub rating: i32,
}

impl RawRound {
    pub fn round_rating(&self) -> RoundRating {
        RoundRating::new(self.date.0, self.rating)
    }
}

/// A calendar date, written either as `2021-06-05` or as on the PDGA site,
/// `5-Jun-2021`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RoundDate(pub NaiveDate);

#[derive(Debug, Error)]
#[error("invalid date (expected YYYY-MM-DD or DD-Mon-YYYY)")]
pub struct InvalidRoundDate;

impl FromStr for RoundDate {
    type Err = InvalidRoundDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(s, "%d-%b-%Y"))
            .map(RoundDate)
            .map_err(|_| InvalidRoundDate)
    }
}

impl fmt::Display for RoundDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The date to calculate a rating for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReferenceDate {
    Date(NaiveDate),
    /// The last day of the previous month, when ratings are published.
    LastMonthEnd,
}

impl FromStr for ReferenceDate {
    type Err = InvalidRoundDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "last-month-end" => ReferenceDate::LastMonthEnd,
            _ => ReferenceDate::Date(s.parse::<RoundDate>()?.0),
        })
    }
}

impl ReferenceDate {
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            ReferenceDate::Date(date) => date,
            ReferenceDate::LastMonthEnd => month_end(today - Months::new(1)),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, clap::ValueEnum)]
pub enum Order {
    Unsorted,
    RecentFirst,
    RecentLast,
}

impl From<Order> for DataOrder {
    fn from(order: Order) -> DataOrder {
        match order {
            Order::Unsorted => DataOrder::Unsorted,
            Order::RecentFirst => DataOrder::RecentFirst,
            Order::RecentLast => DataOrder::RecentLast,
        }
    }
}

/// Last day of the month of `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = date - chrono::Days::new(u64::from(date.day0()));
    (first + Months::new(1)).pred_opt().unwrap_or(first)
}

/// Every month end from the month of `from` through the month of `to`.
pub fn month_ends(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let last = month_end(to);
    (0..)
        .map_while(move |months| from.checked_add_months(Months::new(months)))
        .map(month_end)
        .take_while(move |&end| end <= last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_date() {
        assert_eq!("2021-06-05".parse::<RoundDate>().unwrap().0, date(2021, 6, 5));
        assert_eq!("5-Jun-2021".parse::<RoundDate>().unwrap().0, date(2021, 6, 5));
        assert_eq!("26-Sep-2021".parse::<RoundDate>().unwrap().0, date(2021, 9, 26));
        assert!("2021-13-01".parse::<RoundDate>().is_err());
        assert!("Jun 5 2021".parse::<RoundDate>().is_err());
    }

    #[test]
    fn test_reference_date() {
        let today = date(2021, 10, 12);
        assert_eq!(
            "last-month-end".parse::<ReferenceDate>().unwrap().resolve(today),
            date(2021, 9, 30)
        );
        assert_eq!(
            "last-month-end".parse::<ReferenceDate>().unwrap().resolve(date(2021, 3, 31)),
            date(2021, 2, 28)
        );
        assert_eq!(
            "2021-09-26".parse::<ReferenceDate>().unwrap().resolve(today),
            date(2021, 9, 26)
        );
    }

    #[test]
    fn test_month_end() {
        assert_eq!(month_end(date(2021, 2, 10)), date(2021, 2, 28));
        assert_eq!(month_end(date(2020, 2, 29)), date(2020, 2, 29));
        assert_eq!(month_end(date(2021, 12, 1)), date(2021, 12, 31));
    }

    #[test]
    fn test_month_ends() {
        assert_eq!(
            month_ends(date(2020, 11, 30), date(2021, 2, 1)).collect::<Vec<_>>(),
            [
                date(2020, 11, 30),
                date(2020, 12, 31),
                date(2021, 1, 31),
                date(2021, 2, 28)
            ]
        );
        assert_eq!(month_ends(date(2021, 2, 1), date(2021, 1, 1)).count(), 0);
    }

    #[test]
    fn test_deserialize() {
        let data = "player,date,rating\nkevin,26-Sep-2021,1070\nkevin,2021-09-12,1037\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rounds: Vec<RawRound> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rounds[0].player.as_deref(), Some("kevin"));
        assert_eq!(
            rounds[1].round_rating(),
            RoundRating::new(date(2021, 9, 12), 1037)
        );
    }
}
