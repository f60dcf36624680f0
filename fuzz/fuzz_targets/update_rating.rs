#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use chrono::{Days, NaiveDate};
use libfuzzer_sys::fuzz_target;
use pdga_rating::{DataOrder, RatingError, RatingSystem, RoundRating};

#[derive(Arbitrary, Debug)]
struct ArbitraryRound {
    day: u16,
    rating: i16,
}

impl ArbitraryRound {
    fn into_round(self) -> RoundRating {
        RoundRating::new(epoch() + Days::new(u64::from(self.day)), i32::from(self.rating))
    }
}

#[derive(Arbitrary, Debug)]
struct History {
    rounds: Vec<ArbitraryRound>,
    reference_day: Option<u16>,
    order: u8,
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(history) = History::arbitrary(&mut u) else {
        return;
    };

    let mut rounds: Vec<RoundRating> = history
        .rounds
        .into_iter()
        .map(ArbitraryRound::into_round)
        .collect();
    let reference_date = history
        .reference_day
        .map(|day| epoch() + Days::new(u64::from(day)));

    let order = match history.order % 3 {
        0 => DataOrder::Unsorted,
        1 => {
            rounds.sort_by_key(|r| std::cmp::Reverse(r.date));
            DataOrder::RecentFirst
        }
        _ => {
            rounds.sort_by_key(|r| r.date);
            DataOrder::RecentLast
        }
    };

    let rating_system = RatingSystem::new();
    match rating_system.update(&rounds, order, reference_date, None) {
        Ok(rating) => {
            assert!(!rating.included.is_empty());
            assert!(rating.included.len() <= rounds.len());
            assert!(rating.included.windows(2).all(|pair| pair[0] <= pair[1]));
            let min = rating.included.iter().map(|r| r.rating).min().unwrap();
            let max = rating.included.iter().map(|r| r.rating).max().unwrap();
            assert!(min <= rating.value && rating.value <= max);
            assert_eq!(
                rating_system.update(&rounds, DataOrder::Unsorted, reference_date, None),
                Ok(rating)
            );
        }
        Err(err) => assert_eq!(err, RatingError::InsufficientData),
    }
});
