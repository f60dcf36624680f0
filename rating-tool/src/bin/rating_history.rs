use std::{error::Error as StdError, io};

use chrono::NaiveDate;
use clap::Parser as _;
use pdga_rating::{DataOrder, Rating, RatingError, RatingSystem, RoundRating};
use pdga_rating_tool::{
    init_logging,
    round::{month_ends, Order, RawRound, RoundDate},
};
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use tracing::{debug, info};

/// Replays the monthly rating updates of one player from a `date,rating`
/// CSV read from stdin.
#[derive(clap::Parser)]
struct Opt {
    /// Order of the rounds in the input.
    #[clap(long, value_enum, default_value = "unsorted")]
    order: Order,
    /// Only use rows of this player, if the input has a player column.
    #[clap(long)]
    player: Option<String>,
    /// First month to publish a rating for. Defaults to the month of the
    /// oldest round.
    #[clap(long)]
    from: Option<RoundDate>,
    /// Last month to publish a rating for. Defaults to the month of the most
    /// recent round.
    #[clap(long)]
    to: Option<RoundDate>,
}

#[serde_as]
#[derive(Serialize)]
struct HistoryRow {
    #[serde_as(as = "DisplayFromStr")]
    as_of: NaiveDate,
    rating: i32,
    rounds: usize,
}

fn main() -> Result<(), Box<dyn StdError>> {
    init_logging();

    let opt = Opt::parse();
    let order: DataOrder = opt.order.into();

    let mut reader = csv::Reader::from_reader(io::stdin().lock());
    let mut rounds: Vec<RoundRating> = Vec::new();
    for round in reader.deserialize() {
        let round: RawRound = round?;
        if opt.player.is_none() || round.player == opt.player {
            rounds.push(round.round_rating());
        }
    }

    info!("read {} rounds", rounds.len());

    let (Some(oldest), Some(latest)) = (
        rounds.iter().map(|r| r.date).min(),
        rounds.iter().map(|r| r.date).max(),
    ) else {
        return Err(RatingError::InsufficientData.into());
    };
    let from = opt.from.map_or(oldest, |RoundDate(date)| date);
    let to = opt.to.map_or(latest, |RoundDate(date)| date);

    let rating_system = RatingSystem::new();
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    let mut rating: Option<Rating> = None;

    for month_end in month_ends(from, to) {
        let result = match rating.take() {
            Some(mut current) => {
                let result = current.update(
                    &rating_system,
                    &rounds,
                    order,
                    Some(month_end),
                    Some(month_end),
                );
                rating = Some(current);
                result
            }
            None => rating_system
                .update(&rounds, order, Some(month_end), Some(month_end))
                .map(|first| rating = Some(first)),
        };

        match (result, &rating) {
            (Ok(()), Some(current)) => writer.serialize(HistoryRow {
                as_of: month_end,
                rating: current.value,
                rounds: current.included.len(),
            })?,
            (Err(RatingError::InsufficientData), _) => {
                debug!("no rounds to rate for {}", month_end);
            }
            (Err(err), _) => return Err(err.into()),
            (Ok(()), None) => (),
        }
    }

    writer.flush()?;
    Ok(())
}
