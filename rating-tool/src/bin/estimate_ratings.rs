use std::{error::Error as StdError, io, io::Write};

use chrono::{Local, NaiveDate};
use clap::Parser as _;
use pdga_rating::{DataOrder, Rating, RatingError, RatingSystem};
use pdga_rating_tool::{
    init_logging,
    player::{Histories, PlayerId, PlayerIds},
    round::{Order, RawRound, ReferenceDate, RoundDate},
};
use rayon::prelude::*;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
#[error("line {line}: round without player")]
struct MissingPlayer {
    line: u64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, clap::ValueEnum)]
enum Format {
    Csv,
    Json,
}

/// Estimates the rating of every player in a `player,date,rating` CSV read
/// from stdin.
#[derive(clap::Parser)]
struct Opt {
    /// Order of each player's rounds in the input.
    #[clap(long, value_enum, default_value = "unsorted")]
    order: Order,
    /// Date to calculate ratings for (YYYY-MM-DD, DD-Mon-YYYY or
    /// last-month-end). Defaults to each player's most recent round.
    #[clap(long)]
    reference_date: Option<ReferenceDate>,
    /// Publication date to record with each rating.
    #[clap(long)]
    as_of: Option<RoundDate>,
    #[clap(long, value_enum, default_value = "csv")]
    format: Format,
}

#[serde_as]
#[derive(Serialize)]
struct ReportRow<'a> {
    player: &'a str,
    rating: i32,
    rounds: usize,
    #[serde_as(as = "DisplayFromStr")]
    first_included: NaiveDate,
    #[serde_as(as = "DisplayFromStr")]
    last_included: NaiveDate,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    player: &'a str,
    #[serde(flatten)]
    rating: &'a Rating,
}

fn write_report<W: Write>(
    writer: W,
    format: Format,
    players: &PlayerIds,
    ratings: &[(PlayerId, Rating)],
) -> Result<(), Box<dyn StdError>> {
    match format {
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for (player_id, rating) in ratings {
                let Some((first_included, last_included)) = rating.included_dates() else {
                    continue;
                };
                writer.serialize(ReportRow {
                    player: players.name(*player_id),
                    rating: rating.value,
                    rounds: rating.included.len(),
                    first_included,
                    last_included,
                })?;
            }
            writer.flush()?;
        }
        Format::Json => {
            let mut writer = writer;
            for (player_id, rating) in ratings {
                serde_json::to_writer(
                    &mut writer,
                    &JsonRow {
                        player: players.name(*player_id),
                        rating,
                    },
                )?;
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn StdError>> {
    init_logging();

    let opt = Opt::parse();
    let reference_date = opt
        .reference_date
        .map(|reference_date| reference_date.resolve(Local::now().date_naive()));
    let as_of = opt.as_of.map(|RoundDate(date)| date);

    let mut reader = csv::Reader::from_reader(io::stdin().lock());

    let mut players = PlayerIds::default();
    let mut histories = Histories::default();

    for (line, round) in (2..).zip(reader.deserialize()) {
        let round: RawRound = round?;
        let player = round.player.clone().ok_or(MissingPlayer { line })?;
        histories.push(players.get_or_insert(player), round.round_rating());
    }

    info!("read rounds of {} players", players.len());

    let rating_system = RatingSystem::new();
    let order: DataOrder = opt.order.into();

    let results: Vec<(PlayerId, Result<Rating, RatingError>)> = histories
        .iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(player_id, rounds)| {
            (
                player_id,
                rating_system.update(rounds, order, reference_date, as_of),
            )
        })
        .collect();

    let mut ratings = Vec::with_capacity(results.len());
    let mut errors: u64 = 0;
    for (player_id, result) in results {
        match result {
            Ok(rating) => ratings.push((player_id, rating)),
            Err(err) => {
                warn!("{}: {}", players.name(player_id), err);
                errors += 1;
            }
        }
    }

    ratings.sort_by(|(a, a_rating), (b, b_rating)| {
        b_rating
            .value
            .cmp(&a_rating.value)
            .then_with(|| players.name(*a).cmp(players.name(*b)))
    });

    write_report(io::stdout().lock(), opt.format, &players, &ratings)?;

    if opt.format == Format::Csv {
        println!("# Total errors: {}", errors);
    } else if errors > 0 {
        warn!("total errors: {}", errors);
    }

    Ok(())
}
