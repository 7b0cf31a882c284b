//! Playing rounds and rendering the transcript.

use tracing::debug;
use variant_ref::apply_multi_dispatch;

use crate::config::{Config, OutputConfig, PlayersConfig};
use crate::error::RpsError;
use crate::hands::{GetDescription, HandRef, Hands, LosesTo};

/// How a round ended, from the first player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The first player's hand loses to the second's.
    FirstLoses,
    /// The second player's hand loses to the first's.
    SecondLoses,
    Tie,
}

/// One played round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub index: usize,
    pub first_throw: &'static str,
    pub second_throw: &'static str,
    pub outcome: Outcome,
}

/// Win/loss/tie totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
}

impl Score {
    pub fn tally(rounds: &[Round]) -> Self {
        rounds.iter().fold(Self::default(), |mut score, round| {
            match round.outcome {
                Outcome::FirstLoses => score.second_wins += 1,
                Outcome::SecondLoses => score.first_wins += 1,
                Outcome::Tie => score.ties += 1,
            }
            score
        })
    }
}

/// Decide a single round. The first hand is checked for a loss first.
pub fn judge(first: HandRef<'_>, second: HandRef<'_>) -> Outcome {
    let first_loses = apply_multi_dispatch::<2, _, _, _>(&mut LosesTo, (first, second), ());
    let second_loses = apply_multi_dispatch::<2, _, _, _>(&mut LosesTo, (second, first), ());
    debug!(
        first_tag = first.tag(),
        second_tag = second.tag(),
        first_loses,
        second_loses,
        "judged round"
    );

    if first_loses {
        Outcome::FirstLoses
    } else if second_loses {
        Outcome::SecondLoses
    } else {
        Outcome::Tie
    }
}

/// Play every round of two equally long move sequences.
pub fn play(
    players: &PlayersConfig,
    first: &[HandRef<'_>],
    second: &[HandRef<'_>],
) -> Result<Vec<Round>, RpsError> {
    if first.len() != second.len() {
        return Err(RpsError::RoundMismatch {
            first: players.first.clone(),
            first_len: first.len(),
            second: players.second.clone(),
            second_len: second.len(),
        });
    }

    Ok(first
        .iter()
        .zip(second)
        .enumerate()
        .map(|(index, (&a, &b))| Round {
            index,
            first_throw: a.visit(&mut GetDescription),
            second_throw: b.visit(&mut GetDescription),
            outcome: judge(a, b),
        })
        .collect())
}

/// Play the game a configuration describes.
pub fn play_config(config: &Config) -> Result<Vec<Round>, RpsError> {
    let hands = Hands::new();
    let first = hands.throw_all(&config.moves.first);
    let second = hands.throw_all(&config.moves.second);
    play(&config.players, &first, &second)
}

/// Render the rounds as the text transcript printed by the tool.
pub fn render(players: &PlayersConfig, output: &OutputConfig, rounds: &[Round]) -> String {
    let (first, second) = (&players.first, &players.second);
    let mut out = String::new();

    for round in rounds {
        out.push_str(&format!("Round {}-----------\n", round.index));
        if output.describe_throws {
            out.push_str(&format!("\t{first} throws {}\n", round.first_throw));
            out.push_str(&format!("\t{second} throws {}\n", round.second_throw));
        }
        let verdict = match round.outcome {
            Outcome::FirstLoses => format!("\t{first} loses to {second}\n"),
            Outcome::SecondLoses => format!("\t{second} loses to {first}\n"),
            Outcome::Tie => format!("\t{first} and {second} tie\n"),
        };
        out.push_str(&verdict);
    }
    out.push_str("Game complete!\n");

    if output.summary {
        let score = Score::tally(rounds);
        out.push_str(&format!(
            "{first}: {} won, {second}: {} won, {} tied\n",
            score.first_wins, score.second_wins, score.ties
        ));
    }
    out
}
