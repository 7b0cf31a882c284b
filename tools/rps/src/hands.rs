//! Hands, moves, and the visitors that describe and compare them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use variant_ref::{VariantRef, Visit, Visitor};

use crate::error::RpsError;

/// A closed fist.
#[derive(Debug, Default)]
pub struct Rock;

/// A flat hand.
#[derive(Debug, Default)]
pub struct Paper;

/// Two extended fingers.
#[derive(Debug, Default)]
pub struct Scissors;

/// A reference to whichever hand a player threw.
pub type HandRef<'a> = VariantRef<'a, (Rock, Paper, Scissors)>;

/// A move as written in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RpsError::UnknownMove(trimmed.to_string()))
    }
}

/// Owns one instance of each hand; moves borrow from it.
#[derive(Debug, Default)]
pub struct Hands {
    rock: Rock,
    paper: Paper,
    scissors: Scissors,
}

impl Hands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference to the hand for `mv`.
    pub fn throw(&self, mv: Move) -> HandRef<'_> {
        match mv {
            Move::Rock => HandRef::new(&self.rock),
            Move::Paper => HandRef::new(&self.paper),
            Move::Scissors => HandRef::new(&self.scissors),
        }
    }

    /// References for a whole sequence of moves.
    pub fn throw_all(&self, moves: &[Move]) -> Vec<HandRef<'_>> {
        moves.iter().map(|&mv| self.throw(mv)).collect()
    }
}

/// Single-dispatch visitor producing a one-line description of a hand.
pub struct GetDescription;

impl Visitor for GetDescription {
    type Output = &'static str;
}

impl Visit<&Rock> for GetDescription {
    fn visit(&mut self, _: &Rock) -> &'static str {
        "Rock, a very solid move."
    }
}

impl Visit<&Paper> for GetDescription {
    fn visit(&mut self, _: &Paper) -> &'static str {
        "Paper, a very elusive move."
    }
}

impl Visit<&Scissors> for GetDescription {
    fn visit(&mut self, _: &Scissors) -> &'static str {
        "Scissors, a very sharp move."
    }
}

/// Two-way visitor: does the first hand lose to the second?
pub struct LosesTo;

impl Visitor for LosesTo {
    type Output = bool;
}

macro_rules! loses_to {
    ($(($a:ty, $b:ty) => $loses:literal),* $(,)?) => {
        $(
            impl Visit<(&$a, &$b)> for LosesTo {
                fn visit(&mut self, _: (&$a, &$b)) -> bool {
                    $loses
                }
            }
        )*
    };
}

loses_to! {
    (Rock, Paper) => true,
    (Paper, Scissors) => true,
    (Scissors, Rock) => true,
    (Rock, Rock) => false,
    (Rock, Scissors) => false,
    (Paper, Rock) => false,
    (Paper, Paper) => false,
    (Scissors, Paper) => false,
    (Scissors, Scissors) => false,
}
