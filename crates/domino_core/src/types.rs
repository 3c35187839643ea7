use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DominoError;

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// An unordered pair of pip values in `0..=6`, stored low pip first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Domino {
    low: u8,
    high: u8,
}

impl Domino {
    pub fn new(a: u8, b: u8) -> Result<Self, DominoError> {
        if a > MAX_PIP || b > MAX_PIP {
            return Err(DominoError::InvalidState(format!(
                "pip out of range: [{a}|{b}]"
            )));
        }
        Ok(if a <= b {
            Domino { low: a, high: b }
        } else {
            Domino { low: b, high: a }
        })
    }

    /// All 28 dominoes of a double-six set in canonical order.
    pub fn full_set() -> Vec<Domino> {
        let mut set = Vec::with_capacity(28);
        for low in 0..=MAX_PIP {
            for high in low..=MAX_PIP {
                set.push(Domino { low, high });
            }
        }
        set
    }

    #[inline]
    pub fn low(self) -> u8 {
        self.low
    }

    #[inline]
    pub fn high(self) -> u8 {
        self.high
    }

    #[inline]
    pub fn pips(self) -> (u8, u8) {
        (self.low, self.high)
    }

    #[inline]
    pub fn is_double(self) -> bool {
        self.low == self.high
    }

    #[inline]
    pub fn pip_sum(self) -> u32 {
        self.low as u32 + self.high as u32
    }

    #[inline]
    pub fn has(self, value: u8) -> bool {
        self.low == value || self.high == value
    }

    /// The pip left exposed when `value` is the connecting side.
    pub fn other(self, value: u8) -> Option<u8> {
        if self.low == value {
            Some(self.high)
        } else if self.high == value {
            Some(self.low)
        } else {
            None
        }
    }
}

impl TryFrom<[u8; 2]> for Domino {
    type Error = DominoError;

    fn try_from(pips: [u8; 2]) -> Result<Self, Self::Error> {
        Domino::new(pips[0], pips[1])
    }
}

impl From<Domino> for [u8; 2] {
    fn from(d: Domino) -> Self {
        [d.low, d.high]
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A side of the line of play that can receive a domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Left,
    Right,
    Top,
    Bottom,
}

impl End {
    pub const ALL: [End; 4] = [End::Left, End::Right, End::Top, End::Bottom];

    pub fn as_str(self) -> &'static str {
        match self {
            End::Left => "left",
            End::Right => "right",
            End::Top => "top",
            End::Bottom => "bottom",
        }
    }

    pub fn from_name(s: &str) -> Option<End> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(End::Left),
            "right" => Some(End::Right),
            "top" | "up" => Some(End::Top),
            "bottom" | "down" => Some(End::Bottom),
            _ => None,
        }
    }

    /// Top and bottom ends grow perpendicular to the main chain.
    #[inline]
    pub fn is_arm(self) -> bool {
        matches!(self, End::Top | End::Bottom)
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which pip of a (canonical) domino meets the open end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The low pip connects.
    Normal,
    /// The high pip connects.
    Flipped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Move {
    Play {
        domino: Domino,
        end: End,
        orientation: Orientation,
    },
    Pass,
}

impl Move {
    pub fn play(domino: Domino, end: End, orientation: Orientation) -> Self {
        Move::Play {
            domino,
            end,
            orientation,
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn domino(&self) -> Option<Domino> {
        match self {
            Move::Play { domino, .. } => Some(*domino),
            Move::Pass => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play { domino, end, .. } => write!(f, "play {domino} on {end}"),
            Move::Pass => f.write_str("pass"),
        }
    }
}

/// Game variant. `Fives` scores open-end multiples of five; the blocking
/// variants are won by emptying the hand first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Fives,
    Block,
    Draw,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Fives, Variant::Block, Variant::Draw];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Fives => "fives",
            Variant::Block => "block",
            Variant::Draw => "draw",
        }
    }

    pub fn from_name(s: &str) -> Option<Variant> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fives" | "all-fives" | "allfives" => Some(Variant::Fives),
            "block" => Some(Variant::Block),
            "draw" => Some(Variant::Draw),
            _ => None,
        }
    }

    #[inline]
    pub fn is_blocking(self) -> bool {
        !matches!(self, Variant::Fives)
    }

    pub fn idx(self) -> u64 {
        match self {
            Variant::Fives => 0,
            Variant::Block => 1,
            Variant::Draw => 2,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    #[default]
    Player,
    Opponent,
}

impl Seat {
    pub fn idx(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Opponent => 1,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
