//! Line-of-play state machine.
//!
//! The board is a main chain with two open ends plus, once the first double
//! (the spinner) is down, a top and a bottom arm growing perpendicular to
//! it. Open ends are never stored: every query re-derives them from the
//! chain contents, so placement can only be validated against the current
//! layout.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::DominoError;
use crate::types::{Domino, End};

/// Axis a domino is laid along when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A domino as it sits in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedDomino {
    pub domino: Domino,
    /// End the domino was played on; `None` for the seed domino.
    pub side: Option<End>,
    pub axis: Axis,
    /// Pip touching the neighbouring domino (`None` for the seed).
    pub connecting: Option<u8>,
    /// Pip facing outward (`None` for the seed, whose ends are its raw pips).
    pub exposed: Option<u8>,
}

/// Open-end values; `None` means there is nothing to play on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenEnds {
    pub left: Option<u8>,
    pub right: Option<u8>,
    pub top: Option<u8>,
    pub bottom: Option<u8>,
}

impl OpenEnds {
    pub fn get(&self, end: End) -> Option<u8> {
        match end {
            End::Left => self.left,
            End::Right => self.right,
            End::Top => self.top,
            End::Bottom => self.bottom,
        }
    }

    /// Present values in `left, right, top, bottom` order.
    pub fn values(&self) -> Vec<u8> {
        End::ALL.iter().filter_map(|&e| self.get(e)).collect()
    }

    pub fn sum(&self) -> u32 {
        self.values().iter().map(|&v| v as u32).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZone {
    pub position: End,
    pub value: u8,
}

/// Everything a renderer needs to draw the current layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub main_chain: Vec<PlacedDomino>,
    pub top_arm: Vec<PlacedDomino>,
    pub bottom_arm: Vec<PlacedDomino>,
    pub spinner: Option<Domino>,
    pub spinner_index: Option<usize>,
    pub open_ends: OpenEnds,
    pub drop_zones: Vec<DropZone>,
    pub ends_sum: u32,
    /// All Fives points available right now (0 when the sum does not score).
    pub points: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    main_chain: Vec<PlacedDomino>,
    /// Index of the spinner in `main_chain`.
    spinner: Option<usize>,
    top_arm: Vec<PlacedDomino>,
    bottom_arm: Vec<PlacedDomino>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from a play log. The first entry seeds the chain
    /// (its end is ignored); every later entry is placed in order.
    pub fn replay(plays: &[(Domino, End)]) -> Result<Self, DominoError> {
        let mut board = Board::new();
        let mut iter = plays.iter();
        if let Some(&(first, _)) = iter.next() {
            board.seed(first)?;
        }
        for &(domino, end) in iter {
            board.extend(domino, end)?;
        }
        Ok(board)
    }

    // -------------------------
    // Read-only accessors
    // -------------------------

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.main_chain.is_empty()
    }

    /// Number of dominoes on the board, arms included.
    #[inline]
    pub fn len(&self) -> usize {
        self.main_chain.len() + self.top_arm.len() + self.bottom_arm.len()
    }

    pub fn main_chain(&self) -> &[PlacedDomino] {
        &self.main_chain
    }

    pub fn top_arm(&self) -> &[PlacedDomino] {
        &self.top_arm
    }

    pub fn bottom_arm(&self) -> &[PlacedDomino] {
        &self.bottom_arm
    }

    pub fn spinner_index(&self) -> Option<usize> {
        self.spinner
    }

    pub fn spinner(&self) -> Option<Domino> {
        self.spinner.map(|i| self.main_chain[i].domino)
    }

    /// Every placed domino: main chain left to right, then top arm, then
    /// bottom arm.
    pub fn dominoes(&self) -> Vec<Domino> {
        self.main_chain
            .iter()
            .chain(self.top_arm.iter())
            .chain(self.bottom_arm.iter())
            .map(|p| p.domino)
            .collect()
    }

    pub fn contains(&self, domino: Domino) -> bool {
        self.main_chain
            .iter()
            .chain(self.top_arm.iter())
            .chain(self.bottom_arm.iter())
            .any(|p| p.domino == domino)
    }

    // -------------------------
    // Open ends (always re-derived)
    // -------------------------

    pub fn open_end(&self, end: End) -> Option<u8> {
        match end {
            End::Left => {
                let first = self.main_chain.first()?;
                if self.main_chain.len() == 1 {
                    return Some(first.domino.low());
                }
                Some(first.exposed.unwrap_or(first.domino.low()))
            }
            End::Right => {
                let last = self.main_chain.last()?;
                if self.main_chain.len() == 1 {
                    return Some(last.domino.high());
                }
                Some(last.exposed.unwrap_or(last.domino.high()))
            }
            End::Top => self.arm_end(&self.top_arm),
            End::Bottom => self.arm_end(&self.bottom_arm),
        }
    }

    fn arm_end(&self, arm: &[PlacedDomino]) -> Option<u8> {
        let spinner = self.spinner()?;
        match arm.last() {
            Some(p) => p.exposed,
            None => Some(spinner.low()),
        }
    }

    pub fn open_ends(&self) -> OpenEnds {
        OpenEnds {
            left: self.open_end(End::Left),
            right: self.open_end(End::Right),
            top: self.open_end(End::Top),
            bottom: self.open_end(End::Bottom),
        }
    }

    pub fn drop_zones(&self) -> Vec<DropZone> {
        let ends = self.open_ends();
        End::ALL
            .iter()
            .filter_map(|&position| ends.get(position).map(|value| DropZone { position, value }))
            .collect()
    }

    // -------------------------
    // Scoring
    // -------------------------

    /// Sum of all current open-end values.
    pub fn score(&self) -> u32 {
        self.open_ends().sum()
    }

    /// All Fives points: the open-end sum when it is a nonzero multiple of
    /// five, otherwise zero.
    pub fn scoring_points(&self) -> u32 {
        let sum = self.score();
        if sum != 0 && sum % 5 == 0 { sum } else { 0 }
    }

    // -------------------------
    // Mutation
    // -------------------------

    /// Seed an empty board. A double seed becomes the spinner at once.
    ///
    /// The ends come from the canonical pips: left is the low pip and right
    /// the high pip, whatever order the caller wrote the domino in.
    pub fn add_first(&mut self, domino: Domino) -> Result<LayoutSnapshot, DominoError> {
        self.seed(domino)?;
        Ok(self.snapshot())
    }

    /// Place `domino` on `end`. A failed placement leaves the board untouched.
    pub fn place(&mut self, domino: Domino, end: End) -> Result<LayoutSnapshot, DominoError> {
        self.extend(domino, end)?;
        Ok(self.snapshot())
    }

    /// [`Board::add_first`] without building a snapshot.
    pub fn seed(&mut self, domino: Domino) -> Result<(), DominoError> {
        if !self.is_empty() {
            return Err(DominoError::InvalidState(format!(
                "cannot seed with {domino}: board already holds {} dominoes",
                self.len()
            )));
        }
        self.main_chain.push(PlacedDomino {
            domino,
            side: None,
            axis: if domino.is_double() {
                Axis::Vertical
            } else {
                Axis::Horizontal
            },
            connecting: None,
            exposed: None,
        });
        if domino.is_double() {
            self.spinner = Some(0);
        }
        trace!(%domino, spinner = domino.is_double(), "seeded board");
        Ok(())
    }

    /// [`Board::place`] without building a snapshot.
    pub fn extend(&mut self, domino: Domino, end: End) -> Result<(), DominoError> {
        let open = self.open_end(end);
        let illegal = || DominoError::IllegalMove { domino, end, open };

        let value = open.ok_or_else(illegal)?;
        if end.is_arm() && self.spinner.is_none() {
            return Err(illegal());
        }
        let exposed = domino.other(value).ok_or_else(illegal)?;

        // Doubles always sit across the chain they belong to.
        let axis = match (end.is_arm(), domino.is_double()) {
            (false, false) | (true, true) => Axis::Horizontal,
            (false, true) | (true, false) => Axis::Vertical,
        };
        let placed = PlacedDomino {
            domino,
            side: Some(end),
            axis,
            connecting: Some(value),
            exposed: Some(exposed),
        };

        match end {
            End::Left => {
                self.main_chain.insert(0, placed);
                if let Some(i) = self.spinner.as_mut() {
                    *i += 1;
                }
            }
            End::Right => self.main_chain.push(placed),
            End::Top => self.top_arm.push(placed),
            End::Bottom => self.bottom_arm.push(placed),
        }

        if domino.is_double() && self.spinner.is_none() {
            // Arms cannot exist without a spinner, so this is a main-chain end.
            self.spinner = Some(match end {
                End::Left => 0,
                _ => self.main_chain.len() - 1,
            });
        }

        trace!(%domino, %end, connecting = value, exposed, "placed domino");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.main_chain.clear();
        self.top_arm.clear();
        self.bottom_arm.clear();
        self.spinner = None;
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            main_chain: self.main_chain.clone(),
            top_arm: self.top_arm.clone(),
            bottom_arm: self.bottom_arm.clone(),
            spinner: self.spinner(),
            spinner_index: self.spinner,
            open_ends: self.open_ends(),
            drop_zones: self.drop_zones(),
            ends_sum: self.score(),
            points: self.scoring_points(),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
