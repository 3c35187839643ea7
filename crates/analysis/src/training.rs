//! Synthetic training positions.
//!
//! Boards are grown by random legal play from a shuffled double-six set,
//! so every generated position is reachable. Each position is analyzed
//! through an [`Analyzer`] and the batch can be written out as JSON.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use domino_core::{Board, Domino, DominoError, End, Engine, GameState, LayoutSnapshot, Move, Variant};
use random_engine::RandomEngine;

use crate::analyzer::Analyzer;
use crate::config::Tier;
use crate::result::AnalysisResult;

/// Doubles and high-pip starters commonly led in practice, low pip first.
pub const OPENING_STARTERS: [[u8; 2]; 6] = [[6, 6], [5, 5], [4, 4], [5, 6], [4, 6], [4, 5]];

const OPENING_HAND_SIZE: usize = 7;
const MAX_RANDOM_BOARD: usize = 10;
const ENDGAME_BOARD: std::ops::RangeInclusive<usize> = 10..=18;

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("failed to build position: {0}")]
    Domino(#[from] DominoError),
    #[error("failed to access batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode batch: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    Random,
    Opening,
    Endgame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPosition {
    pub kind: PositionKind,
    /// Play log that rebuilds the board with [`Board::replay`]
    pub plays: Vec<(Domino, End)>,
    pub layout: LayoutSnapshot,
    pub hand: Vec<Domino>,
    pub variant: Variant,
    pub your_score: i32,
    pub opponent_score: i32,
    pub passes: u32,
    pub draws: u32,
    pub analysis: Option<AnalysisResult>,
    /// Unix time in milliseconds
    pub generated_at_ms: u64,
}

impl TrainingPosition {
    pub fn board(&self) -> Result<Board, DominoError> {
        Board::replay(&self.plays)
    }

    pub fn state(&self) -> Result<GameState, DominoError> {
        Ok(GameState::new(self.board()?, self.hand.clone(), self.variant)
            .with_scores(self.your_score, self.opponent_score)
            .with_counters(self.passes, self.draws))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingBatch {
    pub positions: Vec<TrainingPosition>,
}

impl TrainingBatch {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn count(&self, kind: PositionKind) -> usize {
        self.positions.iter().filter(|p| p.kind == kind).count()
    }

    /// Save the batch as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), TrainingError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, TrainingError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Short text summary of the batch
    pub fn generate_report(&self) -> String {
        let analyzed: Vec<&AnalysisResult> =
            self.positions.iter().filter_map(|p| p.analysis.as_ref()).collect();
        let mut report = format!("=== Training batch: {} positions ===\n", self.len());
        report.push_str(&format!(
            "random {} / opening {} / endgame {}\n",
            self.count(PositionKind::Random),
            self.count(PositionKind::Opening),
            self.count(PositionKind::Endgame)
        ));
        if !analyzed.is_empty() {
            let mean = analyzed.iter().map(|a| a.win_probability as f64).sum::<f64>()
                / analyzed.len() as f64;
            report.push_str(&format!(
                "analyzed {} (mean win probability {:.1}%)\n",
                analyzed.len(),
                mean
            ));
        }
        report
    }
}

/// Seeded generator of synthetic positions.
#[derive(Debug, Clone)]
pub struct TrainingGenerator {
    rng: StdRng,
}

impl TrainingGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn shuffled_set(&mut self) -> Vec<Domino> {
        let mut set = Domino::full_set();
        set.shuffle(&mut self.rng);
        set
    }

    /// Grow a board from `pool` by random legal play until it holds
    /// `target` dominoes or nothing in the pool fits.
    fn roll_out(
        &mut self,
        pool: Vec<Domino>,
        variant: Variant,
        target: usize,
    ) -> Result<(Board, Vec<(Domino, End)>), DominoError> {
        let mut engine = RandomEngine::with_seed(self.rng.gen());
        let mut state = GameState::new(Board::new(), pool, variant);
        let mut plays = Vec::with_capacity(target);

        while state.board.len() < target {
            let outcome = engine.search(&state, 1)?;
            match outcome.best_move {
                Some(mv @ Move::Play { domino, end, .. }) => {
                    state = state.apply(mv)?;
                    plays.push((domino, end));
                }
                _ => break,
            }
        }
        Ok((state.board, plays))
    }

    fn position(
        kind: PositionKind,
        board: &Board,
        plays: Vec<(Domino, End)>,
        hand: Vec<Domino>,
        variant: Variant,
    ) -> TrainingPosition {
        TrainingPosition {
            kind,
            plays,
            layout: board.snapshot(),
            hand,
            variant,
            your_score: 0,
            opponent_score: 0,
            passes: 0,
            draws: 0,
            analysis: None,
            generated_at_ms: unix_millis(),
        }
    }

    /// A legal mid-game position: 1-7 dominoes in hand, 1-10 on the board.
    pub fn random_position(&mut self) -> Result<TrainingPosition, TrainingError> {
        let variant = *Variant::ALL.choose(&mut self.rng).unwrap_or(&Variant::Fives);
        let hand_size = self.rng.gen_range(1..=OPENING_HAND_SIZE);
        let target = self.rng.gen_range(1..=MAX_RANDOM_BOARD);

        let mut set = self.shuffled_set();
        let pool = set.split_off(hand_size);
        let (board, plays) = self.roll_out(pool, variant, target)?;

        let mut position = Self::position(PositionKind::Random, &board, plays, set, variant);
        position.your_score = self.rng.gen_range(0..100);
        position.opponent_score = self.rng.gen_range(0..100);
        position.passes = self.rng.gen_range(0..3);
        position.draws = self.rng.gen_range(0..5);
        Ok(position)
    }

    /// One starter on the board and a full seven-domino hand, All Fives.
    pub fn opening_position(&mut self) -> Result<TrainingPosition, TrainingError> {
        let [a, b] = *OPENING_STARTERS
            .choose(&mut self.rng)
            .unwrap_or(&OPENING_STARTERS[0]);
        let starter = Domino::new(a, b)?;

        let mut set = self.shuffled_set();
        set.retain(|&d| d != starter);
        set.truncate(OPENING_HAND_SIZE);

        let mut board = Board::new();
        board.seed(starter)?;
        Ok(Self::position(
            PositionKind::Opening,
            &board,
            vec![(starter, End::Right)],
            set,
            Variant::Fives,
        ))
    }

    /// Late-hand position: 1-3 dominoes left and a crowded board.
    pub fn endgame_position(&mut self) -> Result<TrainingPosition, TrainingError> {
        let variant = *Variant::ALL.choose(&mut self.rng).unwrap_or(&Variant::Fives);
        let hand_size = self.rng.gen_range(1..=3);
        let target = self.rng.gen_range(ENDGAME_BOARD);

        let mut set = self.shuffled_set();
        let pool = set.split_off(hand_size);
        let (board, plays) = self.roll_out(pool, variant, target)?;

        let mut position = Self::position(PositionKind::Endgame, &board, plays, set, variant);
        position.your_score = self.rng.gen_range(20..100);
        position.opponent_score = self.rng.gen_range(20..100);
        Ok(position)
    }

    pub fn opening_positions(&mut self, count: usize) -> Result<Vec<TrainingPosition>, TrainingError> {
        (0..count).map(|_| self.opening_position()).collect()
    }

    pub fn endgame_positions(&mut self, count: usize) -> Result<Vec<TrainingPosition>, TrainingError> {
        (0..count).map(|_| self.endgame_position()).collect()
    }

    /// Attach an analysis of `position` at `tier`.
    pub fn record<E: Engine + Default>(
        analyzer: &Analyzer<E>,
        mut position: TrainingPosition,
        tier: Tier,
    ) -> Result<TrainingPosition, TrainingError> {
        let state = position.state()?;
        position.analysis = Some(analyzer.analyze(&state, tier));
        Ok(position)
    }

    /// `count` random positions, each analyzed at `tier`.
    pub fn generate_batch<E: Engine + Default>(
        &mut self,
        analyzer: &Analyzer<E>,
        count: usize,
        tier: Tier,
    ) -> Result<TrainingBatch, TrainingError> {
        let mut positions = Vec::with_capacity(count);
        for i in 0..count {
            let position = self.random_position()?;
            positions.push(Self::record(analyzer, position, tier)?);
            if (i + 1) % 10 == 0 {
                debug!(generated = i + 1, count, "training positions");
            }
        }
        info!(count, tier = tier.as_str(), "generated random training batch");
        Ok(TrainingBatch { positions })
    }

    /// Random positions plus ten openings and ten endgames, all analyzed.
    pub fn full_batch<E: Engine + Default>(
        &mut self,
        analyzer: &Analyzer<E>,
        random_count: usize,
        tier: Tier,
    ) -> Result<TrainingBatch, TrainingError> {
        let mut batch = self.generate_batch(analyzer, random_count, tier)?;
        let extras = self
            .opening_positions(10)?
            .into_iter()
            .chain(self.endgame_positions(10)?);
        for position in extras {
            batch.positions.push(Self::record(analyzer, position, tier)?);
        }
        info!(positions = batch.len(), "generated full training batch");
        Ok(batch)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
#[path = "training_tests.rs"]
mod training_tests;
