//! Analysis results, win-probability squashing and human-readable advice.

use serde::{Deserialize, Serialize};

use domino_core::{GameState, Move, SearchOutcome, Variant};

/// One piece of advice shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    /// 0..=100
    pub confidence: f64,
}

impl Suggestion {
    fn new(title: impl Into<String>, description: impl Into<String>, confidence: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Recommended move (None when the position could not be analyzed or is
    /// already finished)
    pub best_move: Option<Move>,
    /// Raw search score from the player's perspective
    pub evaluation: i32,
    /// Estimated win chance in percent, 0..=100
    pub win_probability: u8,
    /// Ranked advice, recommended move first
    pub suggestions: Vec<Suggestion>,
    /// Search depth used (0 for the fallback result)
    pub depth: u8,
    pub elapsed_ms: u64,
    pub from_cache: bool,
}

impl AnalysisResult {
    /// Neutral result returned whenever a search cannot be completed.
    pub fn unavailable() -> Self {
        Self {
            best_move: None,
            evaluation: 0,
            win_probability: 50,
            suggestions: vec![Suggestion::new(
                "Analysis Unavailable",
                "Unable to analyze position at this time",
                0.0,
            )],
            depth: 0,
            elapsed_ms: 0,
            from_cache: false,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.depth == 0 && self.best_move.is_none() && self.win_probability == 50
    }
}

/// Logistic squashing of a search score into a percentage.
pub fn win_probability(score: i32) -> u8 {
    let sigmoid = 1.0 / (1.0 + (-(score as f64) / 100.0).exp());
    (sigmoid * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Advice for `state` given the search `outcome`: the recommended move
/// first, then variant strategy tips by descending confidence.
pub fn build_suggestions(state: &GameState, outcome: &SearchOutcome) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(2);

    match outcome.best_move {
        Some(Move::Play { domino, end, .. }) => {
            let confidence = (60.0 + (outcome.score as f64).abs() / 10.0).min(95.0);
            suggestions.push(Suggestion::new(
                format!("Play {domino}"),
                format!("Best move: Place the {domino} domino on the {end} side"),
                confidence,
            ));
        }
        Some(Move::Pass) => suggestions.push(Suggestion::new(
            "Pass",
            "No legal moves available - must pass",
            100.0,
        )),
        None => {}
    }

    let mut tips = variant_tips(state.variant);
    tips.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    suggestions.extend(tips);
    suggestions
}

fn variant_tips(variant: Variant) -> Vec<Suggestion> {
    match variant {
        Variant::Fives => vec![Suggestion::new(
            "Focus on Scoring",
            "Look for moves that create multiples of 5 on the board ends",
            75.0,
        )],
        Variant::Block | Variant::Draw => vec![Suggestion::new(
            "Shed Your Hand",
            "Going out first wins blocking games; keep playable ends open for yourself",
            70.0,
        )],
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod result_tests;
