//! The outcome of one decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;

/// Result of `MinimaxSearch::decide`.
///
/// A `None` action means the root had no legal moves. The value is then
/// negative infinity and the record must not be applied to the game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionRecord<S, A> {
    /// Wall-clock time of the whole decision.
    pub elapsed: Duration,

    /// Minimax value of the chosen action for the deciding player.
    #[serde(with = "search_value")]
    pub value: f64,

    /// The chosen action.
    pub action: Option<A>,

    /// The state the chosen action leads to.
    pub state: Option<S>,

    /// Counters collected during the decision.
    pub stats: SearchStats,
}

impl<S, A> DecisionRecord<S, A> {
    /// Total nodes expanded, root included, cache hits excluded.
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.stats.nodes_expanded
    }

    /// Check if a legal action was found.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Split into the chosen action and resulting state, if any.
    #[must_use]
    pub fn into_choice(self) -> Option<(A, S)> {
        self.action.zip(self.state)
    }
}

/// Serde format for search values.
///
/// Finite values are plain numbers. Infinities and NaN are written as their
/// `Display` strings (`inf`, `-inf`, `NaN`), since JSON numbers cannot hold
/// them.
mod search_value {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid search value {:?}", text))),
        }
    }
}
