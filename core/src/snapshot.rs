//! Match snapshot, the read-only input to one analysis pass.
//!
//! The CRUD layer fetches the ball log, fixture and roster and hands
//! them over as one value. Once built, a snapshot is never modified;
//! every pass recomputes all derived figures from it.

use crate::{
    ball::BallEvent,
    error::{EngineError, EngineResult},
    fixture::FixtureState,
    roster::Roster,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub fixture: FixtureState,
    /// In any order; the engine sorts its own copy.
    #[serde(default)]
    pub balls:   Vec<BallEvent>,
    #[serde(default)]
    pub roster:  Roster,
}

impl MatchSnapshot {
    pub fn new(fixture: FixtureState, balls: Vec<BallEvent>, roster: Roster) -> Self {
        Self { fixture, balls, roster }
    }

    pub fn from_json(raw: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &str) -> EngineResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}
