//! Live cricket match analytics.
//!
//! Pure computations over an append-only ball log:
//!   - who is on strike, at the other end, and bowling next
//!   - rain-rule revised targets
//!   - a per-over win-probability series for the chase
//!   - templated ball-by-ball commentary
//!
//! Nothing here persists state. Callers hand in a MatchSnapshot and get
//! every derived figure recomputed from scratch.

pub mod ball;
pub mod commentary;
pub mod config;
pub mod dls;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod resource_table;
pub mod rng;
pub mod roster;
pub mod scorecard;
pub mod snapshot;
pub mod state_replay;
pub mod types;
pub mod win_prob;
