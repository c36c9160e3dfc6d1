//! Rain-rule revised targets (Duckworth-Lewis-Stern style).
//!
//! This module:
//!   1. Looks up batting resources remaining for overs/wickets
//!   2. Computes each side's resources from the recorded stoppages
//!   3. Scales the first-innings score into a revised target
//!
//! Resources are percentages in [0, 100]. Out-of-domain input is clamped,
//! never rejected: live data can be briefly inconsistent between updates.

use crate::{
    config::DlsConfig,
    fixture::{FixtureState, Format},
    resource_table::{self, MAX_OVERS},
    types::MAX_WICKETS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlsTarget {
    /// Runs the chasing side needs to win.
    pub revised_target:  u32,
    /// Par score; reaching exactly this ties the match.
    pub projected_score: u32,
}

/// Resource percentage for `overs_left` (fractional overs allowed) and
/// `wickets_lost`.
///
/// Overs round up to the next whole over before indexing the table.
pub fn resource_percent(overs_left: f64, wickets_lost: u32) -> f64 {
    if wickets_lost >= MAX_WICKETS {
        return 0.0;
    }
    if !overs_left.is_finite() {
        return if overs_left > 0.0 { 100.0 } else { 0.0 };
    }
    let over_index = overs_left.ceil();
    if over_index > MAX_OVERS as f64 {
        return 100.0;
    }
    if over_index <= 0.0 {
        return 0.0;
    }
    resource_table::lookup(over_index as u32, wickets_lost).unwrap_or(0.0)
}

/// Resources of a full, uninterrupted innings of `total_overs`.
pub fn team1_resources(total_overs: u32) -> f64 {
    resource_percent(total_overs as f64, 0)
}

/// Resources removed by one stoppage. Never negative.
pub fn resources_lost(overs_left_before: f64, overs_left_after: f64, wickets_at_stoppage: u32) -> f64 {
    let before = resource_percent(overs_left_before, wickets_at_stoppage);
    let after = resource_percent(overs_left_after, wickets_at_stoppage);
    (before - after).max(0.0)
}

/// The chasing side's resources after every recorded stoppage.
pub fn team2_resources(fixture: &FixtureState) -> f64 {
    let initial = team1_resources(fixture.total_overs);
    let mut scheduled = fixture.total_overs as f64;
    let mut total_loss = 0.0;

    for stoppage in &fixture.interruptions {
        let bowled = stoppage.overs_bowled.max(0.0);
        let before = (scheduled - bowled).max(0.0);
        let after = (before - stoppage.overs_lost as f64).max(0.0);
        total_loss += resources_lost(before, after, stoppage.wickets_lost);
        scheduled = (scheduled - stoppage.overs_lost as f64).max(0.0);
    }

    round_one_decimal((initial - total_loss).max(0.0))
}

/// Scale the first-innings score by the ratio of resources.
///
/// When the chasing side has more resources than the side batting first,
/// the surplus is converted to runs via the format's G50 constant.
pub fn revised_target(
    team1_score: u32,
    team1_resources: f64,
    team2_resources: f64,
    format: Format,
    config: &DlsConfig,
) -> DlsTarget {
    let score = team1_score as f64;
    let t1 = team1_resources.clamp(0.0, 100.0);
    let t2 = team2_resources.clamp(0.0, 100.0);

    let par = if t2 < t1 {
        score * t2 / t1
    } else {
        score + config.g50(format) * (t2 - t1) / 100.0
    };
    let projected = par.max(0.0).trunc() as u32;

    DlsTarget {
        revised_target:  projected.saturating_add(1),
        projected_score: projected,
    }
}

/// Revised target for the fixture's chase, or None when play was never
/// interrupted.
pub fn dls_target_for(fixture: &FixtureState, team1_score: u32, config: &DlsConfig) -> Option<DlsTarget> {
    if !fixture.is_interrupted() {
        return None;
    }
    let t1 = team1_resources(fixture.total_overs);
    let t2 = team2_resources(fixture);
    let target = revised_target(team1_score, t1, t2, fixture.format(), config);
    log::debug!(
        "dls: team1={team1_score} R1={t1:.1} R2={t2:.1} -> target {}",
        target.revised_target
    );
    Some(target)
}

/// The table has one decimal of precision; keep derived figures there so
/// float residue cannot move a target across an integer boundary.
fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
