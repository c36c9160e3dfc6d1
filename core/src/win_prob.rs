//! Chase win probability.
//!
//! The model compares the runs a side can still be expected to make with
//! the runs it needs:
//!
//!   achievable = par * R(overs_left, wickets_lost) / 100
//!   p          = logistic(steepness * ln(achievable / runs_needed))
//!
//! where R is the resource table and par is the format's G50. A chase
//! that needs exactly par with full resources sits at 50%. Formats up to
//! 20 overs index the table directly; one-day matches rescale overs onto
//! it. Hard outcomes saturate: a chase that is won is 100, a chase that
//! has run out of wickets or balls is 0.

use crate::{
    ball::{self, BallEvent},
    config::{DlsConfig, WinProbConfig},
    dls,
    fixture::{FixtureState, Format},
    resource_table::MAX_OVERS,
    scorecard::{self, InningsSummary},
    types::{Innings, BALLS_PER_OVER, MAX_WICKETS},
};
use serde::{Deserialize, Serialize};

#[inline]
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Win-probability model for one match format.
#[derive(Debug, Clone)]
pub struct WinProbModel {
    par:                  f64,
    balls_per_table_over: f64,
    config:               WinProbConfig,
}

impl WinProbModel {
    pub fn new(format: Format, total_overs: u32, dls_config: &DlsConfig, config: &WinProbConfig) -> Self {
        let balls_per_table_over = if format.is_one_day() && total_overs > MAX_OVERS {
            (BALLS_PER_OVER as f64 * total_overs as f64) / MAX_OVERS as f64
        } else {
            BALLS_PER_OVER as f64
        };
        Self {
            par: dls_config.g50(format),
            balls_per_table_over,
            config: config.clone(),
        }
    }

    pub fn for_fixture(fixture: &FixtureState, dls_config: &DlsConfig, config: &WinProbConfig) -> Self {
        Self::new(fixture.format(), fixture.total_overs, dls_config, config)
    }

    /// Runs the chasing side can be expected to score from here.
    pub fn achievable_runs(&self, balls_left: u32, wickets_in_hand: u32) -> f64 {
        let wickets_lost = MAX_WICKETS - wickets_in_hand.min(MAX_WICKETS);
        let overs_left = balls_left as f64 / self.balls_per_table_over;
        self.par * dls::resource_percent(overs_left, wickets_lost) / 100.0
    }

    /// Probability (0..=100) that the chasing side wins.
    ///
    /// `runs_needed` above `target` is inconsistent live data and is
    /// treated as `target`. Wickets in hand above 10 clamp to 10.
    pub fn chase_win_probability(
        &self,
        runs_needed: u32,
        balls_left: u32,
        wickets_in_hand: u32,
        target: u32,
    ) -> f64 {
        let runs_needed = if target > 0 && runs_needed > target {
            log::warn!("win_prob: runs_needed {runs_needed} exceeds target {target}, clamping");
            target
        } else {
            runs_needed
        };
        if runs_needed == 0 {
            return 100.0;
        }
        if wickets_in_hand == 0 || balls_left == 0 {
            return 0.0;
        }

        let achievable = self.achievable_runs(balls_left, wickets_in_hand);
        if achievable <= 0.0 {
            return self.config.floor;
        }
        let pressure = (achievable / runs_needed as f64).ln();
        let p = 100.0 * logistic(self.config.steepness * pressure);
        p.clamp(self.config.floor, self.config.ceiling)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinProbPoint {
    /// Over (1-indexed) the point was taken at.
    pub over:              u32,
    pub balls_bowled:      u32,
    pub team1_probability: f64,
    pub team2_probability: f64,
}

/// Target for the chase: DLS revised target when play was interrupted,
/// otherwise first-innings total plus one.
pub fn chase_target(balls: &[BallEvent], fixture: &FixtureState, dls_config: &DlsConfig) -> u32 {
    let first = scorecard::summarize_innings(balls, Innings::First);
    dls::dls_target_for(fixture, first.runs, dls_config)
        .map(|t| t.revised_target)
        .unwrap_or(first.runs.saturating_add(1))
}

/// Per-over win-probability series for the second innings.
///
/// One point per completed over with the cumulative position at that
/// moment, plus a final point if the chase is decided mid-over. Empty
/// while the first innings is in progress. Recomputing from the same
/// log always yields the same series.
pub fn probability_history(
    balls: &[BallEvent],
    fixture: &FixtureState,
    dls_config: &DlsConfig,
    config: &WinProbConfig,
) -> Vec<WinProbPoint> {
    let mut chase: Vec<BallEvent> = balls
        .iter()
        .filter(|b| b.innings == Innings::Second)
        .cloned()
        .collect();
    if chase.is_empty() {
        return Vec::new();
    }
    ball::sort_ball_log(&mut chase);

    let model = WinProbModel::for_fixture(fixture, dls_config, config);
    let target = chase_target(balls, fixture, dls_config);
    let total_balls = fixture.chase_overs().saturating_mul(BALLS_PER_OVER);
    let team1_chasing = fixture.chasing_team() == &fixture.team1_id;

    let point_at = |over: u32, summary: &InningsSummary| {
        let p = model.chase_win_probability(
            target.saturating_sub(summary.runs),
            total_balls.saturating_sub(summary.legal_balls),
            MAX_WICKETS.saturating_sub(summary.wickets),
            target,
        );
        let (team1_probability, team2_probability) =
            if team1_chasing { (p, 100.0 - p) } else { (100.0 - p, p) };
        WinProbPoint {
            over,
            balls_bowled: summary.legal_balls,
            team1_probability,
            team2_probability,
        }
    };

    let mut series = Vec::new();
    let mut summary = InningsSummary::default();
    for b in &chase {
        summary.add_ball(b);
        let decided = summary.runs >= target
            || summary.is_all_out()
            || summary.legal_balls >= total_balls;
        if b.completes_over() || decided {
            series.push(point_at(b.over_number.saturating_add(1), &summary));
        }
        if decided {
            break;
        }
    }
    series
}
