//! Score summaries computed from the ball log.

use crate::{
    ball::BallEvent,
    types::{Innings, BALLS_PER_OVER, MAX_WICKETS},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub runs:        u32,
    pub wickets:     u32,
    pub legal_balls: u32,
}

impl InningsSummary {
    pub fn add_ball(&mut self, ball: &BallEvent) {
        self.runs = self.runs.saturating_add(ball.total_runs());
        if ball.is_wicket {
            self.wickets = (self.wickets + 1).min(MAX_WICKETS);
        }
        if ball.is_legal() {
            self.legal_balls = self.legal_balls.saturating_add(1);
        }
    }

    /// Scorebook notation, e.g. "12.3".
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.legal_balls / BALLS_PER_OVER, self.legal_balls % BALLS_PER_OVER)
    }

    pub fn is_all_out(&self) -> bool {
        self.wickets >= MAX_WICKETS
    }

    /// Runs per over so far; 0 before the first legal ball.
    pub fn current_run_rate(&self) -> f64 {
        if self.legal_balls == 0 {
            return 0.0;
        }
        self.runs as f64 * BALLS_PER_OVER as f64 / self.legal_balls as f64
    }

    /// Runs per over needed to reach `target` in `total_overs`.
    /// None once no balls remain.
    pub fn required_run_rate(&self, target: u32, total_overs: u32) -> Option<f64> {
        let balls_left = total_overs.saturating_mul(BALLS_PER_OVER).saturating_sub(self.legal_balls);
        if balls_left == 0 {
            return None;
        }
        let needed = target.saturating_sub(self.runs);
        Some(needed as f64 * BALLS_PER_OVER as f64 / balls_left as f64)
    }
}

/// Totals for one innings.
pub fn summarize_innings(balls: &[BallEvent], innings: Innings) -> InningsSummary {
    balls
        .iter()
        .filter(|b| b.innings == innings)
        .fold(InningsSummary::default(), |mut acc, b| {
            acc.add_ball(b);
            acc
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverSummary {
    pub innings:      Innings,
    /// 0-indexed, as recorded on the ball.
    pub over_number:  u32,
    pub runs:         u32,
    pub wickets:      u32,
    /// Innings total at the end of this over.
    pub total:        u32,
    pub wickets_down: u32,
    /// Six legal balls were bowled in this over.
    pub complete:     bool,
}

/// Per-over breakdown of one innings, in over order.
pub fn over_summaries(balls: &[BallEvent], innings: Innings) -> Vec<OverSummary> {
    let mut by_over: BTreeMap<u32, InningsSummary> = BTreeMap::new();
    for b in balls.iter().filter(|b| b.innings == innings) {
        by_over.entry(b.over_number).or_default().add_ball(b);
    }

    let mut running = InningsSummary::default();
    by_over
        .into_iter()
        .map(|(over_number, over)| {
            running.runs = running.runs.saturating_add(over.runs);
            running.wickets = running.wickets.saturating_add(over.wickets).min(MAX_WICKETS);
            OverSummary {
                innings,
                over_number,
                runs: over.runs,
                wickets: over.wickets,
                total: running.runs,
                wickets_down: running.wickets,
                complete: over.legal_balls >= BALLS_PER_OVER,
            }
        })
        .collect()
}
