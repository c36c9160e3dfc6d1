//! Fixture metadata as owned by the match-scoring subsystem.
//!
//! Read-only to the engine. The pre-match participant ids only matter
//! until the first ball of an innings has been bowled.

use crate::types::{Innings, PlayerId, TeamId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TossDecision {
    Bat,
    Field,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

/// Match format. Drives the DLS G50 constant and win-probability scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    OneDay,
    T20,
    T10,
    FiveOver,
}

impl Format {
    /// Anything longer than 20 overs is treated as one-day cricket; shorter
    /// matches snap to the nearest short format at or above their length.
    pub fn from_total_overs(total_overs: u32) -> Self {
        match total_overs {
            0..=5   => Format::FiveOver,
            6..=10  => Format::T10,
            11..=20 => Format::T20,
            _       => Format::OneDay,
        }
    }

    pub fn is_one_day(self) -> bool {
        matches!(self, Format::OneDay)
    }
}

/// A stoppage during the chase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interruption {
    /// Overs bowled in the chase when play stopped, as balls / 6
    /// (12.3 in scorebook notation is `12.5`).
    pub overs_bowled: f64,
    pub wickets_lost: u32,
    /// Whole overs removed from the chase by the stoppage.
    pub overs_lost:   u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureState {
    pub total_overs:     u32,
    pub toss_winner_id:  TeamId,
    pub toss_decision:   TossDecision,
    pub team1_id:        TeamId,
    pub team2_id:        TeamId,
    pub current_innings: Innings,
    #[serde(default)]
    pub status:          MatchStatus,
    #[serde(default)]
    pub striker_id:      Option<PlayerId>,
    #[serde(default)]
    pub non_striker_id:  Option<PlayerId>,
    #[serde(default)]
    pub bowler_id:       Option<PlayerId>,
    #[serde(default)]
    pub interruptions:   Vec<Interruption>,
}

impl FixtureState {
    pub fn format(&self) -> Format {
        Format::from_total_overs(self.total_overs)
    }

    /// The side that bats in the first innings.
    pub fn batting_first(&self) -> &TeamId {
        let toss_winner_bats = self.toss_decision == TossDecision::Bat;
        let team1_won_toss = self.toss_winner_id == self.team1_id;
        match (team1_won_toss, toss_winner_bats) {
            (true, true) | (false, false) => &self.team1_id,
            (true, false) | (false, true) => &self.team2_id,
        }
    }

    /// The side pursuing the target in the second innings.
    pub fn chasing_team(&self) -> &TeamId {
        if self.batting_first() == &self.team1_id {
            &self.team2_id
        } else {
            &self.team1_id
        }
    }

    pub fn is_interrupted(&self) -> bool {
        !self.interruptions.is_empty()
    }

    /// Overs the chasing side is entitled to after all recorded stoppages.
    pub fn chase_overs(&self) -> u32 {
        let lost = self
            .interruptions
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.overs_lost));
        self.total_overs.saturating_sub(lost)
    }
}
