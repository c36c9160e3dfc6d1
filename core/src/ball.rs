//! Ball-by-ball event log.
//!
//! RULE: A BallEvent is never mutated once recorded.
//! The scoring subsystem appends one event per delivery attempt; every
//! derived figure in this crate is recomputed from the log on demand.

use crate::types::{Innings, PlayerId, BALLS_PER_OVER};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraType {
    #[default]
    None,
    Wide,
    NoBall,
    Byes,
    LegByes,
}

impl ExtraType {
    /// Wides and no-balls are re-bowled and do not use up a ball of the over.
    pub fn is_illegal(self) -> bool {
        matches!(self, ExtraType::Wide | ExtraType::NoBall)
    }

    /// Byes and leg-byes are run between the wickets, so they move the strike.
    pub fn counts_for_rotation(self) -> bool {
        matches!(self, ExtraType::Byes | ExtraType::LegByes)
    }
}

/// Mode of dismissal.
///
/// Decoded leniently: whitespace and case are ignored ("Run Out",
/// "run out" and "RunOut" are the same), and anything unrecognized is
/// kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WicketType {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    Other(String),
}

impl WicketType {
    /// Display name with spaces removed; commentary pools are keyed by this.
    pub fn normalized_key(&self) -> String {
        match self {
            WicketType::Bowled  => "Bowled".into(),
            WicketType::Caught  => "Caught".into(),
            WicketType::Lbw     => "LBW".into(),
            WicketType::RunOut  => "RunOut".into(),
            WicketType::Stumped => "Stumped".into(),
            WicketType::Other(raw) => raw.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }

    pub fn is_run_out(&self) -> bool {
        matches!(self, WicketType::RunOut)
    }
}

impl From<String> for WicketType {
    fn from(raw: String) -> Self {
        let squashed: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match squashed.as_str() {
            "bowled"  => WicketType::Bowled,
            "caught"  => WicketType::Caught,
            "lbw"     => WicketType::Lbw,
            "runout"  => WicketType::RunOut,
            "stumped" => WicketType::Stumped,
            _ => WicketType::Other(raw),
        }
    }
}

impl From<&str> for WicketType {
    fn from(raw: &str) -> Self {
        WicketType::from(raw.to_string())
    }
}

impl From<WicketType> for String {
    fn from(w: WicketType) -> String {
        w.to_string()
    }
}

impl fmt::Display for WicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WicketType::Bowled  => f.write_str("Bowled"),
            WicketType::Caught  => f.write_str("Caught"),
            WicketType::Lbw     => f.write_str("LBW"),
            WicketType::RunOut  => f.write_str("Run Out"),
            WicketType::Stumped => f.write_str("Stumped"),
            WicketType::Other(raw) => f.write_str(raw),
        }
    }
}

/// One delivery attempt, exactly as the scorer recorded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    pub innings:        Innings,
    /// 0-indexed.
    pub over_number:    u32,
    /// 1..=6; illegal deliveries repeat the slot of the ball that follows.
    pub ball_number:    u32,
    pub striker_id:     PlayerId,
    pub non_striker_id: PlayerId,
    pub bowler_id:      PlayerId,
    #[serde(default)]
    pub runs_scored:    u32,
    #[serde(default)]
    pub extras:         u32,
    #[serde(default)]
    pub extra_type:     ExtraType,
    #[serde(default)]
    pub is_wicket:      bool,
    #[serde(default)]
    pub wicket_type:    Option<WicketType>,
    #[serde(default)]
    pub player_out_id:  Option<PlayerId>,
    /// Upstream insertion order. Breaks ties between an illegal delivery
    /// and the re-bowl that shares its ball number.
    #[serde(default)]
    pub sequence:       u64,
}

impl BallEvent {
    /// A delivery is legal iff it is neither a wide nor a no-ball.
    pub fn is_legal(&self) -> bool {
        !self.extra_type.is_illegal()
    }

    /// Runs added to the team total. Saturates on corrupt counts.
    pub fn total_runs(&self) -> u32 {
        self.runs_scored.saturating_add(self.extras)
    }

    /// Runs that move the strike. Wide and no-ball extras are penalty runs
    /// and do not count; byes and leg-byes do.
    pub fn rotation_runs(&self) -> u32 {
        if self.extra_type.counts_for_rotation() {
            self.runs_scored.saturating_add(self.extras)
        } else {
            self.runs_scored
        }
    }

    /// The last legal ball of an over triggers the end-of-over changes.
    pub fn completes_over(&self) -> bool {
        self.ball_number == BALLS_PER_OVER && self.is_legal()
    }

    fn sort_key(&self) -> (Innings, u32, u32, u64) {
        (self.innings, self.over_number, self.ball_number, self.sequence)
    }
}

/// Order a ball log by (innings, over, ball, sequence).
///
/// The sort is stable, so events that agree on the whole key keep the
/// order the upstream read returned them in.
pub fn sort_ball_log(balls: &mut [BallEvent]) {
    balls.sort_by_key(BallEvent::sort_key);
}

/// True when the log is already in canonical order.
pub fn is_sorted(balls: &[BallEvent]) -> bool {
    balls.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key())
}

/// The final delivery of an innings in a sorted or unsorted log.
pub fn last_ball_of_innings(balls: &[BallEvent], innings: Innings) -> Option<&BallEvent> {
    balls
        .iter()
        .filter(|b| b.innings == innings)
        .max_by_key(|b| b.sort_key())
}
