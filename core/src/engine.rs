//! The analysis engine: one full recomputation pass over a snapshot.
//!
//! PASS ORDER (fixed, documented):
//!   1. Sort a private copy of the ball log
//!   2. Innings summaries
//!   3. Active participants (one-step transition) and display names
//!   4. Chase target, DLS revision if play was interrupted
//!   5. Win-probability series (second innings only)
//!   6. Commentary feed and over summaries
//!
//! RULES:
//!   - Nothing is cached between passes. A poll refetches the snapshot
//!     and calls analyze() again.
//!   - The analyzer holds only immutable config and a master seed, so a
//!     single instance can serve any number of concurrent viewers.
//!   - All randomness flows through per-ball CommentaryRng streams.

use crate::{
    ball::{self, BallEvent},
    commentary::{self, CommentaryContext},
    config::EngineConfig,
    dls::{self, DlsTarget},
    error::EngineResult,
    rng::CommentaryRng,
    roster::Roster,
    scorecard::{self, InningsSummary},
    snapshot::MatchSnapshot,
    state_replay::{self, Slot},
    types::{Innings, BALLS_PER_OVER, MAX_WICKETS},
    win_prob::{self, WinProbModel, WinProbPoint},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participants {
    pub striker:          Slot,
    pub non_striker:      Slot,
    pub bowler:           Slot,
    pub striker_name:     String,
    pub non_striker_name: String,
    pub bowler_name:      String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaseStatus {
    pub target:            u32,
    /// Present only when play was interrupted.
    pub dls:               Option<DlsTarget>,
    pub runs_needed:       u32,
    pub balls_left:        u32,
    pub wickets_in_hand:   u32,
    pub required_run_rate: Option<f64>,
    /// Chasing side's current win probability.
    pub win_probability:   f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryLine {
    pub innings:     Innings,
    pub over_number: u32,
    pub ball_number: u32,
    pub text:        String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverSummaryLine {
    pub innings:     Innings,
    pub over_number: u32,
    pub text:        String,
}

/// Everything the display layer needs for one poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub current_innings: Innings,
    pub first_innings:   InningsSummary,
    pub second_innings:  InningsSummary,
    pub participants:    Participants,
    pub chase:           Option<ChaseStatus>,
    pub win_probability: Vec<WinProbPoint>,
    pub commentary:      Vec<CommentaryLine>,
    pub over_summaries:  Vec<OverSummaryLine>,
}

pub struct MatchAnalyzer {
    config:      EngineConfig,
    master_seed: u64,
}

impl MatchAnalyzer {
    pub fn new(config: EngineConfig, master_seed: u64) -> Self {
        Self { config, master_seed }
    }

    /// Analyzer with built-in config. Tests use this.
    pub fn with_defaults(master_seed: u64) -> Self {
        Self::new(EngineConfig::default(), master_seed)
    }

    /// Analyzer with config loaded from the data/ directory.
    pub fn build(data_dir: &str, master_seed: u64) -> EngineResult<Self> {
        Ok(Self::new(EngineConfig::load(data_dir)?, master_seed))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Run one analysis pass.
    pub fn analyze(&self, snapshot: &MatchSnapshot) -> MatchAnalysis {
        let fixture = &snapshot.fixture;

        let mut balls = snapshot.balls.clone();
        if !ball::is_sorted(&balls) {
            log::warn!("engine: ball log arrived unsorted ({} events), sorting", balls.len());
            ball::sort_ball_log(&mut balls);
        }

        let first_innings = scorecard::summarize_innings(&balls, Innings::First);
        let second_innings = scorecard::summarize_innings(&balls, Innings::Second);

        let participants = self.participants(&balls, snapshot);
        let chase = self.chase_status(&balls, snapshot, &second_innings);
        let win_probability = win_prob::probability_history(
            &balls,
            fixture,
            &self.config.dls,
            &self.config.win_prob,
        );
        let commentary = self.commentary_feed(&balls, &snapshot.roster);
        let over_summaries = over_summary_lines(&balls);

        log::debug!(
            "engine: pass complete innings={} balls={} first={}/{} second={}/{} points={}",
            fixture.current_innings.number(),
            balls.len(),
            first_innings.runs,
            first_innings.wickets,
            second_innings.runs,
            second_innings.wickets,
            win_probability.len()
        );

        MatchAnalysis {
            current_innings: fixture.current_innings,
            first_innings,
            second_innings,
            participants,
            chase,
            win_probability,
            commentary,
            over_summaries,
        }
    }

    fn participants(&self, balls: &[BallEvent], snapshot: &MatchSnapshot) -> Participants {
        let derived = state_replay::current_state(balls, &snapshot.fixture);
        let roster = &snapshot.roster;

        let striker = roster.resolve(derived.striker);
        let non_striker = roster.resolve(derived.non_striker);
        let bowler = roster.resolve(derived.bowler);

        Participants {
            striker_name:     roster.batter_name(&striker),
            non_striker_name: roster.batter_name(&non_striker),
            bowler_name:      roster.bowler_name(&bowler),
            striker,
            non_striker,
            bowler,
        }
    }

    fn chase_status(
        &self,
        balls: &[BallEvent],
        snapshot: &MatchSnapshot,
        second: &InningsSummary,
    ) -> Option<ChaseStatus> {
        let fixture = &snapshot.fixture;
        if fixture.current_innings != Innings::Second {
            return None;
        }

        let first = scorecard::summarize_innings(balls, Innings::First);
        let dls = dls::dls_target_for(fixture, first.runs, &self.config.dls);
        let target = dls.map(|t| t.revised_target).unwrap_or(first.runs.saturating_add(1));
        let chase_overs = fixture.chase_overs();

        let runs_needed = target.saturating_sub(second.runs);
        let balls_left = chase_overs.saturating_mul(BALLS_PER_OVER).saturating_sub(second.legal_balls);
        let wickets_in_hand = MAX_WICKETS.saturating_sub(second.wickets);

        let model = WinProbModel::for_fixture(fixture, &self.config.dls, &self.config.win_prob);
        let win_probability = model.chase_win_probability(runs_needed, balls_left, wickets_in_hand, target);

        Some(ChaseStatus {
            target,
            dls,
            runs_needed,
            balls_left,
            wickets_in_hand,
            required_run_rate: second.required_run_rate(target, chase_overs),
            win_probability,
        })
    }

    fn commentary_feed(&self, balls: &[BallEvent], roster: &Roster) -> Vec<CommentaryLine> {
        balls
            .iter()
            .enumerate()
            .map(|(ordinal, b)| {
                let ctx = CommentaryContext {
                    striker_name: roster.display_name(&b.striker_id),
                    bowler_name:  roster.display_name(&b.bowler_id),
                };
                let mut rng = CommentaryRng::for_ball(self.master_seed, ordinal as u64);
                CommentaryLine {
                    innings:     b.innings,
                    over_number: b.over_number,
                    ball_number: b.ball_number,
                    text:        commentary::generate_commentary(b, &ctx, &self.config.commentary, &mut rng),
                }
            })
            .collect()
    }
}

fn over_summary_lines(balls: &[BallEvent]) -> Vec<OverSummaryLine> {
    [Innings::First, Innings::Second]
        .into_iter()
        .flat_map(|innings| scorecard::over_summaries(balls, innings))
        .filter(|over| over.complete)
        .map(|over| OverSummaryLine {
            innings:     over.innings,
            over_number: over.over_number,
            text:        commentary::generate_over_summary(&over),
        })
        .collect()
}
