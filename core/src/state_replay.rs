//! One-step participant transition.
//!
//! RULE: This is a single-step lookahead from the most recent delivery,
//! not a replay from ball zero. Who replaces a dismissed batter and who
//! bowls the next over are decided outside the engine; those slots come
//! back as `Slot::Pending`.
//!
//! Order of operations on the last ball:
//!   1. Strike rotation on odd rotation runs
//!   2. Dismissed batter's slot becomes pending
//!   3. End-of-over crossing and bowler becomes pending

use crate::{
    ball::{self, BallEvent},
    fixture::FixtureState,
    types::PlayerId,
};
use serde::{Deserialize, Serialize};

/// A participant position that is either known or awaiting assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "player_id", rename_all = "snake_case")]
pub enum Slot {
    Filled(PlayerId),
    Pending,
}

impl Slot {
    pub fn player(&self) -> Option<&PlayerId> {
        match self {
            Slot::Filled(id) => Some(id),
            Slot::Pending => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    fn holds(&self, id: &PlayerId) -> bool {
        self.player() == Some(id)
    }
}

impl From<Option<PlayerId>> for Slot {
    fn from(id: Option<PlayerId>) -> Self {
        id.map_or(Slot::Pending, Slot::Filled)
    }
}

/// Who should be on strike, at the other end, and bowling next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMatchState {
    pub striker:     Slot,
    pub non_striker: Slot,
    pub bowler:      Slot,
}

impl DerivedMatchState {
    fn swap_ends(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }
}

/// Derive the active participants after `last_ball`.
///
/// With no ball yet bowled in the innings, the fixture's pre-match
/// assignment is returned as-is. Pure: the same inputs always give the
/// same output.
pub fn derive_next_state(last_ball: Option<&BallEvent>, fixture: &FixtureState) -> DerivedMatchState {
    let Some(ball) = last_ball else {
        return DerivedMatchState {
            striker:     fixture.striker_id.clone().into(),
            non_striker: fixture.non_striker_id.clone().into(),
            bowler:      fixture.bowler_id.clone().into(),
        };
    };

    let mut state = DerivedMatchState {
        striker:     Slot::Filled(ball.striker_id.clone()),
        non_striker: Slot::Filled(ball.non_striker_id.clone()),
        bowler:      Slot::Filled(ball.bowler_id.clone()),
    };

    if ball.rotation_runs() % 2 == 1 {
        state.swap_ends();
    }

    if ball.is_wicket {
        if let Some(out) = &ball.player_out_id {
            if state.striker.holds(out) {
                state.striker = Slot::Pending;
            } else if state.non_striker.holds(out) {
                state.non_striker = Slot::Pending;
            }
        }
    }

    if ball.completes_over() {
        state.swap_ends();
        state.bowler = Slot::Pending;
    }

    state
}

/// Participants for the fixture's current innings, taken from an
/// unsorted ball log.
pub fn current_state(balls: &[BallEvent], fixture: &FixtureState) -> DerivedMatchState {
    let last = ball::last_ball_of_innings(balls, fixture.current_innings);
    derive_next_state(last, fixture)
}
