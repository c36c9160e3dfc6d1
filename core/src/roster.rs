//! Player name lookup for display.
//!
//! An id that does not resolve is not an error: the slot renders as a
//! placeholder, the same as one that is pending assignment.

use crate::{
    state_replay::Slot,
    types::{PlayerId, TeamId},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const NEXT_BATTER: &str = "Next Batter";
pub const NEXT_BOWLER: &str = "Next Bowler";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id:      PlayerId,
    pub name:    String,
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: HashMap<PlayerId, Player>,
}

impl From<Vec<Player>> for Roster {
    fn from(list: Vec<Player>) -> Self {
        Self {
            players: list.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        let mut list: Vec<Player> = roster.players.into_values().collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    }
}

impl Roster {
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn name_of(&self, id: &PlayerId) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }

    /// Drop ids the roster does not know about. An empty roster means no
    /// roster was supplied, so every id is kept.
    pub fn resolve(&self, slot: Slot) -> Slot {
        match slot {
            Slot::Filled(id) if !self.is_empty() && self.get(&id).is_none() => {
                log::warn!("roster: unknown player id {id}, treating slot as pending");
                Slot::Pending
            }
            other => other,
        }
    }

    /// Name for a batting slot, or "Next Batter".
    pub fn batter_name(&self, slot: &Slot) -> String {
        self.slot_name(slot, NEXT_BATTER)
    }

    /// Name for the bowling slot, or "Next Bowler".
    pub fn bowler_name(&self, slot: &Slot) -> String {
        self.slot_name(slot, NEXT_BOWLER)
    }

    /// Name for an id recorded on a ball; falls back to the raw id.
    pub fn display_name(&self, id: &PlayerId) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    fn slot_name(&self, slot: &Slot, placeholder: &str) -> String {
        slot.player()
            .and_then(|id| self.name_of(id))
            .unwrap_or(placeholder)
            .to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
