// src/detector.rs
//
// Per-track leader tracking across poll cycles.
//
// Each TrackKey is either unseen (no entry in the map) or known. The first
// non-empty snapshot only records the leader; later snapshots emit an
// event when the leader's name differs. Empty snapshots are ignored so a
// failed scrape never reads as "nobody leads".

use std::collections::HashMap;

use crate::config::consts::NOT_AVAILABLE;
use crate::data::{ChangeEvent, LeaderState, Snapshot, TrackKey};

/// What a single `observe` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Observation {
    /// Empty snapshot; state untouched.
    Skipped,
    /// First leader recorded for the track. No event.
    Bootstrapped,
    Unchanged,
    Changed(ChangeEvent),
}

impl Observation {
    pub fn into_event(self) -> Option<ChangeEvent> {
        match self {
            Observation::Changed(ev) => Some(ev),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct LeaderDetector {
    leaders: HashMap<TrackKey, LeaderState>,
}

impl LeaderDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leader(&self, track: &TrackKey) -> Option<&LeaderState> {
        self.leaders.get(track)
    }

    /// Number of tracks with a known leader.
    pub fn known_tracks(&self) -> usize {
        self.leaders.len()
    }

    pub fn observe(&mut self, track: &TrackKey, snapshot: &Snapshot) -> Observation {
        let Some(leader) = snapshot.leader() else {
            return Observation::Skipped;
        };
        let current = LeaderState::from(leader);

        let Some(previous) = self.leaders.insert(track.clone(), current) else {
            logf!("{track}: tracking leader {}", leader.name);
            return Observation::Bootstrapped;
        };

        if previous.name == leader.name {
            return Observation::Unchanged;
        }

        let gap = snapshot
            .runner_up()
            .map(|e| e.diff_to_first.clone())
            .unwrap_or_else(|| s!(NOT_AVAILABLE));

        logf!("{track}: leader {} -> {}", previous.name, leader.name);
        Observation::Changed(ChangeEvent {
            track: track.clone(),
            previous_leader: Some(previous.name),
            previous_time: Some(previous.time),
            current_leader: leader.name.clone(),
            current_time_or_gap: gap,
        })
    }
}
