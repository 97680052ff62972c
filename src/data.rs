// src/data.rs
//
// Plain value types that flow through the pipeline:
//   HTML → rows → Entry → Snapshot → LeaderDetector → ChangeEvent

use std::fmt;

/// One driver's result row on one track at one scrape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub position: String,
    pub name: String,
    /// Empty when the row didn't name a known make.
    pub vehicle: String,
    pub time: String,
    pub diff_to_previous: String,
    pub diff_to_first: String,
}

/// The full visible leaderboard of one track at one instant, in table
/// row order. Index 0 is the leader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    /// Keeps the given order; the site already ranks by time.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn leader(&self) -> Option<&Entry> { self.entries.first() }
    pub fn runner_up(&self) -> Option<&Entry> { self.entries.get(1) }

    pub fn top(&self, n: usize) -> &[Entry] {
        &self.entries[..self.entries.len().min(n)]
    }
}

/// A scrape target: a leg label plus which of its alternate tables (0-based).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackKey {
    pub leg: String,
    pub index: usize,
}

impl TrackKey {
    pub fn new(leg: impl Into<String>, index: usize) -> Self {
        Self { leg: leg.into(), index }
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Track {}", self.leg, self.index + 1)
    }
}

/// Last known leader for a track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderState {
    pub name: String,
    pub time: String,
}

impl From<&Entry> for LeaderState {
    fn from(e: &Entry) -> Self {
        Self { name: e.name.clone(), time: e.time.clone() }
    }
}

/// Emitted when a track's leader changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub track: TrackKey,
    /// `None` means first leader ever seen for the track.
    pub previous_leader: Option<String>,
    pub previous_time: Option<String>,
    pub current_leader: String,
    /// Runner-up's gap to the new leader, or `N/A`.
    pub current_time_or_gap: String,
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is now leading {}", self.current_leader, self.track)?;
        if let Some(prev) = &self.previous_leader {
            write!(f, " (previously: {prev})")?;
        }
        let before = self.previous_time.as_deref().unwrap_or(crate::config::consts::NOT_AVAILABLE);
        write!(f, " | time diff: {} -> {}", before, self.current_time_or_gap)
    }
}
