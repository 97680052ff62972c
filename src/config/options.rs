// src/config/options.rs
//
// Runtime options, read from the process environment (optionally seeded
// from a `.env` file). Parsing works over a lookup closure so tests never
// need to touch the real environment.

use std::time::Duration;

use super::consts::*;
use crate::data::TrackKey;
use crate::error::{Result, ScrapeError};

/// One configured scrape target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackSource {
    pub key: TrackKey,
    pub url: String,
}

/// Championship details shown by the `info` query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RallyInfo {
    pub url: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Leg-ascending, then track-ascending. The scheduler walks this as-is.
    pub tracks: Vec<TrackSource>,
    pub general_url: Option<String>,
    pub poll_interval: Duration,
    pub user_agent: String,
    pub info: RallyInfo,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            general_url: None,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            user_agent: s!(USER_AGENT),
            info: RallyInfo::default(),
        }
    }
}

impl AppOptions {
    /// Load `.env` (if any) and read options from the environment.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => logd!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => logw!("Ignoring unreadable .env: {e}"),
        }
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build options from any key → value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut tracks = Vec::new();
        for leg in 1..=LEG_COUNT {
            for idx in 0..TRACKS_PER_LEG {
                let var = format!("LEG_{}_{}", leg, idx + 1);
                if let Some(url) = get(&var) {
                    tracks.push(TrackSource {
                        key: TrackKey::new(format!("Leg {leg}"), idx),
                        url,
                    });
                }
            }
        }

        let poll_interval = match get("POLL_INTERVAL_SECS") {
            Some(v) => {
                let secs: u64 = v.parse().map_err(|_| {
                    ScrapeError::Config(format!("POLL_INTERVAL_SECS must be a whole number, got {v:?}"))
                })?;
                if secs == 0 {
                    return Err(ScrapeError::Config(s!("POLL_INTERVAL_SECS must be at least 1")));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        Ok(Self {
            tracks,
            general_url: get("LEADERBOARD_URL"),
            poll_interval,
            user_agent: get("USER_AGENT").unwrap_or_else(|| s!(USER_AGENT)),
            info: RallyInfo {
                url: get("INFO_URL"),
                name: get("RALLY_NAME"),
                password: get("RALLY_PASSWORD"),
            },
        })
    }

    /// Configured tracks for one leg (1-based), in track order.
    pub fn leg_tracks(&self, leg: u32) -> Vec<&TrackSource> {
        let label = format!("Leg {leg}");
        self.tracks.iter().filter(|t| t.key.leg == label).collect()
    }
}
