// src/query.rs
//
// On-demand leaderboard text. Same pipeline as the poll loop, but no
// leader state: scrape, take the top N, format. Missing data always comes
// back as a readable message, never an empty string.

use crate::config::consts::{GENERAL_TOP_N, LEG_COUNT, STAGE_TOP_N};
use crate::config::options::AppOptions;
use crate::core::Fetch;
use crate::data::{Entry, TrackKey};
use crate::scrape;
use crate::specs::Layout;

const DIVIDER: &str = "\n\n────────────────────\n\n";

pub fn format_entry(e: &Entry) -> String {
    format!("{}. {} | {} | ({})", e.position.trim_end_matches('.'), e.name, e.vehicle, e.diff_to_first)
}

fn format_top(entries: &[Entry]) -> String {
    entries.iter().map(format_entry).collect::<Vec<_>>().join("\n")
}

/// Top entries of every configured track of a leg (1-based).
///
/// Sections are numbered by position among the configured URLs, so a leg
/// with only `LEG_2_2` set shows a single "Track 1".
pub fn leg<F: Fetch + ?Sized>(options: &AppOptions, fetcher: &F, leg: u32) -> String {
    if !(1..=LEG_COUNT).contains(&leg) {
        return format!("Invalid leg number! Use 1 to {LEG_COUNT}.");
    }

    let tracks = options.leg_tracks(leg);
    if tracks.is_empty() {
        return format!("No leaderboard data available for Leg {leg}.");
    }

    let sections: Vec<String> = tracks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let label = TrackKey::new(t.key.leg.as_str(), i);
            match scrape::fetch_snapshot(fetcher, &t.url, Layout::Stage) {
                Ok(snap) if !snap.is_empty() => {
                    format!("Top {STAGE_TOP_N} for {label}:\n{}", format_top(snap.top(STAGE_TOP_N)))
                }
                Ok(_) => format!("No leaderboard data available from {label}."),
                Err(e) => {
                    logw!("{}: {e}", t.key);
                    format!("No leaderboard data available from {label}.")
                }
            }
        })
        .collect();

    sections.join(DIVIDER)
}

/// Top of the aggregate leaderboard.
pub fn leaderboard<F: Fetch + ?Sized>(options: &AppOptions, fetcher: &F) -> String {
    const FAILED: &str = "Couldn't retrieve the general leaderboard.";

    let Some(url) = options.general_url.as_deref() else {
        logw!("LEADERBOARD_URL is not set");
        return s!(FAILED);
    };

    match scrape::fetch_snapshot(fetcher, url, Layout::General) {
        Ok(snap) if !snap.is_empty() => format!("General Leaderboard:\n{}", format_top(snap.top(GENERAL_TOP_N))),
        Ok(_) => s!(FAILED),
        Err(e) => {
            logw!("General leaderboard: {e}");
            s!(FAILED)
        }
    }
}

/// Championship link and credentials.
pub fn info(options: &AppOptions) -> String {
    let i = &options.info;
    match (&i.url, &i.name, &i.password) {
        (Some(url), Some(name), Some(password)) => format!(
            "Here is the link: {url}\nRally Championship Name: {name}\nPassword: {password}"
        ),
        _ => s!("Error: championship info is incomplete (set INFO_URL, RALLY_NAME and RALLY_PASSWORD)."),
    }
}
