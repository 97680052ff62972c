// src/runner.rs
//
// The poll loop. One cycle visits every configured track in order, one
// at a time: fetch → extract → parse → snapshot → detector. A track that
// fails only loses its own turn; a cycle that fails only loses its own
// turn. Cycles never overlap and are spaced by `interval`, counted from
// the end of one cycle to the start of the next.

use std::thread;
use std::time::Duration;

use crate::config::options::{AppOptions, TrackSource};
use crate::core::Fetch;
use crate::detector::{LeaderDetector, Observation};
use crate::error::{Result, ScrapeError};
use crate::scrape;
use crate::sink::EventSink;
use crate::specs::Layout;

/// Outcome counts for one cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub tracks: usize,
    pub scraped: usize,
    pub failed: usize,
    pub events: usize,
}

pub struct Scheduler<F: Fetch, S: EventSink> {
    tracks: Vec<TrackSource>,
    interval: Duration,
    fetcher: F,
    sink: S,
    detector: LeaderDetector,
}

impl<F: Fetch, S: EventSink> Scheduler<F, S> {
    pub fn new(tracks: Vec<TrackSource>, interval: Duration, fetcher: F, sink: S, detector: LeaderDetector) -> Self {
        Self { tracks, interval, fetcher, sink, detector }
    }

    pub fn from_options(options: &AppOptions, fetcher: F, sink: S, detector: LeaderDetector) -> Self {
        Self::new(options.tracks.clone(), options.poll_interval, fetcher, sink, detector)
    }

    pub fn detector(&self) -> &LeaderDetector { &self.detector }
    pub fn sink(&self) -> &S { &self.sink }
    pub fn tracks(&self) -> &[TrackSource] { &self.tracks }

    /// One full pass over every track.
    pub fn run_cycle(&mut self) -> Result<CycleReport> {
        let mut report = CycleReport { tracks: self.tracks.len(), ..Default::default() };
        let mut sink_err: Option<ScrapeError> = None;

        self.sink.cycle_started(self.tracks.len());

        for track in &self.tracks {
            let snapshot = match scrape::fetch_snapshot(&self.fetcher, &track.url, Layout::Stage) {
                Ok(s) if !s.is_empty() => s,
                Ok(_) => {
                    logw!("{}: no result rows", track.key);
                    report.failed += 1;
                    continue;
                }
                Err(e) => {
                    logw!("{}: {e}", track.key);
                    report.failed += 1;
                    continue;
                }
            };
            report.scraped += 1;

            if let Observation::Changed(event) = self.detector.observe(&track.key, &snapshot) {
                report.events += 1;
                if let Err(e) = self.sink.notify(&event) {
                    loge!("{}: could not deliver leader change: {e}", track.key);
                    sink_err.get_or_insert(e);
                }
            }
        }

        self.sink.cycle_finished(&report);
        match sink_err {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }

    /// Run `n` cycles, sleeping `interval` between them (not after the last).
    pub fn run_cycles(&mut self, n: usize) -> Vec<Result<CycleReport>> {
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            out.push(self.guarded_cycle());
            if i + 1 < n {
                thread::sleep(self.interval);
            }
        }
        out
    }

    /// Poll forever.
    pub fn run(&mut self) -> ! {
        logf!("Watching {} track(s) every {:?}", self.tracks.len(), self.interval);
        loop {
            let _ = self.guarded_cycle();
            thread::sleep(self.interval);
        }
    }

    fn guarded_cycle(&mut self) -> Result<CycleReport> {
        let result = self.run_cycle();
        match &result {
            Ok(r) => logf!(
                "Cycle: {}/{} scraped, {} failed, {} change(s)",
                r.scraped, r.tracks, r.failed, r.events
            ),
            Err(e) => loge!("Cycle failed: {e}; retrying in {:?}", self.interval),
        }
        result
    }
}
