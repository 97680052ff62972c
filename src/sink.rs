// src/sink.rs
//! Where leader-change events go. Frontends (chat bot, terminal, tests)
//! implement `EventSink`; rendering is entirely theirs.

use crate::data::ChangeEvent;
use crate::error::Result;
use crate::runner::CycleReport;

pub trait EventSink {
    /// Deliver one event. An error is logged, the rest of the cycle still
    /// runs, and the cycle is reported as failed.
    fn notify(&mut self, event: &ChangeEvent) -> Result<()>;

    /// Called before a cycle with the number of tracks to visit.
    fn cycle_started(&mut self, _tracks: usize) {}

    /// Called after every cycle, including one where `notify` failed.
    fn cycle_finished(&mut self, _report: &CycleReport) {}
}

/// Drops everything.
pub struct NullSink;
impl EventSink for NullSink {
    fn notify(&mut self, _event: &ChangeEvent) -> Result<()> { Ok(()) }
}

/// Prints events to stdout and the log.
pub struct LogSink;
impl EventSink for LogSink {
    fn notify(&mut self, event: &ChangeEvent) -> Result<()> {
        logf!("New track leader: {event}");
        println!("🏆 {event}");
        Ok(())
    }

    fn cycle_finished(&mut self, report: &CycleReport) {
        logd!(
            "Cycle done: {}/{} tracks scraped, {} failed, {} change(s)",
            report.scraped, report.tracks, report.failed, report.events
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct VecSink {
    pub events: Vec<ChangeEvent>,
    pub cycles: usize,
}

impl EventSink for VecSink {
    fn notify(&mut self, event: &ChangeEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn cycle_finished(&mut self, _report: &CycleReport) {
        self.cycles += 1;
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: &ChangeEvent) -> Result<()> { (**self).notify(event) }
    fn cycle_started(&mut self, tracks: usize) { (**self).cycle_started(tracks) }
    fn cycle_finished(&mut self, report: &CycleReport) { (**self).cycle_finished(report) }
}
