// src/specs/general.rs
//! Aggregate results table (`rally_results`).
//!
//! Columns: position, name, make logo (ignored), vehicle, time,
//! diff to previous, diff to first, then optional extras.

use crate::config::consts::GENERAL_MIN_COLUMNS;
use crate::data::Entry;

pub fn parse_row(cells: &[String]) -> Option<Entry> {
    if cells.len() < GENERAL_MIN_COLUMNS {
        return None;
    }
    Some(Entry {
        position: cells[0].clone(),
        name: cells[1].clone(),
        vehicle: cells[3].clone(),
        time: cells[4].clone(),
        diff_to_previous: cells[5].clone(),
        diff_to_first: cells[6].clone(),
    })
}
