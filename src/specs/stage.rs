// src/specs/stage.rs
//! Per-stage results table (`rally_results_stres_right`).
//!
//! Columns: position, "name / name+vehicle", time, diff to previous, diff to first.

use super::vehicle::split_name_vehicle;
use crate::config::consts::STAGE_MIN_COLUMNS;
use crate::data::Entry;

pub fn parse_row(cells: &[String]) -> Option<Entry> {
    if cells.len() < STAGE_MIN_COLUMNS {
        return None;
    }
    let (name, vehicle) = split_name_vehicle(&cells[1]);
    Some(Entry {
        position: cells[0].clone(),
        name,
        vehicle,
        time: cells[2].clone(),
        diff_to_previous: cells[3].clone(),
        diff_to_first: cells[4].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn maps_columns() {
        let e = parse_row(&row(&[
            "1.",
            "stonebeel / Trevor BonesteelCitroen C2 R2 Max",
            "03:41.250",
            "",
            "",
        ]))
        .unwrap();
        assert_eq!(e.position, "1.");
        assert_eq!(e.name, "stonebeel / Trevor Bonesteel");
        assert_eq!(e.vehicle, "Citroen C2 R2 Max");
        assert_eq!(e.time, "03:41.250");
    }

    #[test]
    fn extra_columns_are_fine() {
        let e = parse_row(&row(&["2.", "a / bFord Fiesta", "1", "2", "3", "extra"])).unwrap();
        assert_eq!(e.diff_to_previous, "2");
        assert_eq!(e.diff_to_first, "3");
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(parse_row(&row(&["#", "Name", "Time", "Diff"])).is_none());
        assert!(parse_row(&[]).is_none());
    }
}
