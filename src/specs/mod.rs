// src/specs/mod.rs
//! # Table *specs*
//!
//! One module per results-table layout. Each spec knows the column layout
//! of its table and turns one row of cell texts into an [`Entry`].
//!
//! ## What lives here
//! - **Row validity** by column count (short rows are headers/spacers and
//!   are dropped without noise).
//! - **Column mapping** to `Entry` fields.
//! - **Name/vehicle disambiguation** for the stage tables (`vehicle`).
//!
//! ## What does **not** live here
//! - Fetching and table location (`core::net`, `core::html`).
//! - Leader tracking (`detector`) or scheduling (`runner`).
//!
//! ## Typical call chain
//! ```text
//! runner / query → scrape::track_snapshot → core::html::table_rows
//!                                         ↘ specs::<layout>::parse_rows
//! ```
//!
//! [`Entry`]: crate::data::Entry
pub mod general;
pub mod stage;
pub mod vehicle;

use crate::data::Entry;

/// Which results table a URL serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Per-stage table: combined name/vehicle cell.
    Stage,
    /// Aggregate (general) table: pre-separated columns.
    General,
}

impl Layout {
    pub fn table_class(self) -> &'static str {
        use crate::config::consts::*;
        match self {
            Layout::Stage => STAGE_TABLE_CLASS,
            Layout::General => GENERAL_TABLE_CLASS,
        }
    }

    pub fn parse_row(self, cells: &[String]) -> Option<Entry> {
        match self {
            Layout::Stage => stage::parse_row(cells),
            Layout::General => general::parse_row(cells),
        }
    }

    /// Parse every valid row, keeping table order.
    pub fn parse_rows(self, rows: &[Vec<String>]) -> Vec<Entry> {
        rows.iter().filter_map(|r| self.parse_row(r)).collect()
    }
}
