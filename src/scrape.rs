// src/scrape.rs
//
// The fetch → extract → parse → snapshot pipeline for one URL.
// Shared by the poll loop and the on-demand queries; neither touches
// leader state here.

use std::time::Instant;

use crate::core::{Fetch, html};
use crate::data::{Entry, Snapshot};
use crate::error::Result;
use crate::specs::Layout;

/// Wrap parsed entries as a snapshot. Order is the table's row order.
pub fn build_snapshot(entries: Vec<Entry>) -> Snapshot {
    Snapshot::new(entries)
}

/// Parse an already-fetched page.
pub fn parse_page(html_doc: &str, layout: Layout) -> Result<Snapshot> {
    let t = Instant::now();
    let rows = html::table_rows(html_doc, layout.table_class())?;
    let entries = layout.parse_rows(&rows);
    logd!("Parsed {} of {} rows ({:?}) in {:?}", entries.len(), rows.len(), layout, t.elapsed());
    Ok(build_snapshot(entries))
}

/// Fetch and parse one results page.
pub fn fetch_snapshot<F: Fetch + ?Sized>(fetcher: &F, url: &str, layout: Layout) -> Result<Snapshot> {
    let html_doc = fetcher.get(url)?;
    parse_page(&html_doc, layout)
}
