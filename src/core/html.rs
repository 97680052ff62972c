// src/core/html.rs
//
// Table extraction. The result pages render every results table twice
// with the same class; the first copy is decorative, so we always read the
// second (`SELECTED_TABLE_INDEX`).

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;
use crate::config::consts::SELECTED_TABLE_INDEX;
use crate::error::{Result, ScrapeError};

/// Cell texts of every `<tr>` in the selected `<table class=…>`, in document
/// order. No header filtering here; rows with too few cells are the row
/// parser's business.
pub fn table_rows(html_doc: &str, class: &str) -> Result<Vec<Vec<String>>> {
    let doc = Html::parse_document(html_doc);

    let tables: Vec<ElementRef> = elements(doc.root_element(), "table")
        .filter(|t| t.value().classes().any(|c| c == class))
        .collect();

    let Some(table) = tables.get(SELECTED_TABLE_INDEX) else {
        return Err(ScrapeError::TableNotFound { class: s!(class), found: tables.len() });
    };

    let rows: Vec<Vec<String>> = elements(*table, "tr")
        .map(|tr| elements(tr, "td").map(cell_text).collect())
        .collect();

    logd!("Found {} rows in table class={class}", rows.len());
    Ok(rows)
}

/// Descendant elements with the given tag name.
fn elements<'a>(root: ElementRef<'a>, tag: &'static str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name().eq_ignore_ascii_case(tag))
}

fn cell_text(td: ElementRef) -> String {
    normalize_ws(&td.text().collect::<String>())
}
