// tests/common/mod.rs
//
// Offline fixtures: an in-memory fetcher and result-page builders.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use rbr_leader::core::Fetch;
use rbr_leader::{Result, ScrapeError};

/// Per-URL queue of responses. `None` (or an empty queue) answers 503.
#[derive(Default)]
pub struct FakeSite {
    pages: RefCell<HashMap<String, Vec<Option<String>>>>,
    pub hits: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn serve(&self, url: &str, page: String) {
        self.pages.borrow_mut().entry(url.to_string()).or_default().push(Some(page));
    }

    pub fn fail(&self, url: &str) {
        self.pages.borrow_mut().entry(url.to_string()).or_default().push(None);
    }
}

impl Fetch for FakeSite {
    fn get(&self, url: &str) -> Result<String> {
        self.hits.borrow_mut().push(url.to_string());
        let mut pages = self.pages.borrow_mut();
        let queue = pages.entry(url.to_string()).or_default();
        let next = if queue.is_empty() { None } else { queue.remove(0) };
        next.ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 503 })
    }
}

/// A stage page with the decorative first table and the given
/// `(combined name/vehicle, time, diff_to_first)` rows.
pub fn stage_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::from("<tr><td>Pos.</td><td>Name / Car</td><td>Time</td></tr>\n");
    for (i, (who, time, gap)) in rows.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{}.</td><td>{who}</td><td>{time}</td><td>{gap}</td><td>{gap}</td></tr>\n",
            i + 1
        ));
    }
    format!(
        r#"<html><body>
        <table class="rally_results_stres_right"><tr><td>Stage</td></tr></table>
        <table class="rally_results_stres_right">{body}</table>
        </body></html>"#
    )
}

/// A general page: `(name, vehicle, time, diff_to_first)` rows.
pub fn general_page(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::from("<tr><th>#</th><th>Name</th></tr>\n");
    for (i, (name, car, time, gap)) in rows.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{}.</td><td>{name}</td><td><img src=logo.png></td><td>{car}</td><td>{time}</td><td>{gap}</td><td>{gap}</td><td>SR</td></tr>\n",
            i + 1
        ));
    }
    format!(
        r#"<table class="rally_results"></table>
        <table class="rally_results">{body}</table>"#
    )
}

/// Stage page led by `leader`, with one chaser.
pub fn led_by(leader: &str) -> String {
    stage_page(&[
        (&format!("{leader} / NavCitroen C2 R2 Max"), "03:41.250", ""),
        ("chaser / CoSkoda Fabia", "03:42.000", "+00:00.750"),
    ])
}
