// src/specs/passives.rs
//! Scraping *spec* for the Distilled Emotions passives table.
//!
//! Page shape (poe2db, one `<tr>` per passive):
//! ```text
//! <tr>
//!   <td> <a class="item_currency">Distilled Ire</a> <a class="item_currency">…</a> </td>
//!   <td> <a href="…">Passive Name</a>
//!        <div class="implicitMod"><span class="mod-value">25</span>% increased …</div>
//!        <div class="implicitMod">…</div> </td>
//! </tr>
//! ```
//!
//! Responsibilities:
//! - Locate every `<tr>` in the document, nested tables included.
//! - Turn one row into a [`PassiveRow`]: tokens from column 1, name and
//!   description lines from column 2.
//!
//! Rows that don't fit (fewer than two `<td>`, no anchor for the name) are
//! skipped quietly: the page carries header and filler rows, and a partial
//! result beats no result.
//!
//! Non-Responsibilities: weighting, de-duplication, ordering and output all
//! happen later (`store`, `file`).

use std::time::Instant;

use crate::config::consts::{CURRENCY_CLASS, IMPLICIT_MOD_CLASS, KEYWORD_CLASS, MOD_VALUE_CLASS};
use crate::core::html::{self, Element, Node};
use crate::core::net;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassiveRow {
    pub name: String,
    pub values: Vec<String>,
    pub tokens: Vec<String>,
}

pub struct PassivesBundle {
    /// Every `<tr>` looked at, kept or not.
    pub rows_seen: usize,
    pub rows: Vec<PassiveRow>,
}

impl PassivesBundle {
    pub fn rows_skipped(&self) -> usize {
        self.rows_seen - self.rows.len()
    }
}

pub fn fetch(url: &str) -> Result<PassivesBundle> {
    let body = net::http_get(url)?;
    let html_doc = String::from_utf8_lossy(&body);
    let t = Instant::now();
    let out = parse_doc(&html_doc);
    logd!("Passives: parsed {} rows in {:?}", out.rows_seen, t.elapsed());
    Ok(out)
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str) -> PassivesBundle {
    let doc = html::parse_document(html_doc);

    let mut rows_seen = 0usize;
    let mut rows = Vec::new();
    for tr in table_rows(&doc) {
        rows_seen += 1;
        match interpret_row(tr) {
            Some(row) => rows.push(row),
            None => logd!("Passives: skipped row #{rows_seen}"),
        }
    }
    PassivesBundle { rows_seen, rows }
}

pub fn table_rows(doc: &Element) -> impl Iterator<Item = &Element> {
    doc.find_all("tr")
}

pub fn interpret_row(tr: &Element) -> Option<PassiveRow> {
    let mut columns = tr.find_all("td");
    let left = columns.next()?;
    let right = columns.next()?;

    let tokens = left
        .find_all_with_class("a", CURRENCY_CLASS)
        .map(Element::stripped_text)
        .filter(|t| !t.is_empty())
        .collect();

    let name = right.find("a")?.stripped_text();
    if name.is_empty() {
        return None;
    }

    let values = right
        .find_all_with_class("div", IMPLICIT_MOD_CLASS)
        .filter_map(implicit_mod_text)
        .collect();

    Some(PassiveRow { name, values, tokens })
}

/// One description line from a `div.implicitMod`.
/// Only its direct children count: value/keyword spans and bare text.
/// Anything else (`<br>`, other spans, links) is ignored.
fn implicit_mod_text(block: &Element) -> Option<String> {
    let parts: Vec<String> = block
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Element(el) if el.name == "span" && el.has_class(MOD_VALUE_CLASS) => {
                Some(el.stripped_text())
            }
            Node::Element(el) if el.name == "span" && el.has_class(KEYWORD_CLASS) => {
                Some(el.stripped_text())
            }
            Node::Text(text) => Some(s!(text.trim())),
            Node::Element(_) => None,
        })
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() { None } else { Some(parts.join(" ")) }
}
