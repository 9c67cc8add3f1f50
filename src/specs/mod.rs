// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* of one page and *how to extract it*.
//!
//! ## What lives here
//! - **Pure extraction** over the typed tree from `core::html`.
//! - **Row shape rules**: which rows count, which are skipped silently.
//! - **Light shaping** of results into a small bundle struct.
//!
//! ## What does **not** live here
//! - Weighting, de-duplication and ordering (`weights`, `store`).
//! - Output formatting and file I/O (`file`).
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → specs::passives::fetch() → core::net + parse_doc
//!                   ↘ store::aggregate → file::write_passives → file::clean_json_file
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against literal HTML snippets and the
//!   fixture under `tests/fixtures/`.
pub mod passives;
