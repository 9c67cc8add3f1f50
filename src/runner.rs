// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::RunOptions,
    error::Result,
    file,
    progress::Progress,
    specs::passives::{self, PassivesBundle},
    store,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// `<tr>` elements looked at.
    pub rows_seen: usize,
    /// Rows dropped for shape (too few columns, no name).
    pub rows_skipped: usize,
    /// Distinct passives written, after duplicate names collapsed.
    pub records: usize,
    pub out_path: PathBuf,
}

/// Fetch the page and run the whole pipeline.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let bundle = passives::fetch(&opts.url).inspect_err(|e| loge!("Fetch failed: {e}"))?;
    finish_run(bundle, opts, progress)
}

/// Same as `run`, over a page already in hand (tests, saved snapshots).
pub fn run_html(
    html_doc: &str,
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    finish_run(passives::parse_doc(html_doc), opts, progress)
}

fn finish_run(
    bundle: PassivesBundle,
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(bundle.rows_seen);
    }

    let rows_seen = bundle.rows_seen;
    let rows_skipped = bundle.rows_skipped();
    logf!("Passives: {rows_seen} rows, {rows_skipped} skipped");

    let map = store::aggregate(bundle.rows, &opts.weights);
    let out_path = opts.out_path.clone();

    file::write_passives(&out_path, &map)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Parsing completed. Results saved to {}", out_path.display()));
    }

    file::clean_json_file(&out_path)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Cleaned JSON file saved to {}", out_path.display()));
        p.finish();
    }

    Ok(RunSummary { rows_seen, rows_skipped, records: map.len(), out_path })
}
