// src/bin/cli.rs
use passive_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    if let Some(summary) = cli::run()? {
        log_summary(&summary);
    }
    Ok(())
}

fn log_summary(summary: &passive_scrape::runner::RunSummary) {
    tracing::info!(
        rows_seen = summary.rows_seen,
        rows_skipped = summary.rows_skipped,
        records = summary.records,
        out = %summary.out_path.display(),
        "run complete"
    );
}
