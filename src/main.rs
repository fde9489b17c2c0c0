//! Command-line runner for ranking queries.
//!
//! Drives one run against the in-memory store: seed it (optionally)
//! with demo data, scan the requested window, and write the
//! per-language rankings into the output folder.

use std::process::ExitCode;

use clap::Parser;
use tagrank_codec::{row_key, LanguageCode};
use tagrank_query::{run_query, FileSink, QueryParams};
use tagrank_result::Result;
use tagrank_store::{MemStore, StoreRow};

#[derive(Debug, Parser)]
#[command(name = "tagrank", version, about = "Top-N hashtag rankings per language over a time window")]
struct Cli {
    /// Window start in epoch milliseconds, inclusive.
    start_ts: String,

    /// Window end in epoch milliseconds, exclusive.
    end_ts: String,

    /// Number of entries to report per language.
    rank_size: String,

    /// Comma-separated two-letter language codes, e.g. `en,es`.
    languages: String,

    /// Folder the `top_hashtags.out` report is written into.
    output_folder: String,

    /// Seed the store with a small fixed data set first.
    #[arg(long)]
    demo_seed: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "tagrank: {err} (window [{}, {}), rank size {}, languages {})",
                cli.start_ts, cli.end_ts, cli.rank_size, cli.languages
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let args = [
        cli.start_ts.clone(),
        cli.end_ts.clone(),
        cli.rank_size.clone(),
        cli.languages.clone(),
        cli.output_folder.clone(),
    ];
    let params = QueryParams::from_args(&args)?;

    let store = MemStore::new();
    if cli.demo_seed {
        seed_demo_rows(&store)?;
        tracing::info!(rows = store.row_count(), "seeded demo data");
    }

    let mut sink = FileSink::new(&params.output_dir);
    let report = run_query(&params, &store, &mut sink)?;
    tracing::info!(
        rows = report.rows_scanned,
        entries = report.entries_decoded,
        report = %sink.path().display(),
        "run finished"
    );
    Ok(())
}

/// A fixed data set spanning three time buckets and two languages.
fn seed_demo_rows(store: &MemStore) -> Result<()> {
    let en = LanguageCode::new("en")?;
    let es = LanguageCode::new("es")?;

    let rows = [
        StoreRow::new(row_key(1_000, &en).to_vec())
            .with_slot(1, "#rustlang", 42)
            .with_slot(2, "#async", 17)
            .with_slot(3, "#wasm", 9),
        StoreRow::new(row_key(2_000, &en).to_vec())
            .with_slot(1, "#rustlang", 35)
            .with_slot(2, "#tokio", 21),
        StoreRow::new(row_key(1_000, &es).to_vec())
            .with_slot(1, "#futbol", 58)
            .with_slot(2, "#hola", 14),
        StoreRow::new(row_key(3_000, &es).to_vec()).with_slot(1, "#fiesta", 33),
    ];
    for row in rows {
        store.put_row(row)?;
    }
    Ok(())
}
