//! Run orchestration: validate parameters, scan the rank table, and
//! report per-language top-N rankings.
//!
//! A run either completes fully or emits nothing: the scan is consumed
//! to the end before the sink sees a single ranking, so a mid-scan
//! fault can never leave a partial report behind.

use std::fmt;

use tagrank_rank::{decode_row, RankAggregator};
use tagrank_result::Result;
use tagrank_scan::plan_scan;
use tagrank_store::{connect, RankStore};

pub mod params;
pub mod sink;

pub use params::QueryParams;
pub use sink::{FileSink, RankSink, OUTPUT_FILE_NAME};

/// Stages of one run, in order. Emitted as trace context only; the
/// error stage is implicit in whichever stage's `?` fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Init,
    Scanning,
    Reporting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Scanning => "scanning",
            Stage::Reporting => "reporting",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Counters from a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Rows yielded by the scan.
    pub rows_scanned: u64,
    /// Entries decoded from those rows and offered to the aggregator.
    pub entries_decoded: u64,
}

/// Execute one ranking run against `store`, reporting through `sink`.
///
/// The store connection is scoped to this call and released on every
/// exit path, including scan and sink failures. Rankings reach the
/// sink in language request order, one call per requested language,
/// empty languages included.
pub fn run_query<S, K>(params: &QueryParams, store: &S, sink: &mut K) -> Result<RunReport>
where
    S: RankStore + ?Sized,
    K: RankSink + ?Sized,
{
    tracing::debug!(
        stage = %Stage::Init,
        window = %params.window,
        rank_size = params.rank_size,
        "run starting"
    );

    let conn = connect(store)?;
    let spec = plan_scan(&params.window, &params.languages);
    let mut aggregator = RankAggregator::new(&params.languages, params.rank_size);
    let mut report = RunReport::default();

    tracing::debug!(stage = %Stage::Scanning, "scanning rank table");
    for row in conn.scan(&spec)? {
        let row = row?;
        report.rows_scanned += 1;
        for entry in decode_row(&row)? {
            report.entries_decoded += 1;
            aggregator.add(entry);
        }
    }

    tracing::debug!(
        stage = %Stage::Reporting,
        rows = report.rows_scanned,
        entries = report.entries_decoded,
        "scan complete, writing rankings"
    );
    for language in params.languages.iter() {
        let best = aggregator.best_n(language, params.rank_size);
        sink.write_ranking(language, &params.window, &best)?;
    }

    drop(conn);
    tracing::debug!(stage = %Stage::Done, "run complete");
    Ok(report)
}
