//! Ranking output sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tagrank_codec::{LanguageCode, TimeRange};
use tagrank_rank::RankEntry;
use tagrank_result::Result;

/// Name of the report file created inside the output folder.
pub const OUTPUT_FILE_NAME: &str = "top_hashtags.out";

/// Destination for per-language rankings.
///
/// `write_ranking` is called exactly once per requested language, in
/// request order, and only after the whole scan has succeeded. A
/// language with no entries still gets its call with an empty slice.
pub trait RankSink {
    fn write_ranking(
        &mut self,
        language: &LanguageCode,
        window: &TimeRange,
        entries: &[RankEntry],
    ) -> Result<()>;
}

/// Sink that appends one tab-separated line per ranked entry to
/// `top_hashtags.out` in the output folder.
///
/// Line layout: `position language hashtag count start_ts end_ts`.
///
/// The file is created lazily on the first write, so an aborted run
/// leaves nothing behind.
pub struct FileSink {
    path: PathBuf,
    out: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(OUTPUT_FILE_NAME),
            out: None,
        }
    }

    /// Full path of the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        match &mut self.out {
            Some(out) => Ok(out),
            slot @ None => {
                let file = File::create(&self.path)?;
                Ok(slot.insert(BufWriter::new(file)))
            }
        }
    }
}

impl RankSink for FileSink {
    fn write_ranking(
        &mut self,
        language: &LanguageCode,
        window: &TimeRange,
        entries: &[RankEntry],
    ) -> Result<()> {
        let out = self.writer()?;
        for (index, entry) in entries.iter().enumerate() {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                index + 1,
                language,
                entry.hashtag,
                entry.count,
                window.start_ts,
                window.end_ts,
            )?;
        }
        out.flush()?;
        Ok(())
    }
}
