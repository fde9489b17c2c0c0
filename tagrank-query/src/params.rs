//! Validated run parameters.

use std::path::PathBuf;

use tagrank_codec::{LanguageSet, TimeRange, TimestampMs};
use tagrank_result::{Error, Result};

/// Number of positional run arguments:
/// `start_ts end_ts rank_size languages output_folder`.
pub const ARG_COUNT: usize = 5;

/// Parameters of one run, validated at construction.
///
/// A `QueryParams` value can only exist with a non-empty language set,
/// a positive rank size, and a non-empty output path, so everything
/// downstream runs on known-good input; this is the INIT stage of the
/// run and it completes before any store access.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub window: TimeRange,
    pub rank_size: usize,
    pub languages: LanguageSet,
    pub output_dir: PathBuf,
}

impl QueryParams {
    pub fn new(
        window: TimeRange,
        rank_size: usize,
        languages: LanguageSet,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        if rank_size == 0 {
            return Err(Error::InvalidArgument(
                "rank size must be at least 1".to_string(),
            ));
        }
        let output_dir = output_dir.into();
        if output_dir.as_os_str().is_empty() {
            return Err(Error::InvalidArgument(
                "output folder must not be empty".to_string(),
            ));
        }
        Ok(Self {
            window,
            rank_size,
            languages,
            output_dir,
        })
    }

    /// Parse the five positional run arguments.
    ///
    /// Arity is checked first and exactly; the output folder is the
    /// fifth and last validated slot. Path separator handling is the
    /// sink's business (it joins the file name onto the folder), so a
    /// missing trailing separator is fine.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.len() != ARG_COUNT {
            return Err(Error::InvalidArgument(format!(
                "expected {ARG_COUNT} arguments \
                 (start_ts end_ts rank_size languages output_folder), got {}",
                args.len()
            )));
        }

        let start_ts = parse_ts(&args[0], "start_ts")?;
        let end_ts = parse_ts(&args[1], "end_ts")?;
        let rank_size = args[2]
            .parse::<usize>()
            .map_err(|_| Error::InvalidArgument(format!("rank size {:?} is not a number", args[2])))?;
        let languages = LanguageSet::from_csv(&args[3])?;

        Self::new(
            TimeRange::new(start_ts, end_ts),
            rank_size,
            languages,
            &args[4],
        )
    }
}

fn parse_ts(raw: &str, name: &str) -> Result<TimestampMs> {
    raw.parse::<TimestampMs>()
        .map_err(|_| Error::InvalidArgument(format!("{name} {raw:?} is not a millisecond timestamp")))
}
