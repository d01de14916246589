//! Score sources. Implement ScoreSourcePort for quiz result files.

pub mod csv_source;
pub mod json_source;

pub use csv_source::CsvScoreSource;
pub use json_source::JsonScoreSource;

use crate::ports::ScoreSourcePort;
use std::path::Path;
use std::sync::Arc;

/// Pick a source by extension: `.csv` is read as CSV, anything else as JSON.
pub fn source_for_path(path: impl AsRef<Path>) -> Arc<dyn ScoreSourcePort> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        Arc::new(CsvScoreSource::new(path))
    } else {
        Arc::new(JsonScoreSource::new(path))
    }
}
