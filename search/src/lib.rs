use anyhow::{Context, Result};
use reelfind_core::{KeywordIndex, Record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What to do with a record that fails keyword extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRecordPolicy {
    /// Log a warning and drop the record.
    Skip,
    /// Propagate the error and abort the build.
    Abort,
}

/// Lazily read records from a JSONL file, one per non-empty line.
pub fn read_records(path: &Path) -> Result<impl Iterator<Item = Result<Record>>> {
    let file = File::open(path)
        .with_context(|| format!("opening records file {}", path.display()))?;
    let reader = BufReader::new(file);
    Ok(reader.lines().enumerate().filter_map(|(n, line)| {
        let line = match line {
            Ok(line) => line,
            Err(err) => return Some(Err(err.into())),
        };
        if line.trim().is_empty() {
            return None;
        }
        Some(
            serde_json::from_str::<Record>(&line)
                .with_context(|| format!("parsing record on line {}", n + 1)),
        )
    }))
}

/// Fold a record source into a keyword index.
pub fn build_index<I>(records: I, policy: InvalidRecordPolicy) -> Result<KeywordIndex>
where
    I: IntoIterator<Item = Result<Record>>,
{
    let mut index = KeywordIndex::new();
    let mut ingested = 0usize;
    let mut skipped = 0usize;
    for record in records {
        let record = record?;
        match index.ingest_record(&record) {
            Ok(()) => ingested += 1,
            Err(err) => match policy {
                InvalidRecordPolicy::Abort => return Err(err.into()),
                InvalidRecordPolicy::Skip => {
                    tracing::warn!(%err, "skipping record");
                    skipped += 1;
                }
            },
        }
    }
    tracing::info!(ingested, skipped, keywords = index.keyword_count(), "index built");
    Ok(index)
}
