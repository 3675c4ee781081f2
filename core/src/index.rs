use std::collections::HashMap;

use crate::error::MissingFieldError;
use crate::extract::keyword_pairs;
use crate::record::Record;
use crate::tokenizer::tokenize;

/// Inverted index from lowercase keyword to the titles it applies to.
///
/// Buckets keep ingestion order and are not deduplicated: a record that
/// contributes the same keyword twice shows up twice in its bucket, and
/// re-ingesting a record doubles its occurrences. The index is an explicit
/// value owned by the caller and is not internally synchronized; callers
/// that ingest concurrently must wrap it in a lock or merge partitioned
/// indexes.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append each (keyword, title) pair to its keyword's bucket, creating
    /// the bucket on first use.
    pub fn ingest<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (keyword, title) in pairs {
            self.buckets.entry(keyword).or_default().push(title);
        }
    }

    /// Extract a record's keywords and ingest them. The index is untouched
    /// when extraction fails.
    pub fn ingest_record(&mut self, record: &Record) -> Result<(), MissingFieldError> {
        let pairs = keyword_pairs(record)?;
        self.ingest(pairs);
        Ok(())
    }

    /// The bucket for a keyword, verbatim. An unknown keyword is an empty
    /// slice, never an error.
    pub fn bucket(&self, keyword: &str) -> &[String] {
        self.buckets.get(keyword).map_or(&[], Vec::as_slice)
    }

    /// Titles matching every keyword in `text` (lowercased and split on
    /// whitespace).
    ///
    /// The first token's bucket seeds the working result, duplicates and
    /// all; each later token filters it down to titles present at least
    /// once in that token's bucket, preserving order and any remaining
    /// duplicates. A token absent from the index empties the result for
    /// good. An empty query matches nothing.
    pub fn query(&self, text: &str) -> Vec<String> {
        let mut tokens = tokenize(text).into_iter();
        let mut result = match tokens.next() {
            Some(first) => self.bucket(&first).to_vec(),
            None => return Vec::new(),
        };
        for token in tokens {
            let bucket = self.bucket(&token);
            result.retain(|title| bucket.contains(title));
        }
        result
    }

    /// Number of distinct keywords indexed.
    pub fn keyword_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
