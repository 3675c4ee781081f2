use crate::error::MissingFieldError;
use crate::record::Record;
use crate::tokenizer::tokenize;

/// Decompose one record into the ordered (keyword, title) pairs it
/// contributes to the index.
///
/// Title words and cast name parts are tokenized so partial titles and
/// first or last names are independent search keys; certificates and
/// genres are lowercased whole; rank, year, rating and metascore are
/// indexed verbatim. Absent optional attributes contribute nothing.
pub fn keyword_pairs(record: &Record) -> Result<Vec<(String, String)>, MissingFieldError> {
    let title = record
        .title
        .as_deref()
        .ok_or_else(|| missing("title", record))?;
    let rating = record
        .rating
        .as_deref()
        .ok_or_else(|| missing("rating", record))?;

    let mut pairs = Vec::new();
    let mut push = |keyword: String| pairs.push((keyword, title.to_string()));

    for word in tokenize(title) {
        push(word);
    }
    if let Some(rank) = &record.rank {
        push(rank.clone());
    }
    if let Some(year) = &record.year {
        push(year.clone());
    }
    if let Some(certificate) = &record.certificate {
        push(certificate.to_lowercase());
    }
    push(rating.to_string());
    for genre in &record.genres {
        push(genre.to_lowercase());
    }
    if let Some(metascore) = &record.metascore {
        push(metascore.clone());
    }
    for name in &record.cast {
        for part in tokenize(name) {
            push(part);
        }
    }
    Ok(pairs)
}

fn missing(field: &'static str, record: &Record) -> MissingFieldError {
    MissingFieldError { field, record: record.identity() }
}
