use serde::{Deserialize, Serialize};

/// One movie as scraped from the ranking site. Every attribute is kept in
/// string form; `title` and `rating` are required downstream, but that is
/// enforced at keyword extraction, not here, so the crawler can emit
/// whatever a page yields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metascore: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<String>,
}

impl Record {
    /// Best-effort label for diagnostics when a record is rejected.
    pub fn identity(&self) -> String {
        if let Some(title) = &self.title {
            title.clone()
        } else if let Some(rank) = &self.rank {
            format!("rank {rank}")
        } else {
            "<unknown record>".to_string()
        }
    }
}
