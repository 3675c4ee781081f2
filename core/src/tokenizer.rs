/// Tokenize text into lowercase words split on whitespace.
///
/// Keywords are exact lowercase tokens, so a rank "1", a rating "8.6" or a
/// certificate "pg-13" passes through whole. The same function serves title
/// words, cast name parts and query strings, keeping their token boundaries
/// in agreement.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
