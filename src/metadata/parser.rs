//! Utility functions for splitting the free-form `members` field of an episode

use regex::Regex;
use std::sync::OnceLock;

/// Get the regex pattern for splitting member lists
fn get_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // Match any of: comma, semicolon, slash, pipe, ampersand,
        // " e ", " and ", " com ", " with "
        Regex::new(r"(?i)[,;/|&]|\s+(?:e|and|com|with)\s+").expect("separator regex is valid")
    })
}

/// Parse a members field into individual names
///
/// Splits on: `, ; / | & e and com with`
///
/// # Examples
/// ```
/// use podcastr_lib::metadata::parse_members;
///
/// let members = parse_members("Diego Fernandes, Richard e Tiago");
/// assert_eq!(members, vec!["Diego Fernandes", "Richard", "Tiago"]);
/// ```
pub fn parse_members(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![];
    }

    get_separator_regex()
        .split(value)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separator() {
        assert_eq!(
            parse_members("Diego, Richard, Tiago"),
            vec!["Diego", "Richard", "Tiago"]
        );
    }

    #[test]
    fn test_portuguese_conjunction() {
        assert_eq!(
            parse_members("Diego Fernandes e Richard Fernandes"),
            vec!["Diego Fernandes", "Richard Fernandes"]
        );
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            parse_members("Ana & Bia, Carla and Duda"),
            vec!["Ana", "Bia", "Carla", "Duda"]
        );
    }

    #[test]
    fn test_names_containing_e_are_not_split() {
        assert_eq!(parse_members("Elena Eduardo"), vec!["Elena Eduardo"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_members(""), Vec::<String>::new());
        assert_eq!(parse_members(" , "), Vec::<String>::new());
    }
}
