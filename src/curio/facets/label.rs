//! Display labels for options.
//!
//! Labels are presentation only. Matching always runs on the raw option id.

/// How an option's display name is derived from its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Show the value as stored.
    #[default]
    Raw,
    /// Capitalize each whitespace-separated word (`"very good"` → `"Very Good"`).
    TitleCase,
}

impl LabelStyle {
    pub fn apply(self, value: &str) -> String {
        match self {
            LabelStyle::Raw => value.to_string(),
            LabelStyle::TitleCase => title_case(value),
        }
    }
}

/// Capitalizes the first letter of every whitespace-separated word and
/// lowercases the rest. Runs of whitespace collapse to one space.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("very good"), "Very Good");
        assert_eq!(title_case("NEEDS restoration"), "Needs Restoration");
        assert_eq!(title_case("  mint   "), "Mint");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(title_case("égal état"), "Égal État");
    }

    #[test]
    fn raw_style_is_identity() {
        assert_eq!(LabelStyle::Raw.apply("very good"), "very good");
    }
}
