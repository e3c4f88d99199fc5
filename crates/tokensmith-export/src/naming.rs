//! Key naming-convention normalization.

/// Naming convention applied to every exported token key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum NamingConvention {
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
}

/// Split a key into lowercase words. Boundaries are `-`, `_`, whitespace,
/// and a lower-to-upper case change, so keys already in any of the three
/// conventions split the same way.
fn split_words(key: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in key.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        } else if c.is_uppercase() && prev_lower {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
            current.extend(c.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl NamingConvention {
    /// Apply the convention to a key. Pure and idempotent: re-applying the
    /// same convention to its own output is a no-op.
    pub fn apply(&self, key: &str) -> String {
        let words = split_words(key);
        match self {
            NamingConvention::CamelCase => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            NamingConvention::KebabCase => words.join("-"),
            NamingConvention::SnakeCase => words.join("_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_scenario() {
        assert_eq!(NamingConvention::SnakeCase.apply("spacing-1"), "spacing_1");
    }

    #[test]
    fn test_kebab_input_to_each_convention() {
        assert_eq!(NamingConvention::CamelCase.apply("neutral-100"), "neutral100");
        assert_eq!(NamingConvention::KebabCase.apply("neutral-100"), "neutral-100");
        assert_eq!(NamingConvention::SnakeCase.apply("neutral-100"), "neutral_100");
    }

    #[test]
    fn test_camel_input_to_each_convention() {
        assert_eq!(NamingConvention::CamelCase.apply("primaryFont"), "primaryFont");
        assert_eq!(NamingConvention::KebabCase.apply("primaryFont"), "primary-font");
        assert_eq!(NamingConvention::SnakeCase.apply("primaryFont"), "primary_font");
    }

    #[test]
    fn test_snake_input_to_each_convention() {
        assert_eq!(NamingConvention::CamelCase.apply("shadow_md"), "shadowMd");
        assert_eq!(NamingConvention::KebabCase.apply("shadow_md"), "shadow-md");
        assert_eq!(NamingConvention::SnakeCase.apply("shadow_md"), "shadow_md");
    }

    #[test]
    fn test_single_word_keys_unchanged() {
        for convention in [
            NamingConvention::CamelCase,
            NamingConvention::KebabCase,
            NamingConvention::SnakeCase,
        ] {
            assert_eq!(convention.apply("md"), "md");
            assert_eq!(convention.apply("full"), "full");
        }
    }

    #[test]
    fn test_idempotence() {
        let keys = [
            "spacing-1",
            "alreadyCamel",
            "already_snake",
            "already-kebab",
            "neutral-1000",
            "shadow-xl",
            "h1",
        ];
        for convention in [
            NamingConvention::CamelCase,
            NamingConvention::KebabCase,
            NamingConvention::SnakeCase,
        ] {
            for key in keys {
                let once = convention.apply(key);
                assert_eq!(convention.apply(&once), once, "{convention:?} on {key:?}");
            }
        }
    }
}
