//! Missing value handling for numeric fields

use serde::{Serialize, Deserialize};

/// Which cell texts count as a missing reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NullConfig {
    /// Patterns to treat as missing
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        // Only a truly empty cell is missing; "NaN" and " " are not.
        Self {
            patterns: vec![String::new()],
            trim_whitespace: false,
            case_sensitive: true,
        }
    }
}

impl NullConfig {
    /// Check if a value should be treated as missing
    pub fn is_null(&self, value: &str) -> bool {
        let test_value = if self.trim_whitespace {
            value.trim()
        } else {
            value
        };

        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                test_value == pattern
            } else {
                test_value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Add a missing-value pattern
    pub fn add_pattern(&mut self, pattern: String) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only_matches_empty() {
        let config = NullConfig::default();
        assert!(config.is_null(""));
        assert!(!config.is_null(" "));
        assert!(!config.is_null("N/A"));
    }

    #[test]
    fn test_extra_patterns() {
        let mut config = NullConfig::default();
        config.add_pattern("n/a".to_string());
        config.add_pattern("n/a".to_string());
        config.case_sensitive = false;
        config.trim_whitespace = true;

        assert_eq!(config.patterns.len(), 2);
        assert!(config.is_null(" N/A "));
        assert!(config.is_null("   "));
    }
}
