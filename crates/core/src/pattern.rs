use crate::error::RenameError;
use regex::Regex;
use std::fmt;

/// Pattern matched against a file's base name.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    pub fn compile(pattern: &str) -> Result<Self, RenameError> {
        let regex = Regex::new(pattern).map_err(|source| RenameError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Replaces the first match in `input` with `template`, expanding `${i}`
    /// group references. Input without a match comes back unchanged.
    pub fn substitute(&self, input: &str, template: &str) -> String {
        self.regex.replacen(input, 1, template).into_owned()
    }

    /// Captured text for groups 1..N of the first match, or `None` when the
    /// pattern does not match. Groups that did not participate are empty.
    pub fn capture_groups(&self, input: &str) -> Option<Vec<String>> {
        let captures = self.regex.captures(input)?;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
