use crate::pattern::Matcher;
use crate::planner::split_path;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectOutcome {
    InvalidPattern(String),
    NoMatch,
    Groups(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub pattern: String,
    pub filename: String,
    pub outcome: InspectOutcome,
}

impl InspectReport {
    /// Group texts with their 1-based index.
    pub fn groups(&self) -> impl Iterator<Item = (usize, &str)> {
        let groups: &[String] = match &self.outcome {
            InspectOutcome::Groups(groups) => groups.as_slice(),
            _ => &[],
        };
        groups.iter().enumerate().map(|(i, g)| (i + 1, g.as_str()))
    }

    /// Lines for the output sink. Failures are left to `problem`.
    pub fn summary(&self) -> String {
        let mut out = format!("Pattern:  {}\nFilename: {}\n", self.pattern, self.filename);
        if let InspectOutcome::Groups(_) = self.outcome {
            out.push_str("Groups: \n");
            for (index, text) in self.groups() {
                out.push_str(&format!("${{{index}}}: {text}\n"));
            }
        }
        out
    }

    pub fn problem(&self) -> Option<String> {
        match &self.outcome {
            InspectOutcome::InvalidPattern(message) => Some(message.clone()),
            InspectOutcome::NoMatch => Some("No match found.".to_string()),
            InspectOutcome::Groups(_) => None,
        }
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())?;
        if let Some(problem) = self.problem() {
            writeln!(f, "{problem}")?;
        }
        Ok(())
    }
}

/// Tries `pattern` against the base name of `sample` without touching the
/// filesystem.
pub fn inspect(pattern: &str, sample: &str) -> InspectReport {
    let (_, filename) = split_path(sample);
    let outcome = match Matcher::compile(pattern) {
        Err(err) => InspectOutcome::InvalidPattern(err.to_string()),
        Ok(matcher) => match matcher.capture_groups(filename) {
            None => InspectOutcome::NoMatch,
            Some(groups) => InspectOutcome::Groups(groups),
        },
    };
    InspectReport {
        pattern: pattern.to_string(),
        filename: filename.to_string(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_reports_numbered_groups() {
        let report = inspect(r"(\d+)-(\w+)", "reports/42-report.pdf");
        assert_eq!(report.filename, "42-report.pdf");
        let groups: Vec<_> = report.groups().collect();
        assert_eq!(groups, vec![(1, "42"), (2, "report")]);
        assert!(report.problem().is_none());
        assert_eq!(
            report.summary(),
            "Pattern:  (\\d+)-(\\w+)\nFilename: 42-report.pdf\nGroups: \n${1}: 42\n${2}: report\n"
        );
    }

    #[test]
    fn inspect_no_match() {
        let report = inspect(r"^(\d+)", "report.pdf");
        assert_eq!(report.outcome, InspectOutcome::NoMatch);
        assert_eq!(report.problem().as_deref(), Some("No match found."));
        assert!(!report.summary().contains("Groups"));
    }

    #[test]
    fn inspect_invalid_pattern_is_reported_not_raised() {
        let report = inspect("([a-", "file.txt");
        assert!(matches!(report.outcome, InspectOutcome::InvalidPattern(_)));
        assert!(report.groups().next().is_none());
        assert!(report.to_string().contains("invalid pattern"));
    }

    #[test]
    fn inspect_match_without_groups() {
        let report = inspect("report", "report.pdf");
        assert_eq!(report.outcome, InspectOutcome::Groups(Vec::new()));
        assert!(report.summary().ends_with("Groups: \n"));
    }
}
