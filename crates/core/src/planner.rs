use crate::error::RenameError;
use crate::pattern::Matcher;
use crate::template::OutputTemplate;
use crate::transform::transform;
use serde::Serialize;
use std::path::{is_separator, Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub directory: String,
    pub old_name: String,
    pub new_name: String,
}

impl PathEntry {
    pub fn old_path(&self) -> PathBuf {
        join_in_directory(&self.directory, &self.old_name)
    }

    /// Always inside `directory`, even when the new name starts with a
    /// separator.
    pub fn new_path(&self) -> PathBuf {
        join_in_directory(&self.directory, &self.new_name)
    }

    pub fn changed(&self) -> bool {
        self.old_name != self.new_name
    }
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub planned: usize,
    pub unchanged: usize,
}

/// Entries in the same order as the input paths.
#[derive(Debug, Clone, Serialize)]
pub struct RenamePlan {
    pub pattern: String,
    pub template: OutputTemplate,
    pub entries: Vec<PathEntry>,
    pub stats: RenameStats,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn generate_plan<S: AsRef<str>>(
    paths: &[S],
    matcher: &Matcher,
    template: &OutputTemplate,
    separator: char,
) -> Result<RenamePlan, RenameError> {
    let mut stats = RenameStats::default();
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        debug!("{}", path);
        let (directory, old_name) = split_path(path);
        let new_name = transform(old_name, matcher, template, separator);

        let entry = PathEntry {
            directory: directory.to_string(),
            old_name: old_name.to_string(),
            new_name,
        };
        if !entry.changed() {
            stats.unchanged += 1;
        }
        stats.planned += 1;
        entries.push(entry);
    }

    if entries.len() != paths.len() {
        return Err(RenameError::ArityMismatch {
            inputs: paths.len(),
            entries: entries.len(),
        });
    }

    Ok(RenamePlan {
        pattern: matcher.as_str().to_string(),
        template: template.clone(),
        entries,
        stats,
    })
}

fn join_in_directory(directory: &str, name: &str) -> PathBuf {
    let name = name.trim_start_matches(is_separator);
    if directory.is_empty() {
        return PathBuf::from(name);
    }
    Path::new(directory).join(name)
}

/// Splits after the last path separator. The directory keeps its trailing
/// separator and is empty for a bare file name.
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rfind(is_separator) {
        Some(index) => path.split_at(index + 1),
        None => ("", path),
    }
}
