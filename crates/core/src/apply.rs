use crate::planner::{PathEntry, RenamePlan};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error};

/// Filesystem rename primitive. Each call may fail on its own.
pub trait Renamer {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum RenameOutcome {
    Success,
    Failure(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryResult {
    pub entry: PathEntry,
    pub outcome: RenameOutcome,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ApplyResult {
    pub results: Vec<EntryResult>,
}

impl ApplyResult {
    pub fn applied(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == RenameOutcome::Success)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.applied()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathEntry, &str)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            RenameOutcome::Failure(reason) => Some((&r.entry, reason.as_str())),
            RenameOutcome::Success => None,
        })
    }
}

/// Renames every entry in plan order. A failed entry is recorded and the
/// rest are still attempted; nothing already renamed is rolled back.
pub fn apply_plan(plan: &RenamePlan, renamer: &dyn Renamer) -> ApplyResult {
    let mut results = Vec::with_capacity(plan.len());
    for entry in &plan.entries {
        let old_path = entry.old_path();
        let new_path = entry.new_path();
        debug!("Renaming {} => {}", old_path.display(), new_path.display());

        let outcome = match renamer.rename(&old_path, &new_path) {
            Ok(()) => RenameOutcome::Success,
            Err(err) => {
                error!(
                    "rename failed: {} -> {}: {}",
                    old_path.display(),
                    new_path.display(),
                    err
                );
                RenameOutcome::Failure(format!(
                    "rename {} {}: {}",
                    old_path.display(),
                    new_path.display(),
                    err
                ))
            }
        };
        results.push(EntryResult {
            entry: entry.clone(),
            outcome,
        });
    }
    ApplyResult { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Matcher;
    use crate::planner::generate_plan;
    use crate::template::OutputTemplate;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    struct FailingOn {
        fail_from: PathBuf,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl Renamer for FailingOn {
        fn rename(&self, from: &Path, _to: &Path) -> io::Result<()> {
            self.calls.borrow_mut().push(from.to_path_buf());
            if from == self.fail_from {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            Ok(())
        }
    }

    fn upper_plan(paths: &[String]) -> RenamePlan {
        let matcher = Matcher::compile(r"(\w+)\.txt").expect("must compile");
        generate_plan(paths, &matcher, &OutputTemplate::from_raw("${1}.md"), ' ')
            .expect("must plan")
    }

    #[test]
    fn apply_plan_isolates_middle_failure() {
        let paths: Vec<String> = ["one.txt", "two.txt", "three.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let plan = upper_plan(&paths);
        let renamer = FailingOn {
            fail_from: PathBuf::from("two.txt"),
            calls: RefCell::new(Vec::new()),
        };

        let result = apply_plan(&plan, &renamer);

        let outcomes: Vec<_> = result.results.iter().map(|r| &r.outcome).collect();
        assert_eq!(outcomes[0], &RenameOutcome::Success);
        assert!(matches!(outcomes[1], RenameOutcome::Failure(reason) if reason.contains("permission denied")));
        assert_eq!(outcomes[2], &RenameOutcome::Success);
        assert_eq!(
            renamer.calls.into_inner(),
            vec![
                PathBuf::from("one.txt"),
                PathBuf::from("two.txt"),
                PathBuf::from("three.txt")
            ]
        );
        assert_eq!(result.applied(), 2);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.failures().next().map(|(e, _)| e.old_name.as_str()), Some("two.txt"));
    }

    #[test]
    fn apply_plan_renames_files_on_disk() {
        let temp = tempdir().expect("tempdir");
        let a = temp.path().join("alpha.txt");
        let c = temp.path().join("gamma.txt");
        fs::write(&a, b"a").expect("write a");
        fs::write(&c, b"c").expect("write c");

        let paths: Vec<String> = ["alpha.txt", "missing.txt", "gamma.txt"]
            .iter()
            .map(|name| format!("{}/{}", temp.path().display(), name))
            .collect();
        let plan = upper_plan(&paths);

        let result = apply_plan(&plan, &FsRenamer);

        assert_eq!(result.applied(), 2);
        assert_eq!(result.failed(), 1);
        assert!(matches!(result.results[1].outcome, RenameOutcome::Failure(_)));
        assert!(!a.exists());
        assert!(!c.exists());
        assert_eq!(
            fs::read(temp.path().join("alpha.md")).expect("read renamed"),
            b"a"
        );
        assert!(temp.path().join("gamma.md").exists());
    }

    #[test]
    fn apply_plan_keeps_earlier_renames_after_failure() {
        let temp = tempdir().expect("tempdir");
        let first = temp.path().join("first.txt");
        fs::write(&first, b"1").expect("write first");
        let blocked = temp.path().join("blocked.txt");
        fs::write(&blocked, b"2").expect("write blocked");
        let target_dir = temp.path().join("blocked.md");
        fs::create_dir_all(&target_dir).expect("create dir");
        fs::write(target_dir.join("keep"), b"x").expect("write keep");

        let paths = vec![
            first.display().to_string(),
            blocked.display().to_string(),
        ];
        let result = apply_plan(&upper_plan(&paths), &FsRenamer);

        assert_eq!(result.results[0].outcome, RenameOutcome::Success);
        assert!(matches!(result.results[1].outcome, RenameOutcome::Failure(_)));
        assert!(temp.path().join("first.md").exists());
        assert!(blocked.exists());
    }
}
