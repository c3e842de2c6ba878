mod apply;
mod config;
mod confirm;
mod console;
mod error;
mod inspect;
mod pattern;
mod pipeline;
mod planner;
mod preview;
mod template;
mod transform;

pub use apply::{apply_plan, ApplyResult, EntryResult, FsRenamer, RenameOutcome, Renamer};
pub use config::{
    app_paths, load_config, load_config_from, AppConfig, AppPaths, RenameConfig, DEFAULT_PATTERN,
};
pub use confirm::{confirm, confirm_with_limit, GateState, MAX_ATTEMPTS};
pub use console::Console;
pub use error::RenameError;
pub use inspect::{inspect, InspectOutcome, InspectReport};
pub use pattern::Matcher;
pub use pipeline::{run, RunOutcome};
pub use planner::{generate_plan, split_path, PathEntry, RenamePlan, RenameStats};
pub use preview::{render_preview, render_stats, render_table, PreviewFormat};
pub use template::{OutputTemplate, DEFAULT_TEMPLATE};
pub use transform::{transform, DEFAULT_SEPARATOR};
