use crate::error::RenameError;
use crate::planner::RenamePlan;
use serde::{Deserialize, Serialize};

const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    #[default]
    Table,
    Json,
}

pub fn render_preview(plan: &RenamePlan, format: PreviewFormat) -> Result<String, RenameError> {
    match format {
        PreviewFormat::Table => Ok(render_table(plan)),
        PreviewFormat::Json => Ok(serde_json::to_string_pretty(plan)? + "\n"),
    }
}

/// Two aligned columns, "Old" and "New", one row per entry.
pub fn render_table(plan: &RenamePlan) -> String {
    let width = plan
        .entries
        .iter()
        .map(|entry| entry.old_name.chars().count())
        .chain(std::iter::once("Old".len()))
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    let mut out = String::new();
    push_row(&mut out, "Old", "New", width);
    for entry in &plan.entries {
        push_row(&mut out, &entry.old_name, &entry.new_name, width);
    }
    out
}

fn push_row(out: &mut String, old: &str, new: &str, width: usize) {
    let pad = width.saturating_sub(old.chars().count());
    out.push_str(&format!("{old}{:pad$}{new}\n", ""));
}

pub fn render_stats(plan: &RenamePlan) -> String {
    format!(
        "planned={} unchanged={}\n",
        plan.stats.planned, plan.stats.unchanged
    )
}
