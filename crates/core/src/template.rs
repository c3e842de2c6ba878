use serde::Serialize;
use std::fmt;

pub const DEFAULT_TEMPLATE: &str = "${1}";

/// Output name template with `${i}` group references.
///
/// Users escape the braces (`$\{1\}`) so the shell leaves them alone. Every
/// backslash is removed when the template is built, so the escapes are gone
/// before the first name is rendered. Literal backslashes cannot survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputTemplate(String);

impl OutputTemplate {
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.replace('\\', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

impl fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
