use crate::pattern::Matcher;
use crate::template::OutputTemplate;

pub const DEFAULT_SEPARATOR: char = ' ';

/// Computes the new base name for `old_name`: pattern substitution first,
/// then every space replaced with `separator`.
pub fn transform(
    old_name: &str,
    matcher: &Matcher,
    template: &OutputTemplate,
    separator: char,
) -> String {
    let substituted = matcher.substitute(old_name, template.as_str());
    normalize_whitespace(substituted, separator)
}

fn normalize_whitespace(name: String, separator: char) -> String {
    if separator == ' ' {
        return name;
    }
    name.chars()
        .map(|ch| if ch == ' ' { separator } else { ch })
        .collect()
}
