use crate::error::{ResubError, Result};
use crate::model::Settings;

/// Resolve a display index (`p1` or bare `1`) to a pattern id.
pub fn resolve_pattern(settings: &Settings, selector: &str) -> Result<String> {
    parse_index(selector, 'p')
        .and_then(|n| settings.patterns.get(n - 1))
        .map(|p| p.id.clone())
        .ok_or_else(|| ResubError::PatternNotFound(selector.to_string()))
}

/// Resolve a display index (`r1` or bare `1`) to a replacer id.
pub fn resolve_replacer(settings: &Settings, selector: &str) -> Result<String> {
    parse_index(selector, 'r')
        .and_then(|n| settings.replacers.get(n - 1))
        .map(|r| r.id.clone())
        .ok_or_else(|| ResubError::ReplacerNotFound(selector.to_string()))
}

/// Resolve a display index (`l1` or bare `1`) to a link id.
pub fn resolve_link(settings: &Settings, selector: &str) -> Result<String> {
    parse_index(selector, 'l')
        .and_then(|n| settings.links.get(n - 1))
        .map(|l| l.id.clone())
        .ok_or_else(|| ResubError::LinkNotFound(selector.to_string()))
}

fn parse_index(selector: &str, prefix: char) -> Option<usize> {
    let digits = selector.strip_prefix(prefix).unwrap_or(selector);
    digits.parse::<usize>().ok().filter(|n| *n >= 1)
}
