use regex::Regex;

use crate::model::Settings;

/// The executable form of an enabled, resolvable, well-formed link.
/// Rebuilt from the settings after every structural edit; never
/// persisted.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub pattern: Regex,
    pub template: String,
}

/// Compile the enabled links into an ordered rule list.
///
/// Total: a disabled link, a dangling reference or a pattern that fails
/// to parse is skipped and the remaining links still compile. Output
/// order follows link order and is the precedence order used by
/// [`crate::transform::transform`].
pub fn compile(settings: &Settings) -> Vec<CompiledRule> {
    let mut rules = Vec::new();
    for link in &settings.links {
        if !link.enabled {
            continue;
        }
        let (Some(pattern), Some(replacer)) = (
            settings.pattern(&link.pattern_id),
            settings.replacer(&link.replacer_id),
        ) else {
            continue;
        };
        let Ok(regex) = Regex::new(&pattern.text) else {
            continue;
        };
        rules.push(CompiledRule {
            pattern: regex,
            template: replacer.text.clone(),
        });
    }
    rules
}
