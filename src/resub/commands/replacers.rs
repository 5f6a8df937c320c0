use crate::commands::{CmdMessage, CmdResult, ListEntry};
use crate::error::{ResubError, Result};
use crate::idgen::IdSource;
use crate::model::Settings;

use super::helpers::resolve_replacer;

pub fn add(settings: &mut Settings, text: String, ids: &mut dyn IdSource) -> Result<CmdResult> {
    // Empty replacer text is legal: it deletes what the pattern matches.
    settings.add_replacer(text.clone(), ids);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Replacer added (r{}): {}",
        settings.replacers.len(),
        text
    )));
    Ok(result)
}

pub fn remove(settings: &mut Settings, selector: &str) -> Result<CmdResult> {
    let id = resolve_replacer(settings, selector)?;
    let links_before = settings.links.len();
    let replacer = settings
        .remove_replacer(&id)
        .ok_or_else(|| ResubError::ReplacerNotFound(selector.to_string()))?;
    let cascaded = links_before - settings.links.len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Replacer removed: {}",
        replacer.text
    )));
    if cascaded > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} link(s) referencing it were removed",
            cascaded
        )));
    }
    Ok(result)
}

pub fn list(settings: &Settings) -> Result<CmdResult> {
    let listing = settings
        .replacers
        .iter()
        .enumerate()
        .map(|(i, r)| ListEntry {
            index: format!("r{}", i + 1),
            text: r.text.clone(),
            detail: String::new(),
        })
        .collect();
    Ok(CmdResult::default().with_listing(listing))
}
