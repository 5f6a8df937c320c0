use crate::commands::{CmdMessage, CmdResult, ListEntry};
use crate::error::{ResubError, Result};
use crate::idgen::IdSource;
use crate::model::Settings;
use regex::Regex;

use super::helpers::resolve_pattern;

pub fn add(settings: &mut Settings, text: String, ids: &mut dyn IdSource) -> Result<CmdResult> {
    if text.is_empty() {
        return Err(ResubError::Api("Pattern text cannot be empty".into()));
    }

    let mut result = CmdResult::default();
    // Stored regardless; an unparsable pattern simply never fires.
    if Regex::new(&text).is_err() {
        result.add_message(CmdMessage::warning(format!(
            "Pattern does not parse as a regex and will be skipped at compile time: {}",
            text
        )));
    }

    settings.add_pattern(text.clone(), ids);
    result.add_message(CmdMessage::success(format!(
        "Pattern added (p{}): {}",
        settings.patterns.len(),
        text
    )));
    Ok(result)
}

pub fn remove(settings: &mut Settings, selector: &str) -> Result<CmdResult> {
    let id = resolve_pattern(settings, selector)?;
    let links_before = settings.links.len();
    let pattern = settings
        .remove_pattern(&id)
        .ok_or_else(|| ResubError::PatternNotFound(selector.to_string()))?;
    let cascaded = links_before - settings.links.len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Pattern removed: {}",
        pattern.text
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
        .patterns
        .iter()
        .enumerate()
        .map(|(i, p)| ListEntry {
            index: format!("p{}", i + 1),
            text: p.text.clone(),
            detail: String::new(),
        })
        .collect();
    Ok(CmdResult::default().with_listing(listing))
}
