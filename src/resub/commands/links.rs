use crate::commands::{CmdMessage, CmdResult, ListEntry};
use crate::error::{ResubError, Result};
use crate::idgen::IdSource;
use crate::model::Settings;

use super::helpers::{resolve_link, resolve_pattern, resolve_replacer};

pub fn add(
    settings: &mut Settings,
    pattern_selector: &str,
    replacer_selector: &str,
    ids: &mut dyn IdSource,
) -> Result<CmdResult> {
    let pattern_id = resolve_pattern(settings, pattern_selector)?;
    let replacer_id = resolve_replacer(settings, replacer_selector)?;

    let mut result = CmdResult::default();
    match settings.add_link(&pattern_id, &replacer_id, ids) {
        Some(_) => result.add_message(CmdMessage::success(format!(
            "Linked {} -> {} (l{})",
            pattern_selector,
            replacer_selector,
            settings.links.len()
        ))),
        None => result.add_message(CmdMessage::info(format!(
            "Link {} -> {} already exists",
            pattern_selector, replacer_selector
        ))),
    }
    Ok(result)
}

pub fn remove(settings: &mut Settings, selector: &str) -> Result<CmdResult> {
    let id = resolve_link(settings, selector)?;
    settings
        .remove_link(&id)
        .ok_or_else(|| ResubError::LinkNotFound(selector.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Link removed: {}", selector)));
    Ok(result)
}

pub fn set_enabled(settings: &mut Settings, selector: &str, enabled: bool) -> Result<CmdResult> {
    let id = resolve_link(settings, selector)?;
    let link = settings
        .link_mut(&id)
        .ok_or_else(|| ResubError::LinkNotFound(selector.to_string()))?;
    link.enabled = enabled;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Link {} {}",
        selector,
        if enabled { "enabled" } else { "disabled" }
    )));
    Ok(result)
}

pub fn set_comment(settings: &mut Settings, selector: &str, comment: String) -> Result<CmdResult> {
    let id = resolve_link(settings, selector)?;
    let link = settings
        .link_mut(&id)
        .ok_or_else(|| ResubError::LinkNotFound(selector.to_string()))?;
    link.comment = comment;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Link {} annotated", selector)));
    Ok(result)
}

pub fn list(settings: &Settings) -> Result<CmdResult> {
    let listing = settings
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let pattern = settings
                .pattern(&link.pattern_id)
                .map(|p| p.text.as_str())
                .unwrap_or("<dangling>");
            let replacer = settings
                .replacer(&link.replacer_id)
                .map(|r| r.text.as_str())
                .unwrap_or("<dangling>");
            let mut detail = if link.enabled {
                String::from("on")
            } else {
                String::from("off")
            };
            if !link.comment.is_empty() {
                detail.push_str(&format!(", {}", link.comment));
            }
            ListEntry {
                index: format!("l{}", i + 1),
                text: format!("{} -> {}", pattern, replacer),
                detail,
            }
        })
        .collect();
    Ok(CmdResult::default().with_listing(listing))
}
