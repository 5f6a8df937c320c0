use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Settings;
use regex::Regex;

/// Verify and fix consistency issues: prune links whose endpoints no
/// longer resolve and report patterns that do not parse as regexes.
/// Broken patterns are reported, not removed; they may be mid-edit.
pub fn run(settings: &mut Settings) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let pruned = settings.prune_dangling_links();
    if pruned > 0 {
        result.add_message(CmdMessage::success(format!(
            "Pruned {} dangling link(s)",
            pruned
        )));
    }

    for (i, pattern) in settings.patterns.iter().enumerate() {
        if let Err(err) = Regex::new(&pattern.text) {
            result.add_message(CmdMessage::warning(format!(
                "Pattern p{} does not parse and never fires: {}",
                i + 1,
                err
            )));
        }
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::info("Everything checks out."));
    }
    Ok(result)
}
