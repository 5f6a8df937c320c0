use crate::commands::{CmdMessage, CmdResult};
use crate::compile::CompiledRule;
use crate::error::Result;
use crate::model::Settings;
use crate::transform;

/// Run the compiled rules over one input. Pure: the settings are only
/// read for the debug flag and the link count.
pub fn run(settings: &Settings, rules: &[CompiledRule], input: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if settings.debug_mode {
        result.add_message(CmdMessage::info(format!(
            "{} of {} link(s) compiled",
            rules.len(),
            settings.links.len()
        )));
        for rule in rules {
            result.add_message(CmdMessage::info(format!(
                "rule: {} -> {}",
                rule.pattern.as_str(),
                rule.template
            )));
        }
    }

    let output = transform::transform(rules, input);
    Ok(result.with_output(output))
}
