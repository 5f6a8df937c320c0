use crate::error::Result;
use crate::model::Settings;

pub mod apply;
pub mod doctor;
pub mod helpers;
pub mod links;
pub mod patterns;
pub mod replacers;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of a listing, addressed by display index (p1, r2, l3).
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub index: String,
    pub text: String,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<String>,
    pub listing: Vec<ListEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_listing(mut self, listing: Vec<ListEntry>) -> Self {
        self.listing = listing;
        self
    }
}

/// Set the global active flag.
pub fn set_active(settings: &mut Settings, active: bool) -> Result<CmdResult> {
    settings.active = active;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if active {
        "resub is on"
    } else {
        "resub is off"
    }));
    Ok(result)
}
