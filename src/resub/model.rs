use serde::{Deserialize, Serialize};

use crate::idgen::IdSource;

/// Current on-disk format generation. Stamped by migration.
pub const FORMAT_VERSION: u32 = 300;

/// A reusable regular-expression fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// A reusable replacement-template fragment with back-reference
/// placeholders (`$&`, `$1`..).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// An edge joining one pattern to one replacer. Links are the unit of
/// rule authorship: enablement and annotation live here, patterns and
/// replacers stay bare so they can be reused N x N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub pattern_id: String,
    #[serde(default)]
    pub replacer_id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub comment: String,
}

fn default_enabled() -> bool {
    true
}

fn default_active() -> bool {
    true
}

/// The persisted settings blob: three ordered entity collections plus
/// the global flags. Link order is rule precedence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    #[serde(default)]
    pub replacers: Vec<Replacer>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub format_version: u32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub debug_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            replacers: Vec::new(),
            links: Vec::new(),
            format_version: FORMAT_VERSION,
            active: true,
            debug_mode: false,
        }
    }
}

impl Settings {
    pub fn pattern(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn replacer(&self, id: &str) -> Option<&Replacer> {
        self.replacers.iter().find(|r| r.id == id)
    }

    pub fn link_mut(&mut self, id: &str) -> Option<&mut Link> {
        self.links.iter_mut().find(|l| l.id == id)
    }

    /// Append a new pattern and return its id.
    pub fn add_pattern(&mut self, text: impl Into<String>, ids: &mut dyn IdSource) -> String {
        let id = ids.next_id();
        self.patterns.push(Pattern {
            id: id.clone(),
            text: text.into(),
        });
        id
    }

    /// Append a new replacer and return its id.
    pub fn add_replacer(&mut self, text: impl Into<String>, ids: &mut dyn IdSource) -> String {
        let id = ids.next_id();
        self.replacers.push(Replacer {
            id: id.clone(),
            text: text.into(),
        });
        id
    }

    /// Join a pattern to a replacer. At most one link may exist per
    /// ordered (pattern, replacer) pair: a duplicate is a no-op and
    /// returns `None`. New links are enabled with an empty comment.
    pub fn add_link(
        &mut self,
        pattern_id: &str,
        replacer_id: &str,
        ids: &mut dyn IdSource,
    ) -> Option<String> {
        let duplicate = self
            .links
            .iter()
            .any(|l| l.pattern_id == pattern_id && l.replacer_id == replacer_id);
        if duplicate {
            return None;
        }
        let id = ids.next_id();
        self.links.push(Link {
            id: id.clone(),
            pattern_id: pattern_id.to_string(),
            replacer_id: replacer_id.to_string(),
            enabled: true,
            comment: String::new(),
        });
        Some(id)
    }

    /// Remove a pattern, cascading to every link that references it.
    pub fn remove_pattern(&mut self, id: &str) -> Option<Pattern> {
        let pos = self.patterns.iter().position(|p| p.id == id)?;
        let pattern = self.patterns.remove(pos);
        self.links.retain(|l| l.pattern_id != id);
        Some(pattern)
    }

    /// Remove a replacer, cascading to every link that references it.
    pub fn remove_replacer(&mut self, id: &str) -> Option<Replacer> {
        let pos = self.replacers.iter().position(|r| r.id == id)?;
        let replacer = self.replacers.remove(pos);
        self.links.retain(|l| l.replacer_id != id);
        Some(replacer)
    }

    pub fn remove_link(&mut self, id: &str) -> Option<Link> {
        let pos = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(pos))
    }

    /// Drop links whose endpoints no longer resolve. Returns how many
    /// were removed. Dangling links are never executed; this makes the
    /// cleanup visible on the next save.
    pub fn prune_dangling_links(&mut self) -> usize {
        let before = self.links.len();
        let patterns: Vec<&str> = self.patterns.iter().map(|p| p.id.as_str()).collect();
        let replacers: Vec<&str> = self.replacers.iter().map(|r| r.id.as_str()).collect();
        self.links.retain(|l| {
            patterns.contains(&l.pattern_id.as_str())
                && replacers.contains(&l.replacer_id.as_str())
        });
        before - self.links.len()
    }
}
