//! # API Facade
//!
//! `ResubApi` is the single entry point for every operation, regardless
//! of the UI driving it. It owns the session: on construction it loads
//! the last-saved blob from the store, migrates it to the current shape
//! and seeds default links for a never-linked configuration; afterwards
//! every structural edit invalidates the compiled rule list and
//! persists the settings before returning.
//!
//! Generic over [`SettingsStore`] so the same facade runs against the
//! file store in production and the in-memory store in tests. No I/O
//! other than through the store, no stdout/stderr, no exit codes.

use crate::commands::{self, CmdResult};
use crate::compile::{self, CompiledRule};
use crate::error::Result;
use crate::idgen::IdSource;
use crate::migrate;
use crate::model::Settings;
use crate::store::SettingsStore;

pub struct ResubApi<S: SettingsStore> {
    store: S,
    ids: Box<dyn IdSource>,
    settings: Settings,
    rules: Option<Vec<CompiledRule>>,
}

impl<S: SettingsStore> ResubApi<S> {
    /// Load, migrate and seed. The blob coming out of the store may be
    /// of any known generation; what this session holds is always
    /// current-shaped.
    pub fn open(store: S, mut ids: Box<dyn IdSource>) -> Result<Self> {
        let mut settings = match store.load_raw()? {
            Some(blob) => migrate::migrate(&blob, ids.as_mut()),
            None => Settings::default(),
        };
        migrate::ensure_default_links(&mut settings, ids.as_mut());
        Ok(Self {
            store,
            ids,
            settings,
            rules: None,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn add_pattern(&mut self, text: String) -> Result<CmdResult> {
        let result = commands::patterns::add(&mut self.settings, text, self.ids.as_mut())?;
        self.edited()?;
        Ok(result)
    }

    pub fn remove_pattern(&mut self, selector: &str) -> Result<CmdResult> {
        let result = commands::patterns::remove(&mut self.settings, selector)?;
        self.edited()?;
        Ok(result)
    }

    pub fn add_replacer(&mut self, text: String) -> Result<CmdResult> {
        let result = commands::replacers::add(&mut self.settings, text, self.ids.as_mut())?;
        self.edited()?;
        Ok(result)
    }

    pub fn remove_replacer(&mut self, selector: &str) -> Result<CmdResult> {
        let result = commands::replacers::remove(&mut self.settings, selector)?;
        self.edited()?;
        Ok(result)
    }

    pub fn link(&mut self, pattern: &str, replacer: &str) -> Result<CmdResult> {
        let result = commands::links::add(&mut self.settings, pattern, replacer, self.ids.as_mut())?;
        self.edited()?;
        Ok(result)
    }

    pub fn unlink(&mut self, selector: &str) -> Result<CmdResult> {
        let result = commands::links::remove(&mut self.settings, selector)?;
        self.edited()?;
        Ok(result)
    }

    pub fn set_link_enabled(&mut self, selector: &str, enabled: bool) -> Result<CmdResult> {
        let result = commands::links::set_enabled(&mut self.settings, selector, enabled)?;
        self.edited()?;
        Ok(result)
    }

    pub fn set_link_comment(&mut self, selector: &str, comment: String) -> Result<CmdResult> {
        let result = commands::links::set_comment(&mut self.settings, selector, comment)?;
        self.edited()?;
        Ok(result)
    }

    pub fn set_active(&mut self, active: bool) -> Result<CmdResult> {
        let result = commands::set_active(&mut self.settings, active)?;
        self.edited()?;
        Ok(result)
    }

    pub fn list_patterns(&self) -> Result<CmdResult> {
        commands::patterns::list(&self.settings)
    }

    pub fn list_replacers(&self) -> Result<CmdResult> {
        commands::replacers::list(&self.settings)
    }

    pub fn list_links(&self) -> Result<CmdResult> {
        commands::links::list(&self.settings)
    }

    pub fn doctor(&mut self) -> Result<CmdResult> {
        let result = commands::doctor::run(&mut self.settings)?;
        self.edited()?;
        Ok(result)
    }

    /// Transform one input through the current rules. When the global
    /// active flag is off the text passes through untouched and the
    /// rules are not consulted at all.
    pub fn apply(&mut self, input: &str) -> Result<CmdResult> {
        if !self.settings.active {
            return Ok(CmdResult::default().with_output(input.to_string()));
        }
        let settings = &self.settings;
        let rules = self
            .rules
            .get_or_insert_with(|| compile::compile(settings));
        commands::apply::run(settings, rules, input)
    }

    /// Every structural edit lands here: drop the compiled rules and
    /// persist before handing control back.
    fn edited(&mut self) -> Result<()> {
        self.rules = None;
        self.store.save(&self.settings)
    }
}
