//! # Migration Engine
//!
//! Settings files have gone through three incompatible generations:
//!
//! 1. **Gen1**: parallel `patterns`/`replacers` string arrays, paired by
//!    index.
//! 2. **Gen2**: Gen1 plus parallel `enabled`/`comments` arrays.
//! 3. **Current**: patterns and replacers are id+text records joined by
//!    an explicit `links` collection (see [`crate::model`]).
//!
//! [`migrate`] rewrites a raw blob of any generation into the current
//! shape. It is immutable-in/immutable-out, total and idempotent:
//! malformed fields degrade to the [`defaults`] table, never to an
//! error, and running it on an already-current blob changes nothing.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::idgen::IdSource;
use crate::model::{Link, Pattern, Replacer, Settings, FORMAT_VERSION};

/// The three known on-disk generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobShape {
    /// Parallel pattern/replacer string arrays only.
    Gen1,
    /// Gen1 plus parallel enabled/comments arrays.
    Gen2,
    /// Bipartite id graph of patterns, replacers and links.
    Current,
}

/// Substitutes for missing or malformed fields, kept in one place so the
/// best-effort recovery behavior stays auditable.
mod defaults {
    pub const ENABLED: bool = true;
    pub const COMMENT: &str = "";
    pub const TEXT: &str = "";
    pub const ACTIVE: bool = true;
    pub const DEBUG_MODE: bool = false;
}

/// Classify a raw blob. A blob is current when its patterns collection
/// is non-empty, its first element is an id+text record, and a links
/// collection is present; anything else is one of the legacy shapes.
pub fn classify(blob: &Value) -> BlobShape {
    let first_is_record = blob
        .get("patterns")
        .and_then(Value::as_array)
        .and_then(|p| p.first())
        .map(|v| v.get("id").is_some() && v.get("text").is_some())
        .unwrap_or(false);
    if first_is_record && blob.get("links").is_some() {
        return BlobShape::Current;
    }
    let has_flags = blob.get("enabled").is_some_and(Value::is_array)
        || blob.get("comments").is_some_and(Value::is_array);
    if has_flags {
        BlobShape::Gen2
    } else {
        BlobShape::Gen1
    }
}

/// Rewrite a persisted blob of any known generation into the current
/// shape, assigning fresh ids where needed.
pub fn migrate(blob: &Value, ids: &mut dyn IdSource) -> Settings {
    let mut settings = match classify(blob) {
        BlobShape::Current => migrate_current(blob, ids),
        BlobShape::Gen1 | BlobShape::Gen2 => migrate_legacy(blob, ids),
    };
    settings.format_version = FORMAT_VERSION;
    settings
}

/// Seed one index-aligned default link per pattern/replacer pair when no
/// links exist yet (a freshly written, never-linked configuration).
/// Idempotent: does nothing once any link is present.
pub fn ensure_default_links(settings: &mut Settings, ids: &mut dyn IdSource) {
    if !settings.links.is_empty() {
        return;
    }
    let n = settings.patterns.len().min(settings.replacers.len());
    for i in 0..n {
        let link = Link {
            id: ids.next_id(),
            pattern_id: settings.patterns[i].id.clone(),
            replacer_id: settings.replacers[i].id.clone(),
            enabled: defaults::ENABLED,
            comment: defaults::COMMENT.to_string(),
        };
        settings.links.push(link);
    }
}

fn migrate_legacy(blob: &Value, ids: &mut dyn IdSource) -> Settings {
    let patterns: Vec<Pattern> = entries(blob.get("patterns"))
        .into_iter()
        .map(|(id, text)| Pattern {
            id: id.unwrap_or_else(|| ids.next_id()),
            text,
        })
        .collect();
    let replacers: Vec<Replacer> = entries(blob.get("replacers"))
        .into_iter()
        .map(|(id, text)| Replacer {
            id: id.unwrap_or_else(|| ids.next_id()),
            text,
        })
        .collect();

    let enabled = blob.get("enabled").and_then(Value::as_array);
    let comments = blob.get("comments").and_then(Value::as_array);

    // Pair by index up to the shorter side; the longer tail is dropped
    // silently. Historical behavior, preserved on purpose.
    let n = patterns.len().min(replacers.len());
    let links = (0..n)
        .map(|i| Link {
            id: ids.next_id(),
            pattern_id: patterns[i].id.clone(),
            replacer_id: replacers[i].id.clone(),
            enabled: enabled
                .and_then(|e| e.get(i))
                .and_then(Value::as_bool)
                .unwrap_or(defaults::ENABLED),
            comment: comments
                .and_then(|c| c.get(i))
                .and_then(Value::as_str)
                .unwrap_or(defaults::COMMENT)
                .to_string(),
        })
        .collect();

    Settings {
        patterns,
        replacers,
        links,
        format_version: FORMAT_VERSION,
        active: flag(blob, "active", defaults::ACTIVE),
        debug_mode: flag(blob, "debugMode", defaults::DEBUG_MODE),
    }
}

/// Current blobs still get a defensive pass: hand-edited files may carry
/// empty ids or links to entities that no longer exist.
fn migrate_current(blob: &Value, ids: &mut dyn IdSource) -> Settings {
    let mut settings = Settings {
        patterns: collection(blob.get("patterns")),
        replacers: collection(blob.get("replacers")),
        links: collection(blob.get("links")),
        format_version: FORMAT_VERSION,
        active: flag(blob, "active", defaults::ACTIVE),
        debug_mode: flag(blob, "debugMode", defaults::DEBUG_MODE),
    };

    for pattern in &mut settings.patterns {
        if pattern.id.is_empty() {
            pattern.id = ids.next_id();
        }
    }
    for replacer in &mut settings.replacers {
        if replacer.id.is_empty() {
            replacer.id = ids.next_id();
        }
    }
    for link in &mut settings.links {
        if link.id.is_empty() {
            link.id = ids.next_id();
        }
    }
    settings.prune_dangling_links();
    settings
}

/// Read a legacy entity array. Accepts raw strings (Gen1/Gen2) as well
/// as id+text records (hand-edited mixtures); anything else coerces to
/// the default text. Returns `(existing id, text)` per entry.
fn entries(value: Option<&Value>) -> Vec<(Option<String>, String)> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|v| match v {
            Value::String(s) => (None, s.clone()),
            Value::Object(_) => (
                v.get("id")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
                v.get("text")
                    .and_then(Value::as_str)
                    .unwrap_or(defaults::TEXT)
                    .to_string(),
            ),
            _ => (None, defaults::TEXT.to_string()),
        })
        .collect()
}

/// Deserialize an entity collection entry by entry, dropping entries of
/// the wrong type instead of failing the whole blob.
fn collection<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn flag(blob: &Value, name: &str, default: bool) -> bool {
    blob.get(name).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::fixtures::SequentialIds;
    use serde_json::json;

    fn roundtrip(settings: &Settings) -> Value {
        serde_json::to_value(settings).unwrap()
    }

    #[test]
    fn classifies_all_three_generations() {
        let gen1 = json!({ "patterns": ["a"], "replacers": ["X"] });
        let gen2 = json!({
            "patterns": ["a"], "replacers": ["X"],
            "enabled": [true], "comments": [""], "formatVersion": 200
        });
        let current = json!({
            "patterns": [{ "id": "p", "text": "a" }],
            "replacers": [{ "id": "r", "text": "X" }],
            "links": []
        });

        assert_eq!(classify(&gen1), BlobShape::Gen1);
        assert_eq!(classify(&gen2), BlobShape::Gen2);
        assert_eq!(classify(&current), BlobShape::Current);
    }

    #[test]
    fn record_patterns_without_links_are_treated_as_legacy() {
        let blob = json!({
            "patterns": [{ "id": "p", "text": "a" }],
            "replacers": [{ "id": "r", "text": "X" }]
        });
        assert_eq!(classify(&blob), BlobShape::Gen1);

        // The legacy path keeps the existing ids and pairs by index.
        let settings = migrate(&blob, &mut SequentialIds::new());
        assert_eq!(settings.patterns[0].id, "p");
        assert_eq!(settings.links.len(), 1);
        assert_eq!(settings.links[0].pattern_id, "p");
        assert_eq!(settings.links[0].replacer_id, "r");
    }

    #[test]
    fn gen2_fidelity() {
        let blob = json!({
            "patterns": ["a", "b"],
            "replacers": ["X", "Y"],
            "enabled": [true, false],
            "comments": ["c1", ""]
        });
        let settings = migrate(&blob, &mut SequentialIds::new());

        assert_eq!(settings.format_version, FORMAT_VERSION);
        assert_eq!(settings.links.len(), 2);

        let first = &settings.links[0];
        assert_eq!(settings.pattern(&first.pattern_id).unwrap().text, "a");
        assert_eq!(settings.replacer(&first.replacer_id).unwrap().text, "X");
        assert!(first.enabled);
        assert_eq!(first.comment, "c1");

        let second = &settings.links[1];
        assert_eq!(settings.pattern(&second.pattern_id).unwrap().text, "b");
        assert_eq!(settings.replacer(&second.replacer_id).unwrap().text, "Y");
        assert!(!second.enabled);
        assert_eq!(second.comment, "");
    }

    #[test]
    fn gen1_defaults_enabled_true_and_empty_comment() {
        let blob = json!({ "patterns": ["a"], "replacers": ["X"] });
        let settings = migrate(&blob, &mut SequentialIds::new());

        assert_eq!(settings.links.len(), 1);
        assert!(settings.links[0].enabled);
        assert_eq!(settings.links[0].comment, "");
    }

    #[test]
    fn truncates_to_shorter_side() {
        let blob = json!({ "patterns": ["a", "b", "c"], "replacers": ["X", "Y"] });
        let settings = migrate(&blob, &mut SequentialIds::new());

        // All three patterns survive; only two links are synthesized.
        assert_eq!(settings.patterns.len(), 3);
        assert_eq!(settings.links.len(), 2);
        assert_eq!(settings.pattern(&settings.links[0].pattern_id).unwrap().text, "a");
        assert_eq!(settings.pattern(&settings.links[1].pattern_id).unwrap().text, "b");
    }

    #[test]
    fn legacy_flags_carry_over() {
        let blob = json!({
            "patterns": ["a"], "replacers": ["X"],
            "active": false, "debugMode": true
        });
        let settings = migrate(&blob, &mut SequentialIds::new());

        assert!(!settings.active);
        assert!(settings.debug_mode);
    }

    #[test]
    fn migration_is_idempotent() {
        let mut ids = SequentialIds::new();
        let blobs = vec![
            json!({ "patterns": ["a", "b"], "replacers": ["X"] }),
            json!({
                "patterns": ["a"], "replacers": ["X"],
                "enabled": [false], "comments": ["c"]
            }),
            json!({
                "patterns": [{ "id": "p1", "text": "a" }],
                "replacers": [{ "id": "r1", "text": "X" }],
                "links": [{ "id": "l1", "patternId": "p1", "replacerId": "r1",
                            "enabled": true, "comment": "" }],
                "formatVersion": 300, "active": true, "debugMode": false
            }),
        ];

        for blob in blobs {
            let once = migrate(&blob, &mut ids);
            let twice = migrate(&roundtrip(&once), &mut ids);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn total_over_garbage_input() {
        let blobs = vec![
            json!(null),
            json!({}),
            json!({ "patterns": 5, "replacers": "nope" }),
            json!({ "patterns": [1, true, null], "replacers": ["X", "Y", "Z"] }),
        ];
        for blob in blobs {
            let settings = migrate(&blob, &mut SequentialIds::new());
            assert_eq!(settings.format_version, FORMAT_VERSION);
            for link in &settings.links {
                assert!(settings.pattern(&link.pattern_id).is_some());
                assert!(settings.replacer(&link.replacer_id).is_some());
            }
        }
    }

    #[test]
    fn current_path_backfills_missing_ids() {
        let blob = json!({
            "patterns": [{ "id": "p1", "text": "a" }, { "id": "", "text": "b" }],
            "replacers": [{ "id": "r1", "text": "X" }, { "text": "Y" }],
            "links": []
        });
        let settings = migrate(&blob, &mut SequentialIds::new());

        assert_eq!(settings.patterns[0].id, "p1");
        assert!(!settings.patterns[1].id.is_empty());
        assert!(!settings.replacers[1].id.is_empty());
    }

    #[test]
    fn current_path_prunes_dangling_links() {
        let blob = json!({
            "patterns": [{ "id": "p1", "text": "a" }],
            "replacers": [{ "id": "r1", "text": "X" }],
            "links": [
                { "id": "l1", "patternId": "p1", "replacerId": "r1" },
                { "id": "l2", "patternId": "gone", "replacerId": "r1" }
            ]
        });
        let settings = migrate(&blob, &mut SequentialIds::new());

        assert_eq!(settings.links.len(), 1);
        assert_eq!(settings.links[0].id, "l1");
    }

    #[test]
    fn ensure_default_links_seeds_once() {
        let blob = json!({
            "patterns": [{ "id": "p1", "text": "a" }, { "id": "p2", "text": "b" }],
            "replacers": [{ "id": "r1", "text": "X" }],
            "links": []
        });
        let mut ids = SequentialIds::new();
        let mut settings = migrate(&blob, &mut ids);

        ensure_default_links(&mut settings, &mut ids);
        assert_eq!(settings.links.len(), 1);
        assert_eq!(settings.links[0].pattern_id, "p1");
        assert_eq!(settings.links[0].replacer_id, "r1");

        let after_first = settings.clone();
        ensure_default_links(&mut settings, &mut ids);
        assert_eq!(settings, after_first);
    }
}
