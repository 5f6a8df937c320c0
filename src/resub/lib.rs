//! # Resub Architecture
//!
//! Resub is a **UI-agnostic text-transformation rule engine**. Users
//! author reusable regex patterns and reusable replacement templates,
//! join them pairwise through links (the unit of enablement and
//! annotation), and the engine applies first-match-wins substitution to
//! input text. The CLI in `main.rs` is one possible client of the
//! library, not the application itself.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: load → migrate → edit → save           │
//! │  - Invalidates compiled rules on every structural edit      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over Settings                        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine + Storage (model, migrate, compile, transform,      │
//! │  store/)                                                    │
//! │  - migrate/compile/transform are total, pure functions      │
//! │  - SettingsStore trait; FileStore (prod), InMemoryStore     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! persisted blob → [`migrate`] → [`model::Settings`] → [`compile`] →
//! rule list → [`transform`] ⇄ input/output strings. Any structural
//! edit (add/remove an entity, toggle a link) invalidates the compiled
//! rules; the API layer recompiles lazily before the next transform.
//!
//! ## Key Principle: The Core Is Total
//!
//! `migrate`, `compile` and `transform` never fail over their input
//! domain. A malformed legacy blob degrades to documented defaults, an
//! unparsable pattern is skipped at compile time, an unmatched input
//! passes through unchanged. Errors exist only at the store/API/CLI
//! seams.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Entity collections and the settings blob
//! - [`migrate`]: Legacy blob detection and rewriting
//! - [`compile`]: Links → ordered executable rule list
//! - [`transform`]: First-match-wins substitution
//! - [`idgen`]: Identifier generation behind an injectable trait
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod compile;
pub mod error;
pub mod idgen;
pub mod migrate;
pub mod model;
pub mod store;
pub mod transform;
