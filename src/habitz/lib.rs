//! # Habitz Architecture
//!
//! Habitz is a **UI-agnostic habit checklist library**: a small list of named
//! habits that can be added, ticked off, searched, filtered, sorted and
//! cleared, persisted between sessions. The bundled CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Argument parsing, confirmation prompts, terminal output  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the HabitStore and the transient ViewState          │
//! │  - One method per user intent                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs), Query (query.rs), Stats          │
//! │  - Mutations through the store, pure view derivation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - HabitStore: the in-memory list, written through on change│
//! │  - DataStore: one durable key-value slot (file or memory)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! intent → store mutation → write-through → view recomputed from the new
//! list and the current search/filter/sort → stats recomputed → client redraws.
//!
//! The stored list keeps insertion order. Display order is always derived by
//! [`query::view`] and never written back.
//!
//! ## No I/O in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr, prompts, or exits.
//! Persistence failures are reported in results, never panics, and never undo
//! the in-memory change.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per intent
//! - [`query`]: Search, filter and sort pipeline
//! - [`stats`]: Totals and completion rate
//! - [`store`]: Storage abstraction and the habit store
//! - [`model`]: `Habit`, `StatusFilter`, `SortMode`, `ViewState`
//! - [`index`]: Display positions and habit selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
