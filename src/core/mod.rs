//! # Core Application Logic
//!
//! The catalog, the selection state machine, and the session reducer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (read-only)  │
//!                    │  • Selector (session)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Print    │
//!            │  Adapter   │            │   modes    │
//!            │ (ratatui)  │            │ (main.rs)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Catalog` and `AlgorithmEntry`, the static reference table
//! - [`selector`]: `Selector`, holding at most one chosen entry per session
//! - [`state`]: The `App` struct, one viewer session
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Layered settings for the shell around the core

pub mod action;
pub mod catalog;
pub mod config;
pub mod selector;
pub mod state;
