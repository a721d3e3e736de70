//! # Larder Architecture
//!
//! Larder is a **UI-agnostic recipe catalog library**: keyword and diet-tag
//! search, favorites, and calorie arithmetic over a small, locally persisted
//! recipe collection. The `larder` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the catalog              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation                             │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - Canonical in-memory collection and favorite set          │
//! │  - Query engine (search.rs), calorie maths (nutrition.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Key-value DataStore trait, one blob per key              │
//! │  - FileStore (production), InMemoryStore (testing), seed    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular
//! Rust types. It never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Quantities
//!
//! Ingredient quantities arrive as free text ("2", "2-3", "1/2", "-"). They are
//! parsed once, when a record is read, into [`quantity::Quantity`]; everything
//! downstream works with numbers.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and the **catalog**: unit tests against `InMemoryStore`
//!    fixtures. This is where most testing lives.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: end-to-end runs of the binary in `tests/`, plus property tests
//!    of the search and calorie rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`catalog`]: In-memory recipe collection with persistence
//! - [`commands`]: Business logic for each command
//! - [`search`]: Keyword and diet-tag matching
//! - [`nutrition`]: Calorie totals and per-ingredient breakdowns
//! - [`quantity`]: Parsing of ingredient quantity text
//! - [`energy`]: BMR and daily energy needs
//! - [`favorites`]: The favorite recipe set
//! - [`store`]: Storage abstraction, implementations and the built-in recipes
//! - [`model`]: Core data types (`Recipe`, `Ingredient`, `Difficulty`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod editor;
pub mod energy;
pub mod error;
pub mod favorites;
pub mod init;
pub mod model;
pub mod nutrition;
pub mod quantity;
pub mod search;
pub mod store;
