//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic to-do list library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, cli/, wired by main.rs)                │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (engine.rs, edit.rs)                          │
//! │  - Owns the task list and the display filter                │
//! │  - Pure state transitions + persist-then-render protocol    │
//! │  - Notifies a View collaborator, never prints itself        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StateStore trait                                │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in the Engine
//!
//! From `engine.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<()>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The engine reports state changes through the [`engine::View`] seam, so the same
//! core serves the CLI, a TUI, or any other event source. Identifier generation is
//! injected ([`ids::IdSource`]) so tests can assert on deterministic ids.
//!
//! ## Persistence contract
//!
//! Two independent entries under one store directory: the ordered task list and the
//! display filter. Loads never fail—absent or corrupt entries fall back to an empty
//! list and the All filter. Writes are atomic and their failures surface to the
//! caller, but a failed write never rolls back the in-memory mutation.
//!
//! ## Module Overview
//!
//! - [`engine`]: The task-list engine—entry point for all operations
//! - [`edit`]: Edit-in-place sessions (commit or cancel)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Task`, `Filter`)
//! - [`ids`]: Injected identifier source
//! - [`config`]: Store directory resolution
//! - [`validate`]: Standalone form-field predicates (no engine dependency)
//! - [`calc`]: Standalone four-function calculator state machine (no engine dependency)
//! - [`error`]: Error types
//! - `args`/`cli`: Argument parsing and terminal rendering for the binary (not part
//!   of the lib API)

pub mod calc;
pub mod config;
pub mod edit;
pub mod engine;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
pub mod validate;
