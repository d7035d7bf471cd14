//! # gh-secret-seal
//!
//! Sets one or more encrypted GitHub Actions secrets on a repository.
//!
//! Values are sealed with the repository's Curve25519 public key using a
//! libsodium-compatible anonymous sealed box before they leave the machine.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line flags
//! - [`config`] - Config file loading, flag merge and validation
//! - [`resolve`] - Literal / `file(<path>)` value resolution
//! - [`crypto`] - Sealed-box encryption
//! - [`batch`] - Per-secret pipeline with partial-failure tallying
//! - [`github`] - GitHub API client for secrets management
//! - [`app`] - Top-level run
//! - [`validation`] - Input validation utilities
//! - [`paths`] - `.env` discovery
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod errors;
pub mod github;
pub mod paths;
pub mod resolve;
pub mod validation;
