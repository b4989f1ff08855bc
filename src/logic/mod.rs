//! Logic modules — translates high-level user actions into concrete steps.
//!
//! The logic layer sits between the UI/CLI surfaces and the core modules:
//! it turns a budget into a cached recommendation and generated artifacts,
//! and turns a fix request into the backup/probe/edit sequence it needs.
//!
//! # Modules
//!
//! - `preinstall` — recommendation flow and EFI generation entry points
//! - `postinstall` — fix orchestration (audio, TRIM, power, kext injection)

pub mod postinstall;
pub mod preinstall;
