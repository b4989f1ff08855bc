//! Pre-install orchestration
//!
//! The recommendation flow the builder screen and the `recommend`/`generate`
//! subcommands share: budget in, cached tier listing out, plus retail search
//! URLs per part and the EFI generation entry point.
//!
//! # Design
//!
//! - Slot alternatives are rolled once per request and held in
//!   `Recommendation`, so the listing on screen stays stable until the user
//!   asks for a refresh
//! - A seed makes the roll reproducible; `None` rolls fresh
//! - EFI generation only needs the tier name and budget, never the parts

// Library API — consumed by TUI and CLI
#![allow(dead_code)]

use crate::efi::{EfiRequest, GeneratedEfi};
use crate::error::{HackinTuneError, Result};
use crate::tiers::{select_tier, Part};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;

// ============================================================================
// Recommendation
// ============================================================================

/// Inputs to one recommendation roll.
#[derive(Debug, Clone, Copy)]
pub struct RecommendRequest {
    /// Budget in INR
    pub budget: u32,
    /// Seed for the slot alternative picks; `None` rolls fresh
    pub seed: Option<u64>,
}

/// A rolled tier listing, stable until explicitly refreshed.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub tier_name: String,
    pub budget: u32,
    pub parts: Vec<Part>,
}

/// Evaluate the tier selector for a budget and roll the slot alternatives.
pub fn recommend(request: &RecommendRequest) -> Recommendation {
    let tier = select_tier(request.budget);
    let parts = match request.seed {
        Some(seed) => tier.pick_parts(&mut StdRng::seed_from_u64(seed)),
        None => tier.pick_parts(&mut rand::thread_rng()),
    };
    log::info!(
        "Recommended '{}' for budget {} ({} parts)",
        tier.name,
        request.budget,
        parts.len()
    );
    Recommendation {
        tier_name: tier.name.to_string(),
        budget: request.budget,
        parts,
    }
}

/// Retail search URL for a part, query percent-encoded.
pub fn search_url(part: &Part) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("k", part.query)
        .append_pair("i", "computers")
        .finish();
    format!("https://www.amazon.in/s?{}", query)
}

// ============================================================================
// Artifact Generation
// ============================================================================

/// Generate the BIOS instructions and config.plist for a budget.
///
/// `output_root` defaults to the user's Desktop when not given.
pub fn build_artifacts(budget: u32, output_root: Option<PathBuf>) -> Result<GeneratedEfi> {
    let root = match output_root {
        Some(root) => root,
        None => dirs::desktop_dir()
            .ok_or_else(|| HackinTuneError::general("cannot resolve Desktop directory"))?,
    };
    let tier = select_tier(budget);
    EfiRequest::new(tier.name, budget).generate(&root)
}
