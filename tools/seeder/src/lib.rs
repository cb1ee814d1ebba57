//! Seed harness for a folio Supabase project.
//!
//! Provisions synthetic auth accounts, mirrors them into the `users`
//! table, generates per-user portfolio records, bulk-loads them, and
//! resets every synthetic password to one shared test credential.
//!
//! The workflow is strictly sequential. Identity resolution is the only
//! stage whose failure aborts the run; everything else logs and moves on.

use std::time::Duration;

use rand::RngExt;
use tracing::info;

use folio_core::retry::RetryPolicy;

pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod infra;
pub mod stage;

use crate::domain::ports::{AuthAdmin, TableStore};
use crate::error::ApiError;
use crate::fixtures::{SHARED_PASSWORD, SeedUser};
use crate::stage::{children, loader, passwords, profiles, provision, resolve};

/// One retry after a fixed pause; exhausting it aborts the whole run.
const RESOLVE_RETRY: RetryPolicy = RetryPolicy::new(2, Duration::from_millis(500));

/// Row counts produced by one seeding run, for the final summary log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub resolved: usize,
    pub projects: usize,
    pub awards: usize,
    pub certifications: usize,
    pub educations: usize,
}

/// Drive the full seeding workflow against one client handle.
///
/// Stage order: provision accounts → resolve identities → upsert profiles
/// → generate and load child records → normalize passwords. The identity
/// map and generated rows live only for the duration of this call.
pub async fn run<C, R>(client: &C, seeds: &[SeedUser], rng: &mut R) -> Result<SeedSummary, ApiError>
where
    C: AuthAdmin + TableStore,
    R: RngExt,
{
    info!(users = seeds.len(), "ensuring auth accounts");
    provision::ensure_accounts(client, seeds).await;

    info!("mapping emails to auth identities");
    let identities = resolve::map_email_to_identity(client, &RESOLVE_RETRY).await?;

    info!(identities = identities.len(), "upserting profile rows");
    profiles::upsert_profiles(client, seeds, &identities).await;

    info!("generating and loading child records");
    let rows = children::generate(rng, seeds, &identities);
    let summary = SeedSummary {
        resolved: seeds
            .iter()
            .filter(|seed| identities.contains_key(&seed.email))
            .count(),
        projects: rows.projects.len(),
        awards: rows.awards.len(),
        certifications: rows.certifications.len(),
        educations: rows.educations.len(),
    };
    loader::insert_batched(client, "projects", &rows.projects).await;
    loader::insert_batched(client, "awards", &rows.awards).await;
    loader::insert_batched(client, "certifications", &rows.certifications).await;
    loader::insert_batched(client, "educations", &rows.educations).await;

    info!("normalizing passwords to the shared credential");
    passwords::normalize_passwords(client, seeds, &identities, SHARED_PASSWORD).await;

    Ok(summary)
}
