//! Profile upsert: mirror every seed user into the `users` table.

use tracing::{info, warn};

use folio_domain::identity::IdentityMap;
use folio_domain::profile::ProfileRow;

use crate::domain::ports::TableStore;
use crate::fixtures::{PROFILE_DESCRIPTION, SeedUser};

/// Build one row per seed user and submit a single upsert keyed on
/// `email`, so re-runs overwrite instead of duplicating. Users whose
/// identity did not resolve still get a row, with a null `user_id`.
/// Best-effort: failure is logged and the workflow continues.
pub async fn upsert_profiles<S: TableStore>(
    store: &S,
    seeds: &[SeedUser],
    identities: &IdentityMap,
) {
    let rows: Vec<ProfileRow> = seeds
        .iter()
        .map(|seed| ProfileRow {
            user_id: identities.get(&seed.email).map(|identity| identity.id),
            email: seed.email.clone(),
            name: seed.name.clone(),
            stacks: seed.stacks.clone(),
            description: Some(PROFILE_DESCRIPTION.to_owned()),
            profile_image: None,
        })
        .collect();

    match store.upsert("users", &rows, "email").await {
        Ok(()) => info!(rows = rows.len(), "profiles upserted"),
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "profile upsert failed, continuing")
        }
    }
}
