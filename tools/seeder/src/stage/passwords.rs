//! Password normalization: one shared credential across all synthetic
//! accounts.

use tracing::warn;

use folio_domain::identity::IdentityMap;

use crate::domain::ports::AuthAdmin;
use crate::fixtures::SeedUser;

/// Reset every resolved account's password so pre-existing and freshly
/// created accounts end up with the same known credential. Unresolved
/// users are never attempted; individual failures are logged and skipped.
pub async fn normalize_passwords<A: AuthAdmin>(
    admin: &A,
    seeds: &[SeedUser],
    identities: &IdentityMap,
    password: &str,
) {
    for seed in seeds {
        let Some(identity) = identities.get(&seed.email) else {
            continue;
        };
        if let Err(err) = admin.update_password(identity.id, password).await {
            warn!(email = %seed.email, kind = err.kind(), error = %err, "password reset failed, continuing");
        }
    }
}
