//! Identity provisioning: ensure one auth account per seed user.

use tracing::{info, warn};

use crate::domain::ports::{AuthAdmin, NewAccount};
use crate::error::ApiError;
use crate::fixtures::SeedUser;

/// Create every missing account, pre-confirmed so no verification mail
/// goes out. Existing accounts are expected on re-runs and logged at info;
/// any other failure is logged and the loop moves to the next user. This
/// stage never aborts the run.
pub async fn ensure_accounts<A: AuthAdmin>(admin: &A, seeds: &[SeedUser]) {
    for seed in seeds {
        let account = NewAccount {
            email: &seed.email,
            password: &seed.password,
            email_confirm: true,
            name: &seed.name,
        };
        match admin.create_user(&account).await {
            Ok(identity) => info!(email = %seed.email, id = %identity.id, "account created"),
            Err(ApiError::AlreadyExists(_)) => {
                info!(email = %seed.email, "account already exists")
            }
            Err(err) => {
                warn!(email = %seed.email, kind = err.kind(), error = %err, "account creation failed, continuing")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use uuid::Uuid;

    use folio_domain::identity::IdentityRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::ports::DirectoryEntry;
    use crate::fixtures::seed_users;

    struct ScriptedAdmin {
        create_calls: Mutex<u32>,
        outcome: fn() -> Result<IdentityRecord, ApiError>,
    }

    impl AuthAdmin for ScriptedAdmin {
        async fn create_user(
            &self,
            _account: &NewAccount<'_>,
        ) -> Result<IdentityRecord, ApiError> {
            *self.create_calls.lock().unwrap() += 1;
            (self.outcome)()
        }

        async fn list_users(
            &self,
            _page: u32,
            _per_page: u32,
        ) -> Result<Vec<DirectoryEntry>, ApiError> {
            Ok(Vec::new())
        }

        async fn update_password(&self, _id: Uuid, _password: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_attempt_every_seed_user_once() {
        let admin = ScriptedAdmin {
            create_calls: Mutex::new(0),
            outcome: || {
                Ok(IdentityRecord {
                    id: Uuid::new_v4(),
                    name: None,
                })
            },
        };
        let mut rng = StdRng::seed_from_u64(1);
        let seeds = seed_users(&mut rng, 5);

        ensure_accounts(&admin, &seeds).await;
        assert_eq!(*admin.create_calls.lock().unwrap(), 5);
    }

    #[tokio::test]
    async fn should_treat_existing_accounts_as_success() {
        let admin = ScriptedAdmin {
            create_calls: Mutex::new(0),
            outcome: || Err(ApiError::AlreadyExists("registered".to_owned())),
        };
        let mut rng = StdRng::seed_from_u64(2);
        let seeds = seed_users(&mut rng, 8);

        // Completes without aborting even though every creation "fails".
        ensure_accounts(&admin, &seeds).await;
        assert_eq!(*admin.create_calls.lock().unwrap(), 8);
    }

    #[tokio::test]
    async fn should_continue_past_unexpected_failures() {
        let admin = ScriptedAdmin {
            create_calls: Mutex::new(0),
            outcome: || Err(ApiError::Unknown("policy denied".to_owned())),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let seeds = seed_users(&mut rng, 4);

        ensure_accounts(&admin, &seeds).await;
        assert_eq!(*admin.create_calls.lock().unwrap(), 4);
    }
}
