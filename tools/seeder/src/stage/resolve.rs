//! Identity resolution: build the email → identity map from the auth
//! directory.

use std::collections::HashMap;

use folio_core::retry::RetryPolicy;
use folio_domain::identity::{IdentityMap, IdentityRecord};

use crate::domain::ports::AuthAdmin;
use crate::error::ApiError;
use crate::fixtures::DIRECTORY_PAGE_SIZE;

/// Walk the directory page by page until a short page signals the end,
/// collecting every entry that has an email. The whole pass runs under
/// `retry`; exhausting it propagates the error, which is the workflow's
/// only fatal path — without the map no later stage can proceed.
pub async fn map_email_to_identity<A: AuthAdmin>(
    admin: &A,
    retry: &RetryPolicy,
) -> Result<IdentityMap, ApiError> {
    retry.run(|| fetch_directory(admin)).await
}

async fn fetch_directory<A: AuthAdmin>(admin: &A) -> Result<IdentityMap, ApiError> {
    let mut map = HashMap::new();
    let mut page = 1;
    loop {
        let users = admin.list_users(page, DIRECTORY_PAGE_SIZE).await?;
        let fetched = users.len();
        for user in users {
            if let Some(email) = user.email {
                map.insert(
                    email,
                    IdentityRecord {
                        id: user.id,
                        name: user.name,
                    },
                );
            }
        }
        if fetched < DIRECTORY_PAGE_SIZE as usize {
            break;
        }
        page += 1;
    }
    Ok(map)
}
