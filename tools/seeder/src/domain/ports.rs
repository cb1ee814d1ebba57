#![allow(async_fn_in_trait)]

use serde::Serialize;
use uuid::Uuid;

use folio_domain::identity::IdentityRecord;

use crate::error::ApiError;

/// Request to create one synthetic account in the auth service.
#[derive(Debug, Clone)]
pub struct NewAccount<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// Pre-confirm the address so no verification mail goes out.
    pub email_confirm: bool,
    /// Display name stored in the account metadata.
    pub name: &'a str,
}

/// One entry from the auth service's paginated user directory.
/// `email` can be absent (phone-only accounts); such entries are ignored
/// when building the identity map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Administrative surface of the external auth service.
///
/// Stages receive an explicit handle so tests can substitute an in-memory
/// implementation.
pub trait AuthAdmin: Send + Sync {
    async fn create_user(&self, account: &NewAccount<'_>) -> Result<IdentityRecord, ApiError>;

    /// Fetch one directory page. A page shorter than `per_page` signals
    /// the end of the listing.
    async fn list_users(&self, page: u32, per_page: u32) -> Result<Vec<DirectoryEntry>, ApiError>;

    async fn update_password(&self, id: Uuid, password: &str) -> Result<(), ApiError>;
}

/// Row-oriented surface of the tabular store. Both calls report failure
/// through the returned `ApiError`, never by panicking.
pub trait TableStore: Send + Sync {
    /// Insert-or-update keyed by the `on_conflict` column.
    async fn upsert<T: Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
        on_conflict: &str,
    ) -> Result<(), ApiError>;

    async fn insert<T: Serialize + Sync>(&self, table: &str, rows: &[T]) -> Result<(), ApiError>;
}
