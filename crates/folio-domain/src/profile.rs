//! Profile rows for the `users` table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One denormalized profile row, keyed by `email` (unique in the table).
///
/// `user_id` references the auth-service identity and is `None` only when
/// resolution failed for that email — the row is still written so the
/// profile exists once the account recovers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub user_id: Option<Uuid>,
    pub email: String,
    pub name: String,
    pub stacks: Vec<String>,
    pub description: Option<String>,
    pub profile_image: Option<String>,
}
