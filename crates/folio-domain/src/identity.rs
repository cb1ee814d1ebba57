//! Identities owned by the external auth service.

use std::collections::HashMap;

use uuid::Uuid;

/// A resolved auth-service identity: the account id plus the display name
/// stored in its metadata, when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub name: Option<String>,
}

/// Email → identity mapping built from the auth service's user directory.
///
/// Every later seeding stage keys off this map; an email absent from it
/// means the account could not be resolved and must not receive child rows.
pub type IdentityMap = HashMap<String, IdentityRecord>;
