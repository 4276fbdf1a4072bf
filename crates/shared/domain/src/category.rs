//! Category domain entity.
//!
//! Categories carry identity only; every attribute is an opaque token and no
//! rule is enforced beyond what the use cases check.

use serde::{Deserialize, Serialize};

/// Category domain entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
