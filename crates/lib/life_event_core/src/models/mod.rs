//! Domain models.
//!
//! Wire field names (camelCase, `applyUsername`, `photoURL`, ...) follow the
//! existing front-end, so the serde renames live here rather than in an
//! API-specific layer.

pub mod identity;
pub mod records;
