//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page loads its records from the `Catalog` context, owns its view
//! state and delegates repeated markup to `components`.

pub mod add_property;
pub mod dashboard;
pub mod inbox;
pub mod landing;
pub mod not_found;
pub mod properties;
pub mod settings;
pub mod verification;
