//! Browser helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every helper has a non-`hydrate` fallback so the same component code runs
//! during server rendering.

pub mod dom;
pub mod geolocation;
