//! Records and the sources pages read them from.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Catalog` is provided once by the app shell; pages pull the collection they
//! render through `expect_context::<Catalog>()`.

pub mod models;
pub mod source;

pub use models::*;
pub use source::{Catalog, DataError, FixtureSource, RecordSource, StaticSource};
