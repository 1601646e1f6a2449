//! Record sources: the single seam between pages and their data.
//!
//! DESIGN
//! ======
//! Pages never touch fixture arrays directly. They ask a `RecordSource` for
//! the current records, so a backend-backed source can replace the embedded
//! JSON without changing any rendering code.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::models::{Activity, IdVerification, Listing, Message, Property, PropertyVerification};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("fixture `{name}` is malformed: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only provider of one kind of record.
pub trait RecordSource<T>: Send + Sync {
    /// Current records, in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] when the underlying records cannot be decoded.
    fn list(&self) -> Result<Vec<T>, DataError>;
}

/// Records decoded from a JSON array embedded at compile time.
pub struct FixtureSource<T> {
    name: &'static str,
    json: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> FixtureSource<T> {
    pub const fn new(name: &'static str, json: &'static str) -> Self {
        Self { name, json, _record: PhantomData }
    }
}

impl<T: DeserializeOwned> RecordSource<T> for FixtureSource<T> {
    fn list(&self) -> Result<Vec<T>, DataError> {
        serde_json::from_str(self.json).map_err(|source| DataError::Fixture { name: self.name, source })
    }
}

/// Records held in memory; used for empty states and tests.
pub struct StaticSource<T>(pub Vec<T>);

impl<T: Clone + Send + Sync> RecordSource<T> for StaticSource<T> {
    fn list(&self) -> Result<Vec<T>, DataError> {
        Ok(self.0.clone())
    }
}

/// Every source the app renders from, provided once via Leptos context.
#[derive(Clone)]
pub struct Catalog {
    pub listings: Arc<dyn RecordSource<Listing>>,
    pub properties: Arc<dyn RecordSource<Property>>,
    pub activity: Arc<dyn RecordSource<Activity>>,
    pub messages: Arc<dyn RecordSource<Message>>,
    pub identity: Arc<dyn RecordSource<IdVerification>>,
    pub verifications: Arc<dyn RecordSource<PropertyVerification>>,
}

impl Catalog {
    /// Catalog backed by the JSON fixtures shipped with the client.
    pub fn fixtures() -> Self {
        Self {
            listings: Arc::new(FixtureSource::<Listing>::new(
                "listings",
                include_str!("../../fixtures/listings.json"),
            )),
            properties: Arc::new(FixtureSource::<Property>::new(
                "properties",
                include_str!("../../fixtures/properties.json"),
            )),
            activity: Arc::new(FixtureSource::<Activity>::new(
                "activity",
                include_str!("../../fixtures/activity.json"),
            )),
            messages: Arc::new(FixtureSource::<Message>::new(
                "messages",
                include_str!("../../fixtures/messages.json"),
            )),
            identity: Arc::new(FixtureSource::<IdVerification>::new(
                "identity",
                include_str!("../../fixtures/identity.json"),
            )),
            verifications: Arc::new(FixtureSource::<PropertyVerification>::new(
                "verifications",
                include_str!("../../fixtures/verifications.json"),
            )),
        }
    }

    /// Catalog with no records at all.
    pub fn empty() -> Self {
        Self {
            listings: Arc::new(StaticSource(Vec::new())),
            properties: Arc::new(StaticSource(Vec::new())),
            activity: Arc::new(StaticSource(Vec::new())),
            messages: Arc::new(StaticSource(Vec::new())),
            identity: Arc::new(StaticSource(Vec::new())),
            verifications: Arc::new(StaticSource(Vec::new())),
        }
    }
}
