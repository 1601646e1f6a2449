//! Map widget capability used by the add-property location picker.
//!
//! DESIGN
//! ======
//! The picker only needs five things from a map: mount centred on a point,
//! report clicks as coordinates, draw one marker, pan, and resolve a text
//! query to a coordinate. `MapProvider` is exactly that surface, so the
//! concrete widget (Google Maps in the browser build) can be swapped without
//! touching the picker.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "hydrate")]
pub mod google;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Five-decimal rendering used by the "Pin dropped" badge.
    pub fn label(self) -> String {
        format!("Lat {:.5}, Lng {:.5}", self.lat, self.lng)
    }
}

/// Where the picker opens when nothing has been selected yet.
pub const NAIROBI: Coordinate = Coordinate::new(-1.2921, 36.8219);
pub const DEFAULT_ZOOM: u8 = 14;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MapError {
    #[error("map widget is not loaded")]
    Unavailable,
    #[error("no place matched `{0}`")]
    NoMatch(String),
    #[error("map widget error: {0}")]
    Widget(String),
}

/// Narrow interface over an interactive map widget.
pub trait MapProvider {
    /// Host element the widget renders into.
    type Container;

    /// Render the map into `container` and report every click through `on_click`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Unavailable`] when the widget library is not loaded.
    fn mount(
        &mut self,
        container: &Self::Container,
        center: Coordinate,
        zoom: u8,
        on_click: Box<dyn Fn(Coordinate)>,
    ) -> Result<(), MapError>;

    /// Place (or move) the single selection marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the map has not been mounted.
    fn show_marker(&mut self, at: Coordinate) -> Result<(), MapError>;

    /// Recentre the viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the map has not been mounted.
    fn pan_to(&mut self, at: Coordinate) -> Result<(), MapError>;

    /// Resolve `query` to a coordinate; `on_result` runs once.
    fn search(&self, query: &str, on_result: Box<dyn FnOnce(Result<Coordinate, MapError>)>);
}

/// What the widget has to redraw after a picker event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapUpdate {
    pub marker: Option<Coordinate>,
    pub pan_to: Option<Coordinate>,
}

impl MapUpdate {
    pub fn is_empty(self) -> bool {
        self.marker.is_none() && self.pan_to.is_none()
    }
}

/// Push `update` to the widget: marker first, then pan.
///
/// # Errors
///
/// Propagates the first widget error.
pub fn apply_update<P: MapProvider + ?Sized>(provider: &mut P, update: MapUpdate) -> Result<(), MapError> {
    if let Some(at) = update.marker {
        provider.show_marker(at)?;
    }
    if let Some(at) = update.pan_to {
        provider.pan_to(at)?;
    }
    Ok(())
}
