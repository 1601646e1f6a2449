//! Location-picker dialog state.
//!
//! The dialog feeds widget callbacks in as [`PickerEvent`]s; [`MapPicker::handle`]
//! updates the selection and returns the [`MapUpdate`] the widget must draw.

#[cfg(test)]
#[path = "map_picker_test.rs"]
mod map_picker_test;

use crate::map::{Coordinate, MapUpdate, NAIROBI};

/// How often an open picker checks whether the map library has arrived.
pub const LIBRARY_POLL_MS: u32 = 250;

/// Whether the panel should try to mount the widget now.
///
/// The loader script is deferred and fetches the map classes on its own
/// schedule, so a picker opened early retries once the library shows up.
pub fn mount_due(mounted: bool, has_container: bool, library_loaded: bool) -> bool {
    !mounted && has_container && library_loaded
}

/// Something the map widget or geolocation reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickerEvent {
    /// The user clicked the map.
    Clicked(Coordinate),
    /// A place search resolved.
    PlaceFound(Coordinate),
    /// "Use my location" was pressed.
    LocateStarted,
    /// Geolocation answered.
    Located(Coordinate),
    /// Geolocation failed or was denied.
    LocateFailed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapPicker {
    pub open: bool,
    pub search: String,
    pub locating: bool,
    pub selected: Option<Coordinate>,
}

impl MapPicker {
    pub fn open_dialog(&mut self) {
        self.open = true;
    }

    /// Both "Cancel" and "Use Location" close the dialog; the selection stays.
    pub fn close_dialog(&mut self) {
        self.open = false;
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// Map centre: the current pin, or Nairobi.
    pub fn center(&self) -> Coordinate {
        self.selected.unwrap_or(NAIROBI)
    }

    pub fn handle(&mut self, event: PickerEvent) -> MapUpdate {
        match event {
            PickerEvent::Clicked(at) => {
                self.selected = Some(at);
                MapUpdate { marker: Some(at), pan_to: None }
            }
            PickerEvent::PlaceFound(at) => {
                self.selected = Some(at);
                MapUpdate { marker: Some(at), pan_to: Some(at) }
            }
            PickerEvent::LocateStarted => {
                self.locating = true;
                MapUpdate::default()
            }
            PickerEvent::Located(at) => {
                self.locating = false;
                self.selected = Some(at);
                MapUpdate { marker: Some(at), pan_to: Some(at) }
            }
            PickerEvent::LocateFailed => {
                self.locating = false;
                MapUpdate::default()
            }
        }
    }
}
