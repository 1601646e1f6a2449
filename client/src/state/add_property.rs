//! Add-property form state.
//!
//! DESIGN
//! ======
//! The only application-level check is that a map pin exists. Every other
//! field relies on the browser's `required` handling, so `submit` never looks
//! at them.

#[cfg(test)]
#[path = "add_property_test.rs"]
mod add_property_test;

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::map::Coordinate;

pub const PIN_REQUIRED: &str = "Please drop a pin on the map to select the precise property location.";

/// Fixed amenity vocabulary, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Amenity {
    Wifi,
    Water,
    Parking,
    Security,
    Garden,
    Pool,
    Gym,
    Balcony,
    AirConditioning,
    Furnished,
    PetFriendly,
    Laundry,
}

impl Amenity {
    pub const ALL: [Amenity; 12] = [
        Self::Wifi,
        Self::Water,
        Self::Parking,
        Self::Security,
        Self::Garden,
        Self::Pool,
        Self::Gym,
        Self::Balcony,
        Self::AirConditioning,
        Self::Furnished,
        Self::PetFriendly,
        Self::Laundry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Wifi => "WiFi",
            Self::Water => "Water",
            Self::Parking => "Parking",
            Self::Security => "Security",
            Self::Garden => "Garden",
            Self::Pool => "Pool",
            Self::Gym => "Gym",
            Self::Balcony => "Balcony",
            Self::AirConditioning => "Air Conditioning",
            Self::Furnished => "Furnished",
            Self::PetFriendly => "Pet Friendly",
            Self::Laundry => "Laundry",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Apartment,
    House,
    Bedsitter,
    Studio,
    Townhouse,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 5] = [Self::Apartment, Self::House, Self::Bedsitter, Self::Studio, Self::Townhouse];

    /// `<option value>` for the select.
    pub fn value(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Bedsitter => "bedsitter",
            Self::Studio => "studio",
            Self::Townhouse => "townhouse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Bedsitter => "Bedsitter",
            Self::Studio => "Studio",
            Self::Townhouse => "Townhouse",
        }
    }
}

impl FromStr for PropertyKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.value() == s).ok_or(())
    }
}

/// What happened when the form was submitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// No pin yet; stay on the page and show [`PIN_REQUIRED`].
    MissingPin,
    /// Accepted; the page shows a toast and returns to the property list.
    Submitted { at: Coordinate },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddPropertyForm {
    pub title: String,
    pub kind: Option<PropertyKind>,
    pub location: String,
    pub rent: String,
    pub description: String,
    amenities: BTreeSet<Amenity>,
    pub pin_touched: bool,
    pub pin_error: Option<&'static str>,
}

impl AddPropertyForm {
    fn set_amenity(&mut self, amenity: Amenity, checked: bool) {
        if checked {
            self.amenities.insert(amenity);
        } else {
            self.amenities.remove(&amenity);
        }
    }

    /// Flip one checkbox; the only way the page changes the amenity set.
    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        let checked = !self.has_amenity(amenity);
        self.set_amenity(amenity, checked);
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }

    pub fn amenities(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.amenities.iter().copied()
    }

    /// A pin was chosen from any source.
    pub fn pin_selected(&mut self) {
        self.pin_touched = true;
        self.pin_error = None;
    }

    pub fn submit(&mut self, pin: Option<Coordinate>) -> SubmitOutcome {
        match pin {
            None => {
                self.pin_touched = true;
                self.pin_error = Some(PIN_REQUIRED);
                SubmitOutcome::MissingPin
            }
            Some(at) => {
                self.pin_error = None;
                SubmitOutcome::Submitted { at }
            }
        }
    }
}
