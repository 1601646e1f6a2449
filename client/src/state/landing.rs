//! View state for the public landing page.
//!
//! DESIGN
//! ======
//! Each modal is an open flag plus its payload. Closing resets both, so a
//! reopened modal never shows stale content.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use std::collections::BTreeSet;

use crate::data::Listing;

/// Horizontal distance one carousel arrow click scrolls.
pub const CAROUSEL_STEP_PX: f64 = 320.0;

/// Which registration form the auth modal shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Tenant,
    Owner,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Owner => "Property Owner",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Tenant => "Register as Tenant",
            Self::Owner => "Register as Owner",
        }
    }

    pub fn form_id(self) -> &'static str {
        match self {
            Self::Tenant => "form-tenant",
            Self::Owner => "form-owner",
        }
    }
}

/// Fields of one registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Result of submitting the auth modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub tab: AuthTab,
    pub full_name: String,
}

/// "Get Started" modal with separate tenant and owner forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthModal {
    pub open: bool,
    pub tab: AuthTab,
    tenant: RegistrationForm,
    owner: RegistrationForm,
}

impl AuthModal {
    pub fn open(&mut self, tab: AuthTab) {
        self.open = true;
        self.tab = tab;
    }

    /// Close and forget everything typed so far.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn select_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
    }

    pub fn form(&self, tab: AuthTab) -> &RegistrationForm {
        match tab {
            AuthTab::Tenant => &self.tenant,
            AuthTab::Owner => &self.owner,
        }
    }

    pub fn form_mut(&mut self, tab: AuthTab) -> &mut RegistrationForm {
        match tab {
            AuthTab::Tenant => &mut self.tenant,
            AuthTab::Owner => &mut self.owner,
        }
    }

    pub fn active_form(&self) -> &RegistrationForm {
        self.form(self.tab)
    }

    /// Take the active form's values and close the modal.
    pub fn submit(&mut self) -> Registration {
        let registration = Registration {
            tab: self.tab,
            full_name: self.active_form().full_name.trim().to_owned(),
        };
        self.close();
        registration
    }
}

/// All local state owned by the landing page.
#[derive(Clone, Debug, Default)]
pub struct LandingState {
    pub mobile_menu_open: bool,
    pub details: Option<Listing>,
    pub auth: AuthModal,
    favorites: BTreeSet<usize>,
    pub active_section: String,
}

impl LandingState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn open_details(&mut self, listing: Listing) {
        self.details = Some(listing);
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn toggle_favorite(&mut self, index: usize) {
        if !self.favorites.remove(&index) {
            self.favorites.insert(index);
        }
    }

    pub fn is_favorite(&self, index: usize) -> bool {
        self.favorites.contains(&index)
    }

    /// Returns true when the highlighted nav entry changed.
    pub fn set_active_section(&mut self, section: String) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }
}

/// Signed scroll distance for a carousel arrow (`-1` left, `1` right).
pub fn carousel_offset(direction: i8) -> f64 {
    f64::from(direction.signum()) * CAROUSEL_STEP_PX
}
