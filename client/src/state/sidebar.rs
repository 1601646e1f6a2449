//! Landlord sidebar navigation state.
//!
//! DESIGN
//! ======
//! Active-route matching is a pure function of the current path so the
//! highlight can be computed identically during SSR and after hydration.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// One entry in the landlord console navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", path: "/landlord/dashboard", icon: "⌂" },
    NavItem { title: "My Properties", path: "/landlord/properties", icon: "▦" },
    NavItem { title: "Add Property", path: "/landlord/properties/new", icon: "+" },
    NavItem { title: "Verification", path: "/landlord/verification", icon: "☑" },
    NavItem { title: "Settings", path: "/landlord/settings", icon: "⚙" },
    NavItem { title: "Inbox", path: "/landlord/inbox", icon: "✉" },
];

/// True when `current` equals `target` or is nested below it.
pub fn is_active(current: &str, target: &str) -> bool {
    current
        .strip_prefix(target)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// The single navigation entry to highlight for `current`.
///
/// Nested targets overlap (`/landlord/properties/new` sits under
/// `/landlord/properties`), so the longest matching target wins.
pub fn active_nav_item(current: &str) -> Option<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| is_active(current, item.path))
        .max_by_key(|item| item.path.len())
}

/// Expanded/collapsed state of the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Used by the mobile backdrop, which only ever closes the sidebar.
    pub fn collapse(&mut self) {
        self.collapsed = true;
    }

    pub fn brand(self) -> &'static str {
        if self.collapsed { "NY" } else { "NyumbaYangu" }
    }
}
