//! View state for pages and shared chrome.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with synchronous transitions. Components hold
//! them in `RwSignal`s and call the transitions from event handlers, which keeps
//! every rule testable without a browser.

pub mod add_property;
pub mod inbox;
pub mod landing;
pub mod map_picker;
pub mod scroll_spy;
pub mod settings;
pub mod sidebar;
pub mod toast;
