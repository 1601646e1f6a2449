//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs and chrome. Shared state arrives either as
//! props from the owning page or, for toasts and records, through Leptos
//! context providers installed by `App`.

pub mod auth_dialog;
pub mod details_modal;
pub mod error_panel;
pub mod landlord_layout;
pub mod listing_card;
pub mod map_picker_dialog;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
pub mod toast_host;
