//! Record types rendered by the landing page and the landlord console.
//!
//! DESIGN
//! ======
//! Records are plain serde structs so the embedded fixtures and any future
//! backend can produce the same shapes. Nothing here is ever mutated after
//! decoding; view-local changes live in `state`.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Review state of an identity document or a property listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Rejected,
    /// Anything the source does not recognise.
    #[default]
    #[serde(other)]
    NotSubmitted,
}

impl VerificationStatus {
    /// Text shown inside the status badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Verified => "✅ Verified",
            Self::Pending => "🕒 Pending",
            Self::Rejected => "❌ Rejected",
            Self::NotSubmitted => "Not Submitted",
        }
    }

    /// BEM modifier used by `status-badge--*` and `status-icon--*`.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::NotSubmitted => "none",
        }
    }

    /// Glyph shown next to verification headings.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Verified => "✔",
            Self::Pending => "◷",
            Self::Rejected => "!",
            Self::NotSubmitted => "▢",
        }
    }
}

/// Colour family of a featured listing's corner badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    #[default]
    New,
    Verified,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::New => "listing-badge listing-badge--new",
            Self::Verified => "listing-badge listing-badge--verified",
        }
    }
}

/// A featured listing on the public landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub location: String,
    /// Display string, e.g. `Ksh 45,000/mo`.
    pub price: String,
    pub image: String,
    pub description: String,
    pub badge: String,
    #[serde(default)]
    pub badge_tone: BadgeTone,
}

/// A landlord's own property as listed in the console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: String,
    pub status: VerificationStatus,
    pub views: u32,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One row of the dashboard's recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub property: String,
    pub status: VerificationStatus,
    /// Relative time string, e.g. `2 days ago`.
    pub date: String,
    pub location: String,
}

/// An inquiry from a prospective tenant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: String,
    /// Property title the message refers to (by name, not id).
    pub property: String,
    pub body: String,
    pub time: String,
    #[serde(default)]
    pub unread: bool,
}

/// The landlord's identity-document check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdVerification {
    pub status: VerificationStatus,
    pub uploaded_date: NaiveDate,
    pub document_type: String,
}

impl IdVerification {
    pub fn summary(&self) -> String {
        if self.status == VerificationStatus::Verified {
            format!("{} verified on {}", self.document_type, format_date(self.uploaded_date))
        } else {
            "Upload your ID to verify your identity".to_owned()
        }
    }
}

/// Review progress for a single property's documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyVerification {
    pub id: u32,
    pub property_name: String,
    pub status: VerificationStatus,
    #[serde(default)]
    pub documents: Vec<String>,
    pub submitted_date: NaiveDate,
    #[serde(default)]
    pub verified_date: Option<NaiveDate>,
}

/// Headline numbers on the landlord dashboard, derived from the property list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub posted: usize,
    pub total_views: u64,
    pub verified: usize,
    pub pending: usize,
}

impl DashboardStats {
    pub fn from_properties(properties: &[Property]) -> Self {
        let count = |status| properties.iter().filter(|p| p.status == status).count();
        Self {
            posted: properties.len(),
            total_views: properties.iter().map(|p| u64::from(p.views)).sum(),
            verified: count(VerificationStatus::Verified),
            pending: count(VerificationStatus::Pending),
        }
    }
}

/// US-style short date without zero padding (`1/15/2024`).
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
