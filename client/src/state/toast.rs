//! Transient notifications shown in the corner of every page.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain queue held in an `RwSignal` at the app root. The
//! host component schedules a dismissal per toast id, so a toast removed early
//! by the user makes the later timer a no-op.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Oldest toasts are dropped past this many.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "toast",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push_variant(title.into(), description.into(), ToastVariant::Default)
    }

    pub fn push_destructive(&mut self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push_variant(title.into(), description.into(), ToastVariant::Destructive)
    }

    fn push_variant(&mut self, title: String, description: String, variant: ToastVariant) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast { id, title, description, variant });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|toast| toast.id != id);
    }
}
