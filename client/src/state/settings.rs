//! Account settings forms.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            full_name: "John Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            phone: "+254 700 123 456".to_owned(),
        }
    }
}

impl ProfileForm {
    /// Avatar fallback: first letter of each name part.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordOutcome {
    Mismatch,
    Changed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    /// Check the confirmation; on success the three fields are cleared.
    pub fn submit(&mut self) -> PasswordOutcome {
        if self.new != self.confirm {
            return PasswordOutcome::Mismatch;
        }
        *self = Self::default();
        PasswordOutcome::Changed
    }
}
