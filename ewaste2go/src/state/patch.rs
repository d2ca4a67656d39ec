use crate::error::{AppError, ValidationError};
use crate::i18n::Lang;
use ewaste_data::{ClaimedReward, PaymentMethod, SavedLocation, User, UserStats};
use std::collections::HashSet;
use std::hash::Hash;

/// Partial update of the current user. Only the fields that are `Some`
/// are written; `phone: Some(None)` clears the phone number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub stats: Option<UserStats>,
    pub saved_locations: Option<Vec<SavedLocation>>,
    pub claimed_rewards: Option<Vec<ClaimedReward>>,
    pub payment_methods: Option<Vec<PaymentMethod>>,
}

fn first_duplicate<'a, T: Eq + Hash + 'a>(ids: impl IntoIterator<Item = &'a T>) -> Option<&'a T> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the whole patch before anything is written
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            missing.push("Name");
        }
        if self.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            missing.push("Email");
        }
        ValidationError::check(missing)?;

        if let Some(locations) = &self.saved_locations {
            if let Some(id) = first_duplicate(locations.iter().map(|l| &l.id)) {
                return Err(AppError::DuplicateId(id.to_string()));
            }
        }
        if let Some(claims) = &self.claimed_rewards {
            if let Some(id) = first_duplicate(claims.iter().map(|c| &c.id)) {
                return Err(AppError::DuplicateId(id.to_string()));
            }
        }
        if let Some(methods) = &self.payment_methods {
            if let Some(id) = first_duplicate(methods.iter().map(|m| &m.id)) {
                return Err(AppError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    /// Write the present fields into `user`. Call `validate` first.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(stats) = self.stats {
            user.stats = stats;
        }
        if let Some(locations) = self.saved_locations {
            user.saved_locations = locations;
        }
        if let Some(claims) = self.claimed_rewards {
            user.claimed_rewards = claims;
        }
        if let Some(methods) = self.payment_methods {
            user.payment_methods = methods;
        }
    }
}

/// A single preference change from the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    Notifications(bool),
    LocationTracking(bool),
    Lang(Lang),
    DarkMode(bool),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewaste_data::fixtures;

    #[test]
    fn only_present_fields_are_written() {
        let mut user = fixtures::initial_user();
        let before = user.clone();

        UserPatch {
            name: Some("Alexandra".to_string()),
            ..UserPatch::default()
        }
        .apply_to(&mut user);

        assert_eq!(user.name, "Alexandra");
        assert_eq!(user.email, before.email);
        assert_eq!(user.saved_locations, before.saved_locations);
    }

    #[test]
    fn phone_can_be_cleared() {
        let mut user = fixtures::initial_user();
        UserPatch {
            phone: Some(None),
            ..UserPatch::default()
        }
        .apply_to(&mut user);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let patch = UserPatch {
            name: Some("  ".to_string()),
            email: Some("a@b.my".to_string()),
            ..UserPatch::default()
        };
        assert_eq!(
            patch.validate(),
            Err(AppError::Validation(ValidationError::new(vec!["Name"])))
        );
    }

    #[test]
    fn duplicate_location_ids_are_rejected() {
        let user = fixtures::initial_user();
        let mut locations = user.saved_locations.clone();
        locations.push(locations[0].clone());
        let patch = UserPatch {
            saved_locations: Some(locations),
            ..UserPatch::default()
        };
        assert_eq!(patch.validate(), Err(AppError::DuplicateId("loc1".to_string())));
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(UserPatch::default().is_empty());
        assert!(!UserPatch {
            stats: Some(UserStats::default()),
            ..UserPatch::default()
        }
        .is_empty());
    }
}
