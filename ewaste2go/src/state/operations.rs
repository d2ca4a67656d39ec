//! Every mutation of the user and pickup list goes through here. A failed
//! operation returns before writing anything.

use super::forms::{
    cash_value, ListingForm, LocationForm, PartnerForm, PaymentForm, ProfileForm, ScheduleForm,
};
use super::patch::{SettingChange, UserPatch};
use super::validators;
use super::view::View;
use super::{AppState, Notice, ProfileModal, ScheduleState};
use crate::error::AppError;
use chrono::Local;
use ewaste_data::{
    ClaimId, ClaimedReward, LocationId, PaymentMethodId, Pickup, PickupId, PickupStatus, Reward,
    UserStats,
};
use rand::Rng;

/// Result of a successful cash-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashOut {
    pub points: u32,
    /// RM, two decimals
    pub cash_value: String,
}

impl AppState {
    pub fn login(&mut self) {
        tracing::info!("User signed in");
        self.is_authenticated = true;
        self.auth = Default::default();
    }

    pub fn logout(&mut self) {
        tracing::info!("User signed out");
        self.is_authenticated = false;
        self.view = View::Home;
        self.profile.modal = None;
        self.active_tracking_pickup = None;
    }

    pub fn complete_onboarding(&mut self) {
        tracing::info!("Onboarding completed");
        self.has_onboarded = true;
    }

    pub fn navigate(&mut self, view: View) {
        tracing::debug!("Navigating {:?} -> {:?}", self.view, view);
        self.view = view;
    }

    /// There is no history; back always lands on the dashboard
    pub fn navigate_back(&mut self) {
        self.navigate(View::Home);
    }

    /// First pickup that is assigned or on its way
    pub fn active_pickup(&self) -> Option<&Pickup> {
        self.pickups.iter().find(|p| p.status.is_active())
    }

    pub fn tracked_pickup(&self) -> Option<&Pickup> {
        let id = self.active_tracking_pickup.as_ref()?;
        self.pickups.iter().find(|p| &p.id == id)
    }

    /// The pickup the ticker should be advancing, if any: the tracking view
    /// is showing and the tracked pickup is in transit
    pub fn tracking_should_run(&self) -> Option<PickupId> {
        if !self.is_authenticated || self.view != View::Tracking {
            return None;
        }
        self.tracked_pickup()
            .filter(|p| p.status == PickupStatus::InTransit)
            .map(|p| p.id.clone())
    }

    pub fn track(&mut self, id: PickupId) -> Result<(), AppError> {
        if !self.pickups.iter().any(|p| p.id == id) {
            return Err(AppError::not_found(format!("Pickup {}", id)));
        }
        tracing::info!("Tracking pickup {}", id);
        self.active_tracking_pickup = Some(id);
        self.tracking.reset();
        self.navigate(View::Tracking);
        Ok(())
    }

    pub fn advance_tracking(&mut self) {
        self.tracking.advance();
    }

    pub fn schedule_pickup(&mut self, form: &ScheduleForm) -> Result<PickupId, AppError> {
        let pickup = validators::validate_and_build_pickup(form)?;
        let id = pickup.id.clone();
        tracing::info!("Scheduled pickup {} ({} items)", id, pickup.items.len());

        self.pickups.insert(0, pickup);
        self.schedule = ScheduleState {
            driver_arrived: self.schedule.driver_arrived,
            ..ScheduleState::default()
        };
        self.navigate(View::Home);
        self.notice = Some(Notice::info("Pickup Scheduled! Driver assigned."));
        Ok(id)
    }

    pub fn update_user(&mut self, patch: UserPatch) -> Result<(), AppError> {
        patch.validate()?;
        tracing::debug!("Applying user patch: {:?}", patch);
        patch.apply_to(&mut self.user);
        Ok(())
    }

    fn debit_points(&mut self, points: u32) -> Result<(), AppError> {
        let available = self.user.stats.reward_points;
        let remaining = available
            .checked_sub(points)
            .ok_or(AppError::InsufficientPoints {
                needed: points,
                available,
            })?;
        self.update_user(UserPatch {
            stats: Some(UserStats {
                reward_points: remaining,
                ..self.user.stats
            }),
            ..UserPatch::default()
        })
    }

    pub fn cash_out(&mut self, points: u32) -> Result<CashOut, AppError> {
        self.debit_points(points)?;
        let cash_out = CashOut {
            points,
            cash_value: cash_value(points),
        };
        tracing::info!("Cashed out {} points (RM {})", points, cash_out.cash_value);
        self.notice = Some(Notice::info(format!("Cashed out RM {}", cash_out.cash_value)));
        Ok(cash_out)
    }

    pub fn redeem_reward(&mut self, reward: &Reward) -> Result<ClaimId, AppError> {
        let available = self.user.stats.reward_points;
        if available < reward.cost {
            return Err(AppError::InsufficientPoints {
                needed: reward.cost,
                available,
            });
        }

        let claim = ClaimedReward {
            id: ClaimId::generate(),
            reward_id: reward.id.clone(),
            name: reward.name.clone(),
            image_url: reward.image_url.clone(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            code: format!("RW-{}", rand::rng().random_range(0..10_000)),
        };
        let id = claim.id.clone();

        let mut claimed = self.user.claimed_rewards.clone();
        claimed.insert(0, claim);
        self.update_user(UserPatch {
            stats: Some(UserStats {
                reward_points: available - reward.cost,
                ..self.user.stats
            }),
            claimed_rewards: Some(claimed),
            ..UserPatch::default()
        })?;

        tracing::info!("Redeemed reward {} for {} points", reward.id, reward.cost);
        self.notice = Some(Notice::info(format!("Redeemed {}!", reward.name)));
        Ok(id)
    }

    pub fn update_setting(&mut self, change: SettingChange) {
        tracing::info!("Setting changed: {:?}", change);
        match change {
            SettingChange::Notifications(on) => self.settings.notifications = on,
            SettingChange::LocationTracking(on) => self.settings.location_tracking = on,
            SettingChange::Lang(lang) => self.settings.lang = lang,
            SettingChange::DarkMode(on) => self.settings.dark_mode = on,
        }
    }

    pub fn add_location(&mut self, form: &LocationForm) -> Result<LocationId, AppError> {
        let location = validators::validate_and_build_location(form, LocationId::generate())?;
        let id = location.id.clone();

        let mut locations = self.user.saved_locations.clone();
        locations.push(location);
        self.update_user(UserPatch {
            saved_locations: Some(locations),
            ..UserPatch::default()
        })?;
        tracing::info!("Saved location {}", id);
        Ok(id)
    }

    pub fn edit_location(&mut self, id: &LocationId, form: &LocationForm) -> Result<(), AppError> {
        let index = self
            .user
            .saved_locations
            .iter()
            .position(|l| &l.id == id)
            .ok_or_else(|| AppError::not_found(format!("Location {}", id)))?;
        let location = validators::validate_and_build_location(form, id.clone())?;

        let mut locations = self.user.saved_locations.clone();
        locations[index] = location;
        self.update_user(UserPatch {
            saved_locations: Some(locations),
            ..UserPatch::default()
        })?;
        tracing::info!("Updated location {}", id);
        Ok(())
    }

    pub fn delete_location(&mut self, id: &LocationId) -> Result<(), AppError> {
        if self.user.location(id).is_none() {
            return Err(AppError::not_found(format!("Location {}", id)));
        }
        let locations = self
            .user
            .saved_locations
            .iter()
            .filter(|l| &l.id != id)
            .cloned()
            .collect();
        self.update_user(UserPatch {
            saved_locations: Some(locations),
            ..UserPatch::default()
        })?;
        tracing::info!("Deleted location {}", id);
        Ok(())
    }

    pub fn add_payment_method(&mut self, form: &PaymentForm) -> Result<PaymentMethodId, AppError> {
        let method = validators::validate_and_build_payment_method(form)?;
        let id = method.id.clone();

        let mut methods = self.user.payment_methods.clone();
        methods.push(method);
        self.update_user(UserPatch {
            payment_methods: Some(methods),
            ..UserPatch::default()
        })?;
        tracing::info!("Added payment method {}", id);
        Ok(id)
    }

    pub fn remove_payment_method(&mut self, id: &PaymentMethodId) -> Result<(), AppError> {
        if self.user.payment_method(id).is_none() {
            return Err(AppError::not_found(format!("Payment method {}", id)));
        }
        let methods = self
            .user
            .payment_methods
            .iter()
            .filter(|m| &m.id != id)
            .cloned()
            .collect();
        self.update_user(UserPatch {
            payment_methods: Some(methods),
            ..UserPatch::default()
        })?;
        tracing::info!("Removed payment method {}", id);
        Ok(())
    }

    pub fn save_profile(&mut self, form: &ProfileForm) -> Result<(), AppError> {
        let patch = validators::validate_and_build_profile_patch(form)?;
        self.update_user(patch)?;
        tracing::info!("Profile updated");
        Ok(())
    }

    /// Nothing is sent anywhere; the modal just flips to its success page
    pub fn submit_partnership(&mut self, form: &PartnerForm) -> Result<(), AppError> {
        validators::validate_partnership(form)?;
        tracing::info!("Partnership application from {}", form.company.trim());
        self.profile.modal = Some(ProfileModal::Partnership {
            form: PartnerForm::default(),
            submitted: true,
        });
        Ok(())
    }

    pub fn list_item(&mut self, form: &ListingForm) -> Result<(), AppError> {
        validators::validate_listing(form)?;
        tracing::info!(
            "Listed item '{}' at RM {} (image: {})",
            form.title.trim(),
            form.price.trim(),
            form.image.is_some()
        );
        self.market.listing = None;
        self.notice = Some(Notice::info("Item listed successfully!"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::i18n::Lang;
    use crate::state::forms::{LocationFormKind, ScheduleField};
    use crate::state::NoticeKind;
    use ewaste_data::{Coordinates, PaymentKind};

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state.complete_onboarding();
        state.login();
        state
    }

    fn reward(cost: u32) -> Reward {
        Reward {
            id: "r_test".into(),
            name: "Test Reward".to_string(),
            category: ewaste_data::RewardCategory::Voucher,
            cost,
            image_url: String::new(),
            stock: 1,
        }
    }

    fn filled_schedule() -> ScheduleForm {
        ScheduleForm {
            items: "Old TV, Radio".to_string(),
            date: "2025-03-01".to_string(),
            time: "10:00".to_string(),
            address: "Lot 123, Taman Kingfisher".to_string(),
            ..ScheduleForm::default()
        }
    }

    #[test]
    fn logout_returns_home_unauthenticated() {
        let mut state = signed_in();
        state.navigate(View::Rewards);
        state.logout();
        assert!(!state.is_authenticated);
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn onboarding_is_one_way() {
        let mut state = signed_in();
        state.logout();
        assert!(state.has_onboarded);
    }

    #[test]
    fn scheduling_prepends_assigned_pickup() {
        let mut state = signed_in();
        state.navigate(View::Schedule);
        let before = state.pickups.len();

        let id = state.schedule_pickup(&filled_schedule()).unwrap();

        assert_eq!(state.pickups.len(), before + 1);
        assert_eq!(state.pickups[0].id, id);
        assert_eq!(state.pickups[0].status, PickupStatus::Assigned);
        assert_eq!(state.view, View::Home);
        assert_eq!(state.schedule.form, ScheduleForm::default());
        assert_eq!(
            state.notice,
            Some(Notice::info("Pickup Scheduled! Driver assigned."))
        );
    }

    #[test]
    fn failed_schedule_changes_nothing() {
        let mut state = signed_in();
        state.navigate(View::Schedule);
        let draft = ScheduleForm {
            date: String::new(),
            focused: ScheduleField::Time,
            ..filled_schedule()
        };
        state.schedule.form = draft.clone();
        let pickups = state.pickups.clone();

        let err = state.schedule_pickup(&draft).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(state.pickups, pickups);
        assert_eq!(state.schedule.form, draft);
        assert_eq!(state.view, View::Schedule);
    }

    #[test]
    fn cash_out_debits_exactly() {
        let mut state = signed_in();
        let result = state.cash_out(200).unwrap();
        assert_eq!(result.cash_value, "20.00");
        assert_eq!(state.user.stats.reward_points, 150);
        assert_eq!(state.notice, Some(Notice::info("Cashed out RM 20.00")));
    }

    #[test]
    fn cash_out_beyond_balance_is_rejected() {
        let mut state = signed_in();
        let err = state.cash_out(400).unwrap_err();
        assert_eq!(
            err,
            AppError::InsufficientPoints {
                needed: 400,
                available: 350
            }
        );
        assert_eq!(state.user.stats.reward_points, 350);
    }

    #[test]
    fn redeem_debits_and_records_claim() {
        let mut state = signed_in();
        let id = state.redeem_reward(&reward(100)).unwrap();

        assert_eq!(state.user.stats.reward_points, 250);
        let claim = &state.user.claimed_rewards[0];
        assert_eq!(claim.id, id);
        assert_eq!(claim.reward_id, "r_test");
        let number: u32 = claim.code.strip_prefix("RW-").unwrap().parse().unwrap();
        assert!(number < 10_000);
    }

    #[test]
    fn redeem_after_cash_out_can_fall_short() {
        let mut state = signed_in();
        state.cash_out(200).unwrap();
        assert_eq!(state.user.stats.reward_points, 150);

        let err = state.redeem_reward(&reward(200)).unwrap_err();

        assert_eq!(
            err,
            AppError::InsufficientPoints {
                needed: 200,
                available: 150
            }
        );
        assert_eq!(state.user.stats.reward_points, 150);
        assert!(state.user.claimed_rewards.is_empty());
    }

    #[test]
    fn redeem_exact_balance_reaches_zero() {
        let mut state = signed_in();
        state.redeem_reward(&reward(350)).unwrap();
        assert_eq!(state.user.stats.reward_points, 0);
    }

    #[test]
    fn track_sets_view_and_resets_progress() {
        let mut state = signed_in();
        state.tracking.advance();
        state.track("pk_active_123".into()).unwrap();
        assert_eq!(state.view, View::Tracking);
        assert_eq!(state.tracking.value(), 30);
        assert_eq!(state.tracking_should_run(), Some("pk_active_123".into()));
    }

    #[test]
    fn tracking_completed_pickup_does_not_run_ticker() {
        let mut state = signed_in();
        state.track("pk_past_1".into()).unwrap();
        assert_eq!(state.tracking_should_run(), None);
    }

    #[test]
    fn tracking_unknown_pickup_fails() {
        let mut state = signed_in();
        assert!(matches!(
            state.track("nope".into()),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn active_pickup_is_first_match() {
        let mut state = signed_in();
        state.schedule_pickup(&filled_schedule()).unwrap();
        // newly scheduled (assigned) pickup now comes first
        assert_eq!(
            state.active_pickup().unwrap().status,
            PickupStatus::Assigned
        );
        state.pickups.iter_mut().for_each(|p| p.status = PickupStatus::Completed);
        assert!(state.active_pickup().is_none());
    }

    #[test]
    fn dark_mode_toggles_back() {
        let mut state = signed_in();
        let before = state.settings;
        state.update_setting(SettingChange::DarkMode(!before.dark_mode));
        state.update_setting(SettingChange::DarkMode(before.dark_mode));
        assert_eq!(state.settings, before);
        state.update_setting(SettingChange::Lang(Lang::Ms));
        assert_eq!(state.lang(), Lang::Ms);
    }

    #[test]
    fn location_round_trip() {
        let mut state = signed_in();
        let form = LocationForm {
            name: "Gym".to_string(),
            address: "Jalan Lintas".to_string(),
            ..LocationForm::editor()
        };
        let id = state.add_location(&form).unwrap();
        assert!(id.as_str().starts_with("loc_"));
        assert_eq!(state.user.saved_locations.len(), 3);

        let renamed = LocationForm {
            name: "Gym 2".to_string(),
            ..LocationForm::edit(state.user.location(&id).unwrap())
        };
        state.edit_location(&id, &renamed).unwrap();
        assert_eq!(state.user.location(&id).unwrap().name, "Gym 2");

        state.delete_location(&id).unwrap();
        assert_eq!(state.user.saved_locations.len(), 2);
        assert!(matches!(
            state.delete_location(&id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn delete_location_removes_only_that_entry() {
        let mut state = signed_in();
        let form = LocationForm {
            name: "Gym".to_string(),
            address: "Jalan Lintas".to_string(),
            ..LocationForm::editor()
        };
        let added = state.add_location(&form).unwrap();
        let office = state.user.saved_locations[1].clone();
        let gym = state.user.location(&added).unwrap().clone();

        state.delete_location(&LocationId::from("loc1")).unwrap();

        assert_eq!(state.user.saved_locations, vec![office, gym]);
    }

    #[test]
    fn quick_pin_location_defaults_name() {
        let mut state = signed_in();
        let form = LocationForm {
            kind: LocationFormKind::QuickPin,
            address: "Jalan Coastal".to_string(),
            coordinates: Some(Coordinates::new(5.95, 116.05)),
            ..LocationForm::default()
        };
        let id = state.add_location(&form).unwrap();
        assert_eq!(state.user.location(&id).unwrap().name, "New Location");
    }

    #[test]
    fn payment_methods_add_and_remove() {
        let mut state = signed_in();
        let form = PaymentForm {
            kind: PaymentKind::Bank,
            provider: "Maybank".to_string(),
            account_number: "1234".to_string(),
            account_holder: "Alex Wong".to_string(),
            ..PaymentForm::default()
        };
        let id = state.add_payment_method(&form).unwrap();
        assert!(id.as_str().starts_with("pm_"));
        assert_eq!(state.user.payment_methods.len(), 2);
        state.remove_payment_method(&id).unwrap();
        assert_eq!(state.user.payment_methods.len(), 1);

        let err = state.add_payment_method(&PaymentForm::default()).unwrap_err();
        assert_eq!(
            err,
            AppError::Validation(ValidationError::new(vec![
                "Provider",
                "Account Number",
                "Account Holder"
            ]))
        );
    }

    #[test]
    fn partnership_flips_to_submitted() {
        let mut state = signed_in();
        let form = PartnerForm {
            company: "Acme".to_string(),
            contact_name: "Siti".to_string(),
            email: "siti@acme.my".to_string(),
            phone: "088-111".to_string(),
            ..PartnerForm::default()
        };
        state.submit_partnership(&form).unwrap();
        assert_eq!(
            state.profile.modal,
            Some(ProfileModal::Partnership {
                form: PartnerForm::default(),
                submitted: true
            })
        );
    }

    #[test]
    fn listing_clears_draft() {
        let mut state = signed_in();
        let form = ListingForm {
            title: "Old GPU".to_string(),
            description: "Works".to_string(),
            price: "50".to_string(),
            ..ListingForm::default()
        };
        state.market.listing = Some(form.clone());
        state.list_item(&form).unwrap();
        assert!(state.market.listing.is_none());
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Info));
    }

    #[test]
    fn save_profile_rejects_blank_email() {
        let mut state = signed_in();
        let form = ProfileForm {
            email: String::new(),
            ..ProfileForm::from_user(&state.user)
        };
        assert!(state.save_profile(&form).is_err());
        assert_eq!(state.user.email, "alex.wong@example.com");
    }
}
