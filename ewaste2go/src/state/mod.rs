pub mod forms;
pub mod operations;
pub mod patch;
pub mod reducer;
pub mod search;
pub mod validators;
pub mod view;

use crate::config::Settings;
use crate::i18n::Lang;
use crate::tracking::TrackingProgress;
use ewaste_data::{
    fixtures, CollectionPoint, FaqEntry, GuideEntry, LedgerEntry, LocationId, MarketplaceAd,
    Pickup, PickupId, Reward, User,
};
use forms::{
    AuthForm, CashOutForm, ListingForm, LocationForm, PartnerForm, PaymentForm, ProfileForm,
    ScheduleForm, TextForm,
};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;
use view::{TopLevel, View};

pub use patch::{SettingChange, UserPatch};

pub const ONBOARDING_STEPS: usize = 4;

/// User preferences from the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub notifications: bool,
    pub location_tracking: bool,
    pub lang: Lang,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            location_tracking: true,
            lang: Lang::En,
            dark_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking popup; while one is showing, Enter/Esc is the only input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Input mode for screens with a filter bar
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Cards on the home dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    SchedulePickup,
    CollectionPoints,
    SellEwaste,
    Guide,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        Self::SchedulePickup,
        Self::CollectionPoints,
        Self::SellEwaste,
        Self::Guide,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::SchedulePickup => "schedulePickup",
            Self::CollectionPoints => "collectionPoints",
            Self::SellEwaste => "sellEwaste",
            Self::Guide => "guide",
        }
    }

    pub fn target(&self) -> View {
        match self {
            Self::SchedulePickup => View::Schedule,
            Self::CollectionPoints => View::Points,
            Self::SellEwaste => View::Market,
            Self::Guide => View::Guide,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub step: usize,
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub selected_action: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PointsState {
    pub filter_query: String,
    pub input_mode: InputMode,
    pub table_state: RefCell<TableState>,
}

#[derive(Debug, Clone, Default)]
pub struct MarketState {
    pub table_state: RefCell<TableState>,
    pub listing: Option<ListingForm>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RewardsTab {
    #[default]
    History,
    Catalog,
}

impl RewardsTab {
    pub fn toggle(self) -> Self {
        match self {
            Self::History => Self::Catalog,
            Self::Catalog => Self::History,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RewardsOverlay {
    CashOut(CashOutForm),
    MyQr,
    Scanning(ThrobberState),
}

#[derive(Debug, Clone, Default)]
pub struct RewardsState {
    pub tab: RewardsTab,
    pub history_state: RefCell<TableState>,
    pub catalog_state: RefCell<TableState>,
    pub overlay: Option<RewardsOverlay>,
}

impl RewardsState {
    pub fn is_scanning(&self) -> bool {
        matches!(self.overlay, Some(RewardsOverlay::Scanning(_)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    EditProfile,
    SavedLocations,
    PaymentMethods,
    Settings,
    History,
    Partnership,
    Support,
    SignOut,
}

impl ProfileMenuItem {
    pub const ALL: [ProfileMenuItem; 8] = [
        Self::EditProfile,
        Self::SavedLocations,
        Self::PaymentMethods,
        Self::Settings,
        Self::History,
        Self::Partnership,
        Self::Support,
        Self::SignOut,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::EditProfile => "editProfile",
            Self::SavedLocations => "savedLocations",
            Self::PaymentMethods => "paymentMethods",
            Self::Settings => "appSettings",
            Self::History => "pickupHistory",
            Self::Partnership => "partnershipProgram",
            Self::Support => "helpSupport",
            Self::SignOut => "signOut",
        }
    }
}

/// Rows of the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DarkMode,
    Notifications,
    LocationTracking,
    Language,
    Privacy,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 5] = [
        Self::DarkMode,
        Self::Notifications,
        Self::LocationTracking,
        Self::Language,
        Self::Privacy,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileModal {
    EditProfile(ProfileForm),
    SavedLocations {
        selected: usize,
        adding: Option<LocationForm>,
    },
    PaymentMethods {
        selected: usize,
        adding: Option<PaymentForm>,
    },
    Settings {
        selected: usize,
    },
    /// Opened from settings; closing it returns there
    Privacy,
    History,
    Partnership {
        form: PartnerForm,
        submitted: bool,
    },
    Support {
        selected: usize,
        expanded: Option<usize>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub table_state: RefCell<TableState>,
    pub modal: Option<ProfileModal>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    pub form: ScheduleForm,
    /// Highlighted row of "My Locations"
    pub location_index: usize,
    pub editor: Option<LocationForm>,
    pub pending_delete: Option<LocationId>,
    pub driver_arrived: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    // Session
    pub is_authenticated: bool,
    pub has_onboarded: bool,
    pub view: View,

    // Domain data
    pub user: User,
    pub pickups: Vec<Pickup>,
    pub collection_points: Vec<CollectionPoint>,
    pub ads: Vec<MarketplaceAd>,
    pub rewards: Vec<Reward>,
    pub ledger: Vec<LedgerEntry>,
    pub guide: Vec<GuideEntry>,
    pub faq: Vec<FaqEntry>,
    pub settings: Preferences,

    // Tracking
    pub active_tracking_pickup: Option<PickupId>,
    pub tracking: TrackingProgress,

    // Per-screen UI state
    pub onboarding: OnboardingState,
    pub auth: AuthForm,
    pub home: HomeState,
    pub points: PointsState,
    pub market: MarketState,
    pub rewards_screen: RewardsState,
    pub profile: ProfileState,
    pub schedule: ScheduleState,

    // UI state
    pub notice: Option<Notice>,
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            is_authenticated: false,
            has_onboarded: false,
            view: View::Home,

            user: fixtures::initial_user(),
            pickups: fixtures::pickups(),
            collection_points: fixtures::collection_points(),
            ads: fixtures::marketplace_ads(),
            rewards: fixtures::rewards(),
            ledger: fixtures::rewards_history(),
            guide: fixtures::guide(),
            faq: fixtures::faq(),
            settings: Preferences::default(),

            active_tracking_pickup: None,
            tracking: TrackingProgress::default(),

            onboarding: OnboardingState::default(),
            auth: AuthForm::default(),
            home: HomeState::default(),
            points: PointsState::default(),
            market: MarketState::default(),
            rewards_screen: RewardsState::default(),
            profile: ProfileState::default(),
            schedule: ScheduleState::default(),

            notice: None,
            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Fresh state seeded with the startup configuration
    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new();
        state.settings = Preferences {
            notifications: settings.notifications,
            location_tracking: settings.location_tracking,
            lang: settings.lang,
            dark_mode: settings.dark_mode,
        };
        state.has_onboarded = settings.skip_onboarding;
        state
    }

    pub fn top_level(&self) -> TopLevel {
        TopLevel::resolve(self.has_onboarded, self.is_authenticated, self.view)
    }

    pub fn lang(&self) -> Lang {
        self.settings.lang
    }

    /// The form that receives typed characters right now, if any
    pub fn active_form_mut(&mut self) -> Option<&mut dyn TextForm> {
        match self.top_level() {
            TopLevel::Onboarding => None,
            TopLevel::Auth => Some(&mut self.auth),
            TopLevel::Main(View::Market) => self
                .market
                .listing
                .as_mut()
                .map(|f| f as &mut dyn TextForm),
            TopLevel::Main(View::Profile) => match self.profile.modal.as_mut()? {
                ProfileModal::EditProfile(form) => Some(form),
                ProfileModal::SavedLocations {
                    adding: Some(form), ..
                } => Some(form),
                ProfileModal::PaymentMethods {
                    adding: Some(form), ..
                } => Some(form),
                ProfileModal::Partnership {
                    form,
                    submitted: false,
                } => Some(form),
                _ => None,
            },
            TopLevel::Main(View::Schedule) => match self.schedule.editor.as_mut() {
                Some(editor) => Some(editor),
                None => Some(&mut self.schedule.form),
            },
            TopLevel::Main(_) => None,
        }
    }

    pub fn active_form(&self) -> Option<&dyn TextForm> {
        match self.top_level() {
            TopLevel::Onboarding => None,
            TopLevel::Auth => Some(&self.auth),
            TopLevel::Main(View::Market) => {
                self.market.listing.as_ref().map(|f| f as &dyn TextForm)
            }
            TopLevel::Main(View::Profile) => match self.profile.modal.as_ref()? {
                ProfileModal::EditProfile(form) => Some(form),
                ProfileModal::SavedLocations {
                    adding: Some(form), ..
                } => Some(form),
                ProfileModal::PaymentMethods {
                    adding: Some(form), ..
                } => Some(form),
                ProfileModal::Partnership {
                    form,
                    submitted: false,
                } => Some(form),
                _ => None,
            },
            TopLevel::Main(View::Schedule) => match self.schedule.editor.as_ref() {
                Some(editor) => Some(editor),
                None => Some(&self.schedule.form),
            },
            TopLevel::Main(_) => None,
        }
    }

    /// Whether plain characters should be typed rather than treated as
    /// shortcuts
    pub fn is_typing(&self) -> bool {
        self.active_form()
            .map(|form| form.is_text_focused())
            .unwrap_or(false)
    }

    /// Rows of the rewards history: claimed rewards first, then the ledger
    pub fn history_len(&self) -> usize {
        self.user.claimed_rewards.len() + self.ledger.len()
    }

    /// Spinner of the QR scan overlay, advanced by the redraw ticker
    pub fn scan_throbber_mut(&mut self) -> Option<&mut ThrobberState> {
        match self.rewards_screen.overlay.as_mut() {
            Some(RewardsOverlay::Scanning(throbber)) => Some(throbber),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection over a table whose length is only known to the caller
pub trait Scrollable {
    fn table_state(&self) -> &RefCell<TableState>;

    /// Selected row clamped to `num_items`
    fn selected_index(&self, num_items: usize) -> Option<usize> {
        if num_items == 0 {
            return None;
        }
        let selected = self.table_state().borrow().selected().unwrap_or(0);
        Some(selected.min(num_items - 1))
    }

    fn select_prev(&self, num_items: usize) {
        if let Some(current) = self.selected_index(num_items) {
            let prev = if current == 0 { num_items - 1 } else { current - 1 };
            self.table_state().borrow_mut().select(Some(prev));
        }
    }

    fn select_next(&self, num_items: usize) {
        if let Some(current) = self.selected_index(num_items) {
            let next = if current + 1 >= num_items { 0 } else { current + 1 };
            self.table_state().borrow_mut().select(Some(next));
        }
    }

    fn reset_selection(&self) {
        self.table_state().borrow_mut().select(Some(0));
    }
}

impl Scrollable for PointsState {
    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for MarketState {
    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for RewardsState {
    fn table_state(&self) -> &RefCell<TableState> {
        match self.tab {
            RewardsTab::History => &self.history_state,
            RewardsTab::Catalog => &self.catalog_state,
        }
    }
}

impl Scrollable for ProfileState {
    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_onboarding() {
        let state = AppState::new();
        assert_eq!(state.top_level(), TopLevel::Onboarding);
        assert_eq!(state.user.stats.reward_points, 350);
        assert!(state.notice.is_none());
    }

    #[test]
    fn settings_seed_preferences() {
        let settings = Settings {
            lang: Lang::Ms,
            dark_mode: true,
            skip_onboarding: true,
            ..Settings::default()
        };
        let state = AppState::from_settings(&settings);
        assert_eq!(state.lang(), Lang::Ms);
        assert!(state.settings.dark_mode);
        assert_eq!(state.top_level(), TopLevel::Auth);
    }

    #[test]
    fn scrollable_wraps_both_ways() {
        let points = PointsState::default();
        assert_eq!(points.selected_index(3), Some(0));
        points.select_prev(3);
        assert_eq!(points.selected_index(3), Some(2));
        points.select_next(3);
        assert_eq!(points.selected_index(3), Some(0));
        assert_eq!(points.selected_index(0), None);
    }

    #[test]
    fn selection_is_clamped_after_list_shrinks() {
        let points = PointsState::default();
        points.table_state.borrow_mut().select(Some(5));
        assert_eq!(points.selected_index(2), Some(1));
    }

    #[test]
    fn auth_form_is_active_before_sign_in() {
        let mut state = AppState::new();
        state.has_onboarded = true;
        assert!(state.is_typing());
        state.is_authenticated = true;
        assert!(!state.is_typing());
        state.view = View::Schedule;
        assert!(state.is_typing());
    }
}
