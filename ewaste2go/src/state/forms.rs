//! Form drafts. Each draft owns its field strings and which field has
//! focus; validation lives in `validators`, committing in `operations`.

use ewaste_data::{Coordinates, LocationId, PaymentKind, PaymentMethodId, SavedLocation, User};
use rand::Rng;
use url::Url;

/// Addresses the simulated reverse geocoder picks from
pub const MOCK_ADDRESSES: [&str; 4] = [
    "Jalan Tun Fuad Stephens, 88400 Kota Kinabalu",
    "Lorong 5, Taman Kingfisher, 88450 KK",
    "Block B, Lintas Square, 88300 Kota Kinabalu",
    "Jalan Coastal, Sembulan, 88100 Kota Kinabalu",
];

/// Common editing surface shared by the text forms, so one set of
/// commands (type, backspace, tab) drives whichever form has focus.
pub trait TextForm {
    fn focus_next(&mut self, forward: bool);

    /// The focused field's buffer, `None` when focus is on a non-text
    /// control such as the map or a toggle
    fn focused_input(&mut self) -> Option<&mut String>;

    fn is_text_focused(&self) -> bool;

    /// Whether arrow keys should move the map pin
    fn is_picker_focused(&self) -> bool {
        false
    }

    fn push_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.push(c);
        }
    }

    fn pop_char(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    fn clear_field(&mut self) {
        if let Some(input) = self.focused_input() {
            input.clear();
        }
    }

    /// Flip the focused toggle, if any. Returns whether anything changed.
    fn toggle_option(&mut self) -> bool {
        false
    }

    /// The map picker, when it is the focused control
    fn picker_mut(&mut self) -> Option<&mut MapPicker> {
        None
    }

    fn set_pin(&mut self, _coordinates: Coordinates, _address: String) {}
}

/// Next (or previous) entry of `fields` after `current`, wrapping around
fn cycle<T: Copy + PartialEq>(fields: &[T], current: T, forward: bool) -> T {
    let len = fields.len();
    let index = fields.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    fields[next]
}

/// Simulated map. The pin moves over a 100x100 grid and is turned into
/// coordinates around Kota Kinabalu when dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPicker {
    pub x: f64,
    pub y: f64,
}

impl Default for MapPicker {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl MapPicker {
    pub const STEP: f64 = 5.0;

    pub fn move_by(&mut self, dx: i8, dy: i8) {
        self.x = (self.x + f64::from(dx) * Self::STEP).clamp(0.0, 100.0);
        self.y = (self.y + f64::from(dy) * Self::STEP).clamp(0.0, 100.0);
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(5.9 + self.y / 1000.0, 116.0 + self.x / 1000.0)
    }

    /// Drop the pin: the coordinate under it plus a mock address
    pub fn drop_pin<R: Rng + ?Sized>(&self, rng: &mut R) -> (Coordinates, String) {
        let address = MOCK_ADDRESSES[rng.random_range(0..MOCK_ADDRESSES.len())];
        (self.coordinates(), address.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthField {
    FullName,
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub focused: AuthField,
}

impl AuthForm {
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password],
            AuthMode::SignUp => &[AuthField::FullName, AuthField::Email, AuthField::Password],
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        if !self.fields().contains(&self.focused) {
            self.focused = self.fields()[0];
        }
    }
}

impl TextForm for AuthForm {
    fn focus_next(&mut self, forward: bool) {
        self.focused = cycle(self.fields(), self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        Some(match self.focused {
            AuthField::FullName => &mut self.full_name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        })
    }

    fn is_text_focused(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScheduleField {
    #[default]
    Items,
    Date,
    Time,
    Address,
    Map,
    Locations,
}

impl ScheduleField {
    pub const ALL: [ScheduleField; 6] = [
        Self::Items,
        Self::Date,
        Self::Time,
        Self::Address,
        Self::Map,
        Self::Locations,
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleForm {
    /// Comma separated
    pub items: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub picker: MapPicker,
    pub focused: ScheduleField,
}

impl ScheduleForm {
    /// Quick-pick a saved location as the pickup address
    pub fn use_location(&mut self, location: &SavedLocation) {
        self.address = location.address.clone();
        self.coordinates = Some(location.coordinates);
    }
}

impl TextForm for ScheduleForm {
    fn focus_next(&mut self, forward: bool) {
        self.focused = cycle(&ScheduleField::ALL, self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focused {
            ScheduleField::Items => Some(&mut self.items),
            ScheduleField::Date => Some(&mut self.date),
            ScheduleField::Time => Some(&mut self.time),
            ScheduleField::Address => Some(&mut self.address),
            ScheduleField::Map | ScheduleField::Locations => None,
        }
    }

    fn is_text_focused(&self) -> bool {
        !matches!(self.focused, ScheduleField::Map | ScheduleField::Locations)
    }

    fn is_picker_focused(&self) -> bool {
        self.focused == ScheduleField::Map
    }

    fn picker_mut(&mut self) -> Option<&mut MapPicker> {
        (self.focused == ScheduleField::Map).then_some(&mut self.picker)
    }

    fn set_pin(&mut self, coordinates: Coordinates, address: String) {
        self.coordinates = Some(coordinates);
        self.address = address;
    }
}

/// Which flow opened a location draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationFormKind {
    /// Add/Edit dialog on the schedule screen: name and address required
    #[default]
    Editor,
    /// "Add new location" from the profile: a dropped pin is required and
    /// the name may be left blank
    QuickPin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationField {
    #[default]
    Name,
    Address,
    Map,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationForm {
    pub kind: LocationFormKind,
    /// Set when editing an existing location
    pub editing: Option<LocationId>,
    pub name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub picker: MapPicker,
    pub focused: LocationField,
}

impl LocationForm {
    pub fn editor() -> Self {
        Self::default()
    }

    pub fn edit(location: &SavedLocation) -> Self {
        Self {
            editing: Some(location.id.clone()),
            name: location.name.clone(),
            address: location.address.clone(),
            coordinates: Some(location.coordinates),
            ..Self::default()
        }
    }

    pub fn quick_pin() -> Self {
        Self {
            kind: LocationFormKind::QuickPin,
            focused: LocationField::Map,
            ..Self::default()
        }
    }

    fn fields(&self) -> &'static [LocationField] {
        match self.kind {
            LocationFormKind::Editor => {
                &[LocationField::Name, LocationField::Address, LocationField::Map]
            }
            LocationFormKind::QuickPin => {
                &[LocationField::Map, LocationField::Name, LocationField::Address]
            }
        }
    }
}

impl TextForm for LocationForm {
    fn focus_next(&mut self, forward: bool) {
        self.focused = cycle(self.fields(), self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focused {
            LocationField::Name => Some(&mut self.name),
            LocationField::Address => Some(&mut self.address),
            LocationField::Map => None,
        }
    }

    fn is_text_focused(&self) -> bool {
        self.focused != LocationField::Map
    }

    fn is_picker_focused(&self) -> bool {
        self.focused == LocationField::Map
    }

    fn picker_mut(&mut self) -> Option<&mut MapPicker> {
        (self.focused == LocationField::Map).then_some(&mut self.picker)
    }

    fn set_pin(&mut self, coordinates: Coordinates, address: String) {
        self.coordinates = Some(coordinates);
        self.address = address;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentField {
    Kind,
    #[default]
    Provider,
    AccountNumber,
    AccountHolder,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub kind: PaymentKind,
    pub provider: String,
    pub account_number: String,
    pub account_holder: String,
    pub focused: PaymentField,
}

impl TextForm for PaymentForm {
    fn focus_next(&mut self, forward: bool) {
        const FIELDS: [PaymentField; 4] = [
            PaymentField::Kind,
            PaymentField::Provider,
            PaymentField::AccountNumber,
            PaymentField::AccountHolder,
        ];
        self.focused = cycle(&FIELDS, self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focused {
            PaymentField::Kind => None,
            PaymentField::Provider => Some(&mut self.provider),
            PaymentField::AccountNumber => Some(&mut self.account_number),
            PaymentField::AccountHolder => Some(&mut self.account_holder),
        }
    }

    fn is_text_focused(&self) -> bool {
        self.focused != PaymentField::Kind
    }

    fn toggle_option(&mut self) -> bool {
        if self.focused == PaymentField::Kind {
            self.kind = self.kind.toggle();
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileField {
    #[default]
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub focused: ProfileField,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            focused: ProfileField::default(),
        }
    }
}

impl TextForm for ProfileForm {
    fn focus_next(&mut self, forward: bool) {
        const FIELDS: [ProfileField; 3] =
            [ProfileField::Name, ProfileField::Email, ProfileField::Phone];
        self.focused = cycle(&FIELDS, self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        Some(match self.focused {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
        })
    }

    fn is_text_focused(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartnerField {
    #[default]
    Company,
    ContactName,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerForm {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub focused: PartnerField,
}

impl TextForm for PartnerForm {
    fn focus_next(&mut self, forward: bool) {
        const FIELDS: [PartnerField; 5] = [
            PartnerField::Company,
            PartnerField::ContactName,
            PartnerField::Email,
            PartnerField::Phone,
            PartnerField::Message,
        ];
        self.focused = cycle(&FIELDS, self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        Some(match self.focused {
            PartnerField::Company => &mut self.company,
            PartnerField::ContactName => &mut self.contact_name,
            PartnerField::Email => &mut self.email,
            PartnerField::Phone => &mut self.phone,
            PartnerField::Message => &mut self.message,
        })
    }

    fn is_text_focused(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingField {
    #[default]
    Image,
    Title,
    Description,
    Price,
}

/// "Sell your item" draft for the marketplace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    /// Path as typed; becomes `image` once attached
    pub image_path: String,
    pub image: Option<Url>,
    pub title: String,
    pub description: String,
    /// Free text in RM, e.g. "50"
    pub price: String,
    pub focused: ListingField,
}

impl TextForm for ListingForm {
    fn focus_next(&mut self, forward: bool) {
        const FIELDS: [ListingField; 4] = [
            ListingField::Image,
            ListingField::Title,
            ListingField::Description,
            ListingField::Price,
        ];
        self.focused = cycle(&FIELDS, self.focused, forward);
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        Some(match self.focused {
            ListingField::Image => &mut self.image_path,
            ListingField::Title => &mut self.title,
            ListingField::Description => &mut self.description,
            ListingField::Price => &mut self.price,
        })
    }

    fn is_text_focused(&self) -> bool {
        true
    }
}

/// Points are converted in blocks of 100
pub const CASH_OUT_STEP: u32 = 100;
pub const CASH_OUT_MIN: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashOutForm {
    pub points: u32,
    pub payment: Option<PaymentMethodId>,
}

impl Default for CashOutForm {
    fn default() -> Self {
        Self {
            points: CASH_OUT_MIN,
            payment: None,
        }
    }
}

impl CashOutForm {
    /// Slide the amount by one step, staying within [100, balance]
    pub fn adjust(&mut self, increase: bool, balance: u32) {
        let max = balance.max(CASH_OUT_MIN);
        self.points = if increase {
            (self.points + CASH_OUT_STEP).min(max)
        } else {
            self.points.saturating_sub(CASH_OUT_STEP).max(CASH_OUT_MIN)
        };
    }

    /// RM value, 100 points = RM 10.00
    pub fn cash_value(&self) -> String {
        cash_value(self.points)
    }

    /// Move the payment selection through `methods`, wrapping
    pub fn cycle_payment(&mut self, methods: &[PaymentMethodId], forward: bool) {
        if methods.is_empty() {
            return;
        }
        self.payment = Some(match &self.payment {
            None if forward => methods[0].clone(),
            None => methods[methods.len() - 1].clone(),
            Some(current) => {
                let index = methods.iter().position(|m| m == current).unwrap_or(0);
                let next = if forward {
                    (index + 1) % methods.len()
                } else {
                    (index + methods.len() - 1) % methods.len()
                };
                methods[next].clone()
            }
        });
    }
}

pub fn cash_value(points: u32) -> String {
    format!("{:.2}", f64::from(points) / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn tab_cycles_and_wraps() {
        let mut form = PartnerForm::default();
        form.focus_next(false);
        assert_eq!(form.focused, PartnerField::Message);
        form.focus_next(true);
        form.focus_next(true);
        assert_eq!(form.focused, PartnerField::ContactName);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = AuthForm::default();
        "alex@x.my".chars().for_each(|c| form.push_char(c));
        form.focus_next(true);
        form.push_char('p');
        form.pop_char();
        form.push_char('q');
        assert_eq!(form.email, "alex@x.my");
        assert_eq!(form.password, "q");
    }

    #[test]
    fn sign_up_adds_name_field() {
        let mut form = AuthForm::default();
        form.toggle_mode();
        assert_eq!(form.fields().len(), 3);
        form.focus_next(false);
        assert_eq!(form.focused, AuthField::FullName);
        form.toggle_mode();
        assert_eq!(form.focused, AuthField::Email);
    }

    #[test]
    fn map_and_toggle_fields_ignore_typing() {
        let mut form = ScheduleForm {
            focused: ScheduleField::Map,
            ..ScheduleForm::default()
        };
        form.push_char('x');
        assert_eq!(form, ScheduleForm { focused: ScheduleField::Map, ..ScheduleForm::default() });
        assert!(!form.is_text_focused());

        let mut payment = PaymentForm {
            focused: PaymentField::Kind,
            ..PaymentForm::default()
        };
        assert!(payment.toggle_option());
        assert_eq!(payment.kind, PaymentKind::Bank);
    }

    #[test]
    fn picker_maps_grid_to_coordinates() {
        let mut picker = MapPicker::default();
        picker.move_by(2, -1);
        assert_eq!((picker.x, picker.y), (60.0, 45.0));
        let coords = picker.coordinates();
        assert!((coords.lat - 5.945).abs() < 1e-9);
        assert!((coords.lng - 116.06).abs() < 1e-9);

        picker.move_by(100, 100);
        assert_eq!((picker.x, picker.y), (100.0, 100.0));
    }

    #[test]
    fn dropped_pin_gets_mock_address() {
        let mut rng = StdRng::seed_from_u64(7);
        let (_, address) = MapPicker::default().drop_pin(&mut rng);
        assert!(MOCK_ADDRESSES.contains(&address.as_str()));
    }

    #[test]
    fn picker_only_reachable_when_map_focused() {
        let mut form = LocationForm::editor();
        assert!(form.picker_mut().is_none());
        let mut quick = LocationForm::quick_pin();
        assert!(quick.picker_mut().is_some());
    }

    #[test]
    fn cash_out_slider_is_bounded() {
        let mut form = CashOutForm::default();
        form.adjust(true, 350);
        form.adjust(true, 350);
        assert_eq!(form.points, 300);
        form.adjust(true, 350);
        assert_eq!(form.points, 300);
        form.adjust(false, 350);
        form.adjust(false, 350);
        form.adjust(false, 350);
        assert_eq!(form.points, 100);
        assert_eq!(form.cash_value(), "10.00");
    }

    #[test]
    fn payment_selection_wraps() {
        let methods = vec![PaymentMethodId::from("pm1"), PaymentMethodId::from("pm2")];
        let mut form = CashOutForm::default();
        form.cycle_payment(&methods, true);
        assert_eq!(form.payment, Some(methods[0].clone()));
        form.cycle_payment(&methods, false);
        assert_eq!(form.payment, Some(methods[1].clone()));
        form.cycle_payment(&methods, true);
        assert_eq!(form.payment, Some(methods[0].clone()));
    }
}
