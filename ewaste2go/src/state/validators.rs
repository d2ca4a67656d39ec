use crate::error::{AppError, ValidationError};
use crate::state::forms::{
    AuthForm, AuthMode, LocationForm, LocationFormKind, ListingForm, PartnerForm, PaymentForm,
    ProfileForm, ScheduleForm, CASH_OUT_MIN,
};
use crate::state::patch::UserPatch;
use ewaste_data::{
    models::DEFAULT_PICKUP_COORDINATES, LocationId, PaymentMethod, PaymentMethodId, Pickup,
    PickupId, PickupStatus, SavedLocation,
};

/// Name given to a quick-pinned location left unnamed
pub const DEFAULT_LOCATION_NAME: &str = "New Location";
/// Name of the throwaway location attached to a scheduled pickup
pub const PINNED_LOCATION_NAME: &str = "Pinned Location";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Labels of the fields whose value is blank
fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| *label)
        .collect()
}

/// Split a comma separated item list, dropping empty pieces
pub fn parse_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn validate_auth(form: &AuthForm) -> Result<(), AppError> {
    let mut fields = vec![("Email", form.email.as_str()), ("Password", form.password.as_str())];
    if form.mode == AuthMode::SignUp {
        fields.insert(0, ("Full Name", form.full_name.as_str()));
    }
    ValidationError::check(missing(&fields))
}

/// Validate the schedule draft and build the pickup it describes
pub fn validate_and_build_pickup(form: &ScheduleForm) -> Result<Pickup, AppError> {
    let items = parse_items(&form.items);
    let mut missing_fields = missing(&[
        ("Date", form.date.as_str()),
        ("Time", form.time.as_str()),
        ("Address", form.address.as_str()),
    ]);
    if items.is_empty() {
        missing_fields.insert(0, "Items");
    }
    ValidationError::check(missing_fields)?;

    Ok(Pickup {
        id: PickupId::generate(),
        date: form.date.trim().to_string(),
        time: form.time.trim().to_string(),
        items,
        status: PickupStatus::Assigned,
        driver_name: None,
        driver_vehicle: None,
        driver_phone: None,
        tracking_id: None,
        current_location: None,
        location: SavedLocation {
            id: LocationId::generate_temporary(),
            name: PINNED_LOCATION_NAME.to_string(),
            address: form.address.trim().to_string(),
            coordinates: form.coordinates.unwrap_or(DEFAULT_PICKUP_COORDINATES),
        },
    })
}

/// Validate a location draft and build the saved location. `id` is the
/// id to give it: the edited location's id, or a fresh one.
pub fn validate_and_build_location(
    form: &LocationForm,
    id: LocationId,
) -> Result<SavedLocation, AppError> {
    match form.kind {
        LocationFormKind::Editor => {
            ValidationError::check(missing(&[
                ("Name", form.name.as_str()),
                ("Address", form.address.as_str()),
            ]))?;
        }
        LocationFormKind::QuickPin => {
            let mut missing_fields = missing(&[("Address", form.address.as_str())]);
            if form.coordinates.is_none() {
                missing_fields.insert(0, "Map Pin");
            }
            ValidationError::check(missing_fields)?;
        }
    }

    Ok(SavedLocation {
        id,
        name: optional(&form.name).unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string()),
        address: form.address.trim().to_string(),
        coordinates: form.coordinates.unwrap_or_default(),
    })
}

pub fn validate_and_build_payment_method(form: &PaymentForm) -> Result<PaymentMethod, AppError> {
    ValidationError::check(missing(&[
        ("Provider", form.provider.as_str()),
        ("Account Number", form.account_number.as_str()),
        ("Account Holder", form.account_holder.as_str()),
    ]))?;

    Ok(PaymentMethod {
        id: PaymentMethodId::generate(),
        kind: form.kind,
        provider: form.provider.trim().to_string(),
        account_number: form.account_number.trim().to_string(),
        account_holder: form.account_holder.trim().to_string(),
    })
}

/// Profile edits become a patch on name, email and phone. A blank phone
/// clears it.
pub fn validate_and_build_profile_patch(form: &ProfileForm) -> Result<UserPatch, AppError> {
    ValidationError::check(missing(&[
        ("Name", form.name.as_str()),
        ("Email", form.email.as_str()),
    ]))?;

    Ok(UserPatch {
        name: Some(form.name.trim().to_string()),
        email: Some(form.email.trim().to_string()),
        phone: Some(optional(&form.phone)),
        ..UserPatch::default()
    })
}

pub fn validate_partnership(form: &PartnerForm) -> Result<(), AppError> {
    ValidationError::check(missing(&[
        ("Company Name", form.company.as_str()),
        ("Contact Person", form.contact_name.as_str()),
        ("Email", form.email.as_str()),
        ("Phone Number", form.phone.as_str()),
    ]))
}

pub fn validate_listing(form: &ListingForm) -> Result<(), AppError> {
    ValidationError::check(missing(&[
        ("Item Name", form.title.as_str()),
        ("Description", form.description.as_str()),
        ("Price", form.price.as_str()),
    ]))
}

/// A cash-out needs at least one block of points, no more than the
/// balance, and a chosen payment method whenever the user has any.
pub fn validate_cash_out(
    points: u32,
    balance: u32,
    methods: &[PaymentMethod],
    selected: Option<&PaymentMethodId>,
) -> Result<(), AppError> {
    if balance < CASH_OUT_MIN || points > balance {
        return Err(AppError::InsufficientPoints {
            needed: points.max(CASH_OUT_MIN),
            available: balance,
        });
    }
    match selected {
        None if !methods.is_empty() => Err(AppError::PaymentMethodRequired),
        Some(id) if !methods.iter().any(|m| &m.id == id) => {
            Err(AppError::not_found(format!("Payment method {}", id)))
        }
        _ => Ok(()),
    }
}
