use super::rewards::ClaimedReward;
use super::{Coordinates, LocationId, PaymentMethodId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub stats: UserStats,
    pub saved_locations: Vec<SavedLocation>,
    pub claimed_rewards: Vec<ClaimedReward>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl User {
    pub fn location(&self, id: &LocationId) -> Option<&SavedLocation> {
        self.saved_locations.iter().find(|l| &l.id == id)
    }

    pub fn payment_method(&self, id: &PaymentMethodId) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|p| &p.id == id)
    }

    /// Single-letter avatar shown on the profile header
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_pickups: u32,
    pub reward_points: u32,
    pub items_recycled: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: LocationId,
    /// Label such as "Home" or "Office"
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Bank,
    #[default]
    Ewallet,
}

impl PaymentKind {
    pub fn toggle(self) -> Self {
        match self {
            Self::Bank => Self::Ewallet,
            Self::Ewallet => Self::Bank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    /// e.g. "Maybank", "Touch 'n Go eWallet"
    pub provider: String,
    pub account_number: String,
    pub account_holder: String,
}
