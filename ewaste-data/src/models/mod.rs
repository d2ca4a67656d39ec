pub mod collection_points;
pub mod guide;
pub mod marketplace;
pub mod pickups;
pub mod rewards;
pub mod user;

use crate::macros::id_type;
use serde::{Deserialize, Serialize};

id_type!(UserId, "u");
id_type!(LocationId, "loc");
id_type!(PickupId, "pk");
id_type!(PointId, "cp");
id_type!(AdId, "ad");
id_type!(RewardId, "r");
id_type!(ClaimId, "cl");
id_type!(PaymentMethodId, "pm");

impl LocationId {
    /// Id for the throwaway location attached to a freshly scheduled pickup
    pub fn generate_temporary() -> Self {
        Self(format!("loc_temp_{}", uuid::Uuid::new_v4().simple()))
    }
}

/// Default map center (Kota Kinabalu)
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 5.975,
    lng: 116.09,
};

/// Fallback pin used when a pickup is scheduled without a picked coordinate
pub const DEFAULT_PICKUP_COORDINATES: Coordinates = Coordinates {
    lat: 5.98,
    lng: 116.09,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        DEFAULT_CENTER
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lat: {:.4}, Lng: {:.4}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_differ() {
        let a = PickupId::generate();
        let b = PickupId::generate();
        assert!(a.as_str().starts_with("pk_"));
        assert_ne!(a, b);
        assert!(LocationId::generate_temporary()
            .as_str()
            .starts_with("loc_temp_"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = RewardId::from("r1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"r1\"");
        assert_eq!(id, "r1");
    }

    #[test]
    fn coordinates_display_four_decimals() {
        assert_eq!(
            Coordinates::new(5.978519, 116.073479).to_string(),
            "Lat: 5.9785, Lng: 116.0735"
        );
    }
}
