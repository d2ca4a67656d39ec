use super::user::SavedLocation;
use super::{Coordinates, PickupId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickupStatus {
    Pending,
    Assigned,
    InTransit,
    Completed,
    Cancelled,
}

impl PickupStatus {
    /// Statuses that make a pickup eligible for the dashboard's active card
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Assigned | Self::InTransit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InTransit => "in-transit",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: PickupId,
    /// YYYY-MM-DD as entered
    pub date: String,
    /// HH:MM as entered
    pub time: String,
    pub items: Vec<String>,
    pub status: PickupStatus,
    pub driver_name: Option<String>,
    pub driver_vehicle: Option<String>,
    pub driver_phone: Option<String>,
    pub tracking_id: Option<String>,
    pub current_location: Option<Coordinates>,
    pub location: SavedLocation,
}

impl Pickup {
    /// "Washing Machine +1" style label used in pickup lists
    pub fn items_summary(&self) -> String {
        match self.items.split_first() {
            None => String::new(),
            Some((first, [])) => first.clone(),
            Some((first, rest)) => format!("{} +{}", first, rest.len()),
        }
    }

    pub fn driver_first_name(&self) -> Option<&str> {
        self.driver_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationId;

    fn pickup(items: &[&str]) -> Pickup {
        Pickup {
            id: PickupId::from("pk1"),
            date: "2025-02-20".to_string(),
            time: "14:30".to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            status: PickupStatus::InTransit,
            driver_name: Some("Mohd Rizal".to_string()),
            driver_vehicle: None,
            driver_phone: None,
            tracking_id: None,
            current_location: None,
            location: SavedLocation {
                id: LocationId::from("loc1"),
                name: "Home".to_string(),
                address: "Lot 123".to_string(),
                coordinates: Coordinates::default(),
            },
        }
    }

    #[test]
    fn items_summary_counts_extra_items() {
        assert_eq!(pickup(&["Microwave"]).items_summary(), "Microwave");
        assert_eq!(
            pickup(&["Washing Machine", "Old Laptop"]).items_summary(),
            "Washing Machine +1"
        );
        assert_eq!(pickup(&[]).items_summary(), "");
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&PickupStatus::InTransit).unwrap();
        assert_eq!(json, "\"in-transit\"");
        assert!(PickupStatus::Assigned.is_active());
        assert!(!PickupStatus::Completed.is_active());
    }

    #[test]
    fn driver_first_name_splits_on_whitespace() {
        assert_eq!(pickup(&[]).driver_first_name(), Some("Mohd"));
    }
}
