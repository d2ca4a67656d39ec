use super::{Coordinates, PointId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Government,
    Partner,
    Ngo,
}

impl PointKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Partner => "Partner",
            Self::Ngo => "NGO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPoint {
    pub id: PointId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PointKind,
    pub description: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub operating_hours: String,
    pub accepted_items: Vec<String>,
    #[serde(default)]
    pub is_dbkk: bool,
    pub coordinates: Coordinates,
}

impl CollectionPoint {
    pub fn is_government(&self) -> bool {
        self.kind == PointKind::Government
    }
}
