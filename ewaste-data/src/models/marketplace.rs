use super::AdId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdContact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A "we are buying" listing posted by a recycling company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceAd {
    pub id: AdId,
    pub title: String,
    pub description: String,
    pub price_range: String,
    pub image_url: String,
    pub company_name: String,
    pub contact: AdContact,
    pub posted_date: NaiveDate,
}
