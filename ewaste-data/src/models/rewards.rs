use super::{ClaimId, RewardId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardCategory {
    Voucher,
    Merchandise,
    Cash,
    Environmental,
}

impl RewardCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Voucher => "Voucher",
            Self::Merchandise => "Merchandise",
            Self::Cash => "Cash",
            Self::Environmental => "Environmental",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub name: String,
    pub category: RewardCategory,
    pub cost: u32,
    pub image_url: String,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedReward {
    pub id: ClaimId,
    pub reward_id: RewardId,
    pub name: String,
    pub image_url: String,
    /// Local date the reward was claimed, pre-formatted for display
    pub date: String,
    /// Redemption code shown to the merchant
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerDirection {
    Credit,
    Debit,
}

/// A line in the rewards transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub name: String,
    pub date: String,
    /// Signed, pre-formatted amount such as "+ RM 5.00"
    pub amount: String,
    pub direction: LedgerDirection,
    pub status: String,
}
