pub mod fixtures;
mod macros;
pub mod models;

pub use models::{
    collection_points::{CollectionPoint, PointKind},
    guide::{FaqEntry, GuideEntry},
    marketplace::{AdContact, MarketplaceAd},
    pickups::{Pickup, PickupStatus},
    rewards::{ClaimedReward, LedgerDirection, LedgerEntry, Reward, RewardCategory},
    user::{PaymentKind, PaymentMethod, SavedLocation, User, UserStats},
    AdId, ClaimId, Coordinates, LocationId, PaymentMethodId, PickupId, PointId, RewardId, UserId,
};
