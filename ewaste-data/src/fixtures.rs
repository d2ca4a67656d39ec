//! Seed data the app starts from. Everything here is mock content for the
//! Kota Kinabalu pilot; nothing is fetched.

use crate::models::{
    collection_points::{CollectionPoint, PointKind},
    guide::{FaqEntry, GuideEntry},
    marketplace::{AdContact, MarketplaceAd},
    pickups::{Pickup, PickupStatus},
    rewards::{LedgerDirection, LedgerEntry, Reward, RewardCategory},
    user::{PaymentKind, PaymentMethod, SavedLocation, User, UserStats},
    Coordinates, LocationId,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

fn location(id: &str, name: &str, address: &str, lat: f64, lng: f64) -> SavedLocation {
    SavedLocation {
        id: LocationId::from(id),
        name: name.to_string(),
        address: address.to_string(),
        coordinates: Coordinates::new(lat, lng),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn initial_user() -> User {
    User {
        id: "u1".into(),
        name: "Alex Wong".to_string(),
        email: "alex.wong@example.com".to_string(),
        phone: Some("+60 12-345 6789".to_string()),
        stats: UserStats {
            total_pickups: 12,
            reward_points: 350,
            items_recycled: 45,
        },
        saved_locations: vec![
            location(
                "loc1",
                "Home",
                "Lot 123, Taman Kingfisher, 88450 Kota Kinabalu",
                5.98,
                116.09,
            ),
            location(
                "loc2",
                "Office",
                "Level 5, Suria Sabah, 88000 Kota Kinabalu",
                5.99,
                116.07,
            ),
        ],
        claimed_rewards: Vec::new(),
        payment_methods: vec![PaymentMethod {
            id: "pm1".into(),
            kind: PaymentKind::Ewallet,
            provider: "Touch 'n Go eWallet".to_string(),
            account_number: "+60 12-345 6789".to_string(),
            account_holder: "Alex Wong".to_string(),
        }],
    }
}

pub fn collection_points() -> Vec<CollectionPoint> {
    vec![
        CollectionPoint {
            id: "cp1".into(),
            name: "Dewan Bandaraya Kota Kinabalu (DBKK)".to_string(),
            kind: PointKind::Government,
            description: Some(
                "Official city council collection center for household e-waste.".to_string(),
            ),
            address: "No. 1, Jalan Bandaran, 88675 Kota Kinabalu, Sabah".to_string(),
            phone: "+60 88-521 800".to_string(),
            email: "aduan@dbkk.sabah.gov.my".to_string(),
            operating_hours: "Mon-Fri: 8:00 AM - 5:00 PM".to_string(),
            accepted_items: strings(&["All E-Waste", "Large Appliances"]),
            is_dbkk: true,
            coordinates: Coordinates::new(5.978519, 116.073479),
        },
        CollectionPoint {
            id: "cp2".into(),
            name: "Legenda Bumimas Sdn Bhd".to_string(),
            kind: PointKind::Partner,
            description: Some(
                "Licensed scheduled waste transporter and contractor specialized in industrial waste management."
                    .to_string(),
            ),
            address: "Lot 5, Jalan 3 KKIP Selatan, Kota Kinabalu Industrial Park, 88460 KK"
                .to_string(),
            phone: "+60 88-498 111".to_string(),
            email: "info@legendabumimas.com".to_string(),
            operating_hours: "Mon-Sat: 8:00 AM - 5:00 PM".to_string(),
            accepted_items: strings(&["Industrial E-waste", "Heavy Machinery Parts", "Batteries"]),
            is_dbkk: false,
            coordinates: Coordinates::new(6.0821, 116.1345),
        },
        CollectionPoint {
            id: "cp3".into(),
            name: "NCT Forwarding & Shipping Sdn Bhd".to_string(),
            kind: PointKind::Partner,
            description: Some(
                "Logistics partner specializing in secure e-waste transportation and shipping services."
                    .to_string(),
            ),
            address: "Wisma NCT, Jalan Lintas, Kolombong, 88450 Kota Kinabalu".to_string(),
            phone: "+60 88-383 999".to_string(),
            email: "ops@nctshipping.com".to_string(),
            operating_hours: "Mon-Fri: 8:30 AM - 5:30 PM".to_string(),
            accepted_items: strings(&["Bulk Electronics", "Servers", "Logistics Equipment"]),
            is_dbkk: false,
            coordinates: Coordinates::new(5.9715, 116.1172),
        },
        CollectionPoint {
            id: "cp4".into(),
            name: "Redsoft Solution Sdn Bhd".to_string(),
            kind: PointKind::Partner,
            description: Some(
                "IT solutions provider offering buy-back and recycling for used computer hardware."
                    .to_string(),
            ),
            address: "Lot 12, 1st Floor, Block B, Lintas Square, 88300 Kota Kinabalu".to_string(),
            phone: "+60 88-262 777".to_string(),
            email: "support@redsoft.com.my".to_string(),
            operating_hours: "Mon-Fri: 9:00 AM - 6:00 PM".to_string(),
            accepted_items: strings(&["Laptops", "Desktops", "Monitors", "Peripherals"]),
            is_dbkk: false,
            coordinates: Coordinates::new(5.9523, 116.0918),
        },
        CollectionPoint {
            id: "cp5".into(),
            name: "Kualiti Alam Sdn Bhd".to_string(),
            kind: PointKind::Partner,
            description: Some(
                "Comprehensive hazardous waste management and recycling services for scheduled waste."
                    .to_string(),
            ),
            address: "Branch Office, Alamesra Plaza Utama, 88400 Kota Kinabalu".to_string(),
            phone: "+60 88-448 888".to_string(),
            email: "sabah@kualitialam.com".to_string(),
            operating_hours: "Mon-Fri: 8:00 AM - 5:00 PM".to_string(),
            accepted_items: strings(&[
                "Toxic E-waste",
                "Industrial Batteries",
                "Fluorescent Lamps",
            ]),
            is_dbkk: false,
            coordinates: Coordinates::new(6.0345, 116.1389),
        },
        CollectionPoint {
            id: "cp6".into(),
            name: "E Concern (Borneo) Sdn Bhd".to_string(),
            kind: PointKind::Partner,
            description: Some(
                "Dedicated e-waste recycling facility focusing on environmental sustainability and recovery."
                    .to_string(),
            ),
            address: "Lot 8, Lok Kawi Industrial Estate, 88200 Putatan".to_string(),
            phone: "+60 88-765 432".to_string(),
            email: "enquiry@econcern.com.my".to_string(),
            operating_hours: "Mon-Sat: 8:00 AM - 6:00 PM".to_string(),
            accepted_items: strings(&["Household Electronics", "PCBs", "Consumer Appliances"]),
            is_dbkk: false,
            coordinates: Coordinates::new(5.8812, 116.0543),
        },
    ]
}

fn ad(
    id: &str,
    title: &str,
    description: &str,
    price_range: &str,
    image: u32,
    company_name: &str,
    contact: (&str, &str, &str),
    posted_date: NaiveDate,
) -> MarketplaceAd {
    MarketplaceAd {
        id: id.into(),
        title: title.to_string(),
        description: description.to_string(),
        price_range: price_range.to_string(),
        image_url: format!("https://picsum.photos/400/300?random={}", image),
        company_name: company_name.to_string(),
        contact: AdContact {
            phone: contact.0.to_string(),
            email: contact.1.to_string(),
            address: contact.2.to_string(),
        },
        posted_date,
    }
}

pub fn marketplace_ads() -> Vec<MarketplaceAd> {
    vec![
        ad(
            "ad1",
            "Searching for Old Motherboards",
            "We are looking for bulk defective motherboards for metal extraction. High payout for bulk quantities.",
            "RM 15 - RM 45 per kg",
            1,
            "Legenda Bumimas",
            ("+60 88-498 111", "buying@legendabumimas.com", "Lot 5, KKIP Selatan"),
            date(2025, 1, 15),
        ),
        ad(
            "ad2",
            "Buying Broken LCD/LED Monitors",
            "We purchase cracked or non-functional monitors for parts harvesting.",
            "RM 10 - RM 30 per unit",
            2,
            "Redsoft Solution",
            ("+60 88-262 777", "parts@redsoft.com.my", "Lintas Square"),
            date(2025, 2, 1),
        ),
        ad(
            "ad3",
            "Copper Cable Scrap Needed",
            "Clean or insulated copper wire wanted. Competitive market rates.",
            "Market Rate (Daily Update)",
            3,
            "E Concern (Borneo)",
            ("+60 88-765 432", "scrap@econcern.com.my", "Lok Kawi Industrial Estate"),
            date(2025, 2, 10),
        ),
        ad(
            "ad4",
            "Vintage Computer Parts",
            "Collectors looking for vintage CPUs (486, Pentium) and mechanical keyboards.",
            "RM 50 - RM 500 depending on rarity",
            4,
            "Redsoft Solution",
            ("+60 88-262 777", "retro@redsoft.com.my", "Lintas Square, KK"),
            date(2025, 2, 12),
        ),
    ]
}

fn reward(id: &str, name: &str, category: RewardCategory, cost: u32, stock: u32, image: u32) -> Reward {
    Reward {
        id: id.into(),
        name: name.to_string(),
        category,
        cost,
        image_url: format!("https://picsum.photos/200/200?random={}", image),
        stock,
    }
}

pub fn rewards() -> Vec<Reward> {
    use RewardCategory::*;
    vec![
        reward("r1", "RM 10 Grocery Voucher", Voucher, 100, 50, 5),
        reward("r2", "Bamboo Cutlery Set", Merchandise, 150, 25, 6),
        reward("r3", "RM 20 E-Wallet Reload", Cash, 200, 100, 7),
        reward("r4", "Plant a Tree in Sabah", Environmental, 50, 999, 8),
        reward("r5", "Recycled Tote Bag", Merchandise, 80, 40, 9),
        reward("r6", "Eco-Friendly Notebook", Merchandise, 60, 60, 10),
    ]
}

/// Past cash-in/cash-out movements shown under the claimed rewards
pub fn rewards_history() -> Vec<LedgerEntry> {
    [
        ("h1", "Cash In (Pickup #TRK-8821)", "2025-02-20", "+ RM 5.00", LedgerDirection::Credit, "Success"),
        ("h2", "Cash In (Pickup #TRK-1002)", "2025-01-15", "+ RM 3.50", LedgerDirection::Credit, "Success"),
        ("h3", "Cash Out to TNG", "2025-01-20", "- RM 10.00", LedgerDirection::Debit, "Completed"),
    ]
    .into_iter()
    .map(|(id, name, date, amount, direction, status)| LedgerEntry {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        amount: amount.to_string(),
        direction,
        status: status.to_string(),
    })
    .collect()
}

pub fn pickups() -> Vec<Pickup> {
    vec![
        Pickup {
            id: "pk_active_123".into(),
            date: "2025-02-20".to_string(),
            time: "14:30".to_string(),
            items: strings(&["Washing Machine", "Old Laptop"]),
            status: PickupStatus::InTransit,
            driver_name: Some("Mohd Rizal".to_string()),
            driver_vehicle: Some("Toyota Hilux (SAB 1234 A)".to_string()),
            driver_phone: None,
            tracking_id: Some("TRK-8821".to_string()),
            current_location: Some(Coordinates::new(5.975, 116.09)),
            location: location("loc1", "Home", "Lot 123, Taman Kingfisher", 5.98, 116.09),
        },
        Pickup {
            id: "pk_past_1".into(),
            date: "2025-01-15".to_string(),
            time: "10:00".to_string(),
            items: strings(&["CRT Monitor", "Keyboard"]),
            status: PickupStatus::Completed,
            driver_name: Some("James Tan".to_string()),
            driver_vehicle: None,
            driver_phone: None,
            tracking_id: None,
            current_location: None,
            location: location("loc1", "Home", "Lot 123, Taman Kingfisher", 5.98, 116.09),
        },
        Pickup {
            id: "pk_past_2".into(),
            date: "2024-12-20".to_string(),
            time: "09:15".to_string(),
            items: strings(&["Microwave"]),
            status: PickupStatus::Completed,
            driver_name: Some("James Tan".to_string()),
            driver_vehicle: None,
            driver_phone: None,
            tracking_id: None,
            current_location: None,
            location: location("loc2", "Office", "Level 5, Suria Sabah", 5.99, 116.07),
        },
    ]
}

pub fn guide() -> Vec<GuideEntry> {
    [
        (
            "Reduce",
            "Minimize e-waste by maintaining your devices, buying only what you need, and choosing durable products.",
        ),
        (
            "Reuse",
            "Extend the life of electronics. Repair broken devices, donate working items to charity, or sell them in our marketplace.",
        ),
        (
            "Recycle",
            "The last resort. Send broken, unrepairable electronics to certified recyclers (like us!) to recover valuable materials.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| GuideEntry {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn faq() -> Vec<FaqEntry> {
    [
        (
            "How do I schedule a pickup?",
            "Navigate to the Home tab and tap the large '+' button or the 'Schedule Pickup' quick action. Fill in your item details, select a date and time, and pin your location on the map.",
        ),
        (
            "What items can I recycle?",
            "We accept a wide range of household electronics including laptops, smartphones, tablets, washing machines, refrigerators, and televisions. For industrial e-waste, please check our Partner section.",
        ),
        (
            "How do points work?",
            "You earn Reward Points for every successful pickup. Generally, 1kg of e-waste earns you 10 points. These points can be converted to cash or redeemed for vouchers in the Rewards tab.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_user_matches_pilot_account() {
        let user = initial_user();
        assert_eq!(user.stats.reward_points, 350);
        assert_eq!(user.saved_locations.len(), 2);
        assert_eq!(user.payment_methods.len(), 1);
        assert!(user.claimed_rewards.is_empty());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let points: HashSet<_> = collection_points().into_iter().map(|p| p.id).collect();
        assert_eq!(points.len(), 6);
        let rewards: HashSet<_> = rewards().into_iter().map(|r| r.id).collect();
        assert_eq!(rewards.len(), 6);
    }

    #[test]
    fn exactly_one_government_point() {
        let government: Vec<_> = collection_points()
            .into_iter()
            .filter(|p| p.is_government())
            .collect();
        assert_eq!(government.len(), 1);
        assert!(government[0].is_dbkk);
    }

    #[test]
    fn first_seed_pickup_is_in_transit() {
        let pickups = pickups();
        assert_eq!(pickups[0].status, PickupStatus::InTransit);
        assert_eq!(pickups[0].tracking_id.as_deref(), Some("TRK-8821"));
    }
}
