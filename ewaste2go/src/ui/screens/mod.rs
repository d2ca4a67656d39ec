pub mod auth;
pub mod guide;
pub mod home;
pub mod market;
pub mod onboarding;
pub mod points;
pub mod profile;
pub mod rewards;
pub mod schedule;
pub mod tracking;
