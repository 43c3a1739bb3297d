pub mod health;
pub mod plans;
pub mod preferences;
pub mod profile;
