pub mod alert;
pub mod filter;
pub mod listing;
pub mod profile;
