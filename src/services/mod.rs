pub mod alerts;
pub mod filters;
pub mod profile;
