extern crate chrono;
extern crate diesel;
extern crate tokio;

pub mod alerts;
pub mod config;
pub mod db;
pub mod logger;
pub mod matcher;
pub mod models;
pub mod producer;
pub mod scraper;
pub mod services;
pub mod web;
