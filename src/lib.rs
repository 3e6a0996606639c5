//! Country data lookup service
//!
//! A small REST service answering entry lookups, searches and country
//! comparisons over a fixed table of locations.

pub mod api;
pub mod config;
pub mod entries;
pub mod models;
