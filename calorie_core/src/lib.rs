#![forbid(unsafe_code)]

//! Core domain model and business logic for the caltrack food log.
//!
//! This crate provides:
//! - Domain types (food records, day logs, the ledger)
//! - USDA nutrition database client and response types
//! - Nutrient extraction from food reports
//! - Ledger accumulation and persistence

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod usda;
pub mod client;
pub mod nutrients;
pub mod ledger;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use client::{NutritionApi, UsdaClient};
pub use usda::ApiResponse;
pub use nutrients::extract;
pub use store::to_tab_indented;
