//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (SQLite, config files).

pub mod app_config;
pub mod db;
