//! Test Module
//!
//! Test suite for the Kindred engine.
//!
//! ## Test Categories
//! - `brain_tests`: Emotion analysis and intent matching
//! - `catalog_tests`: JSON catalog loading, validation, extension
//! - `config_tests`: Environment overrides for engine tuning
//! - `session_tests`: Full turns, crisis handling, insights, reproducibility

pub mod catalog_tests;
