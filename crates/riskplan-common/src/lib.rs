//! Riskplan Common - Shared domain types for the risk assessment engine
//!
//! This crate provides the vocabulary the engine crates speak:
//! - Asset and threat catalogs (with editable seed data)
//! - Risk level classification and treatment recommendations
//!
//! Everything here is a plain value type: no I/O, no shared state, no
//! runtime. Collections are owned by the caller and passed by reference
//! into the engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod scoring;

pub use catalog::{default_assets, default_threats, Asset, Threat, ValueTier};
pub use scoring::{ActionAdvice, RiskAction, RiskLevel};
