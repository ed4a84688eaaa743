//! Core logic for Polyglot.
//!
//! This crate contains pure logic with ZERO web dependencies.
//!
//! # Modules
//!
//! - `currency` - Currency table, minor-unit formatting and exchange rates
//! - `i18n` - Language list and currency conversion queries

pub mod currency;
pub mod i18n;
