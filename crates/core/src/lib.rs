//! Pixel Paradise Core - Shared types and cart model.
//!
//! This crate provides the types shared by every Pixel Paradise component
//! and the cart state machine that drives the storefront.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no async. The cart is modelled as a reducer: every mutation is a
//! [`cart::CartCommand`] applied to a [`cart::CartState`] snapshot, producing
//! a complete new snapshot. The host (the storefront) owns the snapshot and
//! decides where it lives; this crate never touches storage.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, and catalog records
//! - [`cart`] - Cart state, commands, and derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartCommand, CartLine, CartState};
pub use types::*;
