//! # Lavash Storefront
//!
//! > **The ordering side of a shawarma delivery site.**
//!
//! Shoppers browse a fixed menu, pick one item, add extras (and a size, where
//! the catalog offers sizes), fill in name, phone and address, and place the
//! order. Every visitor gets an isolated page session; all sessions live in one
//! Tokio task and are processed strictly in order.
//!
//! ## Module Tour
//!
//! ### 1. Data ([`catalog`], [`model`], [`pricing`])
//! - **Role**: The menu and add-ons, what a page holds, and how a selection is priced.
//! - **Key items**: [`Catalog`](catalog::Catalog), [`StorefrontPage`](model::StorefrontPage),
//!   [`price_breakdown`](pricing::price_breakdown).
//!
//! ### 2. The Engine ([`framework`])
//! A generic session loop, [`SessionActor`](framework::SessionActor), that owns any
//! [`SessionEntity`](framework::SessionEntity) and runs its events one at a time.
//!
//! ### 3. The Page ([`storefront_actor`])
//! The selection state machine: select, toggle, size, cancel, edit, submit, navigate.
//!
//! ### 4. The Interface ([`clients`])
//! [`StorefrontClient`](clients::StorefrontClient) turns each interaction into one typed call.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) builds the catalog, spawns the loop
//! and shuts it down.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOREFRONT_CATALOG=sized RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pricing;
pub mod storefront_actor;
