//! Breadbox Storefront library.
//!
//! A headless storefront client for the Breadbox ordering API. The library
//! exposes the ordering core - catalog, cart, checkout, and order status -
//! behind two collaborator seams:
//!
//! - [`api::OrdersApi`] - the HTTP/JSON request/response contract, with
//!   [`api::HttpClient`] as the production implementation
//! - [`render::Renderer`] - visual presentation; the core hands it data and
//!   never touches output itself
//!
//! [`app::StorefrontApp`] wires the pieces together and owns error recovery
//! at the point of each user action.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod render;
pub mod view;
