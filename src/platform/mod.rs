//! YouTube Data API client and related functionality

pub mod api;
pub mod client;
pub mod models;
pub mod youtube;

pub use api::*;
pub use client::*;
pub use models::*;
pub use youtube::*;
