//! Network and Client utilities

pub mod client;

pub use client::{ClientUtils, HttpClientConfig};
