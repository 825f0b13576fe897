//! Core functionality
//!
//! This module contains the removal workflow and the pieces it is built from.

pub mod api;
pub mod applications;
pub mod batch;
pub mod cache;
pub mod notifications;
