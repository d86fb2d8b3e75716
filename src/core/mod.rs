//! Core components of the `qcew-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`QcewClient`] and its builder.
//! - The primary [`QcewError`] type.
//! - Internal networking helpers.

/// The main client (`QcewClient`), builder, and configuration.
pub mod client;
/// The primary error type (`QcewError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::QcewClient`
pub use client::{QcewClient, QcewClientBuilder};
pub use error::QcewError;
