//! Server-side domain models and parameter types.
//!
//! This module contains the domain models used throughout the service layer: the
//! values a proposal produces and consumes, lock handles, donator perks, and the DTOs
//! returned by the HTTP application.

pub mod api;
pub mod lock;
pub mod marker;
pub mod perks;
pub mod proposal;
