//! # API Layer
//!
//! Outward-facing interfaces over the mint engine.

pub mod rest;
