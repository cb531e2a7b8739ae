//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod weather;
