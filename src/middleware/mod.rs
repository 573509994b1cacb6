//! Middleware module
//!
//! Contains the Tower middleware applied to every route.

pub mod cors;
