//! API layer

pub mod web;
