//! Configuration and the inbound data model

pub mod config;
pub mod models;
