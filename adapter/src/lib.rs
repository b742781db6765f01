//! Redis Service Adapter Library
//!
//! Manifest generation and credential binding for an on-demand Redis
//! service offering.

pub mod binding;
pub mod cli;
pub mod errors;
pub mod logs;
pub mod manifest;
pub mod models;
pub mod options;
pub mod settings;
pub mod utils;
