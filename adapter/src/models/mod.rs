//! Data models exchanged with the broker

pub mod binding;
pub mod deployment;
pub mod manifest;
pub mod plan;
pub mod request;
