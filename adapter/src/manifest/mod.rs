//! Manifest generation module

pub mod generator;
pub mod password;
pub mod releases;
pub mod update;
pub mod upgrade;
pub mod version;

pub use generator::ManifestGenerator;
pub use password::{PasswordGenerator, RandomPasswordGenerator};
