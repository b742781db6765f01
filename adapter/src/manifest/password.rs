//! Password generation

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::error;

use crate::errors::AdapterError;

/// Number of random bytes behind a generated password
pub const PASSWORD_BYTES: usize = 20;

/// Source of new deployment passwords
pub trait PasswordGenerator: Send + Sync {
    fn generate(&self) -> Result<String, AdapterError>;
}

/// Draws [`PASSWORD_BYTES`] bytes from the OS entropy source and encodes them
/// as standard base64, giving a 28 character password.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPasswordGenerator;

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate(&self) -> Result<String, AdapterError> {
        let mut bytes = [0u8; PASSWORD_BYTES];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
            error!("Error generating random bytes, {}", e);
            AdapterError::PasswordGeneration(e.to_string())
        })?;
        Ok(BASE64.encode(bytes))
    }
}

/// Closures work as generators, which keeps test doubles short
impl<F> PasswordGenerator for F
where
    F: Fn() -> Result<String, AdapterError> + Send + Sync,
{
    fn generate(&self) -> Result<String, AdapterError> {
        self()
    }
}
