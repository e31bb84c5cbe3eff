use crate::registry::error::RegistryError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Can't read from or write to the console.")]
    Io(#[from] std::io::Error),
    #[error("The members list can't be updated.")]
    Registry(#[from] RegistryError),
}
