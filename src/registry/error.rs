use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Every membership ID is already in use [members: {0}]")]
    MembershipIdsExhausted(usize),
}
