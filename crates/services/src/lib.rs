#![forbid(unsafe_code)]

pub mod error;
pub mod gateway;
pub mod identity;
pub mod passport_service;

pub use error::{GatewayError, IdentityError, LoadError, UnlockError};
pub use gateway::{GatewayConfig, HttpGateway, InitialResponse, RemoteGateway, UserDto};
pub use identity::{
    EmailPrompt, FileIdentityStore, IdentityStore, InMemoryIdentityStore, NoPrompt, resolve_email,
};
pub use passport_service::PassportService;
