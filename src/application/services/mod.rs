//! Application services orchestrating domain operations.

mod auth_service;
mod code_service;
mod resolver_service;

pub use auth_service::AuthService;
pub use code_service::CodeService;
pub use resolver_service::ResolverService;
