//! Session module - login handshake and the authenticated session it yields

mod api;
mod commands;
mod models;

pub use api::{authenticate, login_url};
pub use commands::run_login_command;
pub use models::{LoginResponse, Product, Session, UserInfo};
