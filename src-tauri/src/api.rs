pub mod controller;
pub mod err;
pub mod store;
pub mod student;
pub mod validator;

#[cfg(feature = "desktop")]
pub mod commands;
