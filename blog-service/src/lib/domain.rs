pub mod auth;
pub mod errors;
pub mod post;
pub mod user;
