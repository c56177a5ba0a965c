//! Authentication utilities library
//!
//! Provides the authentication primitives the blog backend builds on:
//! - Password hashing (Argon2id)
//! - JWT encoding and decoding
//! - Session token issuance and verification for a user id
//!
//! The service crate defines its own ports and adapts these implementations,
//! so nothing here knows about users, posts or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{TokenConfig, TokenService};
//!
//! let tokens = TokenService::new(TokenConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     expiration_hours: 72,
//! });
//!
//! let token = tokens.issue(42).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), 42);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenConfig;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
