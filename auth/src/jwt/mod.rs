pub mod claims;
pub mod errors;
pub mod handler;
pub mod token;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use token::TokenConfig;
pub use token::TokenService;
