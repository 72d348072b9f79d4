//! Authentication implementations.

mod google;
mod jwt;
mod password;

pub use google::GoogleTokenVerifier;
pub use jwt::JwtTokenService;
pub use password::Argon2PasswordService;
