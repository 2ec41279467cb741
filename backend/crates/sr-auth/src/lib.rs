pub mod bearer;
pub mod claims;
pub mod error;
pub mod password;
pub mod token_service;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use token_service::{DEFAULT_TOKEN_TTL_SECS, TokenService};
