use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed bearer token for subsequent requests
    pub token: String,
    pub user: UserDto,
}
