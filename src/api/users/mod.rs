//! User endpoints

pub mod request;
pub mod response;

pub fn login_path() -> String {
    "/user/login".to_string()
}

pub fn register_path() -> String {
    "/user/register".to_string()
}
