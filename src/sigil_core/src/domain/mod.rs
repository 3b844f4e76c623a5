pub mod context;
pub mod email;
pub mod password;
pub mod password_hash;
pub mod user;
