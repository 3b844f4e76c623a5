pub mod config;
pub mod hashing;
pub mod http;
pub mod persistence;
pub mod token;
