pub mod config;
pub mod errors;
pub mod mock_utils;
