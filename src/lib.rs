pub mod analysis;
pub mod apis;
pub mod arguments;
pub mod config;
pub mod constants;
pub mod ecosystems;
pub mod errors; // Structured error handling
pub mod logger;
pub mod webserver;
