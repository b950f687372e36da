pub mod traits;

// Data provider implementations
pub mod http;
pub mod static_data;
