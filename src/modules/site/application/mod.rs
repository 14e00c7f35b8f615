pub mod default_content;
pub mod ports;
pub mod services;
