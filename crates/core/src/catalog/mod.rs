pub mod headers;
pub mod ports;
