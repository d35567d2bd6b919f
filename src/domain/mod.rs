pub mod command;
pub mod ports;
pub mod price;
pub mod receipt;
