#![allow(dead_code)]

pub mod builders;
pub mod mock_ports;

pub use builders::*;
pub use mock_ports::*;
