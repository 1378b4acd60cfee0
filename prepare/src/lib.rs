pub mod compact;
pub mod encode;
pub mod output;
pub mod tables;
