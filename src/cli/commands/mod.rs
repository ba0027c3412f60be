pub mod check;
mod command_result;
pub mod examples;
pub mod hash;
pub mod helper;
pub mod init;
pub mod resolve;
pub mod share;

pub use command_result::*;
