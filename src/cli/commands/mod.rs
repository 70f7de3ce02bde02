pub mod init;
pub mod jobs;
pub mod targets;

mod command_result;

pub use command_result::*;
