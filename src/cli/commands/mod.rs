pub mod config;
pub mod init;
pub mod report;
pub mod watch;
