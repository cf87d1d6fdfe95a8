pub mod config;
pub mod generate;
pub mod init;
pub mod organize;
