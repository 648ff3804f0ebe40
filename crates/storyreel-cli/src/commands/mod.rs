pub mod check;
pub mod frames;
pub mod init_config;
pub mod run;
