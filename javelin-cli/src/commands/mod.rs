pub mod build;
pub mod init;
pub mod install;
pub mod run;
pub mod status;
