pub mod config;
pub mod logging;

pub mod archive;
pub mod catalog;
pub mod install;
pub mod progress;
pub mod retry;
pub mod safe_resume;
pub mod storage;
pub mod transfer;
