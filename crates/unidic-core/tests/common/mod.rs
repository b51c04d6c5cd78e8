#![allow(dead_code)]

pub mod archive;
pub mod progress;
pub mod range_server;
