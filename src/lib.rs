pub mod apis;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod types;
