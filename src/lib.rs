pub mod config;
pub mod diagnostics;
pub mod financial;
pub mod output;
pub mod overview;
pub mod patch;
pub mod scoring;
pub mod store;
