// ABOUTME: Library exports for lnr modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests

pub mod cache;
pub mod config;
pub mod constants;
pub mod estimates;
pub mod resolve;
pub mod session;
pub mod types;
