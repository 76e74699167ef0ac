// ABOUTME: Library exports for termimg CLI modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests and benchmarks

pub mod app;
pub mod cli;
pub mod config;
