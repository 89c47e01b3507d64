pub mod config;
pub mod error;
pub mod lifespan;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod telemetry;

#[cfg(test)]
mod additional_tests;
