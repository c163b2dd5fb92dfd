pub mod config;
pub mod controllers;
pub mod db;
pub mod envelope;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
