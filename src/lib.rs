pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod pages;
pub mod responder;
pub mod results;
pub mod state;
pub mod submitter;
