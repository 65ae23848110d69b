pub mod error;
pub mod config;
pub mod logging;
pub mod email;
pub mod validation;
pub mod model;
pub mod db;
pub mod conflict;
pub mod console;
pub mod render;
pub mod ops;
pub mod queries;
pub mod cli;
