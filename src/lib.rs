pub mod actions;
pub mod cli;
pub mod db;
pub mod error;
