pub mod commands;
pub mod domain;
pub mod infra;
pub mod ui;
