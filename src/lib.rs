// ABOUTME: Library crate for bizlist exposing the public API for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod directory;
pub mod models;
pub mod session;
pub mod wizard;
