// src/lib.rs

//! Imperial Library scraper
//!
//! Collects the book index and every linked book page, and stores both as
//! SQLite tables.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
