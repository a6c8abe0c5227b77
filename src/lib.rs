//! Amplera Lead Capture API Library
//!
//! This library provides the lead-capture backend for the Amplera
//! advertising network website: request handlers, validation, and a
//! pluggable storage layer with durable (SQLite) and ephemeral
//! (in-memory) backends.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `db`: SQLite connection pool and schema setup.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router construction.
//! - `memory_store`: Ephemeral in-process lead store.
//! - `models`: Core data models and request payloads.
//! - `sqlite_store`: Durable SQLite-backed lead store.
//! - `store`: The storage contract shared by both backends.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod memory_store;
pub mod models;
pub mod sqlite_store;
pub mod store;
