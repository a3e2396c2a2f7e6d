//! Core library for the todo service
//!
//! This crate contains the domain logic, including:
//! - Task model and validation
//! - In-memory task storage

pub mod task;
