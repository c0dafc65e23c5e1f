//! Application services — use-case orchestration.

pub mod poll_service;
