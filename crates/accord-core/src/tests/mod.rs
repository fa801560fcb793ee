//! Unit tests for `accord_core` types.

mod error_tests;
mod sort_tests;
mod value_tests;

mod behaviour;
