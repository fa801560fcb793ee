//! Unit tests for document compliance checking.

mod pointer_tests;
mod violation_tests;
