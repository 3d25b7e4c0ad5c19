//! Unit tests for the conversation module.
