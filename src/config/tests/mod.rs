//! Unit tests for configuration loading and validation.
