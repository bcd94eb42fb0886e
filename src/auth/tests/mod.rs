//! Unit tests for the authentication context.

mod support;
