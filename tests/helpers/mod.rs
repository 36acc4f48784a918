//! Shared grammars and trace fixtures for integration tests.

#![allow(dead_code)]

pub mod grammars;
pub mod recording;
