//! Shared test helpers

#![allow(dead_code)]

pub mod scalar_test_generator;
