//! Integration tests

mod pipeline_test;
mod swing_test;
