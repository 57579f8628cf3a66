//! Integration tests for digit map generation

mod cli_generate;
mod concurrency;
mod test_utils;

pub use test_utils::{write_dialplan, SAMPLE_DIALPLAN, SAMPLE_MAP};
