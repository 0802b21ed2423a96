pub mod config;
pub mod git;

mod test_utils;
