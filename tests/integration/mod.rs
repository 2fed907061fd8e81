//! Integration tests for the csfix-setup installer

mod install_flow;
mod scripts_flow;
mod test_utils;
