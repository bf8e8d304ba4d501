//! Common test utilities for recolor.
//!
//! This module provides shared utilities for testing the recolor server and library.

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod image_utils;
pub mod test_data;
