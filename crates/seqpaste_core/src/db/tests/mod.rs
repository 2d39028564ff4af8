//! Database integration tests.

use super::*;
use crate::constants::BOOTSTRAP_PASTE_ID;
use crate::error::AppError;
use crate::test_support::setup_temp_db;
use std::sync::Barrier;
use std::thread;
