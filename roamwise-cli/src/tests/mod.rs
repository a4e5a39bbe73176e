//! Shared test harness modules for the Roamwise CLI.

use super::*;

mod export_unit;
mod helpers;
mod recommend_steps;
