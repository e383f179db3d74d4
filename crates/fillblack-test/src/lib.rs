//! fillblack-test - Regression test framework for fillblack
//!
//! Provides a small regression harness in the style of numbered checks:
//! each comparison bumps an index, failures are collected, and `cleanup`
//! reports the outcome.
//!
//! # Usage
//!
//! ```ignore
//! use fillblack_test::RegParams;
//!
//! let mut rp = RegParams::new("fill_black");
//! rp.compare_values(0.0, value as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;
mod stacks;

pub use params::RegParams;
pub use stacks::{ramp_slice, ramp_stack, rgb_stack};
