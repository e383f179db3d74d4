//! fillblack-filter - Overwrite image pixels with black
//!
//! This crate provides the [`FillBlack`] filter together with the small
//! host protocol it speaks:
//!
//! - [`PlugInFilter`] - `setup` negotiation followed by `run`
//! - [`Capabilities`] - Pixel types a filter declares it can process
//! - [`SetupArg`] / [`ProcessingMode`] / [`FilterConfig`] - Setup token parsing
//! - [`run_plugin_filter`] - Host-side driver for one filter invocation
//! - [`zero`] - Per-type zeroing routines
//!
//! # Examples
//!
//! ```
//! use fillblack_core::{ImageStack, ImageType};
//! use fillblack_filter::{FillBlack, RunOutcome, run_plugin_filter};
//!
//! let mut stack = ImageStack::new_blank(4, 4, ImageType::Gray16, 3).unwrap();
//! let outcome = run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap();
//! assert_eq!(outcome, RunOutcome::Processed { redrawn: true });
//! ```

pub mod config;
pub mod fill_black;
pub mod flags;
pub mod host;
pub mod zero;

pub use config::{FilterConfig, ProcessingMode, SetupArg};
pub use fill_black::FillBlack;
pub use flags::{AboutMessage, Capabilities, SetupOutcome};
pub use host::{PlugInFilter, RunOutcome, run_plugin_filter};
pub use zero::zero_pixels;
