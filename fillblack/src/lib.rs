//! fillblack - Overwrite every pixel of an image stack with black
//!
//! The Fill_BLACK filter sets every pixel of 8-bit, 16-bit or 32-bit float
//! grayscale and packed RGB images to zero, in the current slice or in all
//! slices of a stack.
//!
//! # Example
//!
//! ```
//! use fillblack::filter::{FillBlack, run_plugin_filter};
//! use fillblack::{ImageStack, ImageType, SliceData};
//!
//! let mut stack = ImageStack::new(
//!     2,
//!     1,
//!     ImageType::ColorRgb,
//!     vec![SliceData::Ints(vec![0xFF3366, 0x00AAFF])],
//! )
//! .unwrap();
//! run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap();
//! assert_eq!(stack.slice(1).unwrap(), &SliceData::Ints(vec![0, 0]));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use fillblack_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use fillblack_filter as filter;
pub use fillblack_io as io;
