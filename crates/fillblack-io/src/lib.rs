//! fillblack-io - Read and write image stacks
//!
//! Stacks are stored as multi-page TIFF files, one page per slice.
//!
//! | Image type | TIFF page |
//! |---|---|
//! | `Gray8` | Gray, 8 bits |
//! | `Gray16` | Gray, 16 bits |
//! | `Gray32` | Gray, 32-bit float |
//! | `ColorRgb` | RGB, 8 bits per channel |

mod error;
pub mod tiff;

pub use error::{IoError, IoResult};
pub use crate::tiff::{read_stack, read_stack_file, write_stack, write_stack_file};
