//! Setup token parsing and per-invocation configuration
//!
//! The host passes a single string to `setup`. `"about"` asks for the
//! about message, `"CURRENT_SLICE"` limits processing to the active slice,
//! and any other string (including the empty string) selects all slices.
//! Matching is exact and case-sensitive.

use fillblack_core::{ImageStack, ImageType};
use std::convert::Infallible;
use std::str::FromStr;

/// Token that requests the about message
pub const ABOUT_TOKEN: &str = "about";
/// Token that restricts processing to the current slice
pub const CURRENT_SLICE_TOKEN: &str = "CURRENT_SLICE";

/// Which slices `run` processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Every slice, 1..=N in order
    #[default]
    AllSlices,
    /// Only the slice the host has active
    CurrentSlice,
}

/// Parsed setup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupArg {
    /// Show the about message
    About,
    /// Process pixels in the given mode
    Process(ProcessingMode),
}

impl SetupArg {
    /// Parse a setup token. Never fails; unrecognized tokens mean all slices.
    pub fn parse(arg: &str) -> Self {
        match arg {
            ABOUT_TOKEN => SetupArg::About,
            CURRENT_SLICE_TOKEN => SetupArg::Process(ProcessingMode::CurrentSlice),
            _ => SetupArg::Process(ProcessingMode::AllSlices),
        }
    }
}

impl FromStr for SetupArg {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SetupArg::parse(s))
    }
}

/// Image properties captured when `run` starts, plus the mode chosen at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub mode: ProcessingMode,
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    pub slice_count: usize,
}

impl FilterConfig {
    /// Snapshot the image properties relevant to processing.
    pub fn new(mode: ProcessingMode, image: &ImageStack) -> Self {
        FilterConfig {
            mode,
            width: image.width(),
            height: image.height(),
            image_type: image.image_type(),
            slice_count: image.slice_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(SetupArg::parse("about"), SetupArg::About);
        assert_eq!(
            SetupArg::parse("CURRENT_SLICE"),
            SetupArg::Process(ProcessingMode::CurrentSlice)
        );
        for other in ["", "ALL_SLICES", "current_slice", "About", " about"] {
            assert_eq!(
                SetupArg::parse(other),
                SetupArg::Process(ProcessingMode::AllSlices),
                "token {other:?}"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let arg: SetupArg = "CURRENT_SLICE".parse().unwrap();
        assert_eq!(arg, SetupArg::Process(ProcessingMode::CurrentSlice));
    }

    #[test]
    fn test_config_snapshot() {
        let stack = ImageStack::new_blank(5, 3, ImageType::Gray32, 4).unwrap();
        let config = FilterConfig::new(ProcessingMode::CurrentSlice, &stack);
        assert_eq!(
            config,
            FilterConfig {
                mode: ProcessingMode::CurrentSlice,
                width: 5,
                height: 3,
                image_type: ImageType::Gray32,
                slice_count: 4,
            }
        );
    }
}
