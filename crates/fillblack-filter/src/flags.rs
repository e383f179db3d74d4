//! Capability flags and setup outcomes
//!
//! A filter answers `setup` either with the set of image types it can
//! process or with an about message that ends the invocation.

use fillblack_core::ImageType;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of image types a filter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u32);

impl Capabilities {
    /// Accepts 8-bit grayscale
    pub const DOES_8G: Capabilities = Capabilities(1);
    /// Accepts 8-bit indexed color
    pub const DOES_8C: Capabilities = Capabilities(2);
    /// Accepts 16-bit grayscale
    pub const DOES_16: Capabilities = Capabilities(4);
    /// Accepts 32-bit float grayscale
    pub const DOES_32: Capabilities = Capabilities(8);
    /// Accepts packed RGB
    pub const DOES_RGB: Capabilities = Capabilities(16);

    /// The empty set.
    pub const fn empty() -> Self {
        Capabilities(0)
    }

    /// Raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether every flag in `other` is set.
    pub const fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flag covering `image_type`, if any.
    pub fn for_image_type(image_type: ImageType) -> Option<Capabilities> {
        match image_type {
            ImageType::Gray8 => Some(Self::DOES_8G),
            ImageType::Color256 => Some(Self::DOES_8C),
            ImageType::Gray16 => Some(Self::DOES_16),
            ImageType::Gray32 => Some(Self::DOES_32),
            ImageType::ColorRgb => Some(Self::DOES_RGB),
            ImageType::Unknown(_) => None,
        }
    }

    /// Check whether the set accepts images of `image_type`.
    pub fn supports(self, image_type: ImageType) -> bool {
        Self::for_image_type(image_type).is_some_and(|flag| self.contains(flag))
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Capabilities) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::DOES_8G, "DOES_8G"),
            (Self::DOES_8C, "DOES_8C"),
            (Self::DOES_16, "DOES_16"),
            (Self::DOES_32, "DOES_32"),
            (Self::DOES_RGB, "DOES_RGB"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, name)| name)
            .collect();
        if set.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", set.join(" | "))
        }
    }
}

/// Text a filter shows in place of processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutMessage {
    pub title: &'static str,
    pub body: &'static str,
}

/// Result of `setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Show the message and do nothing further
    About(AboutMessage),
    /// Ready to process images of the given types
    Process(Capabilities),
}
