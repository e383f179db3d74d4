//! FillBlack - set every pixel of an image to zero
//!
//! Works on 8-bit, 16-bit and 32-bit float grayscale and on packed RGB
//! images. By default every slice of the stack is processed; the
//! `CURRENT_SLICE` setup token limits processing to the active slice.

use crate::config::{FilterConfig, ProcessingMode, SetupArg};
use crate::flags::{AboutMessage, Capabilities, SetupOutcome};
use crate::host::PlugInFilter;
use crate::zero::zero_pixels;
use fillblack_core::{ImageStack, PixelType, Result, SliceData};

/// About text shown for the `about` setup token.
pub const ABOUT: AboutMessage = AboutMessage {
    title: "Fill_BLACK",
    body: "Set each pixel in image to 0\n\
           works with 8, 16 or 32 bit grayscale, and colorRGB\n\
           setup(arg, image)\n\
           args can be ALL_SLICES or CURRENT_SLICE\n\
           default no option set is ALL_SLICES",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Unconfigured,
    About,
    Ready(ProcessingMode),
}

/// Filter that overwrites every pixel with black.
#[derive(Debug, Clone, Default)]
pub struct FillBlack {
    state: State,
}

impl FillBlack {
    /// Create a filter that has not been set up yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixel types this filter declares during setup.
    pub fn capabilities() -> Capabilities {
        Capabilities::DOES_8G | Capabilities::DOES_16 | Capabilities::DOES_32 | Capabilities::DOES_RGB
    }

    /// The about message.
    pub fn about() -> AboutMessage {
        ABOUT
    }

    /// Mode chosen by the last processing setup, if any.
    pub fn mode(&self) -> Option<ProcessingMode> {
        match self.state {
            State::Ready(mode) => Some(mode),
            State::Unconfigured | State::About => None,
        }
    }

    /// Zero the slices selected by `config`.
    ///
    /// Fails before touching any pixel if the image type is unsupported.
    /// In all-slices mode slices are processed 1..=N; an error on slice k
    /// leaves slices 1..k zeroed and k+1..=N untouched.
    pub fn process(config: FilterConfig, image: &mut ImageStack) -> Result<()> {
        let pixel_type = PixelType::try_from(config.image_type)?;
        match config.mode {
            ProcessingMode::AllSlices => {
                for index in 1..=image.slice_count() {
                    log::debug!("zeroing slice {}/{}", index, image.slice_count());
                    Self::process_slice(pixel_type, image.slice_mut(index)?)?;
                }
            }
            ProcessingMode::CurrentSlice => {
                log::debug!("zeroing current slice {}", image.current_slice_index());
                Self::process_slice(pixel_type, image.current_slice_mut())?;
            }
        }
        Ok(())
    }

    /// Zero one slice's pixels as `pixel_type`.
    pub fn process_slice(pixel_type: PixelType, data: &mut SliceData) -> Result<()> {
        zero_pixels(data.pixels_mut(pixel_type)?);
        Ok(())
    }
}

impl PlugInFilter for FillBlack {
    fn setup(&mut self, arg: &str, image: &ImageStack) -> SetupOutcome {
        match SetupArg::parse(arg) {
            SetupArg::About => {
                self.state = State::About;
                SetupOutcome::About(Self::about())
            }
            SetupArg::Process(mode) => {
                log::info!("Fill_BLACK setup: {:?} on {}", mode, image.image_type());
                self.state = State::Ready(mode);
                SetupOutcome::Process(Self::capabilities())
            }
        }
    }

    fn run(&mut self, image: &mut ImageStack) -> Result<()> {
        let State::Ready(mode) = self.state else {
            log::warn!("Fill_BLACK run without a processing setup; nothing to do");
            return Ok(());
        };
        let config = FilterConfig::new(mode, image);
        log::info!(
            "Fill_BLACK run: {:?} on {}x{} {} ({} slices)",
            config.mode,
            config.width,
            config.height,
            config.image_type,
            config.slice_count
        );
        Self::process(config, image)?;
        image.update_and_draw();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fillblack_core::{Error, ImageType};

    fn gray8(depth: usize) -> ImageStack {
        let slices = (1..=depth).map(|s| SliceData::Bytes(vec![s as u8; 4])).collect();
        ImageStack::new(2, 2, ImageType::Gray8, slices).unwrap()
    }

    #[test]
    fn test_setup_capabilities() {
        let stack = gray8(1);
        let mut filter = FillBlack::new();
        let outcome = filter.setup("", &stack);
        let SetupOutcome::Process(caps) = outcome else {
            panic!("expected Process, got {outcome:?}");
        };
        for t in [ImageType::Gray8, ImageType::Gray16, ImageType::Gray32, ImageType::ColorRgb] {
            assert!(caps.supports(t));
        }
        assert!(!caps.supports(ImageType::Color256));
        assert_eq!(filter.mode(), Some(ProcessingMode::AllSlices));
    }

    #[test]
    fn test_setup_about() {
        let stack = gray8(1);
        let mut filter = FillBlack::new();
        assert_eq!(filter.setup("about", &stack), SetupOutcome::About(ABOUT));
        assert_eq!(filter.mode(), None);
        assert!(ABOUT.body.contains("setup(arg, image)"));
    }

    #[test]
    fn test_run_all_slices() {
        let mut stack = gray8(3);
        let mut filter = FillBlack::new();
        filter.setup("ALL_SLICES", &stack);
        filter.run(&mut stack).unwrap();
        assert!(stack.slices().iter().all(SliceData::is_zero));
        assert_eq!(stack.redraw_count(), 1);
    }

    #[test]
    fn test_run_current_slice() {
        let mut stack = gray8(3);
        stack.set_current_slice(2).unwrap();
        let mut filter = FillBlack::new();
        filter.setup("CURRENT_SLICE", &stack);
        filter.run(&mut stack).unwrap();
        assert_eq!(stack.slice(1).unwrap(), &SliceData::Bytes(vec![1; 4]));
        assert!(stack.slice(2).unwrap().is_zero());
        assert_eq!(stack.slice(3).unwrap(), &SliceData::Bytes(vec![3; 4]));
    }

    #[test]
    fn test_run_after_about_is_noop() {
        let mut stack = gray8(2);
        let before = stack.clone();
        let mut filter = FillBlack::new();
        filter.setup("about", &stack);
        filter.run(&mut stack).unwrap();
        assert_eq!(stack, before);
    }

    #[test]
    fn test_run_without_setup_is_noop() {
        let mut stack = gray8(1);
        let before = stack.clone();
        FillBlack::new().run(&mut stack).unwrap();
        assert_eq!(stack, before);
    }

    #[test]
    fn test_run_unsupported_type() {
        let slices = vec![SliceData::Bytes(vec![7; 4])];
        let mut stack = ImageStack::new(2, 2, ImageType::Color256, slices).unwrap();
        let before = stack.clone();
        let mut filter = FillBlack::new();
        filter.setup("", &stack);
        let err = filter.run(&mut stack).unwrap_err();
        assert_eq!(err, Error::UnsupportedPixelType(ImageType::Color256));
        assert_eq!(stack, before);
    }
}
