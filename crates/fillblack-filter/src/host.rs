//! Host side of the filter protocol
//!
//! A host runs a filter in two steps: `setup` with the setup token and the
//! image, then `run` if setup asked for processing and the image type is
//! one the filter declared.

use crate::flags::{AboutMessage, SetupOutcome};
use fillblack_core::{Error, ImageStack, Result};

/// A filter that mutates an image stack in place.
pub trait PlugInFilter {
    /// Negotiate capabilities and read the setup token.
    fn setup(&mut self, arg: &str, image: &ImageStack) -> SetupOutcome;

    /// Process the image as configured by `setup`.
    fn run(&mut self, image: &mut ImageStack) -> Result<()>;
}

/// What one filter invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Setup asked for the about message; nothing was processed
    About(AboutMessage),
    /// The filter ran; `redrawn` tells whether it asked for a redraw
    Processed { redrawn: bool },
}

/// Run `filter` once on `image` with setup token `arg`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPixelType`] without calling `run` when the
/// filter's capabilities do not cover the image type, and propagates any
/// error from `run`.
pub fn run_plugin_filter<F: PlugInFilter + ?Sized>(
    filter: &mut F,
    arg: &str,
    image: &mut ImageStack,
) -> Result<RunOutcome> {
    let caps = match filter.setup(arg, image) {
        SetupOutcome::About(message) => {
            log::info!("{}: {}", message.title, message.body);
            return Ok(RunOutcome::About(message));
        }
        SetupOutcome::Process(caps) => caps,
    };

    if !caps.supports(image.image_type()) {
        log::warn!(
            "filter accepts {} but image is {}",
            caps,
            image.image_type()
        );
        return Err(Error::UnsupportedPixelType(image.image_type()));
    }

    let before = image.redraw_count();
    filter.run(image)?;
    let redrawn = image.redraw_count() > before;
    log::debug!("filter finished, redrawn = {}", redrawn);
    Ok(RunOutcome::Processed { redrawn })
}
