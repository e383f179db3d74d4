//! Fill_BLACK regression test
//!
//! Runs the filter through the host driver on every supported pixel type,
//! in both slice modes, and checks the unsupported-type and about paths.

use fillblack_core::{Error, ImageStack, ImageType, PixelType, SliceData};
use fillblack_filter::{
    Capabilities, FillBlack, FilterConfig, PlugInFilter, ProcessingMode, RunOutcome,
    SetupOutcome, run_plugin_filter,
};
use fillblack_test::{RegParams, ramp_slice, ramp_stack, rgb_stack};

fn as_flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

// ==========================================================================
// Test 1: all slices, every supported type
// ==========================================================================

#[test]
fn fill_black_reg_all_slices() {
    let mut rp = RegParams::new("fill_black_all");

    for pt in PixelType::ALL {
        let mut stack = ramp_stack(7, 5, pt.image_type(), 4);
        rp.compare_values(0.0, as_flag(stack.slices().iter().any(SliceData::is_zero)), 0.0);

        let outcome = run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap();
        rp.compare_values(
            1.0,
            as_flag(outcome == RunOutcome::Processed { redrawn: true }),
            0.0,
        );

        let zero = SliceData::zeroed(pt.image_type(), 35).unwrap();
        for index in 1..=4 {
            rp.compare_slices(&zero, stack.slice(index).unwrap());
        }
        rp.compare_values(1.0, stack.redraw_count() as f64, 0.0);
    }

    assert!(rp.cleanup(), "fill_black all-slices tests failed");
}

// ==========================================================================
// Test 2: current slice only
// ==========================================================================

#[test]
fn fill_black_reg_current_slice() {
    let mut rp = RegParams::new("fill_black_current");

    for pt in PixelType::ALL {
        let mut stack = ramp_stack(6, 6, pt.image_type(), 3);
        stack.set_current_slice(3).unwrap();

        run_plugin_filter(&mut FillBlack::new(), "CURRENT_SLICE", &mut stack).unwrap();

        rp.compare_slices(&ramp_slice(pt.image_type(), 36, 1), stack.slice(1).unwrap());
        rp.compare_slices(&ramp_slice(pt.image_type(), 36, 2), stack.slice(2).unwrap());
        rp.compare_values(1.0, as_flag(stack.slice(3).unwrap().is_zero()), 0.0);
    }

    assert!(rp.cleanup(), "fill_black current-slice tests failed");
}

// ==========================================================================
// Test 3: packed RGB loses its top byte
// ==========================================================================

#[test]
fn fill_black_reg_rgb() {
    let mut rp = RegParams::new("fill_black_rgb");

    let mut stack = rgb_stack(&[0xFF3366, 0x00AAFF]);
    run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap();
    rp.compare_slices(&SliceData::Ints(vec![0x000000, 0x000000]), stack.slice(1).unwrap());

    let mut stack = rgb_stack(&[0xFF000000, 0xFFFFFFFF, 0x7F102030]);
    run_plugin_filter(&mut FillBlack::new(), "CURRENT_SLICE", &mut stack).unwrap();
    rp.compare_slices(&SliceData::Ints(vec![0; 3]), stack.slice(1).unwrap());

    assert!(rp.cleanup(), "fill_black rgb tests failed");
}

// ==========================================================================
// Test 4: degenerate and already-black images
// ==========================================================================

#[test]
fn fill_black_reg_edge_cases() {
    let mut rp = RegParams::new("fill_black_edges");

    for pt in PixelType::ALL {
        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let mut stack = ImageStack::new_blank(w, h, pt.image_type(), 2).unwrap();
            let result = run_plugin_filter(&mut FillBlack::new(), "", &mut stack);
            rp.compare_values(1.0, as_flag(result.is_ok()), 0.0);
            rp.compare_values(0.0, stack.slice(2).unwrap().len() as f64, 0.0);
        }

        // Idempotence: running twice leaves the same all-zero stack
        let mut stack = ramp_stack(3, 3, pt.image_type(), 2);
        run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap();
        let once = stack.slices().to_vec();
        run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap();
        for (a, b) in once.iter().zip(stack.slices()) {
            rp.compare_slices(a, b);
        }
        rp.compare_values(2.0, stack.redraw_count() as f64, 0.0);
    }

    assert!(rp.cleanup(), "fill_black edge-case tests failed");
}

// ==========================================================================
// Test 5: unsupported types and the about token
// ==========================================================================

#[test]
fn fill_black_reg_unsupported_and_about() {
    let mut rp = RegParams::new("fill_black_refusals");

    // The host refuses before run is called
    let mut stack = ramp_stack(4, 4, ImageType::Color256, 2);
    let before = stack.clone();
    let err = run_plugin_filter(&mut FillBlack::new(), "", &mut stack).unwrap_err();
    rp.compare_values(
        1.0,
        as_flag(err == Error::UnsupportedPixelType(ImageType::Color256)),
        0.0,
    );
    rp.compare_values(1.0, as_flag(stack == before), 0.0);

    // Calling run directly on an unknown type fails without writing
    let slices = vec![SliceData::Bytes(vec![5; 4]), SliceData::Bytes(vec![6; 4])];
    let mut stack = ImageStack::new(2, 2, ImageType::Unknown(99), slices).unwrap();
    let before = stack.clone();
    let mut filter = FillBlack::new();
    let outcome = filter.setup("", &stack);
    rp.compare_values(
        1.0,
        as_flag(matches!(outcome, SetupOutcome::Process(_))),
        0.0,
    );
    let err = filter.run(&mut stack).unwrap_err();
    rp.compare_values(
        1.0,
        as_flag(matches!(
            err,
            Error::UnsupportedPixelType(ImageType::Unknown(99))
        )),
        0.0,
    );
    rp.compare_values(1.0, as_flag(stack == before), 0.0);
    rp.compare_values(0.0, stack.redraw_count() as f64, 0.0);

    // About ends the invocation without touching pixels
    let mut stack = ramp_stack(4, 4, ImageType::Gray8, 2);
    let before = stack.clone();
    let outcome = run_plugin_filter(&mut FillBlack::new(), "about", &mut stack).unwrap();
    rp.compare_values(
        1.0,
        as_flag(outcome == RunOutcome::About(FillBlack::about())),
        0.0,
    );
    rp.compare_strings(b"Fill_BLACK", FillBlack::about().title.as_bytes());
    rp.compare_values(1.0, as_flag(stack == before), 0.0);

    assert!(rp.cleanup(), "fill_black refusal tests failed");
}

// ==========================================================================
// Test 6: custom filters go through the same host protocol
// ==========================================================================

/// Filter that only accepts 16-bit images and counts its runs.
struct Gray16Only {
    runs: usize,
}

impl PlugInFilter for Gray16Only {
    fn setup(&mut self, _arg: &str, _image: &ImageStack) -> SetupOutcome {
        SetupOutcome::Process(Capabilities::DOES_16)
    }

    fn run(&mut self, _image: &mut ImageStack) -> fillblack_core::Result<()> {
        self.runs += 1;
        Ok(())
    }
}

#[test]
fn fill_black_reg_host_capabilities() {
    let mut rp = RegParams::new("fill_black_host");

    let mut filter = Gray16Only { runs: 0 };
    let mut gray8 = ramp_stack(2, 2, ImageType::Gray8, 1);
    let result = run_plugin_filter(&mut filter, "", &mut gray8);
    rp.compare_values(1.0, as_flag(result.is_err()), 0.0);
    rp.compare_values(0.0, filter.runs as f64, 0.0);

    let mut gray16 = ramp_stack(2, 2, ImageType::Gray16, 1);
    let outcome = run_plugin_filter(&mut filter, "", &mut gray16).unwrap();
    rp.compare_values(
        1.0,
        as_flag(outcome == RunOutcome::Processed { redrawn: false }),
        0.0,
    );
    rp.compare_values(1.0, filter.runs as f64, 0.0);

    assert!(rp.cleanup(), "fill_black host tests failed");
}

// ==========================================================================
// Test 7: a bad slice stops the pass, earlier slices stay black
// ==========================================================================

#[test]
fn fill_black_reg_stops_at_bad_slice() {
    let mut rp = RegParams::new("fill_black_stop");

    // Unknown type skips the storage check, so slice 2 can disagree
    let slices = vec![
        SliceData::Bytes(vec![5; 4]),
        SliceData::Shorts(vec![6; 4]),
        SliceData::Bytes(vec![7; 4]),
    ];
    let mut stack = ImageStack::new(2, 2, ImageType::Unknown(99), slices).unwrap();
    let config = FilterConfig {
        mode: ProcessingMode::AllSlices,
        width: 2,
        height: 2,
        image_type: ImageType::Gray8,
        slice_count: 3,
    };

    let err = FillBlack::process(config, &mut stack).unwrap_err();
    rp.compare_values(
        1.0,
        as_flag(
            err == Error::StorageMismatch {
                image_type: ImageType::Gray8,
                storage: "short",
            },
        ),
        0.0,
    );
    rp.compare_slices(&SliceData::Bytes(vec![0; 4]), stack.slice(1).unwrap());
    rp.compare_slices(&SliceData::Shorts(vec![6; 4]), stack.slice(2).unwrap());
    rp.compare_slices(&SliceData::Bytes(vec![7; 4]), stack.slice(3).unwrap());
    rp.compare_values(0.0, stack.redraw_count() as f64, 0.0);

    assert!(rp.cleanup(), "fill_black fail-fast tests failed");
}
