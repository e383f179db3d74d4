//! Run Fill_BLACK on a TIFF stack.
//!
//! ```text
//! fill_black <input.tif> <output.tif> [ARG]
//! fill_black about
//! ```
//!
//! `ARG` is the filter setup token: `CURRENT_SLICE` processes only the
//! first slice, anything else (or nothing) processes every slice.

use fillblack::filter::{FillBlack, RunOutcome, run_plugin_filter};
use fillblack::io::{read_stack_file, write_stack_file};
use std::process::ExitCode;

const USAGE: &str = "usage: fill_black <input.tif> <output.tif> [ARG]\n       fill_black about";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [about] if about == "about" => {
            let message = FillBlack::about();
            println!("{}\n\n{}", message.title, message.body);
            ExitCode::SUCCESS
        }
        [input, output] => run(input, output, ""),
        [input, output, arg] => run(input, output, arg),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(input: &str, output: &str, arg: &str) -> ExitCode {
    match fill(input, output, arg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn fill(input: &str, output: &str, arg: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = read_stack_file(input)?;
    log::info!(
        "loaded {}: {}x{} {}, {} slice(s)",
        input,
        stack.width(),
        stack.height(),
        stack.image_type(),
        stack.slice_count()
    );

    let mut filter = FillBlack::new();
    match run_plugin_filter(&mut filter, arg, &mut stack)? {
        RunOutcome::About(message) => {
            println!("{}\n\n{}", message.title, message.body);
            return Ok(());
        }
        RunOutcome::Processed { redrawn } => {
            log::debug!("redraw requested: {redrawn}");
        }
    }

    write_stack_file(&stack, output)?;
    log::info!("wrote {}", output);
    Ok(())
}
