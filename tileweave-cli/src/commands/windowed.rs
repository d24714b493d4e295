//! `tileweave windowed` - a grid of rectangular windows.

use std::path::PathBuf;

use clap::Args;
use tileweave::partition::{Strategy, DEFAULT_WINDOW_SHIFTS};

use crate::commands::common::{self, CompositeVariant};
use crate::error::CliError;

/// Arguments for the `windowed` subcommand.
#[derive(Debug, Args)]
pub struct WindowedArgs {
    /// Source images, woven in round-robin order; a single image is woven
    /// against a black background
    #[arg(required = true, value_name = "IMAGE")]
    pub inputs: Vec<PathBuf>,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_SHIFTS.0)]
    pub shift_y: u32,

    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_SHIFTS.1)]
    pub shift_x: u32,

    /// Output image path (format chosen by extension)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Compositor variant
    #[arg(long, value_enum, default_value = "weighted")]
    pub variant: CompositeVariant,
}

pub fn run(args: WindowedArgs) -> Result<(), CliError> {
    common::run_weave(
        &args.inputs,
        Strategy::windowed(args.shift_y, args.shift_x),
        args.variant,
        &args.output,
    )
}
