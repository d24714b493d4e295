//! `tileweave vertical` - alternating vertical strips.

use std::path::PathBuf;

use clap::Args;
use tileweave::partition::{Strategy, DEFAULT_SHIFT};

use crate::commands::common::{self, CompositeVariant};
use crate::error::CliError;

/// Arguments for the `vertical` subcommand.
#[derive(Debug, Args)]
pub struct VerticalArgs {
    /// Source images, woven in round-robin order; a single image is woven
    /// against a black background
    #[arg(required = true, value_name = "IMAGE")]
    pub inputs: Vec<PathBuf>,

    /// Strip width in pixels
    #[arg(short, long, default_value_t = DEFAULT_SHIFT)]
    pub shift: u32,

    /// Output image path (format chosen by extension)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Compositor variant
    #[arg(long, value_enum, default_value = "weighted")]
    pub variant: CompositeVariant,
}

pub fn run(args: VerticalArgs) -> Result<(), CliError> {
    common::run_weave(
        &args.inputs,
        Strategy::vertical(args.shift),
        args.variant,
        &args.output,
    )
}
