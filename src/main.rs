use anyhow::{Context, Result};
use clap::Parser;
use droid_icons::cli::Args;
use droid_icons::constants::{INFO_PREFIX, OUTPUT_PREFIX, START_PREFIX, SUCCESS_PREFIX};
use droid_icons::logger::{self, Verbosity};
use droid_icons::{info, resize_icon, ResizeOptions};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    let options = ResizeOptions::new(args.size, args.playstore);

    info!("{} Starting image resizing...", START_PREFIX);
    info!("{} Input: {:?}", INFO_PREFIX, args.input);
    info!("{} Output: {:?}", OUTPUT_PREFIX, args.output);

    let variants = resize_icon(&args.input, &args.output, &options)
        .with_context(|| format!("failed to resize {}", args.input.display()))?;

    info!("{} Done... wrote {} images", SUCCESS_PREFIX, variants.len());

    Ok(())
}
