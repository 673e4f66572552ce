use crate::constants::{PLAYSTORE_SIZE, PROGRESS_BAR_TEMPLATE};
use crate::density::Density;
use crate::dimensions::{longest_side, scaled_dimensions};
use crate::directories::{
    create_drawable_directories, create_playstore_directory, drawable_dir, playstore_dir,
};
use crate::error::{IconError, Result};
use crate::formats::{save_with_max_quality, OutputFormat};
use crate::logger;
use crate::naming::output_file_name;
use crate::{verbose, warning};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the mdpi reference size comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Use the longer side of the source image.
    LongestSide,
    /// Use this many pixels for mdpi.
    Mdpi(u32),
}

impl Baseline {
    /// Effective mdpi size for a source of `width` x `height`.
    pub fn resolve(&self, width: u32, height: u32) -> u32 {
        match self {
            Baseline::LongestSide => longest_side(width, height),
            Baseline::Mdpi(size) => *size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOptions {
    pub baseline: Baseline,
    pub playstore: bool,
}

impl ResizeOptions {
    /// Build options from the raw `--size` and `--playstore` values.
    ///
    /// A missing size or `0` selects [`Baseline::LongestSide`].
    pub fn new(size: Option<u32>, playstore: bool) -> Self {
        let baseline = match size {
            None | Some(0) => Baseline::LongestSide,
            Some(size) => Baseline::Mdpi(size),
        };

        Self {
            baseline,
            playstore,
        }
    }
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            baseline: Baseline::LongestSide,
            playstore: false,
        }
    }
}

/// Which output slot a variant fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Drawable(Density),
    Playstore,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::Drawable(density) => write!(f, "{}", density),
            VariantKind::Playstore => f.write_str("playstore"),
        }
    }
}

/// One resized copy of the source: its size and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub kind: VariantKind,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

/// Loads the source image.
///
/// # Arguments
/// * `input_path` - Path to the source artwork
///
/// # Returns
/// * `Ok(image)` - The decoded image
/// * `Err(IconError)` - If the file is missing or cannot be decoded
pub fn load_source_image(input_path: &Path) -> Result<DynamicImage> {
    if !input_path.is_file() {
        return Err(IconError::FileNotFound(input_path.to_path_buf()));
    }

    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    Ok(img)
}

/// Compute every variant for a source of the given size without touching disk.
///
/// Drawables come first in ascending density, followed by the Play Store
/// image when `options.playstore` is set.
pub fn plan_variants(
    output_root: &Path,
    file_name: &str,
    source: (u32, u32),
    options: &ResizeOptions,
) -> Vec<Variant> {
    let (width, height) = source;
    let baseline = options.baseline.resolve(width, height);

    let mut variants: Vec<Variant> = Density::ALL
        .into_iter()
        .map(|density| {
            let target = density.target_size(baseline);
            let (new_width, new_height) = scaled_dimensions(width, height, target);
            Variant {
                kind: VariantKind::Drawable(density),
                width: new_width,
                height: new_height,
                path: drawable_dir(output_root, density).join(file_name),
            }
        })
        .collect();

    if options.playstore {
        let (new_width, new_height) = scaled_dimensions(width, height, PLAYSTORE_SIZE);
        variants.push(Variant {
            kind: VariantKind::Playstore,
            width: new_width,
            height: new_height,
            path: playstore_dir(output_root).join(file_name),
        });
    }

    variants
}

/// Resample the untouched source to the variant's size and write it out.
pub fn write_variant(source: &DynamicImage, variant: &Variant, format: OutputFormat) -> Result<()> {
    let resized = source.resize_exact(variant.width, variant.height, FilterType::Lanczos3);
    save_with_max_quality(&resized, &variant.path, format)
}

fn create_progress_bar(len: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

/// Resize `input` into every drawable bucket under `output_root`.
///
/// Creates `res/drawable-<density>` for all six buckets, then writes one
/// copy per bucket named after the normalized input basename. With
/// `options.playstore` a 512px copy is also written to `res/playstore`.
/// Every copy is resampled from the original image with Lanczos3.
///
/// # Returns
/// * `Ok(variants)` - Everything that was written, in write order
/// * `Err(IconError)` - The first failure; nothing after it is attempted
pub fn resize_icon(input: &Path, output_root: &Path, options: &ResizeOptions) -> Result<Vec<Variant>> {
    create_drawable_directories(output_root)?;

    let file_name = output_file_name(input)?;
    let format = OutputFormat::from_path(Path::new(&file_name))?;

    let img = load_source_image(input)?;
    let (width, height) = img.dimensions();
    verbose!(
        "Source {}x{}, mdpi baseline {}px, writing {}",
        width,
        height,
        options.baseline.resolve(width, height),
        format
    );

    let variants = plan_variants(output_root, &file_name, (width, height), options);
    if let Some(largest) = variants.iter().map(|v| longest_side(v.width, v.height)).max() {
        if largest > longest_side(width, height) {
            warning!(
                "Source is {}x{}, the largest variant ({}px) is upscaled",
                width, height, largest
            );
        }
    }

    let pb = create_progress_bar(variants.len() as u64);
    for variant in &variants {
        if variant.kind == VariantKind::Playstore {
            create_playstore_directory(output_root)?;
        }
        pb.set_message(variant.kind.to_string());
        write_variant(&img, variant, format)?;
        pb.inc(1);
        pb.suspend(|| {
            verbose!(
                "{}: {}x{} -> {}",
                variant.kind,
                variant.width,
                variant.height,
                variant.path.display()
            );
        });
    }
    pb.finish_and_clear();

    Ok(variants)
}
