pub mod cli;
pub mod constants;
pub mod density;
pub mod dimensions;
pub mod directories;
pub mod error;
pub mod formats;
pub mod logger;
pub mod naming;
pub mod resizer;

pub use density::Density;
pub use dimensions::{longest_side, scaled_dimensions};
pub use directories::{
    create_drawable_directories, create_playstore_directory, drawable_dir, playstore_dir,
};
pub use error::{IconError, Result};
pub use formats::{save_with_max_quality, OutputFormat};
pub use naming::{normalize_file_name, output_file_name};
pub use resizer::{
    load_source_image, plan_variants, resize_icon, Baseline, ResizeOptions, Variant, VariantKind,
};
