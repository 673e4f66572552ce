/// Longer side of the Play Store listing image.
pub const PLAYSTORE_SIZE: u32 = 512;

pub const RES_DIR: &str = "res";
pub const DRAWABLE_DIR_PREFIX: &str = "drawable-";
pub const PLAYSTORE_DIR: &str = "playstore";

pub const JPEG_MAX_QUALITY: u8 = 100;

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

pub const START_PREFIX: &str = "🚀";
pub const SUCCESS_PREFIX: &str = "✅";
pub const INFO_PREFIX: &str = "📋";
pub const OUTPUT_PREFIX: &str = "📁";
