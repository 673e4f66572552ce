//! Android screen density buckets and their icon sizes.
//!
//! `mdpi` is the reference tier: every other bucket is expressed as a
//! multiple of its size.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every bucket, lowest density first.
    pub const ALL: [Density; 6] = [
        Density::Ldpi,
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Launcher icon size in pixels when no baseline is known.
    pub fn canonical_size(&self) -> u32 {
        match self {
            Density::Ldpi => 36,
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    /// Scale factor relative to `mdpi`.
    pub fn scale(&self) -> f64 {
        match self {
            Density::Ldpi => 0.75,
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    /// Longer-side size for this bucket given the mdpi baseline.
    ///
    /// A zero baseline falls back to [`Density::canonical_size`]. Otherwise
    /// the scaled baseline is truncated, never going below one pixel.
    pub fn target_size(&self, baseline: u32) -> u32 {
        if baseline == 0 {
            return self.canonical_size();
        }
        let scaled = (baseline as f64 * self.scale()) as u32;
        scaled.max(1)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
