#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DENSITIES: [&str; 6] = ["ldpi", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a solid-color PNG with a transparent corner.
pub fn create_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let mut img = RgbaImage::from_pixel(width, height, Rgba([30, 144, 255, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    img.save(&path).unwrap();
    path
}

pub fn create_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path
}

pub fn drawable_path(output: &Path, density: &str, name: &str) -> PathBuf {
    output
        .join("res")
        .join(format!("drawable-{}", density))
        .join(name)
}

pub fn playstore_path(output: &Path, name: &str) -> PathBuf {
    output.join("res").join("playstore").join(name)
}

pub fn dimensions_of(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}
