//! channeltinker-test - Regression test helpers for ChannelTinker
//!
//! This crate provides a small regression harness and surface fixtures
//! shared by the integration tests of every ChannelTinker crate.
//!
//! - [`RegParams`] numbers each check, records failures, and prints a
//!   summary from [`RegParams::cleanup`]
//! - Fixture builders create [`Canvas`] surfaces from rows of pixels
//!
//! # Usage
//!
//! ```ignore
//! use channeltinker_test::RegParams;
//!
//! let mut rp = RegParams::new("diffimages");
//! rp.compare_values(0.25, mean, 1e-9);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print compared surfaces

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use channeltinker_core::{Canvas, ChannelType, Pixel, layout};

/// Build an 8-bit RGBA canvas from rows of `[r, g, b, a]`.
pub fn rgba8_from_rows(name: &str, rows: &[Vec<[u8; 4]>]) -> TestResult<Canvas> {
    let (width, height) = row_dimensions(name, rows)?;
    let pixels: Vec<Pixel> = rows.iter().flatten().map(|&c| Pixel::from(c)).collect();
    Ok(Canvas::from_pixels(
        width,
        height,
        layout::RGBA,
        ChannelType::Integer,
        &pixels,
    )?)
}

/// Build a normalized-float RGBA canvas from rows of `[r, g, b, a]`.
pub fn rgba_float_from_rows(name: &str, rows: &[Vec<[f64; 4]>]) -> TestResult<Canvas> {
    let (width, height) = row_dimensions(name, rows)?;
    let pixels: Vec<Pixel> = rows.iter().flatten().map(|&c| Pixel::from(c)).collect();
    Ok(Canvas::from_pixels(
        width,
        height,
        layout::RGBA,
        ChannelType::NormalizedFloat,
        &pixels,
    )?)
}

/// An 8-bit RGBA canvas filled with one color.
pub fn solid_rgba8(width: u32, height: u32, color: [u8; 4]) -> TestResult<Canvas> {
    Ok(Canvas::filled(
        width,
        height,
        layout::RGBA,
        ChannelType::Integer,
        &Pixel::from(color),
    )?)
}

/// A normalized-float RGBA canvas filled with one color.
pub fn solid_rgba_float(width: u32, height: u32, color: [f64; 4]) -> TestResult<Canvas> {
    Ok(Canvas::filled(
        width,
        height,
        layout::RGBA,
        ChannelType::NormalizedFloat,
        &Pixel::from(color),
    )?)
}

fn row_dimensions<T>(name: &str, rows: &[Vec<T>]) -> TestResult<(u32, u32)> {
    let width = rows.first().map_or(0, |r| r.len());
    if width == 0 {
        return Err(TestError::InvalidFixture {
            name: name.to_string(),
            message: "no pixels".to_string(),
        });
    }
    if let Some(i) = rows.iter().position(|r| r.len() != width) {
        return Err(TestError::InvalidFixture {
            name: name.to_string(),
            message: format!("row {i} has {} pixels, expected {width}", rows[i].len()),
        });
    }
    Ok((width as u32, rows.len() as u32))
}
