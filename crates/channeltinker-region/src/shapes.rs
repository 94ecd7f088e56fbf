//! Square and circle rasterization
//!
//! Shapes are drawn ring by ring with [`square_gen`]. A square outline is
//! the single ring at the radius; a filled square is every ring up to it.
//! Circles walk the same rings and keep only positions whose distance from
//! the center passes one cutoff, the radius plus half a pixel:
//!
//! - filled circle: distance <= radius + 0.5
//! - circle outline: radius - 0.5 < distance <= radius + 0.5
//!
//! Positions outside the surface are skipped silently.

use crate::error::RegionResult;
use crate::ring::square_gen;
use channeltinker_color::convert_depth;
use channeltinker_core::{ChannelId, ColorInput, Pixel, PixelSurface, Point};

/// Options for the shape functions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeOptions {
    /// Paint color; opaque black in the surface layout when `None`
    pub color: Option<Pixel>,
    /// Fill the interior instead of drawing the outline
    pub filled: bool,
    /// Draw a circle instead of a square
    pub circular: bool,
    /// Return every visited in-bounds position with its distance
    pub record_trace: bool,
}

impl ShapeOptions {
    /// Paint with `color`
    pub fn with_color(mut self, color: Pixel) -> Self {
        self.color = Some(color);
        self
    }

    /// Fill the interior
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Record a trace of visited positions
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}

/// Positions visited while drawing, with their distance from the center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeTrace {
    /// Positions that were painted
    pub painted: Vec<(Point, f64)>,
    /// In-bounds positions rejected by the circle cutoff
    pub skipped: Vec<(Point, f64)>,
}

fn paint_color<S: PixelSurface + ?Sized>(
    surface: &S,
    color: Option<&Pixel>,
) -> RegionResult<Pixel> {
    let max = surface.channel_type().max_value();
    let count = surface.channel_count();
    match color {
        Some(c) if c.len() == count => Ok(c.clone()),
        Some(c) => Ok(convert_depth(&ColorInput::from(c), count, max)?),
        None => Ok(Pixel::new(
            surface
                .channel_layout()
                .iter()
                .map(|&id| if id == ChannelId::Alpha { max } else { 0.0 })
                .collect(),
        )),
    }
}

/// Draw a square (or circle, with `options.circular`) around `center`.
///
/// Returns the trace when `options.record_trace` is set.
///
/// # Errors
///
/// Returns [`crate::RegionError::Color`] if the color cannot be converted
/// to the surface's channel count, or [`crate::RegionError::Core`] if a
/// write fails.
pub fn draw_square_from_center<S: PixelSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: u32,
    options: &ShapeOptions,
) -> RegionResult<Option<ShapeTrace>> {
    let color = paint_color(&*surface, options.color.as_ref())?;
    let mut trace = options.record_trace.then(ShapeTrace::default);

    let rings = if options.filled || options.circular {
        0..=radius
    } else {
        radius..=radius
    };
    let outer = radius as f64 + 0.5;
    let inner = radius as f64 - 0.5;

    for r in rings {
        for pos in square_gen(center, r) {
            if !surface.contains(pos) {
                continue;
            }
            let dist = pos.distance(center);
            let keep = if !options.circular {
                true
            } else if options.filled {
                dist <= outer
            } else {
                dist > inner && dist <= outer
            };
            if keep {
                surface.put_pixel_at(pos, &color)?;
            }
            if let Some(t) = trace.as_mut() {
                if keep {
                    t.painted.push((pos, dist));
                } else {
                    t.skipped.push((pos, dist));
                }
            }
        }
    }

    if let Some(t) = &trace {
        log::debug!(
            "drew {} of radius {radius} at {center}: {} painted, {} skipped",
            if options.circular { "circle" } else { "square" },
            t.painted.len(),
            t.skipped.len()
        );
    }
    Ok(trace)
}

/// Draw a circle around `center`.
pub fn draw_circle_from_center<S: PixelSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: u32,
    options: &ShapeOptions,
) -> RegionResult<Option<ShapeTrace>> {
    let options = ShapeOptions {
        circular: true,
        ..options.clone()
    };
    draw_square_from_center(surface, center, radius, &options)
}

fn surface_center<S: PixelSurface + ?Sized>(surface: &S) -> Point {
    let (w, h) = surface.size();
    Point::new((w / 2) as i32, (h / 2) as i32)
}

/// Draw a square around the center of the surface, `(w / 2, h / 2)`.
pub fn draw_centered_square<S: PixelSurface + ?Sized>(
    surface: &mut S,
    radius: u32,
    options: &ShapeOptions,
) -> RegionResult<Option<ShapeTrace>> {
    let center = surface_center(&*surface);
    draw_square_from_center(surface, center, radius, options)
}

/// Draw a circle around the center of the surface, `(w / 2, h / 2)`.
pub fn draw_centered_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    radius: u32,
    options: &ShapeOptions,
) -> RegionResult<Option<ShapeTrace>> {
    let center = surface_center(&*surface);
    draw_circle_from_center(surface, center, radius, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use channeltinker_core::{Canvas, ChannelType, layout};

    fn painted(c: &Canvas) -> usize {
        let (w, h) = c.size();
        let mut n = 0;
        for y in 0..h {
            for x in 0..w {
                if c.get_pixel(x, y).unwrap()[3] > 0.0 {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_square_outline() {
        let mut c = Canvas::rgba8(7, 7).unwrap();
        draw_square_from_center(&mut c, Point::new(3, 3), 2, &ShapeOptions::default()).unwrap();
        assert_eq!(painted(&c), 16);
        assert_eq!(c.get_pixel(1, 1).unwrap(), Pixel::rgba8(0, 0, 0, 255));
        assert_eq!(c.get_pixel(3, 3).unwrap(), Pixel::rgba8(0, 0, 0, 0));
    }

    #[test]
    fn test_filled_square_clips_to_surface() {
        let mut c = Canvas::rgba8(4, 4).unwrap();
        let opts = ShapeOptions::default().with_filled(true);
        draw_square_from_center(&mut c, Point::new(0, 0), 2, &opts).unwrap();
        assert_eq!(painted(&c), 9);
    }

    #[test]
    fn test_filled_circle() {
        let mut c = Canvas::rgba8(9, 9).unwrap();
        let opts = ShapeOptions::default().with_filled(true).with_trace(true);
        let trace = draw_circle_from_center(&mut c, Point::new(4, 4), 2, &opts)
            .unwrap()
            .unwrap();
        // dist <= 2.5 within the 5x5 square: all but the 4 corners
        assert_eq!(painted(&c), 21);
        assert_eq!(trace.painted.len(), 21);
        assert_eq!(trace.skipped.len(), 4);
        assert!(trace.skipped.iter().all(|&(_, d)| d > 2.5));
    }

    #[test]
    fn test_circle_outline_band() {
        let mut c = Canvas::rgba8(9, 9).unwrap();
        let opts = ShapeOptions::default().with_trace(true);
        let trace = draw_circle_from_center(&mut c, Point::new(4, 4), 2, &opts)
            .unwrap()
            .unwrap();
        for &(_, d) in &trace.painted {
            assert!(d > 1.5 && d <= 2.5);
        }
        // Offsets like (2, 0) and (2, 1); (1, 1) and (2, 2) fall outside
        assert_eq!(trace.painted.len(), 12);
        assert_eq!(c.get_pixel(4, 4).unwrap()[3], 0.0);
    }

    #[test]
    fn test_color_conversion_and_layouts() {
        let mut gray = Canvas::new(3, 3, layout::LA, ChannelType::NormalizedFloat).unwrap();
        draw_centered_square(&mut gray, 0, &ShapeOptions::default()).unwrap();
        assert_eq!(gray.get_pixel(1, 1).unwrap(), Pixel::new(vec![0.0, 1.0]));

        let mut rgb = Canvas::new(3, 3, layout::RGB, ChannelType::Integer).unwrap();
        let opts = ShapeOptions::default().with_color(Pixel::rgba8(10, 20, 30, 255));
        draw_centered_circle(&mut rgb, 0, &opts).unwrap();
        assert_eq!(rgb.get_pixel(1, 1).unwrap(), Pixel::rgb(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_no_trace_by_default() {
        let mut c = Canvas::rgba8(3, 3).unwrap();
        let out = draw_centered_square(&mut c, 1, &ShapeOptions::default()).unwrap();
        assert!(out.is_none());
        assert_eq!(painted(&c), 8);
    }
}
