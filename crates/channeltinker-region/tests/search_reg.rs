//! Nearest opaque search regression test
//!
//! Tests find_opaque_pos against a brute-force scan, the center-only and
//! excluded-center cases, and the default circular cutoff.

use channeltinker_core::{Canvas, Pixel, PixelSurface, Point};
use channeltinker_region::{SearchOutcome, SearchQuery, find_opaque_pos};
use channeltinker_test::{RegParams, solid_rgba_float};

/// Scan every pixel in row-major order and keep the nearest acceptable one.
fn brute_force_distance(surface: &Canvas, center: Point, good_minimum: f64) -> Option<i64> {
    let (w, h) = surface.size();
    let mut best: Option<i64> = None;
    for y in 0..h {
        for x in 0..w {
            let alpha = surface.get_pixel(x, y).unwrap()[3];
            if alpha >= good_minimum {
                let d = Point::new(x as i32, y as i32).distance_squared(center);
                if best.is_none_or(|b| d < b) {
                    best = Some(d);
                }
            }
        }
    }
    best
}

fn sparse_surface(w: u32, h: u32) -> Canvas {
    let mut c = solid_rgba_float(w, h, [0.0, 0.0, 0.0, 0.0]).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = (x * 31 + y * 17) % 23;
            let alpha = if v == 0 { 1.0 } else { v as f64 / 46.0 };
            c.put_pixel(x, y, &Pixel::rgba(0.5, 0.5, 0.5, alpha)).unwrap();
        }
    }
    c
}

#[test]
fn search_reg() {
    let mut rp = RegParams::new("search");

    // Test 1: only the center is opaque
    let mut c = solid_rgba_float(5, 5, [0.0, 0.0, 0.0, 0.0]).unwrap();
    c.put_pixel(2, 2, &Pixel::rgba(1.0, 1.0, 1.0, 0.75)).unwrap();
    let q = SearchQuery::new(0.75).with_max_radius(0);
    match find_opaque_pos(&c, Point::new(2, 2), &q).unwrap() {
        SearchOutcome::Found { position, distance } => {
            rp.compare_values(2.0, position.x as f64, 0.0);
            rp.compare_values(2.0, position.y as f64, 0.0);
            rp.compare_values(0.0, distance, 0.0);
        }
        SearchOutcome::NotFound { .. } => {
            eprintln!("  center not found");
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }

    // Test 2: excluding the center falls back to ring 1
    c.put_pixel(1, 3, &Pixel::rgba(1.0, 1.0, 1.0, 1.0)).unwrap();
    let q = SearchQuery::new(0.75).with_exclude_center(true);
    let out = find_opaque_pos(&c, Point::new(2, 2), &q).unwrap();
    rp.compare_values(
        1.0,
        if out.position() == Some(Point::new(1, 3)) { 1.0 } else { 0.0 },
        0.0,
    );

    // Test 3: the full square agrees with a brute-force scan on distance
    let c = sparse_surface(13, 9);
    for &(cx, cy) in &[(0, 0), (6, 4), (12, 8), (3, 7), (-2, 4), (15, 1)] {
        let center = Point::new(cx, cy);
        for good_minimum in [0.3, 0.45, 1.0] {
            let q = SearchQuery::new(good_minimum).with_circular(false);
            let out = find_opaque_pos(&c, center, &q).unwrap();
            let expected = brute_force_distance(&c, center, good_minimum);
            let actual = out.position().map(|p| p.distance_squared(center));
            rp.compare_values(
                expected.map_or(-1.0, |d| d as f64),
                actual.map_or(-1.0, |d| d as f64),
                0.0,
            );
        }
    }

    // Test 4: nothing qualifies
    let empty = solid_rgba_float(4, 3, [0.2, 0.2, 0.2, 0.25]).unwrap();
    match find_opaque_pos(&empty, Point::new(1, 1), &SearchQuery::new(0.5)).unwrap() {
        SearchOutcome::NotFound { max_alpha } => {
            rp.compare_values(0.25, max_alpha.unwrap_or(-1.0), 0.0);
        }
        SearchOutcome::Found { .. } => {
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }

    // Test 5: by default the far corner lies past the circle
    let mut c = solid_rgba_float(10, 10, [0.0, 0.0, 0.0, 0.0]).unwrap();
    c.put_pixel(9, 9, &Pixel::rgba(1.0, 1.0, 1.0, 1.0)).unwrap();
    let out = find_opaque_pos(&c, Point::new(0, 0), &SearchQuery::default()).unwrap();
    rp.compare_values(0.0, if out.is_found() { 1.0 } else { 0.0 }, 0.0);
    let q = SearchQuery::default().with_circular(false);
    let out = find_opaque_pos(&c, Point::new(0, 0), &q).unwrap();
    rp.compare_values(
        1.0,
        if out.position() == Some(Point::new(9, 9)) { 1.0 } else { 0.0 },
        0.0,
    );
    // From the middle the corner lies within max_radius + 1
    let out = find_opaque_pos(&c, Point::new(5, 5), &SearchQuery::default()).unwrap();
    rp.compare_values(
        1.0,
        if out.position() == Some(Point::new(9, 9)) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup());
}
