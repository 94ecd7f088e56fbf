//! Regression test parameters and operations

use channeltinker_core::{ChannelType, Pixel, PixelSurface, layout};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare only (default)
    #[default]
    Compare,
    /// Compare and print every compared surface to stderr
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of
/// the current check, and every failure recorded so far. Checks never
/// panic; call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "diffimages")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// Passes if `actual` is within `delta` of `expected`; NaN never passes.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.check(diff <= delta, || {
            format!("values differ by {diff} (allowed {delta}): expected {expected}, got {actual}")
        })
    }

    /// Compare two pixels for exact equality
    pub fn compare_pixels(&mut self, expected: &Pixel, actual: &Pixel) -> bool {
        self.check(expected == actual, || {
            format!("pixels differ: expected {expected}, got {actual}")
        })
    }

    /// Compare two surfaces for exact equality
    ///
    /// Size, layout, channel type and every pixel must match. The first
    /// mismatching position is reported.
    pub fn compare_surfaces<A, B>(&mut self, expected: &A, actual: &B) -> bool
    where
        A: PixelSurface + ?Sized,
        B: PixelSurface + ?Sized,
    {
        if self.display() {
            dump_surface("expected", expected);
            dump_surface("actual", actual);
        }

        let expected_shape = shape_of(expected);
        let actual_shape = shape_of(actual);
        if expected_shape != actual_shape {
            return self.check(false, || {
                format!("surface shapes differ: expected {expected_shape:?}, got {actual_shape:?}")
            });
        }

        let (width, height) = expected.size();
        let mismatch = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .find(|&(x, y)| expected.get_pixel(x, y).ok() != actual.get_pixel(x, y).ok());
        self.check(mismatch.is_none(), || match mismatch {
            Some((x, y)) => format!("surfaces differ at ({x}, {y})"),
            None => String::new(),
        })
    }

    /// Compare two strings
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.check(expected == actual, || {
            format!("strings differ: expected {expected:?}, got {actual:?}")
        })
    }

    /// Print a summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        let status = if self.success { "SUCCESS" } else { "FAILURE" };
        eprintln!("{status}: {}_reg ({} checks)", self.test_name, self.index);
        for failure in &self.failures {
            eprintln!("  {failure}");
        }
        eprintln!();
        self.success
    }

    /// Whether every check so far passed
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Number the next check and record a failure if it did not pass.
    fn check(&mut self, passed: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !passed {
            let msg = format!("{}_reg check {}: {}", self.test_name, self.index, detail());
            eprintln!("{msg}");
            self.failures.push(msg);
            self.success = false;
        }
        passed
    }
}

fn shape_of<S: PixelSurface + ?Sized>(surface: &S) -> ((u32, u32), String, ChannelType) {
    (
        surface.size(),
        layout::band_string(surface.channel_layout()),
        surface.channel_type(),
    )
}

fn dump_surface<S: PixelSurface + ?Sized>(label: &str, surface: &S) {
    let (width, height) = surface.size();
    eprintln!("{label}: {width}x{height} {}", surface.channel_type());
    for y in 0..height {
        let row: Vec<String> = (0..width)
            .filter_map(|x| surface.get_pixel(x, y).ok())
            .map(|p| p.to_string())
            .collect();
        eprintln!("  {}", row.join(" "));
    }
}
