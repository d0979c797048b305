//! Pixel synthesis: evaluate the truncated cosine expansion at every pixel.
//!
//! For output pixel `(x, y)` the linear colour is
//!
//! ```text
//! sum_j sum_i colour[i + j * cx] * cos(PI * x * i / width) * cos(PI * y * j / height)
//! ```
//!
//! which is then converted to sRGB bytes. The cosine factors are tabulated
//! once per column and per row; every pixel still sums all `cx * cy` terms in
//! the same order, so the tables and the optional row parallelism do not
//! change a single output byte.

use std::f64::consts::PI;

use crate::color::linear_to_srgb;
use crate::error::BlurhashError;
use crate::header::MAX_COMPONENTS;

/// Minimum number of output pixels before rows are spread over the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_PIXEL_THRESHOLD: usize = 64 * 64;

/// Byte layout of a synthesised pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// `R, G, B, A` with alpha fixed at 255.
    #[default]
    Rgba,
    /// `R, G, B`.
    Rgb,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::Rgb => 3,
        }
    }
}

/// Precomputed cosine factors for one output size and component grid.
struct Basis {
    width: usize,
    height: usize,
    components_x: usize,
    components_y: usize,
    /// `cos_x[i * width + x] = cos(PI * x * i / width)`
    cos_x: Vec<f64>,
    /// `cos_y[j * height + y] = cos(PI * y * j / height)`
    cos_y: Vec<f64>,
}

impl Basis {
    /// Tabulate the cosine factors, or `None` if the tables cannot be allocated.
    fn new(
        width: usize,
        height: usize,
        components_x: usize,
        components_y: usize,
    ) -> Option<Self> {
        Some(Self {
            width,
            height,
            components_x,
            components_y,
            cos_x: cosine_table(components_x, width)?,
            cos_y: cosine_table(components_y, height)?,
        })
    }

    /// Write output row `y` into `row`.
    fn fill_row(&self, colours: &[[f64; 3]], y: usize, row: &mut [u8], format: PixelFormat) {
        for (x, pixel) in row.chunks_exact_mut(format.channels()).enumerate() {
            let mut pixel_r = 0.0f64;
            let mut pixel_g = 0.0f64;
            let mut pixel_b = 0.0f64;

            for j in 0..self.components_y {
                let cy = self.cos_y[j * self.height + y];
                for i in 0..self.components_x {
                    let basis = self.cos_x[i * self.width + x] * cy;
                    let colour = &colours[i + j * self.components_x];
                    pixel_r += colour[0] * basis;
                    pixel_g += colour[1] * basis;
                    pixel_b += colour[2] * basis;
                }
            }

            pixel[0] = linear_to_srgb(pixel_r);
            pixel[1] = linear_to_srgb(pixel_g);
            pixel[2] = linear_to_srgb(pixel_b);
            if format == PixelFormat::Rgba {
                pixel[3] = 255;
            }
        }
    }
}

/// `table[k * extent + p] = cos(PI * p * k / extent)`
fn cosine_table(count: usize, extent: usize) -> Option<Vec<f64>> {
    let len = count.checked_mul(extent)?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).ok()?;
    let ef = extent as f64;
    table.extend(
        (0..count).flat_map(|k| (0..extent).map(move |p| (PI * p as f64 * k as f64 / ef).cos())),
    );
    Some(table)
}

/// Synthesise a `width x height` image from linear component colours.
///
/// `colours` is indexed `i + j * components_x` as produced by
/// [`coefficients::extract`](crate::coefficients::extract). The returned
/// buffer is row-major with `format.channels()` bytes per pixel.
///
/// # Errors
///
/// - [`BlurhashError::InvalidDimensions`] if `width` or `height` is zero, or
///   the output buffer or cosine tables cannot be allocated.
/// - [`BlurhashError::InvalidComponentCount`] if a component count is outside 1..=9.
/// - [`BlurhashError::LengthMismatch`] if `colours` has fewer than
///   `components_x * components_y` entries.
pub fn synthesize(
    colours: &[[f64; 3]],
    components_x: u32,
    components_y: u32,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<Vec<u8>, BlurhashError> {
    let (basis, mut result) = plan(colours, components_x, components_y, width, height, format)?;
    render(&basis, colours, &mut result, format);
    Ok(result)
}

/// Validate the request, allocate the zeroed output buffer and build the
/// cosine tables.
fn plan(
    colours: &[[f64; 3]],
    components_x: u32,
    components_y: u32,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<(Basis, Vec<u8>), BlurhashError> {
    if width == 0 || height == 0 {
        return Err(BlurhashError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be > 0",
        });
    }
    for (component, value) in [("x", components_x), ("y", components_y)] {
        if !(1..=MAX_COMPONENTS).contains(&value) {
            return Err(BlurhashError::InvalidComponentCount { component, value });
        }
    }
    let num_components = (components_x * components_y) as usize;
    if colours.len() < num_components {
        return Err(BlurhashError::LengthMismatch {
            expected: num_components,
            actual: colours.len(),
        });
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(format.channels()))
        .ok_or(BlurhashError::InvalidDimensions {
            width,
            height,
            reason: "dimensions overflow buffer size calculation",
        })?;
    let too_large = || BlurhashError::InvalidDimensions {
        width,
        height,
        reason: "output too large to allocate",
    };

    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| too_large())?;
    out.resize(len, 0u8);

    let basis = Basis::new(
        width as usize,
        height as usize,
        components_x as usize,
        components_y as usize,
    )
    .ok_or_else(too_large)?;
    Ok((basis, out))
}

#[cfg(feature = "parallel")]
fn should_parallelize(basis: &Basis) -> bool {
    basis.width * basis.height >= PARALLEL_PIXEL_THRESHOLD
}

#[cfg(not(feature = "parallel"))]
fn should_parallelize(_basis: &Basis) -> bool {
    false
}

/// Fill `out` row by row, on the rayon pool for large outputs.
fn render(basis: &Basis, colours: &[[f64; 3]], out: &mut [u8], format: PixelFormat) {
    let parallel = should_parallelize(basis);
    tracing::trace!(
        width = basis.width,
        height = basis.height,
        parallel,
        "synthesising pixels"
    );

    #[cfg(feature = "parallel")]
    {
        if parallel {
            render_parallel(basis, colours, out, format);
            return;
        }
    }
    render_sequential(basis, colours, out, format);
}

fn render_sequential(basis: &Basis, colours: &[[f64; 3]], out: &mut [u8], format: PixelFormat) {
    let row_len = basis.width * format.channels();
    for (y, row) in out.chunks_mut(row_len).enumerate() {
        basis.fill_row(colours, y, row, format);
    }
}

#[cfg(feature = "parallel")]
fn render_parallel(basis: &Basis, colours: &[[f64; 3]], out: &mut [u8], format: PixelFormat) {
    use rayon::prelude::*;

    let row_len = basis.width * format.channels();
    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| basis.fill_row(colours, y, row, format));
}
