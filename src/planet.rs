//! Textured, rotating planet
//!
//! The planet texture is an equirectangular grid twice as wide as the planet
//! is tall. It is baked once from seeded noise, then scrolled horizontally
//! every frame and wrapped onto the sphere silhouette one scanline at a time.

use std::f64::consts::{PI, TAU};
use std::sync::Arc;

use glam::DVec3;

use crate::config::{NoiseMode, PlanetConfig};
use crate::error::{PlanetError, Result};
use crate::grid::ToroidalGrid;
use crate::noise::{NoiseField, DEFAULT_OCTAVES};
use crate::palette::Palette;
use crate::random::SeededRandom;
use crate::render::{plot_opt, DrawPass, PixelSink, Renderable};
use crate::selection::select_index;
use crate::sphere::SphereGeometry;

/// Horizontal shift of the flat strip, as a fraction of its width, that lines
/// it up with the sphere's visible hemisphere. Cosmetic only.
pub const PLANE_ALIGNMENT: f64 = 0.75;

/// Largest value below 1; noise compositions are closed on [0, 1] while the
/// selector needs a half-open sample
const MAX_SAMPLE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Everything a noise mode may look at for one grid cell
struct CellSample {
    point: DVec3,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

type CellSampler = fn(&NoiseField, &CellSample) -> f64;

fn simplex_cell(noise: &NoiseField, cell: &CellSample) -> f64 {
    noise.fractal_simplex(cell.point, DEFAULT_OCTAVES)
}

fn ridged_cell(noise: &NoiseField, cell: &CellSample) -> f64 {
    noise.fractal_ridged(cell.point, DEFAULT_OCTAVES)
}

fn warped_cell(noise: &NoiseField, cell: &CellSample) -> f64 {
    noise.domain_warp(cell.point, DEFAULT_OCTAVES)
}

/// Bands parallel to the equator, four per hemisphere, bent by noise
fn horizontal_stripe_cell(noise: &NoiseField, cell: &CellSample) -> f64 {
    let off = simplex_cell(noise, cell);
    (((4.0 * cell.y / cell.height + off) * 2.0 * TAU).cos() + 1.0) * 0.5
}

/// Bands running pole to pole, bent by noise
fn vertical_stripe_cell(noise: &NoiseField, cell: &CellSample) -> f64 {
    let off = simplex_cell(noise, cell);
    (((4.0 * cell.x / cell.width + off) * 2.0 * TAU).cos() + 1.0) * 0.5
}

/// `y + 10 * off` mapped linearly from [-10, height + 10] onto [0, 1]
fn gradation_cell(noise: &NoiseField, cell: &CellSample) -> f64 {
    let off = simplex_cell(noise, cell);
    (cell.y + off * 10.0 + 10.0) / (cell.height + 20.0)
}

/// Pick the per-cell value function for `mode` once, before the fill loop
fn cell_sampler(mode: NoiseMode) -> CellSampler {
    match mode {
        NoiseMode::Simplex => simplex_cell,
        NoiseMode::Ridged => ridged_cell,
        NoiseMode::DomainWarping => warped_cell,
        NoiseMode::HStripe => horizontal_stripe_cell,
        NoiseMode::VStripe => vertical_stripe_cell,
        NoiseMode::Gradation => gradation_cell,
    }
}

/// Point on a unit sphere shifted into the positive octant for grid cell (x, y)
fn sphere_point(x: f64, y: f64, width: f64, height: f64) -> DVec3 {
    let phi = x / width * TAU;
    let theta = y / height * PI;
    DVec3::new(
        theta.sin() * phi.cos() + 1.0,
        theta.sin() * phi.sin() + 1.0,
        theta.cos() + 1.0,
    )
}

/// A planet with a pre-baked palette-index texture
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pixel_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .diameter(16).unwrap()
///     .noise_mode(NoiseMode::Ridged)
///     .build()
///     .unwrap();
/// let palette = Arc::new(Palette::new(vec![Some('#'), Some('.')], vec![1.0, 1.0]).unwrap());
/// let planet = PlanetBody::new(config, palette, &mut SeededRandom::new(42)).unwrap();
///
/// let mut canvas: Canvas<char> = Canvas::new(32, 32);
/// planet.draw(&mut canvas, 0, DrawPass::Front);
/// assert!(canvas.filled_count() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct PlanetBody<C> {
    config: PlanetConfig,
    palette: Arc<Palette<C>>,
    geometry: Arc<SphereGeometry>,
    grid: ToroidalGrid<usize>,
    speed: f64,
}

impl<C: Copy> PlanetBody<C> {
    /// Bake a planet, computing its own sphere geometry
    ///
    /// The noise field is seeded from `rng`, so planets built in sequence from
    /// one generator each get a distinct but reproducible texture.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero diameter, or `OutOfRange` if
    /// the palette weights cannot discretize the noise (e.g. all zero).
    pub fn new(config: PlanetConfig, palette: Arc<Palette<C>>, rng: &mut SeededRandom) -> Result<Self> {
        let geometry = Arc::new(SphereGeometry::new(config.diameter)?);
        Self::with_geometry(config, palette, geometry, rng)
    }

    /// Bake a planet that shares an existing sphere geometry
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the geometry diameter differs from the
    /// configured one, otherwise the errors of [`PlanetBody::new`].
    pub fn with_geometry(
        config: PlanetConfig,
        palette: Arc<Palette<C>>,
        geometry: Arc<SphereGeometry>,
        rng: &mut SeededRandom,
    ) -> Result<Self> {
        if geometry.diameter() != config.diameter {
            return Err(PlanetError::InvalidConfiguration(format!(
                "geometry diameter {} does not match planet diameter {}",
                geometry.diameter(),
                config.diameter
            )));
        }
        if !(config.lap_time.is_finite() && config.lap_time > 0.0) {
            return Err(PlanetError::InvalidConfiguration(format!(
                "lap time must be positive (got {})",
                config.lap_time
            )));
        }

        let diameter = config.diameter as usize;
        let mut grid = ToroidalGrid::new(diameter * 2, diameter, 0usize)?;
        let noise = NoiseField::from_rng(rng);
        bake_texture(&mut grid, &noise, config.noise_mode, palette.weights())?;

        log::debug!(
            "baked {}x{} {} planet texture (noise seed {})",
            grid.width(),
            grid.height(),
            config.noise_mode.name(),
            noise.seed()
        );

        Ok(Self {
            speed: config.speed(),
            config,
            palette,
            geometry,
            grid,
        })
    }

    #[inline]
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    #[inline]
    pub fn diameter(&self) -> u32 {
        self.config.diameter
    }

    #[inline]
    pub fn palette(&self) -> &Arc<Palette<C>> {
        &self.palette
    }

    #[inline]
    pub fn geometry(&self) -> &Arc<SphereGeometry> {
        &self.geometry
    }

    /// The baked palette-index texture
    #[inline]
    pub fn grid(&self) -> &ToroidalGrid<usize> {
        &self.grid
    }

    /// Texture scroll in grid columns per frame
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Total texture scroll, in grid columns, at `frame`
    #[inline]
    pub fn scroll(&self, frame: u64) -> f64 {
        frame as f64 * self.speed
    }

    /// Whether the palette defines a far-hemisphere colour
    #[inline]
    pub fn has_back(&self) -> bool {
        self.palette.has_back()
    }

    /// Number of texture cells holding each palette index
    pub fn palette_histogram(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &index in self.grid.cells() {
            counts[index] += 1;
        }
        counts
    }

    /// Draw the whole texture as a flat strip anchored at `plane_offset`
    pub fn draw_plane(&self, sink: &mut dyn PixelSink<C>, frame: u64) {
        let width = self.grid.width();
        let origin = self.config.plane_offset;
        let shift = width as f64 * PLANE_ALIGNMENT - self.scroll(frame);

        for x in 0..width {
            let gx = (x as f64 + shift).floor() as i64;
            for y in 0..self.grid.height() {
                let index = self.grid.get(gx, y as i64);
                plot_opt(
                    sink,
                    x as f64 + origin.x,
                    y as f64 + origin.y,
                    self.palette.color(index),
                );
            }
        }
    }
}

/// Fill every grid cell with the palette index its noise value selects
fn bake_texture(
    grid: &mut ToroidalGrid<usize>,
    noise: &NoiseField,
    mode: NoiseMode,
    weights: &[f64],
) -> Result<()> {
    let sampler = cell_sampler(mode);
    let width = grid.width() as f64;
    let height = grid.height() as f64;

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let (fx, fy) = (x as f64, y as f64);
            let cell = CellSample {
                point: sphere_point(fx, fy, width, height),
                x: fx,
                y: fy,
                width,
                height,
            };
            let value = sampler(noise, &cell).clamp(0.0, MAX_SAMPLE);
            grid.set(x as i64, y as i64, select_index(weights, value)?)?;
        }
    }

    Ok(())
}

impl<C: Copy> Renderable<C> for PlanetBody<C> {
    /// Wrap the texture onto the silhouette
    ///
    /// Each scanline samples `diameter` texture columns spread across its
    /// span, so the visible hemisphere shows half the texture. The back pass
    /// samples the other half and is mirrored left to right; non-zero cells
    /// there take the palette's back colour.
    fn draw(&self, sink: &mut dyn PixelSink<C>, frame: u64, pass: DrawPass) {
        let back = pass.is_back();
        let diameter = self.config.diameter as f64;
        let hemisphere = if back { 1.0 } else { 0.0 };
        let mirror = if back { -1.0 } else { 1.0 };
        let scroll = self.scroll(frame);
        let center = self.config.offset;

        for (y, span) in self.geometry.spans() {
            let sw = span as f64;
            let py = y as f64 + center.y - diameter / 2.0;
            for x in 0..span {
                let fx = x as f64;
                let gx = ((fx / sw + hemisphere) * diameter - scroll).floor() as i64;
                let index = self.grid.get(gx, y as i64);
                let color = if back && index != 0 {
                    self.palette.back_color()
                } else {
                    self.palette.color(index)
                };
                plot_opt(sink, mirror * (fx - sw / 2.0 + 0.5) + center.x, py, color);
            }
        }
    }
}
