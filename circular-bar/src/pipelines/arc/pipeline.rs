//! CPU arc rasterizer.

use std::path::Path;

use circular_bar_ui::{
    Color, DrawContext, DrawablePipeline,
    image::{ImageError, Rgba, RgbaImage},
};
use glam::Vec2;
use thiserror::Error;
use tracing::trace;

use super::command::{ArcCap, ArcCommand};

/// Errors raised while producing or writing a rendered frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The widget has not been given a drawable size yet.
    #[error("nothing to render into: target is {width}x{height}")]
    EmptyTarget {
        /// Target width in pixels
        width: i32,
        /// Target height in pixels
        height: i32,
    },
    /// Encoding or writing the image failed.
    #[error("failed to encode frame: {0}")]
    Encode(#[from] ImageError),
}

/// Rasterizer settings for [`ArcPipeline`].
///
/// ```
/// use circular_bar::pipelines::arc::pipeline::RasterConfig;
///
/// // Default configuration: one analytic sample per pixel
/// let config = RasterConfig::default();
///
/// // 4x4 supersampling for smoother edges on thin strokes
/// let config = RasterConfig {
///     samples_per_axis: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RasterConfig {
    /// Samples taken along each axis of a pixel. `1` evaluates coverage once
    /// at the pixel center; `n` evaluates it on an `n x n` grid and averages.
    /// Zero is treated as one.
    pub samples_per_axis: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            samples_per_axis: 1,
        }
    }
}

/// CPU pipeline that strokes [`ArcCommand`]s into an RGBA target.
///
/// Coverage comes from the signed distance to the stroke: negative inside,
/// positive outside. Anti-aliased commands fade over one pixel around the
/// edge; aliased ones are cut at the edge. Colors are blended source-over.
#[derive(Debug, Clone, Default)]
pub struct ArcPipeline {
    config: RasterConfig,
}

impl ArcPipeline {
    /// Creates the arc pipeline with the provided configuration.
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    fn stroke(&self, command: &ArcCommand, target: &mut RgbaImage) {
        if command.sweep_angle_degrees <= 0.0
            || command.stroke_width_px <= 0.0
            || command.color.a <= 0.0
        {
            return;
        }

        let center = command.bounds.center();
        let radius = command.bounds.radius();
        let reach = radius + command.stroke_width_px * 0.5 + 1.0;
        let (width, height) = target.dimensions();
        let x0 = (center.x - reach).floor().max(0.0) as u32;
        let y0 = (center.y - reach).floor().max(0.0) as u32;
        let x1 = ((center.x + reach).ceil().max(0.0) as u32).min(width);
        let y1 = ((center.y + reach).ceil().max(0.0) as u32).min(height);

        let samples = self.config.samples_per_axis.max(1);
        let step = 1.0 / samples as f32;
        let sample_weight = step * step;

        for y in y0..y1 {
            for x in x0..x1 {
                let mut coverage = 0.0;
                for sy in 0..samples {
                    for sx in 0..samples {
                        let point = Vec2::new(
                            x as f32 + (sx as f32 + 0.5) * step,
                            y as f32 + (sy as f32 + 0.5) * step,
                        );
                        let distance = signed_distance(command, center, radius, point);
                        let sample = if command.anti_alias {
                            (0.5 - distance / step).clamp(0.0, 1.0)
                        } else if distance <= 0.0 {
                            1.0
                        } else {
                            0.0
                        };
                        coverage += sample * sample_weight;
                    }
                }
                if coverage > 0.0 {
                    blend(target.get_pixel_mut(x, y), command.color, coverage);
                }
            }
        }
    }
}

impl DrawablePipeline<ArcCommand> for ArcPipeline {
    #[tracing::instrument(level = "trace", skip_all, fields(commands = context.commands.len()))]
    fn draw(&mut self, context: &mut DrawContext<ArcCommand>) {
        if context.commands.is_empty() {
            return;
        }
        for command in context.commands {
            trace!(
                start = command.start_angle_degrees,
                sweep = command.sweep_angle_degrees,
                "stroking arc"
            );
            self.stroke(command, context.target);
        }
    }
}

fn endpoint(center: Vec2, radius: f32, angle_degrees: f32) -> Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    center + Vec2::new(cos, sin) * radius
}

fn signed_distance(command: &ArcCommand, center: Vec2, radius: f32, point: Vec2) -> f32 {
    let half_width = command.stroke_width_px * 0.5;
    let offset = point - center;
    let distance = offset.length();
    let ring = (distance - radius).abs() - half_width;

    let sweep = command.sweep_angle_degrees;
    if sweep >= 360.0 {
        return ring;
    }

    // y grows downward, so atan2 already runs clockwise.
    let angle = offset.y.atan2(offset.x).to_degrees();
    let relative = (angle - command.start_angle_degrees).rem_euclid(360.0);

    match command.cap {
        ArcCap::Butt => {
            let angular = if relative <= sweep {
                -relative.min(sweep - relative)
            } else {
                (relative - sweep).min(360.0 - relative)
            };
            ring.max(angular.to_radians() * distance)
        }
        ArcCap::Round => {
            if relative <= sweep {
                ring
            } else {
                let start = endpoint(center, radius, command.start_angle_degrees);
                let end = endpoint(center, radius, command.start_angle_degrees + sweep);
                point.distance(start).min(point.distance(end)) - half_width
            }
        }
    }
}

fn blend(pixel: &mut Rgba<u8>, color: Color, coverage: f32) {
    let src_a = color.a.clamp(0.0, 1.0) * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    let [dr, dg, db, da] = pixel.0.map(|c| c as f32 / 255.0);
    let out_a = src_a + da * (1.0 - src_a);
    let mix = |s: f32, d: f32| (s * src_a + d * da * (1.0 - src_a)) / out_a;
    pixel.0 = Color::new(mix(color.r, dr), mix(color.g, dg), mix(color.b, db), out_a).to_rgba8();
}

/// Writes `image` as a PNG file at `path`.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
    image.save_with_format(path, circular_bar_ui::image::ImageFormat::Png)?;
    Ok(())
}
