//! Draw command traits.
//!
//! Widgets describe what to paint as plain command values. A
//! [`DrawablePipeline`] consumes a batch of commands of one type and paints
//! them into a [`DrawContext`] target.

use image::RgbaImage;

/// Trait for paint operations that can be processed by a draw pipeline.
///
/// # Example
///
/// ```
/// use circular_bar_ui::{Color, DrawCommand};
///
/// #[derive(PartialEq, Clone)]
/// struct DotCommand {
///     color: Color,
///     radius: f32,
/// }
///
/// impl DrawCommand for DotCommand {
///     fn apply_opacity(&mut self, opacity: f32) {
///         self.color = self.color.with_alpha(self.color.a * opacity);
///     }
/// }
/// ```
pub trait DrawCommand: Send + Sync {
    /// Applies an opacity multiplier to this command.
    ///
    /// The default implementation is a no-op; override to scale internal
    /// color data when group opacity is applied.
    fn apply_opacity(&mut self, opacity: f32) {
        let _ = opacity;
    }
}

/// Everything a pipeline needs to paint one batch.
pub struct DrawContext<'a, C: DrawCommand> {
    /// Commands to paint, in submission order.
    pub commands: &'a [C],
    /// Straight-alpha RGBA8 target.
    pub target: &'a mut RgbaImage,
}

impl<'a, C: DrawCommand> DrawContext<'a, C> {
    /// Creates a context painting `commands` into `target`.
    pub fn new(commands: &'a [C], target: &'a mut RgbaImage) -> Self {
        Self { commands, target }
    }
}

/// A pipeline that paints commands of type `C`.
pub trait DrawablePipeline<C: DrawCommand> {
    /// Paints every command in `context` into its target.
    fn draw(&mut self, context: &mut DrawContext<C>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    struct FillCommand(Color);

    impl DrawCommand for FillCommand {}

    struct FillPipeline;

    impl DrawablePipeline<FillCommand> for FillPipeline {
        fn draw(&mut self, context: &mut DrawContext<FillCommand>) {
            for command in context.commands {
                let rgba = image::Rgba(command.0.to_rgba8());
                for pixel in context.target.pixels_mut() {
                    *pixel = rgba;
                }
            }
        }
    }

    #[test]
    fn test_pipeline_paints_target() {
        let mut target = RgbaImage::new(3, 2);
        let commands = [FillCommand(Color::RED)];
        let mut context = DrawContext::new(&commands, &mut target);

        FillPipeline.draw(&mut context);
        assert!(target.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }
}
