//! Circular progress bar.
//!
//! ## Usage
//!
//! Show how far a task has advanced as a ring split into a reached arc,
//! starting at 12 o'clock and running clockwise, and an unreached arc
//! covering the rest.
use circular_bar_ui::{
    Color, Constraint, DimensionValue, DrawContext, DrawablePipeline, Dp, Px, PxRect, PxSize,
    image::RgbaImage,
};
use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    geometry::{ArcGeometry, compute_geometry},
    pipelines::arc::{
        command::{ArcCap, ArcCommand},
        pipeline::{ArcPipeline, RasterConfig, RenderError},
    },
    snapshot::CircularBarSnapshot,
    sweep::ProgressSweep,
};

/// Defaults for circular bars.
pub struct CircularBarDefaults;

impl CircularBarDefaults {
    /// Default maximum progress.
    pub const MAX: i32 = 100;
    /// Default reached and unreached color, `#aed036`.
    pub const COLOR_ARGB: u32 = 0xFFAE_D036;
    /// Default reached stroke width.
    pub const REACHED_STROKE_WIDTH: Dp = Dp(1.5);
    /// Default unreached stroke width.
    pub const UNREACHED_STROKE_WIDTH: Dp = Dp(1.0);
    /// Default text suffix.
    pub const SUFFIX: &'static str = "%";
    /// Size requested when the parent leaves the choice to the bar.
    pub const MIN_DIAMETER: Dp = Dp(40.0);

    /// The default arc color.
    pub fn color() -> Color {
        Color::from_argb_u32(Self::COLOR_ARGB)
    }
}

/// Padding between the bar's bounds and its arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Left inset
    pub left: Px,
    /// Top inset
    pub top: Px,
    /// Right inset
    pub right: Px,
    /// Bottom inset
    pub bottom: Px,
}

impl Padding {
    /// Same inset on every side.
    pub const fn all(value: Px) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Sum of the left and right insets, saturating.
    pub fn horizontal(&self) -> Px {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom insets, saturating.
    pub fn vertical(&self) -> Px {
        self.top.saturating_add(self.bottom)
    }
}

/// Initial attributes of a [`CircularBar`].
#[derive(Clone, Debug, Setters)]
pub struct CircularBarArgs {
    /// Maximum progress. Non-positive values fall back to the default.
    pub max: i32,

    /// Initial progress. Values outside `0..=max` leave progress at 0.
    pub progress: i32,

    /// Color of the reached arc.
    pub reached_color: Color,

    /// Color of the unreached arc.
    pub unreached_color: Color,

    /// Stroke width of the reached arc.
    pub reached_stroke_width: Dp,

    /// Stroke width of the unreached arc.
    pub unreached_stroke_width: Dp,

    /// Text placed before the progress value.
    #[setters(into)]
    pub prefix: String,

    /// Text placed after the progress value.
    #[setters(into)]
    pub suffix: String,

    /// Space between the bounds and the arcs.
    pub padding: Padding,

    /// Content size used when the parent does not fix the size.
    pub min_size: Dp,

    /// The bar's own sizing preference, merged with the parent's.
    pub constraint: Constraint,

    /// Stroke cap of both arcs.
    pub stroke_cap: ArcCap,

    /// Whether arc edges are anti-aliased.
    pub anti_alias: bool,
}

impl Default for CircularBarArgs {
    fn default() -> Self {
        Self {
            max: CircularBarDefaults::MAX,
            progress: 0,
            reached_color: CircularBarDefaults::color(),
            unreached_color: CircularBarDefaults::color(),
            reached_stroke_width: CircularBarDefaults::REACHED_STROKE_WIDTH,
            unreached_stroke_width: CircularBarDefaults::UNREACHED_STROKE_WIDTH,
            prefix: String::new(),
            suffix: CircularBarDefaults::SUFFIX.to_owned(),
            padding: Padding::default(),
            min_size: CircularBarDefaults::MIN_DIAMETER,
            constraint: Constraint::NONE,
            stroke_cap: ArcCap::default(),
            anti_alias: true,
        }
    }
}

/// A circular progress bar.
///
/// The bar keeps `0 <= progress <= max` and `max > 0` at all times. Setters
/// that would break this are ignored.
///
/// ```
/// use circular_bar::{CircularBar, CircularBarArgs};
///
/// let mut bar = CircularBar::new(CircularBarArgs::default().max(200));
/// bar.set_progress(50);
/// assert_eq!(bar.sweep().reached_sweep, 90.0);
///
/// bar.set_progress(201);
/// assert_eq!(bar.progress(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBar {
    max: i32,
    progress: i32,
    reached_color: Color,
    unreached_color: Color,
    reached_stroke_width: f32,
    unreached_stroke_width: f32,
    prefix: String,
    suffix: String,
    padding: Padding,
    min_size: Dp,
    constraint: Constraint,
    stroke_cap: ArcCap,
    anti_alias: bool,
    size: PxSize,
    invalidated: bool,
}

impl Default for CircularBar {
    fn default() -> Self {
        Self::new(CircularBarArgs::default())
    }
}

impl CircularBar {
    /// Creates a bar from its initial attributes.
    pub fn new(args: impl Into<CircularBarArgs>) -> Self {
        let args: CircularBarArgs = args.into();
        let mut bar = Self {
            max: CircularBarDefaults::MAX,
            progress: 0,
            reached_color: quantize(args.reached_color),
            unreached_color: quantize(args.unreached_color),
            reached_stroke_width: args.reached_stroke_width.to_rounded_pixels_f32(),
            unreached_stroke_width: args.unreached_stroke_width.to_rounded_pixels_f32(),
            prefix: args.prefix,
            suffix: args.suffix,
            padding: args.padding,
            min_size: args.min_size,
            constraint: args.constraint,
            stroke_cap: args.stroke_cap,
            anti_alias: args.anti_alias,
            size: PxSize::ZERO,
            invalidated: true,
        };
        bar.set_max(args.max);
        bar.set_progress(args.progress);
        bar
    }

    /// Current progress.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Maximum progress.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Color of the reached arc.
    pub fn reached_color(&self) -> Color {
        self.reached_color
    }

    /// Color of the unreached arc.
    pub fn unreached_color(&self) -> Color {
        self.unreached_color
    }

    /// Stroke width of the reached arc in pixels.
    pub fn reached_stroke_width(&self) -> f32 {
        self.reached_stroke_width
    }

    /// Stroke width of the unreached arc in pixels.
    pub fn unreached_stroke_width(&self) -> f32 {
        self.unreached_stroke_width
    }

    /// Text placed before the progress value.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text placed after the progress value.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Padding between the bounds and the arcs.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Size assigned by the last [`layout`](Self::layout).
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Sets the progress. Values outside `0..=max` are ignored.
    pub fn set_progress(&mut self, progress: i32) {
        if !(0..=self.max).contains(&progress) {
            debug!(progress, max = self.max, "Ignoring out-of-range progress");
            return;
        }
        if progress != self.progress {
            self.progress = progress;
            self.invalidate();
        }
    }

    /// Sets the maximum. Non-positive values are ignored.
    ///
    /// Shrinking the maximum below the current progress pulls the progress
    /// down to the new maximum.
    pub fn set_max(&mut self, max: i32) {
        if max <= 0 {
            debug!(max, "Ignoring non-positive max");
            return;
        }
        if max != self.max {
            self.max = max;
            self.progress = self.progress.min(max);
            self.invalidate();
        }
    }

    /// Adds `by` to the progress. Ignored when `by` is not positive or the
    /// result would pass the maximum.
    pub fn increment_progress_by(&mut self, by: i32) {
        if by > 0 {
            self.set_progress(self.progress.saturating_add(by));
        }
    }

    /// Sets the text prefix; `None` clears it.
    pub fn set_prefix(&mut self, prefix: Option<&str>) {
        let prefix = prefix.unwrap_or_default();
        if prefix != self.prefix {
            self.prefix = prefix.to_owned();
            self.invalidate();
        }
    }

    /// Sets the text suffix; `None` clears it.
    pub fn set_suffix(&mut self, suffix: Option<&str>) {
        let suffix = suffix.unwrap_or_default();
        if suffix != self.suffix {
            self.suffix = suffix.to_owned();
            self.invalidate();
        }
    }

    /// Sets the reached arc color, kept at 8-bit ARGB precision.
    pub fn set_reached_color(&mut self, color: Color) {
        let color = quantize(color);
        if color != self.reached_color {
            self.reached_color = color;
            self.invalidate();
        }
    }

    /// Sets the unreached arc color, kept at 8-bit ARGB precision.
    pub fn set_unreached_color(&mut self, color: Color) {
        let color = quantize(color);
        if color != self.unreached_color {
            self.unreached_color = color;
            self.invalidate();
        }
    }

    /// Sets the reached stroke width in pixels. Non-positive or non-finite
    /// widths are ignored.
    pub fn set_reached_stroke_width(&mut self, width: f32) {
        if let Some(width) = valid_stroke_width(width) {
            self.reached_stroke_width = width;
            self.invalidate();
        }
    }

    /// Sets the unreached stroke width in pixels. Non-positive or non-finite
    /// widths are ignored.
    pub fn set_unreached_stroke_width(&mut self, width: f32) {
        if let Some(width) = valid_stroke_width(width) {
            self.unreached_stroke_width = width;
            self.invalidate();
        }
    }

    /// Sets the padding.
    pub fn set_padding(&mut self, padding: Padding) {
        if padding != self.padding {
            self.padding = padding;
            self.invalidate();
        }
    }

    /// Returns whether anything drawn changed since the last call, and
    /// clears the flag.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        self.sweep().fraction()
    }

    /// Label text: prefix, progress, suffix.
    ///
    /// ```
    /// use circular_bar::{CircularBar, CircularBarArgs};
    ///
    /// let bar = CircularBar::new(CircularBarArgs::default().progress(7));
    /// assert_eq!(bar.progress_text(), "7%");
    /// ```
    pub fn progress_text(&self) -> String {
        format!("{}{}{}", self.prefix, self.progress, self.suffix)
    }

    /// Arc angles for the current progress.
    pub fn sweep(&self) -> ProgressSweep {
        ProgressSweep::new(self.progress, self.max)
    }

    /// Resolves the bar's size against the parent's constraint.
    ///
    /// Axes the parent fixes take that size. Otherwise the bar asks for its
    /// minimum size plus padding, kept within the merged bounds.
    pub fn measure(&self, parent: &Constraint) -> PxSize {
        let merged = self.constraint.merge(parent);
        let content = self.min_size.to_px();
        let axis = |parent: DimensionValue, merged: DimensionValue, wanted: Px| match parent {
            DimensionValue::Fixed(value) => value,
            _ => merged.resolve(wanted),
        };
        let size = PxSize::new(
            axis(
                parent.width,
                merged.width,
                content.saturating_add(self.padding.horizontal()),
            ),
            axis(
                parent.height,
                merged.height,
                content.saturating_add(self.padding.vertical()),
            ),
        );
        debug!(?parent, ?merged, ?size, "Measured circular bar");
        size
    }

    /// Records the size the bar was given.
    pub fn layout(&mut self, size: PxSize) {
        if size != self.size {
            self.size = size;
            self.invalidate();
        }
    }

    /// The drawable area: bounds minus padding.
    pub fn padded_rect(&self) -> PxRect {
        PxRect::from_size(self.size).inset(
            self.padding.left,
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
        )
    }

    /// Bounds and angles of both arcs for the current state.
    pub fn geometry(&self) -> ArcGeometry {
        compute_geometry(
            self.progress,
            self.max,
            self.padded_rect(),
            self.reached_stroke_width,
            self.unreached_stroke_width,
        )
    }

    /// Draw commands for the reached arc followed by the unreached arc.
    pub fn draw_commands(&self) -> SmallVec<[ArcCommand; 2]> {
        let geometry = self.geometry();
        trace!(?geometry, "Building circular bar draw commands");
        let reached = ArcCommand {
            bounds: geometry.reached_rect,
            color: self.reached_color,
            stroke_width_px: self.reached_stroke_width,
            start_angle_degrees: geometry.reached_start,
            sweep_angle_degrees: geometry.reached_sweep,
            cap: self.stroke_cap,
            anti_alias: self.anti_alias,
        };
        let unreached = ArcCommand {
            bounds: geometry.unreached_rect,
            color: self.unreached_color,
            stroke_width_px: self.unreached_stroke_width,
            start_angle_degrees: geometry.unreached_start,
            sweep_angle_degrees: geometry.unreached_sweep,
            cap: self.stroke_cap,
            anti_alias: self.anti_alias,
        };
        SmallVec::from_buf([reached, unreached])
    }

    /// Paints the bar at its laid-out size into a new transparent image.
    pub fn render(&self, config: &RasterConfig) -> Result<RgbaImage, RenderError> {
        if PxRect::from_size(self.size).is_empty() {
            return Err(RenderError::EmptyTarget {
                width: self.size.width.raw(),
                height: self.size.height.raw(),
            });
        }
        let mut target = RgbaImage::new(self.size.width.positive(), self.size.height.positive());
        let commands = self.draw_commands();
        let mut context = DrawContext::new(commands.as_slice(), &mut target);
        ArcPipeline::new(config.clone()).draw(&mut context);
        Ok(target)
    }

    /// Captures the bar's state along with the host's `base_state`.
    pub fn save_state(&self, base_state: Option<serde_json::Value>) -> CircularBarSnapshot {
        CircularBarSnapshot {
            base_state,
            reached_stroke_width: self.reached_stroke_width,
            unreached_stroke_width: self.unreached_stroke_width,
            reached_color: self.reached_color.to_argb_u32(),
            unreached_color: self.unreached_color.to_argb_u32(),
            max: self.max,
            progress: self.progress,
            suffix: Some(self.suffix.clone()),
            prefix: Some(self.prefix.clone()),
        }
    }

    /// Restores state captured by [`save_state`](Self::save_state) and
    /// returns the host's base state.
    ///
    /// Stroke widths and colors are taken as stored; max, progress, prefix
    /// and suffix go through their setters.
    pub fn restore_state(&mut self, snapshot: CircularBarSnapshot) -> Option<serde_json::Value> {
        self.reached_stroke_width = snapshot.reached_stroke_width;
        self.unreached_stroke_width = snapshot.unreached_stroke_width;
        self.reached_color = Color::from_argb_u32(snapshot.reached_color);
        self.unreached_color = Color::from_argb_u32(snapshot.unreached_color);
        self.invalidate();
        self.set_max(snapshot.max);
        self.set_progress(snapshot.progress);
        self.set_prefix(snapshot.prefix.as_deref());
        self.set_suffix(snapshot.suffix.as_deref());
        snapshot.base_state
    }
}

/// Snaps a color to what a packed `0xAARRGGBB` snapshot can hold.
fn quantize(color: Color) -> Color {
    Color::from_argb_u32(color.to_argb_u32())
}

fn valid_stroke_width(width: f32) -> Option<f32> {
    if width.is_finite() && width > 0.0 {
        Some(width)
    } else {
        debug!(width, "Ignoring invalid stroke width");
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn laid_out(args: CircularBarArgs, width: i32, height: i32) -> CircularBar {
        let mut bar = CircularBar::new(args);
        bar.layout(PxSize::new(Px(width), Px(height)));
        bar
    }

    #[test]
    fn test_defaults() {
        let bar = CircularBar::default();
        assert_eq!(bar.max(), 100);
        assert_eq!(bar.progress(), 0);
        assert_eq!(bar.prefix(), "");
        assert_eq!(bar.suffix(), "%");
        assert_eq!(bar.reached_color().to_argb_u32(), 0xFFAED036);
        assert_eq!(bar.unreached_color().to_argb_u32(), 0xFFAED036);
        assert_eq!(bar.reached_stroke_width(), 2.0);
        assert_eq!(bar.unreached_stroke_width(), 1.5);
    }

    #[test]
    fn test_invalid_initial_attributes_fall_back() {
        let bar = CircularBar::new(CircularBarArgs::default().max(-3).progress(150));
        assert_eq!(bar.max(), 100);
        assert_eq!(bar.progress(), 0);
    }

    #[test]
    fn test_progress_past_max_is_rejected() {
        let mut bar = CircularBar::new(CircularBarArgs::default().progress(30));
        bar.set_progress(bar.max() + 1);
        assert_eq!(bar.progress(), 30);
        bar.set_progress(-1);
        assert_eq!(bar.progress(), 30);
        bar.set_progress(100);
        assert_eq!(bar.progress(), 100);
    }

    #[test]
    fn test_non_positive_max_is_rejected() {
        let mut bar = CircularBar::new(CircularBarArgs::default().max(80));
        bar.set_max(0);
        assert_eq!(bar.max(), 80);
        bar.set_max(-5);
        assert_eq!(bar.max(), 80);
    }

    #[test]
    fn test_shrinking_max_pulls_progress_down() {
        let mut bar = CircularBar::new(CircularBarArgs::default().progress(90));
        bar.set_max(50);
        assert_eq!(bar.max(), 50);
        assert_eq!(bar.progress(), 50);
        assert_eq!(bar.sweep().reached_sweep, 360.0);
    }

    #[test]
    fn test_increment_progress_by() {
        let mut bar = CircularBar::new(CircularBarArgs::default().progress(95));
        bar.increment_progress_by(-10);
        assert_eq!(bar.progress(), 95);
        bar.increment_progress_by(10);
        assert_eq!(bar.progress(), 95);
        bar.increment_progress_by(5);
        assert_eq!(bar.progress(), 100);
        bar.increment_progress_by(i32::MAX);
        assert_eq!(bar.progress(), 100);
    }

    #[test]
    fn test_absent_prefix_and_suffix_become_empty() {
        let mut bar = CircularBar::new(CircularBarArgs::default().prefix("P"));
        bar.set_prefix(None);
        bar.set_suffix(None);
        assert_eq!(bar.prefix(), "");
        assert_eq!(bar.suffix(), "");
        bar.set_progress(12);
        assert_eq!(bar.progress_text(), "12");
    }

    #[test]
    fn test_invalid_stroke_width_is_ignored() {
        let mut bar = CircularBar::default();
        bar.set_reached_stroke_width(0.0);
        bar.set_unreached_stroke_width(f32::NAN);
        assert_eq!(bar.reached_stroke_width(), 2.0);
        assert_eq!(bar.unreached_stroke_width(), 1.5);
        bar.set_reached_stroke_width(6.0);
        assert_eq!(bar.reached_stroke_width(), 6.0);
    }

    #[test]
    fn test_invalidation() {
        let mut bar = CircularBar::default();
        assert!(bar.take_invalidated());
        assert!(!bar.take_invalidated());

        bar.set_progress(101);
        assert!(!bar.take_invalidated());

        bar.set_progress(10);
        assert!(bar.take_invalidated());

        bar.set_unreached_color(Color::BLUE);
        assert!(bar.take_invalidated());

        bar.layout(PxSize::new(Px(10), Px(10)));
        assert!(bar.take_invalidated());
        bar.layout(PxSize::new(Px(10), Px(10)));
        assert!(!bar.take_invalidated());
    }

    #[test]
    fn test_measure() {
        let bar = CircularBar::new(
            CircularBarArgs::default()
                .min_size(Dp(40.0))
                .padding(Padding::all(Px(4))),
        );
        let fixed_width = Constraint::new(
            DimensionValue::Fixed(Px(120)),
            DimensionValue::Wrap {
                min: None,
                max: Some(Px(30)),
            },
        );
        assert_eq!(bar.measure(&fixed_width), PxSize::new(Px(120), Px(30)));
        assert_eq!(bar.measure(&Constraint::NONE), PxSize::new(Px(48), Px(48)));
    }

    #[test]
    fn test_measure_extreme_padding_saturates() {
        let bar = CircularBar::new(
            CircularBarArgs::default().padding(Padding::all(Px(i32::MAX / 2 + 1))),
        );
        assert_eq!(bar.padding().horizontal(), Px(i32::MAX));
        assert_eq!(
            bar.measure(&Constraint::NONE),
            PxSize::new(Px(i32::MAX), Px(i32::MAX))
        );
    }

    #[test]
    fn test_measure_fill_preference() {
        let bar = CircularBar::new(CircularBarArgs::default().constraint(Constraint::new(
            DimensionValue::FILLED,
            DimensionValue::FILLED,
        )));
        let parent = Constraint::new(
            DimensionValue::Fixed(Px(300)),
            DimensionValue::Wrap {
                min: None,
                max: Some(Px(200)),
            },
        );
        assert_eq!(bar.measure(&parent), PxSize::new(Px(300), Px(200)));
    }

    #[test]
    fn test_padded_rect() {
        let mut bar = laid_out(CircularBarArgs::default(), 200, 100);
        bar.set_padding(Padding {
            left: Px(10),
            top: Px(5),
            right: Px(20),
            bottom: Px(15),
        });
        assert_eq!(bar.padded_rect(), PxRect::new(Px(10), Px(5), Px(170), Px(80)));
    }

    #[test]
    fn test_geometry_quarter() {
        let bar = laid_out(
            CircularBarArgs::default()
                .max(100)
                .progress(25)
                .padding(Padding::all(Px(10))),
            120,
            120,
        );
        let geometry = bar.geometry();
        assert_eq!(geometry.reached_start, 270.0);
        assert_eq!(geometry.reached_sweep, 90.0);
        assert_eq!(geometry.unreached_start, 360.0);
        assert_eq!(geometry.unreached_sweep, 270.0);
        // 100px square, reached stroke 2px, unreached 1.5px.
        assert_eq!(geometry.reached_rect.left, 11.0);
        assert_eq!(geometry.reached_rect.right, 109.0);
        assert_eq!(geometry.unreached_rect.left, 10.75);
        assert_eq!(geometry.unreached_rect.right, 109.25);
    }

    #[test]
    fn test_draw_commands_order_and_style() {
        let bar = laid_out(
            CircularBarArgs::default()
                .progress(50)
                .reached_color(Color::RED)
                .unreached_color(Color::BLUE)
                .stroke_cap(ArcCap::Round)
                .anti_alias(false),
            80,
            80,
        );
        let commands = bar.draw_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].color, Color::RED);
        assert_eq!(commands[0].start_angle_degrees, 270.0);
        assert_eq!(commands[0].sweep_angle_degrees, 180.0);
        assert_eq!(commands[1].color, Color::BLUE);
        assert_eq!(commands[1].start_angle_degrees, 450.0);
        assert_eq!(commands[1].sweep_angle_degrees, 180.0);
        assert!(commands.iter().all(|c| c.cap == ArcCap::Round && !c.anti_alias));
    }

    #[test]
    fn test_render_requires_layout() {
        let bar = CircularBar::default();
        assert!(matches!(
            bar.render(&RasterConfig::default()),
            Err(RenderError::EmptyTarget { .. })
        ));
    }

    #[test]
    fn test_render_paints_both_arcs() {
        let mut bar = laid_out(
            CircularBarArgs::default()
                .progress(25)
                .reached_color(Color::RED)
                .unreached_color(Color::BLUE),
            100,
            100,
        );
        bar.set_reached_stroke_width(10.0);
        bar.set_unreached_stroke_width(10.0);

        let image = bar.render(&RasterConfig::default()).expect("rendered");
        assert_eq!(image.dimensions(), (100, 100));
        // One o'clock is reached, six o'clock is not.
        assert_eq!(image.get_pixel(72, 10).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(50, 94).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(50, 50).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_render_empty_progress_is_full_unreached_ring() {
        let mut bar = laid_out(
            CircularBarArgs::default()
                .reached_color(Color::RED)
                .unreached_color(Color::BLUE),
            100,
            100,
        );
        bar.set_reached_stroke_width(10.0);
        bar.set_unreached_stroke_width(10.0);

        let image = bar.render(&RasterConfig::default()).expect("rendered");
        assert_eq!(image.get_pixel(72, 10).0, [0, 0, 255, 255]);
        assert!(image.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_save_restore_round_trip() {
        let c1 = Color::from_rgba_u8(0x10, 0x20, 0x30, 0xFF);
        let c2 = Color::from_rgba_u8(0x40, 0x50, 0x60, 0x80);
        let mut source = CircularBar::new(
            CircularBarArgs::default()
                .max(100)
                .progress(42)
                .prefix("P")
                .suffix("Q")
                .reached_color(c1)
                .unreached_color(c2),
        );
        source.set_reached_stroke_width(3.0);
        let snapshot = source.save_state(Some(json!({ "scroll": 12 })));

        let mut restored = CircularBar::new(CircularBarArgs::default().max(10).progress(3));
        let base = restored.restore_state(snapshot);

        assert_eq!(base, Some(json!({ "scroll": 12 })));
        assert_eq!(restored.progress(), 42);
        assert_eq!(restored.max(), 100);
        assert_eq!(restored.prefix(), "P");
        assert_eq!(restored.suffix(), "Q");
        assert_eq!(restored.reached_color(), c1);
        assert_eq!(restored.unreached_color(), c2);
        assert_eq!(restored.reached_stroke_width(), 3.0);
        assert_eq!(restored.unreached_stroke_width(), 1.5);
    }

    #[test]
    fn test_fractional_colors_survive_restore() {
        let mut source = CircularBar::new(
            CircularBarArgs::default().reached_color(Color::new(0.3, 0.3, 0.3, 1.0)),
        );
        source.set_unreached_color(Color::new(0.1, 0.62, 0.95, 0.5));
        let reached = source.reached_color();
        let unreached = source.unreached_color();
        assert_eq!(reached.to_rgba8(), [77, 77, 77, 255]);

        let mut restored = CircularBar::default();
        restored.restore_state(source.save_state(None));
        assert_eq!(restored.reached_color(), reached);
        assert_eq!(restored.unreached_color(), unreached);
    }

    #[test]
    fn test_restore_through_json() {
        let source = CircularBar::new(CircularBarArgs::default().progress(64).suffix(" pts"));
        let json = source.save_state(None).to_json().expect("encode");

        let mut restored = CircularBar::default();
        let snapshot = CircularBarSnapshot::from_json(&json).expect("decode");
        assert_eq!(restored.restore_state(snapshot), None);
        assert_eq!(restored.progress_text(), "64 pts");
    }

    #[test]
    fn test_restore_rejects_invalid_values() {
        let mut snapshot = CircularBar::default().save_state(None);
        snapshot.max = 0;
        snapshot.progress = 500;
        snapshot.prefix = None;

        let mut bar = CircularBar::new(CircularBarArgs::default().prefix("x").progress(7));
        bar.restore_state(snapshot);
        assert_eq!(bar.max(), 100);
        assert_eq!(bar.progress(), 7);
        assert_eq!(bar.prefix(), "");
    }
}
