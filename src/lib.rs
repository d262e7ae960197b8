// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;

pub use config::{ClockFaceConfig, Color};

// External crate imports
use chrono::{Local, Timelike};
use log::{debug, info, warn};
use thiserror::Error;

// Standard library imports
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

// Window management imports
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Frame clear color behind the dial.
const WINDOW_BACKGROUND: Color = Color::new(0x00, 0x00, 0x00);

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while opening the clock window.
///
/// Rendering itself is infallible; only window and surface creation can fail.
#[derive(Debug, Error)]
pub enum ClockFaceError {
    #[error("event loop failure: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixel surface: {0}")]
    Surface(#[from] pixels::Error),
}

// ============================================================================
// CURRENT TIME
// ============================================================================

/// Wall-clock time-of-day snapshot consumed by the renderer.
///
/// Replaced wholesale on each tick, never partially mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl ClockTime {
    /// Snapshot the local wall clock.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hours: now.hour(),
            minutes: now.minute(),
            seconds: now.second(),
            // leap seconds report >= 1000 here
            millis: now.timestamp_subsec_millis().min(999),
        }
    }
}

/// Commands accepted over the ticker channel.
#[derive(Debug, Clone)]
pub enum ClockCommand {
    SetTime(ClockTime),
}

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Analog clock face widget.
///
/// Holds the immutable style configuration and the last time snapshot. The
/// widget is driven either by the local wall clock ([`ClockFace::show`]) or
/// by an external ticker sending [`ClockCommand`]s over a channel
/// ([`ClockFace::show_with_ticker`]).
#[derive(Debug, Clone)]
pub struct ClockFace {
    config: ClockFaceConfig,
    time: ClockTime,
}

impl ClockFace {
    pub fn new(config: ClockFaceConfig) -> Self {
        for ratio in [
            config.sec_hand_len_ratio,
            config.min_hand_len_ratio,
            config.hour_hand_len_ratio,
            config.back_tail_ratio,
        ] {
            if ratio <= 0.0 {
                warn!("non-positive hand ratio {ratio}; hand will draw degenerate");
            }
        }
        Self {
            config,
            time: ClockTime::now(),
        }
    }

    pub fn config(&self) -> &ClockFaceConfig {
        &self.config
    }

    /// Open the window and drive the clock from the local wall clock.
    ///
    /// The redraw cap (`max_framerate`, 20 fps by default) sets the tick
    /// cadence: each frame samples [`ClockTime::now`] and redraws.
    pub fn show(&mut self) -> Result<(), ClockFaceError> {
        self.run_window(None)
    }

    /// Open the window and drive the clock from an external ticker.
    ///
    /// The sender side snapshots the time periodically; the render loop
    /// drains the channel each frame and keeps the latest snapshot. When the
    /// window closes the receiver is dropped, so the ticker sees a send
    /// failure and knows to stop.
    pub fn show_with_ticker(
        &mut self,
        receiver: Receiver<ClockCommand>,
    ) -> Result<(), ClockFaceError> {
        self.run_window(Some(receiver))
    }

    fn run_window(
        &mut self,
        receiver: Option<Receiver<ClockCommand>>,
    ) -> Result<(), ClockFaceError> {
        let config = self.config.clone();

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)?;
        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut geometry = FaceGeometry::new(fb_width, fb_height, &config);
        info!(
            "clock face {}x{}, radius {:.1}, {:.0} fps cap",
            fb_width, fb_height, geometry.face_radius, config.max_framerate
        );

        let frame_duration = Duration::from_secs_f64(1.0 / config.max_framerate.max(0.001));
        let mut last_frame = Instant::now();
        let mut time = self.time;

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        let _ = pixels.resize_buffer(new_size.width, new_size.height);
                        let _ = pixels.resize_surface(new_size.width, new_size.height);
                        geometry = FaceGeometry::new(fb_width, fb_height, &config);
                        debug!(
                            "bounds {}x{}, face radius {:.1}",
                            fb_width, fb_height, geometry.face_radius
                        );
                    }
                    WindowEvent::RedrawRequested => {
                        match receiver {
                            Some(ref rx) => {
                                while let Ok(ClockCommand::SetTime(snapshot)) = rx.try_recv() {
                                    time = snapshot;
                                }
                            }
                            None => time = ClockTime::now(),
                        }
                        let frame = pixels.frame_mut();
                        let mut canvas = Canvas::new(frame, fb_width, fb_height);
                        render_clock_face(&mut canvas, &geometry, &config, time);
                        let _ = pixels.render();
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// DERIVED GEOMETRY
// ============================================================================

/// Pixel-space geometry derived from the widget bounds.
///
/// Recomputed whenever the bounds change. Zero bounds yield a zero radius,
/// so everything draws as a degenerate point at the center until the first
/// real bounds arrive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub face_radius: f32,
    /// Length of the twelve tick marks on the dial.
    pub label_length: f32,
    pub sec_hand_radius: f32,
    pub min_hand_radius: f32,
    pub hour_hand_radius: f32,
    pub back_tail_length: f32,
}

impl FaceGeometry {
    pub fn new(width: usize, height: usize, config: &ClockFaceConfig) -> Self {
        let center_x = width as f32 / 2.0;
        let center_y = height as f32 / 2.0;
        // half the shorter side, scaled down for a 5% margin
        let face_radius = 0.5 * width.min(height) as f32 * 0.95;
        let label_length = face_radius * 0.1;
        let sec_hand_radius = face_radius * config.sec_hand_len_ratio;
        let min_hand_radius = face_radius * config.min_hand_len_ratio;
        let hour_hand_radius = face_radius * config.hour_hand_len_ratio;
        let back_tail_length = hour_hand_radius * config.back_tail_ratio;
        Self {
            center_x,
            center_y,
            face_radius,
            label_length,
            sec_hand_radius,
            min_hand_radius,
            hour_hand_radius,
            back_tail_length,
        }
    }
}

// ============================================================================
// HAND ANGLES
// ============================================================================

/// Second-hand angle in degrees clockwise from 12 o'clock.
///
/// Milliseconds contribute continuous sub-second motion: 6 deg per second.
pub fn second_hand_angle(seconds: u32, millis: u32) -> f32 {
    (millis as f32 / 1000.0 + seconds as f32) * 6.0
}

/// Minute-hand angle; seconds creep it forward at 0.1 deg per second.
pub fn minute_hand_angle(minutes: u32, seconds: u32) -> f32 {
    6.0 * minutes as f32 + 0.1 * seconds as f32
}

/// Hour-hand angle on a 12-hour dial; minutes creep it at 0.5 deg per minute.
pub fn hour_hand_angle(hours: u32, minutes: u32) -> f32 {
    30.0 * (hours % 12) as f32 + 0.5 * minutes as f32
}

// ============================================================================
// CANVAS & TRANSFORM STACK
// ============================================================================

/// 2D affine transform restricted to rotations about a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m00: f32,
    m01: f32,
    m10: f32,
    m11: f32,
    tx: f32,
    ty: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        m00: 1.0,
        m01: 0.0,
        m10: 0.0,
        m11: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Clockwise rotation by `degrees` about `(cx, cy)`.
    ///
    /// Screen coordinates are y-down, so the standard rotation matrix turns
    /// the 12 o'clock direction toward 3 o'clock for positive angles.
    pub fn rotation_about(degrees: f32, cx: f32, cy: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
            tx: cx - cos * cx + sin * cy,
            ty: cy - sin * cx - cos * cy,
        }
    }

    /// Composition applying `inner` first, then `self`.
    pub fn compose(&self, inner: &Transform) -> Transform {
        Transform {
            m00: self.m00 * inner.m00 + self.m01 * inner.m10,
            m01: self.m00 * inner.m01 + self.m01 * inner.m11,
            m10: self.m10 * inner.m00 + self.m11 * inner.m10,
            m11: self.m10 * inner.m01 + self.m11 * inner.m11,
            tx: self.m00 * inner.tx + self.m01 * inner.ty + self.tx,
            ty: self.m10 * inner.tx + self.m11 * inner.ty + self.ty,
        }
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.m00 * x + self.m01 * y + self.tx,
            self.m10 * x + self.m11 * y + self.ty,
        )
    }
}

/// Immediate-mode drawing surface over an RGBA framebuffer.
///
/// Exposes line and circle primitives plus a save/restore transform stack,
/// so a caller can rotate about the face center, draw, and restore without
/// touching endpoint math.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    transform: Transform,
    saved: Vec<Transform>,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
            transform: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Push the current transform onto the stack.
    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Pop back to the most recently saved transform. Unbalanced restores
    /// are ignored.
    pub fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.transform = previous;
        }
    }

    /// Rotate subsequent draws clockwise by `degrees` about `(cx, cy)`.
    ///
    /// Rotations accumulate until the enclosing [`Canvas::restore`].
    pub fn rotate_about(&mut self, degrees: f32, cx: f32, cy: f32) {
        self.transform = self
            .transform
            .compose(&Transform::rotation_about(degrees, cx, cy));
    }

    /// Stroke a line of the given thickness between two points.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        let (x0, y0) = self.transform.apply(x0, y0);
        let (x1, y1) = self.transform.apply(x1, y1);
        self.rasterize_line(x0, y0, x1, y1, thickness, color);
    }

    /// Stroke a circle outline; the stroke straddles the radius.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, thickness: f32, color: Color) {
        let (cx, cy) = self.transform.apply(cx, cy);
        let outer = radius + thickness / 2.0;
        let inner = (radius - thickness / 2.0).max(0.0);
        let min_x = (cx - outer).floor() as i32 - 1;
        let max_x = (cx + outer).ceil() as i32 + 1;
        let min_y = (cy - outer).floor() as i32 - 1;
        let max_y = (cy + outer).ceil() as i32 + 1;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let aa = if dist > outer {
                    (1.0 - (dist - outer)).clamp(0.0, 1.0)
                } else if dist < inner {
                    (1.0 - (inner - dist)).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Fill a disc.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let (cx, cy) = self.transform.apply(cx, cy);
        let min_x = (cx - radius).floor() as i32 - 1;
        let max_x = (cx + radius).ceil() as i32 + 1;
        let min_y = (cy - radius).floor() as i32 - 1;
        let max_y = (cy + radius).ceil() as i32 + 1;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let aa = if dist > radius {
                    (1.0 - (dist - radius)).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn rasterize_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f32::EPSILON {
            // degenerate segment, e.g. a zero-radius hand
            self.blend_pixel(x0.round() as i32, y0.round() as i32, color, 1.0);
            return;
        }
        let pad = thickness.ceil() as i32 + 1;
        let min_x = (x0.min(x1).floor() as i32) - pad;
        let max_x = (x0.max(x1).ceil() as i32) + pad;
        let min_y = (y0.min(y1).floor() as i32) - pad;
        let max_y = (y0.max(y1).ceil() as i32) + pad;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 - x0;
                let py = y as f32 - y0;
                let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
                let lx = x0 + t * dx;
                let ly = y0 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let src = [color.r as f32, color.g as f32, color.b as f32];
        let dst = [
            self.frame[idx] as f32,
            self.frame[idx + 1] as f32,
            self.frame[idx + 2] as f32,
        ];
        let out = [
            (src[0] * alpha + dst[0] * (1.0 - alpha)).round() as u8,
            (src[1] * alpha + dst[1] * (1.0 - alpha)).round() as u8,
            (src[2] * alpha + dst[2] * (1.0 - alpha)).round() as u8,
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }
}

// ============================================================================
// RETAINED MODE SCENE
// ============================================================================

#[derive(Clone, Debug)]
enum DrawCommand {
    Clear(Color),
    /// Filled face disc, drawn only when a fill color is configured.
    FillDisc {
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        radius: f32,
        thickness: f32,
        color: Color,
    },
    /// `count` radial tick marks, drawn at 12 o'clock and stepped around the
    /// dial by rotating the canvas transform.
    TickRing {
        outer_radius: f32,
        length: f32,
        thickness: f32,
        color: Color,
        count: u32,
    },
    /// One hand: a line from `radius` above the center to `back` below it,
    /// rotated to `angle` degrees.
    Hand {
        angle: f32,
        radius: f32,
        back: f32,
        thickness: f32,
        color: Color,
    },
}

struct Scene {
    center_x: f32,
    center_y: f32,
    commands: Vec<DrawCommand>,
}

impl Scene {
    fn new(geometry: &FaceGeometry) -> Self {
        Self {
            center_x: geometry.center_x,
            center_y: geometry.center_y,
            commands: Vec::new(),
        }
    }

    fn add(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn render(&self, canvas: &mut Canvas) {
        let (cx, cy) = (self.center_x, self.center_y);
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::FillDisc { radius, color } => {
                    canvas.fill_circle(cx, cy, *radius, *color);
                }
                DrawCommand::StrokeCircle {
                    radius,
                    thickness,
                    color,
                } => {
                    canvas.stroke_circle(cx, cy, *radius, *thickness, *color);
                }
                DrawCommand::TickRing {
                    outer_radius,
                    length,
                    thickness,
                    color,
                    count,
                } => {
                    let step = 360.0 / *count as f32;
                    canvas.save();
                    for _ in 0..*count {
                        canvas.line(
                            cx,
                            cy - outer_radius,
                            cx,
                            cy - outer_radius + length,
                            *thickness,
                            *color,
                        );
                        canvas.rotate_about(step, cx, cy);
                    }
                    canvas.restore();
                }
                DrawCommand::Hand {
                    angle,
                    radius,
                    back,
                    thickness,
                    color,
                } => {
                    canvas.save();
                    canvas.rotate_about(*angle, cx, cy);
                    canvas.line(cx, cy - radius, cx, cy + back, *thickness, *color);
                    canvas.restore();
                }
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Issue the fixed draw sequence for one frame: optional face fill, face
/// outline, twelve tick marks, then the second, minute, and hour hands.
pub fn render_clock_face(
    canvas: &mut Canvas,
    geometry: &FaceGeometry,
    config: &ClockFaceConfig,
    time: ClockTime,
) {
    let mut scene = Scene::new(geometry);

    scene.add(DrawCommand::Clear(WINDOW_BACKGROUND));
    if let Some(fill) = config.face_fill_color {
        scene.add(DrawCommand::FillDisc {
            radius: geometry.face_radius,
            color: fill,
        });
    }
    scene.add(DrawCommand::StrokeCircle {
        radius: geometry.face_radius,
        thickness: config.face_thickness,
        color: config.face_color,
    });
    scene.add(DrawCommand::TickRing {
        outer_radius: geometry.face_radius,
        length: geometry.label_length,
        thickness: config.face_thickness,
        color: config.face_color,
        count: 12,
    });

    scene.add(DrawCommand::Hand {
        angle: second_hand_angle(time.seconds, time.millis),
        radius: geometry.sec_hand_radius,
        back: geometry.back_tail_length,
        thickness: config.sec_hand_thickness,
        color: config.sec_hand_color,
    });
    scene.add(DrawCommand::Hand {
        angle: minute_hand_angle(time.minutes, time.seconds),
        radius: geometry.min_hand_radius,
        back: geometry.back_tail_length,
        // the minute hand shares the face stroke
        thickness: config.face_thickness,
        color: config.min_hand_color,
    });
    scene.add(DrawCommand::Hand {
        angle: hour_hand_angle(time.hours, time.minutes),
        radius: geometry.hour_hand_radius,
        back: geometry.back_tail_length,
        thickness: config.hour_hand_thickness,
        color: config.hour_hand_color,
    });

    scene.render(canvas);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClockFaceConfig {
        ClockFaceConfig::builder().build()
    }

    #[test]
    fn second_hand_angle_matches_known_values() {
        assert!((second_hand_angle(30, 500) - 183.0).abs() < 1e-4);
        assert!(second_hand_angle(0, 0).abs() < 1e-4);
        assert!((second_hand_angle(59, 999) - 359.994).abs() < 1e-3);
    }

    #[test]
    fn second_hand_angle_stays_in_range_and_increases() {
        let mut prev = -1.0f32;
        for seconds in 0..60 {
            for millis in (0..1000).step_by(50) {
                let angle = second_hand_angle(seconds, millis);
                assert!((0.0..360.0).contains(&angle));
                assert!(angle > prev);
                prev = angle;
            }
        }
        // wraps at the top of the minute
        assert!(second_hand_angle(0, 0) < prev);
    }

    #[test]
    fn minute_hand_angle_creeps_with_seconds() {
        assert!((minute_hand_angle(15, 0) - 90.0).abs() < 1e-4);
        assert!((minute_hand_angle(15, 30) - 93.0).abs() < 1e-4);
    }

    #[test]
    fn hour_hand_angle_creeps_and_wraps_at_twelve() {
        assert!((hour_hand_angle(3, 0) - 90.0).abs() < 1e-4);
        assert!((hour_hand_angle(3, 30) - 105.0).abs() < 1e-4);
        // 15:00 sits where 3:00 does on a 12-hour dial
        assert!((hour_hand_angle(15, 0) - 90.0).abs() < 1e-4);
        assert!(hour_hand_angle(12, 0).abs() < 1e-4);
    }

    #[test]
    fn geometry_uses_short_side_with_margin() {
        let geometry = FaceGeometry::new(200, 100, &test_config());
        assert!((geometry.face_radius - 47.5).abs() < 1e-4);
        assert!((geometry.center_x - 100.0).abs() < 1e-4);
        assert!((geometry.center_y - 50.0).abs() < 1e-4);
        assert!((geometry.label_length - 4.75).abs() < 1e-4);
        assert!((geometry.sec_hand_radius - 47.5 * 0.85).abs() < 1e-3);
        assert!((geometry.min_hand_radius - 47.5 * 0.8).abs() < 1e-3);
        assert!((geometry.hour_hand_radius - 47.5 * 0.5).abs() < 1e-3);
        assert!((geometry.back_tail_length - 47.5 * 0.5 * 0.5).abs() < 1e-3);
    }

    #[test]
    fn zero_bounds_degrade_to_zero_radius() {
        let geometry = FaceGeometry::new(0, 0, &test_config());
        assert_eq!(geometry.face_radius, 0.0);
        assert_eq!(geometry.back_tail_length, 0.0);
    }

    #[test]
    fn rotation_is_clockwise_from_twelve() {
        // 90 degrees carries the 12 o'clock point to 3 o'clock
        let transform = Transform::rotation_about(90.0, 0.0, 0.0);
        let (x, y) = transform.apply(0.0, -10.0);
        assert!((x - 10.0).abs() < 1e-3);
        assert!(y.abs() < 1e-3);
    }

    #[test]
    fn twelve_thirty_degree_rotations_return_to_identity() {
        let mut transform = Transform::IDENTITY;
        for _ in 0..12 {
            transform = transform.compose(&Transform::rotation_about(30.0, 100.0, 50.0));
        }
        let (x, y) = transform.apply(123.0, -7.0);
        assert!((x - 123.0).abs() < 1e-2);
        assert!((y + 7.0).abs() < 1e-2);
    }

    #[test]
    fn save_restore_scopes_rotation() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        let mut canvas = Canvas::new(&mut frame, 16, 16);
        canvas.save();
        canvas.rotate_about(30.0, 8.0, 8.0);
        canvas.restore();
        assert_eq!(canvas.transform, Transform::IDENTITY);
        // an unbalanced restore leaves the transform alone
        canvas.restore();
        assert_eq!(canvas.transform, Transform::IDENTITY);
    }

    #[test]
    fn renderer_paints_face_and_background() {
        let config = ClockFaceConfig::builder()
            .face_fill_color(Color::new(20, 20, 40))
            .build();
        let geometry = FaceGeometry::new(64, 64, &config);
        let mut frame = vec![0u8; 64 * 64 * 4];
        let mut canvas = Canvas::new(&mut frame, 64, 64);
        let time = ClockTime {
            hours: 10,
            minutes: 9,
            seconds: 30,
            millis: 0,
        };
        render_clock_face(&mut canvas, &geometry, &config, time);

        // the hour hand crosses the center, so the center is not background
        let center = (32 * 64 + 32) * 4;
        assert_ne!(&frame[center..center + 3], &[0, 0, 0]);
        // the corner lies outside the dial and keeps the clear color
        assert_eq!(&frame[0..4], &[0, 0, 0, 0xff]);
    }

    #[test]
    fn renderer_handles_zero_bounds() {
        let config = test_config();
        let geometry = FaceGeometry::new(0, 0, &config);
        let mut frame = Vec::new();
        let mut canvas = Canvas::new(&mut frame, 0, 0);
        let time = ClockTime::default();
        // nothing to draw into, but nothing panics either
        render_clock_face(&mut canvas, &geometry, &config, time);
    }
}
