//! Headless editor state machine
//!
//! The editor owns a background canvas and three paint layers. Tool
//! commands switch between brush, eraser, and seed modes; pointer events
//! paint or, in seed mode, run the gap fill on the composed canvas.

use crate::compose::Compositor;
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::layer::{Layer, LayerKind};
use crate::palette::NamedColor;
use gapfill_core::{Raster, SeedPoint};
use gapfill_region::{FillOutcome, GapFill, GapFillOptions, GapFillResult};
use tracing::{debug, warn};

/// Status shown after a stencil has been written
pub const SAVED_STATUS: &str = "Result has been saved!";

/// Active editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer events are ignored
    #[default]
    Idle,
    /// Dragging paints ink
    Brush,
    /// Dragging erases
    Eraser,
    /// Releasing the pointer fills from that point
    Seed,
}

/// Keyboard-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleBrush,
    ToggleEraser,
    ToggleSeed,
    GrowBrush,
    ShrinkBrush,
    Quit,
}

impl Command {
    /// Map a key to its command: `b`, `e`, `s`, `+`, `-`, `q`
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'b' => Some(Self::ToggleBrush),
            'e' => Some(Self::ToggleEraser),
            's' => Some(Self::ToggleSeed),
            '+' | '=' => Some(Self::GrowBrush),
            '-' => Some(Self::ShrinkBrush),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Pointer input in canvas coordinates
///
/// Coordinates may lie outside the canvas while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

/// Drawing session
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    background: Raster,
    erase: Layer,
    ink: Layer,
    preview: Layer,
    tool: Tool,
    brush_radius: u32,
    pressed: bool,
    running: bool,
    status: Option<String>,
    last_result: Option<GapFillResult>,
}

impl Editor {
    /// Start a session on a blank canvas in the palette's background color
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`](crate::EditorError::InvalidConfig)
    /// if the configuration is unusable.
    pub fn new(config: EditorConfig) -> EditorResult<Self> {
        config.validate()?;
        let fill = config.palette.rgba(NamedColor::Background);
        let background = Raster::new_filled(config.width, config.height, fill)?;
        Self::with_background(config, background)
    }

    /// Start a session over an existing canvas
    ///
    /// The canvas size replaces the configured size.
    pub fn with_background(mut config: EditorConfig, background: Raster) -> EditorResult<Self> {
        config.width = background.width();
        config.height = background.height();
        config.validate()?;
        if config.palette.brush_blends_in() {
            warn!("brush color matches the background; strokes will not stop the fill");
        }

        let (w, h) = (config.width, config.height);
        let brush_radius = config.brush_radius.max(config.min_brush_radius);
        Ok(Self {
            config,
            background,
            erase: Layer::new(LayerKind::Erase, w, h),
            ink: Layer::new(LayerKind::Ink, w, h),
            preview: Layer::new(LayerKind::Preview, w, h),
            tool: Tool::Idle,
            brush_radius,
            pressed: false,
            running: true,
            status: None,
            last_result: None,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush_radius(&self) -> u32 {
        self.brush_radius
    }

    /// False once [`Command::Quit`] has been handled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Most recent status message
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Result of the most recent successful fill
    pub fn last_result(&self) -> Option<&GapFillResult> {
        self.last_result.as_ref()
    }

    /// Layer of the given kind
    pub fn layer(&self, kind: LayerKind) -> &Layer {
        match kind {
            LayerKind::Erase => &self.erase,
            LayerKind::Ink => &self.ink,
            LayerKind::Preview => &self.preview,
        }
    }

    /// Apply a tool command
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::ToggleBrush => self.toggle(Tool::Brush),
            Command::ToggleEraser => self.toggle(Tool::Eraser),
            Command::ToggleSeed => self.toggle(Tool::Seed),
            Command::GrowBrush => {
                self.brush_radius = self.brush_radius.saturating_add(self.config.brush_step);
                debug!(radius = self.brush_radius, "brush grown");
            }
            Command::ShrinkBrush => {
                self.brush_radius = self
                    .brush_radius
                    .saturating_sub(self.config.brush_step)
                    .max(self.config.min_brush_radius);
                debug!(radius = self.brush_radius, "brush shrunk");
            }
            Command::Quit => {
                debug!("editor session ended");
                self.running = false;
            }
        }
    }

    fn toggle(&mut self, tool: Tool) {
        self.tool = if self.tool == tool { Tool::Idle } else { tool };
        self.pressed = false;
        self.preview.clear();
        debug!(tool = ?self.tool, "tool changed");
    }

    /// Apply a pointer event
    ///
    /// # Errors
    ///
    /// In seed mode, returns the fill or save error of a pointer release.
    /// The error text is also kept as the status message.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EditorResult<()> {
        match self.tool {
            Tool::Idle => {}
            Tool::Brush | Tool::Eraser => self.paint(event),
            Tool::Seed => {
                if let PointerEvent::Up { x, y } = event {
                    return self.fill_at(x, y);
                }
            }
        }
        Ok(())
    }

    fn paint(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.pressed = true;
                self.stamp(x, y);
            }
            PointerEvent::Move { x, y } if self.pressed => self.stamp(x, y),
            PointerEvent::Move { x, y } => {
                if self.tool == Tool::Brush {
                    self.preview.clear();
                    self.preview.stamp_disk(x, y, self.brush_radius, NamedColor::Brush);
                }
            }
            PointerEvent::Up { .. } => self.pressed = false,
        }
    }

    fn stamp(&mut self, x: i32, y: i32) {
        let r = self.brush_radius;
        match self.tool {
            Tool::Brush => {
                self.erase.clear_disk(x, y, r);
                self.ink.stamp_disk(x, y, r, NamedColor::Brush);
            }
            Tool::Eraser => {
                self.ink.clear_disk(x, y, r);
                self.erase.stamp_disk(x, y, r, NamedColor::Eraser);
            }
            Tool::Idle | Tool::Seed => {}
        }
    }

    fn fill_at(&mut self, x: i32, y: i32) -> EditorResult<()> {
        match self.run_fill(x, y) {
            Ok(status) => {
                self.status = Some(status);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "fill failed");
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn run_fill(&mut self, x: i32, y: i32) -> EditorResult<String> {
        let canvas = self.canvas()?;
        let options = GapFillOptions::default().with_gap_width(self.config.gap_width);
        let seed = SeedPoint::new(i64::from(y), i64::from(x));
        let result = GapFill::new(options).run(&canvas, seed)?;
        debug!(
            %seed,
            filled = result.filled_count(),
            outcome = ?result.outcome,
            "fill finished"
        );

        let status = match &self.config.save_path {
            Some(path) => {
                gapfill_io::write_mask(&result.mask, path)?;
                SAVED_STATUS.to_string()
            }
            None if result.outcome == FillOutcome::Collapsed => {
                "Fill collapsed: gap width too large for this region".to_string()
            }
            None => format!("Filled {} pixels", result.filled_count()),
        };
        self.last_result = Some(result);
        Ok(status)
    }

    /// Background with erase and ink layers applied
    ///
    /// This is the canvas the fill sees.
    pub fn canvas(&self) -> EditorResult<Raster> {
        Compositor::new(&self.config.palette)
            .with_layer(&self.ink)
            .with_layer(&self.erase)
            .compose(&self.background)
    }

    /// Render one display frame, including the brush preview
    ///
    /// The preview layer is cleared afterwards.
    pub fn frame(&mut self) -> EditorResult<Raster> {
        let frame = Compositor::new(&self.config.palette)
            .with_layer(&self.preview)
            .with_layer(&self.ink)
            .with_layer(&self.erase)
            .compose(&self.background)?;
        self.preview.clear();
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::palette::Palette;

    fn editor() -> Editor {
        Editor::new(EditorConfig::default().with_size(40, 30)).unwrap()
    }

    #[test]
    fn test_toggle_tools() {
        let mut ed = editor();
        assert_eq!(ed.tool(), Tool::Idle);
        ed.handle_command(Command::ToggleBrush);
        assert_eq!(ed.tool(), Tool::Brush);
        ed.handle_command(Command::ToggleEraser);
        assert_eq!(ed.tool(), Tool::Eraser);
        ed.handle_command(Command::ToggleEraser);
        assert_eq!(ed.tool(), Tool::Idle);
        ed.handle_command(Command::ToggleSeed);
        assert_eq!(ed.tool(), Tool::Seed);
    }

    #[test]
    fn test_brush_radius_floor() {
        let mut ed = editor();
        assert_eq!(ed.brush_radius(), 4);
        ed.handle_command(Command::GrowBrush);
        assert_eq!(ed.brush_radius(), 6);
        for _ in 0..5 {
            ed.handle_command(Command::ShrinkBrush);
        }
        assert_eq!(ed.brush_radius(), 2);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key('b'), Some(Command::ToggleBrush));
        assert_eq!(Command::from_key('q'), Some(Command::Quit));
        assert_eq!(Command::from_key('x'), None);
    }

    #[test]
    fn test_quit() {
        let mut ed = editor();
        assert!(ed.is_running());
        ed.handle_command(Command::Quit);
        assert!(!ed.is_running());
    }

    #[test]
    fn test_idle_ignores_pointer() {
        let mut ed = editor();
        ed.handle_pointer(PointerEvent::Down { x: 10, y: 10 }).unwrap();
        assert_eq!(ed.layer(LayerKind::Ink).painted_count(), 0);
    }

    #[test]
    fn test_move_without_press_only_previews() {
        let mut ed = editor();
        ed.handle_command(Command::ToggleBrush);
        ed.handle_pointer(PointerEvent::Move { x: 10, y: 10 }).unwrap();
        assert_eq!(ed.layer(LayerKind::Ink).painted_count(), 0);
        assert!(ed.layer(LayerKind::Preview).painted_count() > 0);

        let frame = ed.frame().unwrap();
        let brush = ed.config().palette.rgba(NamedColor::Brush);
        assert_eq!(frame.get_pixel(10, 10), Some(brush));
        assert_eq!(ed.layer(LayerKind::Preview).painted_count(), 0);
        let canvas = ed.canvas().unwrap();
        assert_eq!(canvas.get_pixel(10, 10), Some(gapfill_core::color::WHITE));
    }

    #[test]
    fn test_background_colored_brush_does_not_block_fill() {
        let white = gapfill_core::color::WHITE;
        let palette = Palette::default().with_color(NamedColor::Brush, white);
        let config = EditorConfig::default().with_size(40, 30).with_palette(palette);
        let mut ed = Editor::new(config).unwrap();

        ed.handle_command(Command::ToggleBrush);
        for x in 0..40 {
            ed.handle_pointer(PointerEvent::Down { x, y: 15 }).unwrap();
        }
        ed.handle_pointer(PointerEvent::Up { x: 39, y: 15 }).unwrap();
        assert!(ed.layer(LayerKind::Ink).painted_count() > 0);

        ed.handle_command(Command::ToggleSeed);
        ed.handle_pointer(PointerEvent::Up { x: 5, y: 5 }).unwrap();
        let result = ed.last_result().unwrap();
        assert_eq!(result.filled_count(), 40 * 30);
    }

    #[test]
    fn test_seed_outside_canvas_sets_status() {
        let mut ed = editor();
        ed.handle_command(Command::ToggleSeed);
        let result = ed.handle_pointer(PointerEvent::Up { x: -1, y: 5 });
        assert!(matches!(result, Err(EditorError::Region(_))));
        assert!(ed.status().is_some());
        assert!(ed.last_result().is_none());
    }
}
