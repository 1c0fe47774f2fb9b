//! gapfill-editor - Headless drawing editor for gapfill stencils
//!
//! A user sketches a barrier with the brush, corrects it with the eraser,
//! then picks a seed point. The editor composes its layers into a canvas,
//! runs the gap-aware fill and saves the resulting stencil mask.
//!
//! No window toolkit is involved: a front end feeds [`Command`]s and
//! [`PointerEvent`]s and displays [`Editor::frame`].
//!
//! # Examples
//!
//! ```
//! use gapfill_editor::{Command, Editor, EditorConfig, PointerEvent, Tool};
//!
//! let mut editor = Editor::new(EditorConfig::default().with_size(64, 48)).unwrap();
//! editor.handle_command(Command::ToggleBrush);
//! editor.handle_pointer(PointerEvent::Down { x: 10, y: 10 }).unwrap();
//! editor.handle_pointer(PointerEvent::Move { x: 20, y: 10 }).unwrap();
//! editor.handle_pointer(PointerEvent::Up { x: 20, y: 10 }).unwrap();
//! assert_eq!(editor.tool(), Tool::Brush);
//! ```

mod compose;
mod config;
mod editor;
mod error;
mod layer;
mod palette;

pub use compose::Compositor;
pub use config::EditorConfig;
pub use editor::{Command, Editor, PointerEvent, SAVED_STATUS, Tool};
pub use error::{EditorError, EditorResult};
pub use layer::{Layer, LayerKind};
pub use palette::{NamedColor, Palette};
