//! dragplot crate root: re-exports and module wiring.
//!
//! Interactive extensions for 2D plots built on egui/eframe:
//! - labeled, clickable point series (`series`, `picker`)
//! - draggable points, free or glued to a function curve (`drag`)
//! - per-axes zoom with toolbar buttons and scroll wheel (`zoom`)
//!
//! The interaction core talks to the rendering toolkit only through the
//! [`surface::PlotSurface`] collaborator trait. `ui` and `app` bind it to
//! egui_plot/eframe; [`headless::HeadlessSurface`] is the same retained
//! surface without a window, used directly in tests and headless callers.

pub mod app;
pub mod config;
pub mod drag;
mod error;
pub mod headless;
pub mod look;
pub mod picker;
pub mod series;
pub mod surface;
pub mod ui;
pub mod validate;
pub mod workspace;
pub mod zoom;

// Public re-exports for a compact external API
pub use app::{run_interactive, InteractiveApp};
pub use config::InteractiveConfig;
pub use error::PlotError;
pub use headless::{CanvasOp, HeadlessSurface};
pub use look::{CurveLook, HighlightLook};
pub use surface::{
    AxesId, ButtonId, ButtonRect, LineId, PlotSurface, PointerEvent, SurfaceEvent, TextId,
};
pub use ui::InteractivePlot;
pub use validate::LabelInput;
pub use workspace::{ControllerId, InteractionSession, Workspace};
pub use zoom::{rescale_interval, DEFAULT_ZOOM_FACTOR};
