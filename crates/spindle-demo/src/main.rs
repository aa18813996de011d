//! 2D affine-transform playground: a hexagonal pivot, a face orbiting it,
//! and a slider panel editing both transforms live.

mod app;
mod panel;
mod scene;

use anyhow::Result;
use winit::dpi::LogicalSize;

use spindle_engine::coords::Viewport;
use spindle_engine::device::GpuInit;
use spindle_engine::logging::{init_logging, LoggingConfig};
use spindle_engine::window::{Runtime, RuntimeConfig};

use crate::app::DemoApp;

const CANVAS_WIDTH: f64 = 1100.0;
const CANVAS_HEIGHT: f64 = 500.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "spindle — 2D transforms".to_string(),
        initial_size: LogicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT),
    };

    let canvas = Viewport::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);

    log::info!("starting spindle demo ({}x{})", CANVAS_WIDTH, CANVAS_HEIGHT);

    Runtime::run(config, GpuInit::default(), DemoApp::new(canvas))
}
