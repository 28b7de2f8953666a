//! Post-processing pipeline: smoothing, then lighting, then outline.
//!
//! Each processor reads one grid and returns a new one. The pipeline always
//! starts from the raw grid, so rerunning it with the same options gives the
//! same result and toggling a processor never compounds earlier runs.

mod lighting;
mod outline;
mod smoothing;

pub use lighting::{apply_lighting, LIGHT_AMOUNT};
pub use outline::apply_outline;
pub use smoothing::{apply_smoothing, SMOOTHING_MIN_NEIGHBORS};

use log::debug;
use pixelfolk_spec::ProcessOptions;

use crate::grid::PixelGrid;

/// A post-processor: consumes a grid, returns a new one.
pub type Processor = fn(&PixelGrid, &ProcessOptions) -> PixelGrid;

/// A named pipeline stage.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub run: Processor,
}

/// The enabled stages for `options`, in execution order.
pub fn pipeline(options: &ProcessOptions) -> Vec<Stage> {
    let mut stages = Vec::with_capacity(3);
    if options.enable_smoothing {
        stages.push(Stage {
            name: "smoothing",
            run: apply_smoothing,
        });
    }
    if options.light_direction.is_some() {
        stages.push(Stage {
            name: "lighting",
            run: apply_lighting,
        });
    }
    if options.show_outline {
        stages.push(Stage {
            name: "outline",
            run: apply_outline,
        });
    }
    stages
}

/// Run every enabled stage over a copy of `raw`.
pub fn process(raw: &PixelGrid, options: &ProcessOptions) -> PixelGrid {
    let mut grid = raw.clone();
    for stage in pipeline(options) {
        grid = (stage.run)(&grid, options);
        debug!("{}: {} cells filled", stage.name, grid.filled_count());
    }
    grid
}
