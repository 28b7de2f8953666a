//! Idle-loop animation frames derived from a finished character.
//!
//! Three styles:
//! - `Regenerate` perturbs torso height and arm angle by 5% per step and
//!   rebuilds each frame from geometry, reusing the fill stream.
//! - `HeadBob` regenerates a breathing frame, then copies the rest frame's
//!   head block over it one row higher so facial pixels never change.
//! - `Stretch` shifts everything above the canvas midline by one row, with no
//!   geometry at all.
//!
//! Every style produces exactly one rest frame equal to the character's
//! processed grid. Playback order (ping-pong or loop) is left to the caller.

use log::debug;

use pixelfolk_spec::AnimationStyle;

use crate::character::{rasterize, Character};
use crate::grid::{CellRect, PixelGrid};
use crate::heatmap::generate_heatmap;
use crate::process::process;
use crate::skeleton::{build_skeleton, BodyPart};

/// Relative parameter change per regenerate step.
pub const REGENERATE_STEP: f64 = 0.05;

/// Frames for one animation style, in step order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrames {
    pub style: AnimationStyle,
    pub frames: Vec<PixelGrid>,
    /// Index of the frame identical to the unanimated grid.
    pub rest_index: usize,
}

impl AnimationFrames {
    pub fn rest(&self) -> &PixelGrid {
        &self.frames[self.rest_index]
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Forward then backward, without repeating the end frames.
    pub fn ping_pong(&self) -> Vec<&PixelGrid> {
        let mut order: Vec<&PixelGrid> = self.frames.iter().collect();
        if self.frames.len() > 2 {
            order.extend(self.frames[1..self.frames.len() - 1].iter().rev());
        }
        order
    }
}

/// Produce every frame of `style` for `character`.
pub fn derive_frames(character: &Character, style: AnimationStyle) -> AnimationFrames {
    let steps = style.steps();
    let frames: Vec<PixelGrid> = steps
        .iter()
        .map(|&step| match style {
            AnimationStyle::Regenerate => regenerate_frame(character, step),
            AnimationStyle::HeadBob => head_bob_frame(character, step),
            AnimationStyle::Stretch => stretch_frame(character.pixels(), step),
        })
        .collect();
    let rest_index = steps.iter().position(|&s| s == 0).unwrap_or(0);
    debug!("{}: {} frames", style.as_str(), frames.len());
    AnimationFrames {
        style,
        frames,
        rest_index,
    }
}

fn regenerate_frame(character: &Character, step: i32) -> PixelGrid {
    if step == 0 {
        return character.pixels().clone();
    }
    let factor = 1.0 + REGENERATE_STEP * step as f64;
    let mut body = character.body.clone();
    body.torso_height *= factor;
    body.arm_angle *= factor;

    let size = character.canvas_size;
    let skeleton = build_skeleton(&body, size);
    let heatmap = generate_heatmap(&skeleton, size);
    let raw = rasterize(
        &heatmap,
        &body,
        &character.palette,
        character.plan(),
        character.seed,
    );
    process(&raw, character.options())
}

fn head_bob_frame(character: &Character, step: i32) -> PixelGrid {
    let mut frame = regenerate_frame(character, step);
    if step == 0 {
        return frame;
    }
    let Some(rect) = character
        .skeleton
        .cell_bounds(BodyPart::Head, character.canvas_size)
        .map(|r| padded(r, &frame))
    else {
        return frame;
    };
    if rect.is_empty() {
        return frame;
    }
    let head = character.pixels().extract(rect);
    frame.paste(&head, rect.x as i32, rect.y as i32 - step);
    frame
}

/// Grow a rectangle by one cell on every side so the outline moves with it.
fn padded(rect: CellRect, grid: &PixelGrid) -> CellRect {
    let x = rect.x.saturating_sub(1);
    let y = rect.y.saturating_sub(1);
    grid.clip(CellRect {
        x,
        y,
        width: rect.x + rect.width + 1 - x,
        height: rect.y + rect.height + 1 - y,
    })
}

/// Shift the rows above the midline by `step` rows; positive steps move them
/// up (the body grows) and negative steps move them down.
///
/// Growing duplicates the row just above the midline into the gap; shrinking
/// leaves the vacated top row empty. Rows at or below the midline never move.
pub fn stretch_frame(grid: &PixelGrid, step: i32) -> PixelGrid {
    let mut out = grid.clone();
    let split = grid.size() / 2;
    if step == 0 || split == 0 {
        return out;
    }

    if step > 0 {
        // row y takes row y + 1; the row above the split keeps its content
        for y in 0..split - 1 {
            out.set_row(y, grid.row(y + 1));
        }
    } else {
        let empty = vec![None; grid.size() as usize];
        out.set_row(0, &empty);
        for y in 1..split {
            out.set_row(y, grid.row(y - 1));
        }
    }
    out
}
