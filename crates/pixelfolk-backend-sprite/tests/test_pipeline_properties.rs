//! Property-based tests for the generation pipeline using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pixelfolk-backend-sprite --test test_pipeline_properties
//! ```

use proptest::prelude::*;

use pixelfolk_backend_sprite::fill::FILL_THRESHOLD;
use pixelfolk_backend_sprite::geometry::{is_point_in_polygon, Point};
use pixelfolk_backend_sprite::skeleton::BodyPart;
use pixelfolk_backend_sprite::{generate_character, Character};
use pixelfolk_spec::{
    attr, BodyPreset, CharacterSpec, LightDirection, ParameterSet, ProcessOptions,
};

fn preset() -> impl Strategy<Value = BodyPreset> {
    prop::sample::select(BodyPreset::ALL.to_vec())
}

fn without_lighting() -> ProcessOptions {
    ProcessOptions {
        light_direction: None,
        ..ProcessOptions::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Raw grids are mirror-symmetric including color.
    #[test]
    fn raw_grid_is_symmetric(seed in any::<u32>(), preset in preset(), size in 16u32..80) {
        let spec = CharacterSpec::new(seed).with_preset(preset).with_canvas_size(size);
        let character = generate_character(&spec).unwrap();
        prop_assert!(character.raw_pixels().is_mirror_symmetric());
    }

    /// Smoothing and outline keep symmetry; only lighting may break it.
    #[test]
    fn only_lighting_breaks_symmetry(seed in any::<u32>(), preset in preset()) {
        let mut spec = CharacterSpec::new(seed).with_preset(preset);
        spec.process = without_lighting();
        let character = generate_character(&spec).unwrap();
        prop_assert!(character.pixels().is_mirror_symmetric());
    }

    /// Reprocessing twice with the same toggles gives the same grid.
    #[test]
    fn reprocessing_is_idempotent(
        seed in any::<u32>(),
        smoothing in any::<bool>(),
        outline in any::<bool>(),
        light in prop::option::of(prop::sample::select(vec![
            LightDirection::TopLeft,
            LightDirection::TopRight,
            LightDirection::BottomLeft,
            LightDirection::BottomRight,
        ])),
    ) {
        let mut character = generate_character(&CharacterSpec::new(seed)).unwrap();
        let options = ProcessOptions {
            enable_smoothing: smoothing,
            show_outline: outline,
            light_direction: light,
            ..ProcessOptions::default()
        };
        character.reprocess(options.clone());
        let first = character.pixels().clone();
        character.reprocess(options);
        prop_assert_eq!(character.pixels(), &first);
    }

    /// Each shin on its own reaches within one cell of the ground line,
    /// whatever the thigh length; the foot is not counted.
    #[test]
    fn legs_touch_ground(seed in any::<u32>(), thigh in 8.0f64..30.0) {
        let params = ParameterSet::new().with_value(attr::THIGH_LENGTH, thigh);
        let spec = CharacterSpec::new(seed).with_params(params);
        let character = generate_character(&spec).unwrap();
        let ground = character.body.ground_y * character.canvas_size as f64 / 100.0;

        for shin in [BodyPart::LeftShin, BodyPart::RightShin] {
            let lowest = lowest_covered_row(&character, shin);
            prop_assert!(lowest.is_some(), "{} covers no cells", shin.as_str());
            let lowest = lowest.unwrap_or_default() as f64;
            prop_assert!(
                (lowest - ground).abs() <= 1.0,
                "{}: {} vs {}", shin.as_str(), lowest, ground
            );
        }
    }

    /// Cells at or below the occupancy threshold are never filled.
    #[test]
    fn low_occupancy_is_never_filled(seed in any::<u32>(), preset in preset()) {
        let spec = CharacterSpec::new(seed).with_preset(preset);
        let character = generate_character(&spec).unwrap();
        let size = character.canvas_size;
        for (x, y, cell) in character.raw_pixels().cells() {
            if cell.is_some() {
                // the right half mirrors the left
                let sx = x.min(size - 1 - x);
                prop_assert!(character.heatmap.get(sx, y) > FILL_THRESHOLD);
            }
        }
    }
}

/// Lowest grid row with a sample point inside `part`'s trapezoid alone.
fn lowest_covered_row(character: &Character, part: BodyPart) -> Option<u32> {
    let size = character.canvas_size;
    let trapezoid = character.skeleton.get(part)?.as_trapezoid()?;
    (0..size).rev().find(|&y| {
        (0..size).any(|x| {
            is_point_in_polygon(Point::new(x as f64, y as f64), &trapezoid.points)
        })
    })
}

#[test]
fn lighting_breaks_symmetry() {
    let character = generate_character(&CharacterSpec::new(77)).unwrap();
    assert!(character.options().light_direction.is_some());
    assert!(!character.pixels().is_mirror_symmetric());
}
