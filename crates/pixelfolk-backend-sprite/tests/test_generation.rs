//! End-to-end generation tests: determinism, body plans, export, animation.

use pretty_assertions::assert_eq;

use pixelfolk_backend_sprite::png::{write_grid_to_vec_with_hash, write_strip_to_vec_with_hash};
use pixelfolk_backend_sprite::{generate_character, BodyPart, PngConfig, Region, Rgb};
use pixelfolk_spec::{AnimationStyle, BodyPreset, CharacterSpec, Palette};

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_spec_same_pixels_and_png() {
    let spec = CharacterSpec::new(1234).with_preset(BodyPreset::Bulky);
    let a = generate_character(&spec).unwrap();
    let b = generate_character(&spec).unwrap();
    assert_eq!(a.params, b.params);
    assert_eq!(a.raw_pixels(), b.raw_pixels());
    assert_eq!(a.pixels(), b.pixels());

    let config = PngConfig::default().with_scale(4);
    let (_, hash_a) = write_grid_to_vec_with_hash(a.pixels(), &config).unwrap();
    let (_, hash_b) = write_grid_to_vec_with_hash(b.pixels(), &config).unwrap();
    assert_eq!(hash_a, hash_b);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate_character(&CharacterSpec::new(1)).unwrap();
    let b = generate_character(&CharacterSpec::new(2)).unwrap();
    assert_ne!(a.raw_pixels(), b.raw_pixels());
}

#[test]
fn test_json_spec_matches_builder() {
    let json = r#"{ "seed": 99, "preset": "thin", "canvas_size": 64 }"#;
    let from_json = generate_character(&CharacterSpec::from_json(json).unwrap()).unwrap();
    let built = generate_character(
        &CharacterSpec::new(99)
            .with_preset(BodyPreset::Thin)
            .with_canvas_size(64),
    )
    .unwrap();
    assert_eq!(from_json.pixels(), built.pixels());
}

#[test]
fn test_unknown_preset_falls_back_to_standard() {
    let json = r#"{ "seed": 5, "preset": "gargantuan" }"#;
    let odd = generate_character(&CharacterSpec::from_json(json).unwrap()).unwrap();
    let standard =
        generate_character(&CharacterSpec::new(5).with_preset(BodyPreset::Standard)).unwrap();
    assert_eq!(odd.params, standard.params);
}

// ============================================================================
// Body plans
// ============================================================================

#[test]
fn test_human_plan_colors_by_region() {
    let palette = [[230, 190, 150], [30, 90, 180], [50, 50, 60], [100, 50, 20]];
    let mut spec = CharacterSpec::new(31).with_preset(BodyPreset::Human);
    spec.palette = Some(Palette::from_rgb(palette));
    let character = generate_character(&spec).unwrap();
    let plan = character.plan();
    let size = character.canvas_size;

    let mut checked = 0;
    for (x, y, cell) in character.raw_pixels().cells() {
        let (Some(color), true) = (cell, x < size / 2) else {
            continue;
        };
        let Some(region) = character.heatmap.owner(x, y).and_then(|p| plan.region(p)) else {
            continue;
        };
        assert_eq!(color, Rgb::from(palette[region.palette_slot()]));
        checked += 1;
    }
    assert!(checked > 50);
    assert_eq!(plan.region(BodyPart::Head), Some(Region::Skin));
}

#[test]
fn test_generic_plan_uses_whole_palette() {
    let palette = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];
    let mut spec = CharacterSpec::new(8);
    spec.palette = Some(Palette::from_rgb(palette));
    let character = generate_character(&spec).unwrap();
    for rgb in palette {
        let color = Rgb::from(rgb);
        assert!(
            character.raw_pixels().cells().any(|(_, _, c)| c == Some(color)),
            "{} never used",
            color
        );
    }
}

// ============================================================================
// Animation and export
// ============================================================================

#[test]
fn test_animation_strip_export() {
    let character = generate_character(&CharacterSpec::new(64)).unwrap();
    let config = PngConfig::default();
    for style in AnimationStyle::ALL {
        let anim = character.animate(style);
        let (data, hash) = write_strip_to_vec_with_hash(&anim.frames, &config).unwrap();
        assert!(!data.is_empty());

        let replay = character.animate(style);
        let (_, again) = write_strip_to_vec_with_hash(&replay.frames, &config).unwrap();
        assert_eq!(hash, again, "{}", style.as_str());
    }
}

#[test]
fn test_stretch_keeps_lower_half() {
    let character = generate_character(&CharacterSpec::new(64)).unwrap();
    let anim = character.animate(AnimationStyle::Stretch);
    let size = character.canvas_size;
    for frame in &anim.frames {
        for y in size / 2..size {
            assert_eq!(frame.row(y), character.pixels().row(y));
        }
    }
}
