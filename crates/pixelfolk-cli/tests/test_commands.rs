//! Integration tests for the CLI commands, run against temporary directories.

use std::process::ExitCode;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use pixelfolk_cli::commands::generate::{self, GenerateArgs};
use pixelfolk_cli::commands::preview::{self, PreviewArgs};
use pixelfolk_cli::commands::validate;
use pixelfolk_cli::input::SpecArgs;

fn seeded(seed: u32) -> SpecArgs {
    SpecArgs {
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_generate_writes_png_per_seed() {
    let dir = tempdir().unwrap();
    let args = GenerateArgs {
        spec: seeded(40),
        out_dir: dir.path().display().to_string(),
        scale: 2,
        count: 3,
        raw: true,
        frames: Some("stretch".into()),
        json: true,
        ..Default::default()
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::SUCCESS);

    for seed in 40..43 {
        let png = dir.path().join(format!("character_{}.png", seed));
        let data = std::fs::read(&png).unwrap();
        assert_eq!(&data[1..4], b"PNG");

        let decoder = png::Decoder::new(data.as_slice());
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 100);

        assert!(dir.path().join(format!("character_{}_raw.png", seed)).exists());
        let strip = dir.path().join(format!("character_{}_stretch.png", seed));
        let strip_data = std::fs::read(strip).unwrap();
        let reader = png::Decoder::new(strip_data.as_slice()).read_info().unwrap();
        assert_eq!(reader.info().width, 300);
        assert_eq!(reader.info().height, 100);
    }
}

#[test]
fn test_generate_is_byte_identical_across_runs() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    for dir in [&a, &b] {
        let args = GenerateArgs {
            spec: SpecArgs {
                preset: Some("human".into()),
                seed: Some(2024),
                ..Default::default()
            },
            out_dir: dir.path().display().to_string(),
            json: true,
            ..Default::default()
        };
        generate::run(&args).unwrap();
    }
    let first = std::fs::read(a.path().join("character_2024.png")).unwrap();
    let second = std::fs::read(b.path().join("character_2024.png")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_names_files_after_spec() {
    let dir = tempdir().unwrap();
    let spec_path = dir.path().join("wren.json");
    std::fs::write(
        &spec_path,
        r#"{ "name": "Old Wren", "seed": 3, "preset": "short", "canvas_size": 32 }"#,
    )
    .unwrap();

    let out = dir.path().join("out");
    let args = GenerateArgs {
        spec: SpecArgs {
            spec: Some(spec_path.display().to_string()),
            ..Default::default()
        },
        out_dir: out.display().to_string(),
        scale: 1,
        json: true,
        ..Default::default()
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::SUCCESS);

    let data = std::fs::read(out.join("old_wren_3.png")).unwrap();
    let reader = png::Decoder::new(data.as_slice()).read_info().unwrap();
    assert_eq!(reader.info().width, 32);
}

#[test]
fn test_generate_rejects_bad_spec_file() {
    let dir = tempdir().unwrap();
    let spec_path = dir.path().join("bad.json");
    std::fs::write(&spec_path, r#"{ "seed": 1, "colour": "red" }"#).unwrap();

    let args = GenerateArgs {
        spec: SpecArgs {
            spec: Some(spec_path.display().to_string()),
            ..Default::default()
        },
        out_dir: dir.path().display().to_string(),
        json: true,
        ..Default::default()
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::from(1));
}

#[test]
fn test_generate_reports_invalid_canvas() {
    let dir = tempdir().unwrap();
    let args = GenerateArgs {
        spec: SpecArgs {
            canvas_size: Some(4),
            ..Default::default()
        },
        out_dir: dir.path().display().to_string(),
        json: true,
        ..Default::default()
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::from(1));
    assert!(!dir.path().join("character_0.png").exists());
}

#[test]
fn test_generate_reports_oversized_output() {
    let dir = tempdir().unwrap();
    let args = GenerateArgs {
        spec: SpecArgs {
            seed: Some(1),
            canvas_size: Some(300),
            ..Default::default()
        },
        out_dir: dir.path().display().to_string(),
        scale: 64,
        json: true,
        ..Default::default()
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::from(1));
    assert!(!dir.path().join("character_1.png").exists());
}

#[test]
fn test_validate_exit_codes() {
    assert_eq!(validate::run(&seeded(5), true).unwrap(), ExitCode::SUCCESS);

    let tiny = SpecArgs {
        canvas_size: Some(1000),
        ..Default::default()
    };
    assert_eq!(validate::run(&tiny, true).unwrap(), ExitCode::from(1));
}

#[test]
fn test_preview_writes_looping_gif() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("idle.gif");
    let args = PreviewArgs {
        spec: seeded(9),
        style: Some("regenerate".into()),
        out: out.display().to_string(),
        scale: 2,
        ..Default::default()
    };
    assert_eq!(preview::run(&args).unwrap(), ExitCode::SUCCESS);

    let data = std::fs::read(&out).unwrap();
    assert_eq!(&data[..6], b"GIF89a");

    let mut decoder = gif::DecodeOptions::new().read_info(data.as_slice()).unwrap();
    assert_eq!(decoder.width(), 100);
    let mut frames = 0;
    while decoder.read_next_frame().unwrap().is_some() {
        frames += 1;
    }
    // regenerate ping-pong: -5%, rest, +5%, rest
    assert_eq!(frames, 4);
}

#[test]
fn test_preview_rejects_unknown_style() {
    let dir = tempdir().unwrap();
    let args = PreviewArgs {
        style: Some("moonwalk".into()),
        out: dir.path().join("x.gif").display().to_string(),
        ..Default::default()
    };
    let err = preview::run(&args).unwrap_err();
    assert!(err.to_string().contains("unknown animation style"));
}
