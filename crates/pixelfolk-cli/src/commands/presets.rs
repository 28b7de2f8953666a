//! Presets command implementation
//!
//! Lists the built-in body presets.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use pixelfolk_spec::{BodyPreset, CharacterSpec};

use super::json_output::{print_json, PresetInfo};

/// Run the presets command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let presets = preset_infos();
    if json_output {
        print_json(&presets)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Body presets:".cyan().bold());
    for info in &presets {
        println!(
            "  {:<10} {} {}",
            info.name.bold(),
            info.description,
            format!("[{}]", info.plan).dimmed()
        );
    }
    println!(
        "\n{} unknown preset names fall back to {}",
        "note:".dimmed(),
        BodyPreset::Standard.as_str()
    );
    Ok(ExitCode::SUCCESS)
}

/// Every preset with its description and the body plan it selects by default.
pub fn preset_infos() -> Vec<PresetInfo> {
    BodyPreset::ALL
        .iter()
        .map(|&preset| PresetInfo {
            name: preset.as_str().to_string(),
            description: preset.description().to_string(),
            plan: plan_name(preset),
        })
        .collect()
}

fn plan_name(preset: BodyPreset) -> String {
    let kind = CharacterSpec::new(0).with_preset(preset).plan_kind();
    serde_json::to_value(kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preset_infos_cover_all() {
        let infos = preset_infos();
        assert_eq!(infos.len(), BodyPreset::ALL.len());
        assert_eq!(infos[0].name, "standard");
        assert_eq!(infos[0].plan, "generic");
        let human = infos.iter().find(|i| i.name == "human").unwrap();
        assert_eq!(human.plan, "human");
    }
}
