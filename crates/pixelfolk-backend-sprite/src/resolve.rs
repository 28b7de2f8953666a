//! Parameter resolution: ranges to concrete values, then derived attributes.

use log::debug;
use thiserror::Error;

use pixelfolk_spec::{
    attr, BodyParams, ParamValue, ParameterSet, ResolvedParams, ResolvedValue, SpecError,
};

use crate::rng::DeterministicRng;

/// Nominal shin length (percent) used when none is supplied.
pub const DEFAULT_SHIN_LENGTH: f64 = 24.0;

/// Errors from parameter resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A derived attribute's source holds a flag or text.
    #[error("cannot derive '{name}': source '{source_name}' is not numeric")]
    NonNumericSource {
        name: &'static str,
        source_name: &'static str,
    },
}

enum Derivation {
    /// `source * factor`
    Scaled(&'static str, f64),
    Constant(f64),
}

/// Attributes filled in after sampling when absent, in application order.
const DERIVED: [(&str, Derivation); 7] = [
    (
        attr::UPPER_ARM_BOTTOM_WIDTH,
        Derivation::Scaled(attr::UPPER_ARM_TOP_WIDTH, 0.8),
    ),
    (
        attr::FOREARM_BOTTOM_WIDTH,
        Derivation::Scaled(attr::FOREARM_TOP_WIDTH, 0.7),
    ),
    (
        attr::FOREARM_LENGTH,
        Derivation::Scaled(attr::UPPER_ARM_LENGTH, 1.0),
    ),
    (attr::HEAD_HEIGHT, Derivation::Scaled(attr::HEAD_WIDTH, 1.0)),
    (
        attr::THIGH_BOTTOM_WIDTH,
        Derivation::Scaled(attr::THIGH_TOP_WIDTH, 0.8),
    ),
    (
        attr::SHIN_BOTTOM_WIDTH,
        Derivation::Scaled(attr::SHIN_TOP_WIDTH, 0.8),
    ),
    (attr::SHIN_LENGTH, Derivation::Constant(DEFAULT_SHIN_LENGTH)),
];

/// Draw one uniform sample per range, pass fixed values through, then fill
/// in derived attributes that were not supplied.
///
/// Ranges are sampled in attribute-name order, so a given seed always maps to
/// the same values. The set is validated before any draw.
pub fn resolve_params(
    params: &ParameterSet,
    rng: &mut DeterministicRng,
) -> Result<ResolvedParams, ResolveError> {
    params.validate()?;

    let mut resolved = ResolvedParams::new();
    for (name, value) in params.iter() {
        let value = match value {
            ParamValue::Range { min, max } => ResolvedValue::Number(rng.uniform(*min, *max)),
            ParamValue::Number(v) => ResolvedValue::Number(*v),
            ParamValue::Flag(b) => ResolvedValue::Flag(*b),
            ParamValue::Text(s) => ResolvedValue::Text(s.clone()),
        };
        resolved.insert(name, value);
    }

    derive_missing(&mut resolved)?;
    debug!("resolved {} attributes", resolved.len());
    Ok(resolved)
}

/// Resolve and read out the typed body parameters in one step.
pub fn resolve_body(
    params: &ParameterSet,
    rng: &mut DeterministicRng,
) -> Result<(ResolvedParams, BodyParams), ResolveError> {
    let resolved = resolve_params(params, rng)?;
    let body = BodyParams::from_resolved(&resolved)?;
    Ok((resolved, body))
}

fn derive_missing(resolved: &mut ResolvedParams) -> Result<(), ResolveError> {
    for &(name, ref derivation) in DERIVED.iter() {
        if resolved.contains(name) {
            continue;
        }
        let value = match *derivation {
            Derivation::Constant(v) => v,
            Derivation::Scaled(source, factor) => match resolved.get(source) {
                // A missing source is reported later by the body reader.
                None => continue,
                Some(ResolvedValue::Number(v)) => v * factor,
                Some(_) => {
                    return Err(ResolveError::NonNumericSource {
                        name,
                        source_name: source,
                    })
                }
            },
        };
        resolved.insert_number(name, value);
    }
    Ok(())
}
