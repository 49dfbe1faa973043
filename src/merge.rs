//! Configuration merging
//!
//! Combines the baseline configuration with a scenario's overrides into a
//! fresh `JobOptions`. The named chart sections deep-merge (object union,
//! override wins); scalar export settings replace wholesale when present.
//! Raw-content scenarios are a distinct shape: only the export type and
//! scale overrides apply, and the inline payload is attached verbatim.

use serde_json::Value;

use crate::options::{JobOptions, RawPayload};
use crate::scenario::ScenarioDefinition;

/// Recursively merge `overlay` into `base`
///
/// Objects union key-by-key with overlay values winning; any other value
/// kind replaces the base value outright.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

fn merge_section(base: &mut Option<Value>, overlay: &Option<Value>) {
    if let Some(overlay) = overlay {
        match base {
            Some(base) => deep_merge(base, overlay),
            None => *base = Some(overlay.clone()),
        }
    }
}

/// Merge a scenario against the baseline into the options for one job
///
/// The baseline is never mutated; the result is a distinct copy. Keys
/// absent from both baseline and scenario stay absent.
pub fn merge_options(baseline: &JobOptions, scenario: &ScenarioDefinition) -> JobOptions {
    let mut job = baseline.clone();

    if let Some(export_type) = scenario.export_type {
        job.export.export_type = export_type;
    }
    if let Some(scale) = scenario.scale {
        job.export.scale = scale;
    }

    // Raw-content shape: inline input replaces the whole chart
    // configuration, so the section merge is skipped entirely.
    if let Some(svg) = &scenario.svg {
        job.payload = Some(RawPayload { svg: svg.clone() });
        return job;
    }

    if let Some(width) = scenario.width {
        job.export.width = Some(width);
    }
    if let Some(height) = scenario.height {
        job.export.height = Some(height);
    }
    if let Some(outfile) = &scenario.outfile {
        job.export.outfile = Some(outfile.clone());
    }

    merge_section(&mut job.options, &scenario.options);
    merge_section(&mut job.resources, &scenario.resources);
    merge_section(&mut job.global_options, &scenario.global_options);
    merge_section(&mut job.theme_options, &scenario.theme_options);

    job
}
