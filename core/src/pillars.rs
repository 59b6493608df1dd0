/// Light pillars on dropped runes
///
/// A pillar is an extra `droplight` entity in the rune's HD item model that
/// plays the Horadric light particle effect.
use crate::runes::Rune;
use serde_json::{json, Value};
use thiserror::Error;

pub const PILLAR_ENTITY: &str = "droplight";
pub const PILLAR_PARTICLES: &str =
    "data/hd/vfx/particles/overlays/object/horadric_light/fx_horadric_light.particles";
const PILLAR_ENTITY_ID: u64 = 9_999_996_974;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PillarError {
    #[error("model for rune {rune} has no usable `{field}`")]
    Malformed { rune: String, field: &'static str },
}

/// Add the pillar entity to `model`. Returns `false` when it is already there.
pub fn add_light_pillar(rune: Rune, model: &mut Value) -> Result<bool, PillarError> {
    let entities = model
        .get_mut("entities")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| malformed(rune, "entities"))?;

    let present = entities
        .iter()
        .any(|entity| entity.get("name").and_then(Value::as_str) == Some(PILLAR_ENTITY));
    if present {
        return Ok(false);
    }
    entities.push(pillar_entity());

    let particles = model
        .as_object_mut()
        .and_then(|model| {
            model
                .entry("dependencies")
                .or_insert_with(|| json!({}))
                .as_object_mut()
        })
        .and_then(|dependencies| {
            dependencies
                .entry("particles")
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
        })
        .ok_or_else(|| malformed(rune, "dependencies.particles"))?;
    let listed = particles
        .iter()
        .any(|dependency| dependency.get("path").and_then(Value::as_str) == Some(PILLAR_PARTICLES));
    if !listed {
        particles.push(json!({ "path": PILLAR_PARTICLES }));
    }

    Ok(true)
}

fn malformed(rune: Rune, field: &'static str) -> PillarError {
    PillarError::Malformed {
        rune: rune.name().to_string(),
        field,
    }
}

fn pillar_entity() -> Value {
    json!({
        "type": "Entity",
        "name": PILLAR_ENTITY,
        "id": PILLAR_ENTITY_ID,
        "components": [
            {
                "type": "TransformDefinitionComponent",
                "name": "component_transform1",
                "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "orientation": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 },
                "scale": { "x": 1.0, "y": 1.0, "z": 1.0 },
                "inheritOnlyPosition": false
            },
            {
                "type": "VfxDefinitionComponent",
                "name": "entity_vfx_filthy_light",
                "filename": PILLAR_PARTICLES,
                "hardKillOnDestroy": false
            }
        ]
    })
}
