use bevy::prelude::*;

/// Brain shell asset, loaded by path. The binary ships outside the repository.
pub const BRAIN_MODEL_PATH: &str = "model/brain.glb";

/// Region catalog asset relative to the assets root.
pub const CATALOG_PATH: &str = "anatomy/brain_regions.json";

pub const BRAIN_MODEL_OFFSET: Vec3 = Vec3::new(1.0, -1.0, 0.0);
pub const BRAIN_MODEL_SCALE: Vec3 = Vec3::ONE;

// Lighting rig. Positions come from the portal's reference scene; intensities
// keep its 1.0 / 0.7 / 0.5 / 0.3 ratios expressed in physical light units.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const KEY_LIGHT_ILLUMINANCE: f32 = 10_000.0;

pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, -5.0, -5.0);
pub const FILL_LIGHT_ILLUMINANCE: f32 = 7_000.0;

pub const FRONT_POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const FRONT_POINT_LIGHT_INTENSITY: f32 = 500_000.0;

pub const REAR_POINT_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, -5.0, -5.0);
pub const REAR_POINT_LIGHT_INTENSITY: f32 = 300_000.0;
