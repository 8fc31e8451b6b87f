use bevy::prelude::*;

/// Camera start point for the anatomy scene, looking at the world origin.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(7.0, 2.0, 7.0);

/// Fixed duration of a focus flight from the current camera position to a region.
pub const FLIGHT_DURATION_MS: f32 = 1000.0;

/// A focused region is viewed from `region position * scale`, pulled back along
/// the origin ray so the whole shell stays in frame.
pub const FOCUS_DISTANCE_SCALE: f32 = 3.0;

pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005;

/// Keep the orbit away from the poles so look-at never degenerates.
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

// Focus flights can end well inside the default viewing distance.
pub const ORBIT_MIN_RADIUS: f32 = 0.5;
pub const ORBIT_MAX_RADIUS: f32 = 40.0;

/// Dolly step per scroll line; pixel scrolling is scaled down to match.
pub const ORBIT_DOLLY_LINE_STEP: f32 = 1.0;
pub const ORBIT_DOLLY_PIXEL_STEP: f32 = 0.05;
