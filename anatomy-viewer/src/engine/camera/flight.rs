use bevy::prelude::*;

use crate::catalog::{AnatomyCatalog, RegionId};
use crate::engine::camera::orbit::OrbitCamera;
use constants::camera::{FLIGHT_DURATION_MS, FOCUS_DISTANCE_SCALE};

/// Request to fly the camera to a catalog region.
#[derive(Event, Debug, Clone, Copy)]
pub struct FocusRegion {
    pub id: RegionId,
}

/// State of the eased camera transition toward the focused region.
///
/// Exactly one flight exists at a time: a retarget replaces the in-flight
/// state and bumps `generation`, so steps scheduled for a superseded flight
/// can never land on the camera.
#[derive(Resource, Debug, Clone)]
pub struct CameraFlight {
    start: Vec3,
    end: Vec3,
    elapsed_ms: f32,
    generation: u64,
    active: bool,
}

impl Default for CameraFlight {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            end: Vec3::ZERO,
            elapsed_ms: 0.0,
            generation: 0,
            active: false,
        }
    }
}

impl CameraFlight {
    /// Start a new flight from `start` toward the region's viewing position,
    /// invalidating any flight still in progress. Returns the new generation.
    pub fn retarget(&mut self, start: Vec3, region_position: Vec3) -> u64 {
        self.start = start;
        self.end = region_position * FOCUS_DISTANCE_SCALE;
        self.elapsed_ms = 0.0;
        self.generation += 1;
        self.active = true;
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn end_position(&self) -> Vec3 {
        self.end
    }

    /// Advance the flight and return the camera position for this step, or
    /// `None` when no flight is active. Deactivates on completion.
    pub fn step(&mut self, delta_ms: f32) -> Option<Vec3> {
        if !self.active {
            return None;
        }

        self.elapsed_ms += delta_ms;
        let progress = (self.elapsed_ms / FLIGHT_DURATION_MS).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.active = false;
        }

        Some(self.sample(progress))
    }

    /// Eased position at a progress fraction in [0, 1].
    pub fn sample(&self, progress: f32) -> Vec3 {
        self.start.lerp(self.end, ease_out_cubic(progress))
    }
}

/// Cubic ease-out: fast start, settling as progress approaches 1.
pub fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress).powi(3)
}

/// Capture the camera's current position and begin a flight for each focus
/// request. Requests are emitted only on an actual retarget, so re-clicking
/// the current target never restarts the flight.
pub fn begin_camera_flight(
    mut requests: EventReader<FocusRegion>,
    mut flight: ResMut<CameraFlight>,
    catalog: Res<AnatomyCatalog>,
    camera_query: Query<&Transform, With<Camera3d>>,
) {
    for request in requests.read() {
        let Some(region) = catalog.get(request.id) else {
            warn!("Focus request for unknown region {:?}", request.id);
            continue;
        };

        let Ok(camera_transform) = camera_query.single() else {
            continue;
        };

        let generation = flight.retarget(camera_transform.translation, region.position());
        info!(
            "Camera flight {} -> {} (generation {})",
            region.name,
            flight.end_position(),
            generation
        );
    }
}

/// Drive the active flight one frame forward, keeping the camera oriented at
/// the world origin. Hands control back to the orbit rig on completion.
pub fn advance_camera_flight(
    time: Res<Time>,
    mut flight: ResMut<CameraFlight>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    if !flight.is_active() {
        return;
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if let Some(position) = flight.step(time.delta_secs() * 1000.0) {
        camera_transform.translation = position;
        camera_transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    if !flight.is_active() {
        orbit.sync_from(camera_transform.translation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_is_monotone_with_fixed_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);

        let mut previous = 0.0;
        for step in 0..=100 {
            let t = ease_out_cubic(step as f32 / 100.0);
            assert!(t >= previous, "eased fraction regressed at step {step}");
            previous = t;
        }
    }

    #[test]
    fn flight_ends_exactly_at_scaled_region_position() {
        let mut flight = CameraFlight::default();
        flight.retarget(Vec3::new(7.0, 2.0, 7.0), Vec3::new(0.0, 2.5, 0.5));

        let mut last = Vec3::ZERO;
        while let Some(position) = flight.step(16.0) {
            last = position;
        }

        assert_eq!(last, Vec3::new(0.0, 7.5, 1.5));
        assert!(!flight.is_active());
    }

    #[test]
    fn retarget_preempts_inflight_animation() {
        let mut flight = CameraFlight::default();
        let first = flight.retarget(Vec3::ZERO, Vec3::new(2.5, 0.0, 0.0));

        // Halfway through, a new target arrives.
        flight.step(500.0);
        let second = flight.retarget(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, -1.5, -0.3));

        assert!(second > first, "each retarget must bump the generation");
        assert_eq!(flight.end_position(), Vec3::new(0.0, -4.5, -0.9));

        // Running the replacement to completion never lands on the old end.
        let mut last = Vec3::ZERO;
        while let Some(position) = flight.step(100.0) {
            last = position;
        }
        assert_eq!(last, Vec3::new(0.0, -4.5, -0.9));
    }

    #[test]
    fn progress_is_clamped_past_the_duration() {
        let mut flight = CameraFlight::default();
        flight.retarget(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));

        // One oversized step lands exactly on the end position.
        assert_eq!(flight.step(10_000.0), Some(Vec3::new(3.0, 0.0, 0.0)));
        assert!(flight.step(16.0).is_none());
    }
}
