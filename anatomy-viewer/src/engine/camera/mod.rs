pub mod flight;
pub mod orbit;

pub use flight::{CameraFlight, FocusRegion, advance_camera_flight, begin_camera_flight};
pub use orbit::{OrbitCamera, orbit_camera_controller};
