pub mod brain_model;
pub mod lighting;

pub use brain_model::{
    BrainModelRoot, RegionAnchor, apply_shell_material, spawn_brain_model, spawn_region_anchors,
};
pub use lighting::spawn_lighting;
