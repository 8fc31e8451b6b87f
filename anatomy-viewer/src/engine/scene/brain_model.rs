use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::catalog::{AnatomyCatalog, RegionId};
use crate::engine::core::app_state::LoadingProgress;
use crate::engine::shaders::ShellMaterial;
use constants::scene::{BRAIN_MODEL_OFFSET, BRAIN_MODEL_PATH, BRAIN_MODEL_SCALE};

/// Root of the spawned brain glTF scene.
#[derive(Component)]
pub struct BrainModelRoot;

/// Invisible marker at a region's coordinate. Placeholder reserved for
/// hover/click hit-testing.
#[derive(Component)]
pub struct RegionAnchor {
    pub id: RegionId,
}

pub fn spawn_brain_model(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        BrainModelRoot,
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(BRAIN_MODEL_PATH))),
        Transform::from_translation(BRAIN_MODEL_OFFSET).with_scale(BRAIN_MODEL_SCALE),
    ));
}

/// One hidden anchor entity per catalog region.
pub fn spawn_region_anchors(mut commands: Commands, catalog: Res<AnatomyCatalog>) {
    for (id, region) in catalog.iter() {
        commands.spawn((
            RegionAnchor { id },
            Name::new(region.name.clone()),
            Transform::from_translation(region.position()).with_scale(region.scale()),
            Visibility::Hidden,
        ));
    }
}

/// Swap every standard surface under the model root for the translucent pulse
/// material. Runs until the glTF scene has spawned, then latches so the
/// traversal happens exactly once.
pub fn apply_shell_material(
    mut commands: Commands,
    mut progress: ResMut<LoadingProgress>,
    shell: Res<ShellMaterial>,
    roots: Query<Entity, With<BrainModelRoot>>,
    children_query: Query<&Children>,
    standard_surfaces: Query<(), With<MeshMaterial3d<StandardMaterial>>>,
) {
    if progress.shell_applied {
        return;
    }

    let Ok(root) = roots.single() else {
        return;
    };

    let mut replaced = 0usize;
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if let Ok(children) = children_query.get(entity) {
            stack.extend_from_slice(children);
        }
        if standard_surfaces.get(entity).is_ok() {
            commands
                .entity(entity)
                .remove::<MeshMaterial3d<StandardMaterial>>()
                .insert(MeshMaterial3d(shell.handle.clone()));
            replaced += 1;
        }
    }

    if replaced > 0 {
        info!("Shell material applied to {replaced} surfaces");
        progress.shell_applied = true;
    }
}
