use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::camera::{
    CameraFlight, FocusRegion, OrbitCamera, advance_camera_flight, begin_camera_flight,
    orbit_camera_controller,
};
use crate::engine::core::app_state::{AppState, LoadingProgress, transition_to_running};
use crate::engine::scene::{
    apply_shell_material, spawn_brain_model, spawn_lighting, spawn_region_anchors,
};
use crate::engine::shaders::{BrainShellMaterial, create_shell_material, update_shell_time};

// Crate catalog and tools modules
use crate::catalog::{AnatomyCatalog, CatalogLoader, poll_catalog, start_catalog_load};
use crate::tools::region_panel::{
    build_region_panel, fps_text_update_system, region_row_interactions, spawn_fps_overlay,
    sync_region_panel,
};
use crate::tools::selection::{RegionClicked, RegionSelection, handle_region_clicks};

use constants::camera::INITIAL_CAMERA_POSITION;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<BrainShellMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the anatomy catalog as a loadable asset type from JSON.
        .add_plugins(JsonAssetPlugin::<AnatomyCatalog>::new(&["json"]));

    // Initialise resources and events early
    app.init_resource::<CatalogLoader>()
        .init_resource::<LoadingProgress>()
        .init_resource::<OrbitCamera>()
        .init_resource::<CameraFlight>()
        .init_resource::<RegionSelection>()
        .add_event::<RegionClicked>()
        .add_event::<FocusRegion>();

    // State-based system scheduling
    app.add_systems(
        Startup,
        (setup, spawn_brain_model, create_shell_material, start_catalog_load).chain(),
    )
    .add_systems(
        Update,
        (poll_catalog, transition_to_running)
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        OnEnter(AppState::Running),
        (spawn_region_anchors, build_region_panel),
    );

    // Runtime systems - the click pipeline runs in order so one press updates
    // selection, panel and camera within the same frame.
    app.add_systems(
        Update,
        (
            region_row_interactions,
            handle_region_clicks,
            sync_region_panel,
            begin_camera_flight,
            advance_camera_flight,
            orbit_camera_controller,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(
        Update,
        (apply_shell_material, update_shell_time, fps_text_update_system)
            .run_if(in_state(AppState::Running)),
    );

    app
}

// Startup system that only handles basic scene initialisation
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_lighting(&mut commands);
    spawn_fps_overlay(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(Window {
            title: "Anatomy Viewer".into(),
            ..default()
        }),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
