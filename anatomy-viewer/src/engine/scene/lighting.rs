use bevy::prelude::*;

use constants::scene::{
    AMBIENT_BRIGHTNESS, FILL_LIGHT_ILLUMINANCE, FILL_LIGHT_POSITION, FRONT_POINT_LIGHT_INTENSITY,
    FRONT_POINT_LIGHT_POSITION, KEY_LIGHT_ILLUMINANCE, KEY_LIGHT_POSITION,
    REAR_POINT_LIGHT_INTENSITY, REAR_POINT_LIGHT_POSITION,
};

/// Static lighting rig: ambient fill, a shadowed key light, a dimmer fill
/// light from the opposite corner and two accent point lights.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(FILL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: FRONT_POINT_LIGHT_INTENSITY,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(FRONT_POINT_LIGHT_POSITION),
    ));

    commands.spawn((
        PointLight {
            intensity: REAR_POINT_LIGHT_INTENSITY,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(REAR_POINT_LIGHT_POSITION),
    ));
}
