use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub catalog_loaded: bool,
    /// Latched once the glTF surfaces have been swapped to the pulse shell.
    pub shell_applied: bool,
}

// Transition to Running once the catalog resource exists
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.catalog_loaded {
        info!("→ Anatomy catalog ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
