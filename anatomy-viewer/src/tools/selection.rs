use bevy::prelude::*;

use crate::catalog::RegionId;
use crate::engine::camera::flight::FocusRegion;

/// Fired by the region panel when a row is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct RegionClicked {
    pub id: RegionId,
}

/// UI selection state for the viewer: which region is selected, which row is
/// expanded, and which region the camera is flying toward.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct RegionSelection {
    pub selected: Option<RegionId>,
    pub expanded: Option<RegionId>,
    pub camera_target: Option<RegionId>,
}

impl RegionSelection {
    /// Apply one row click: select the region, toggle its expansion, and make
    /// it the camera target. Returns true when the camera target actually
    /// changed, i.e. a new flight should start.
    pub fn apply_click(&mut self, id: RegionId) -> bool {
        self.selected = Some(id);
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };

        let retarget = self.camera_target != Some(id);
        self.camera_target = Some(id);
        retarget
    }
}

pub fn handle_region_clicks(
    mut clicks: EventReader<RegionClicked>,
    mut selection: ResMut<RegionSelection>,
    mut focus_requests: EventWriter<FocusRegion>,
) {
    for click in clicks.read() {
        if selection.apply_click(click.id) {
            focus_requests.write(FocusRegion { id: click.id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_updates_all_three_fields_at_once() {
        let mut selection = RegionSelection::default();
        assert!(selection.apply_click(RegionId(2)));

        assert_eq!(selection.selected, Some(RegionId(2)));
        assert_eq!(selection.expanded, Some(RegionId(2)));
        assert_eq!(selection.camera_target, Some(RegionId(2)));
    }

    #[test]
    fn reclicking_the_expanded_region_collapses_it() {
        let mut selection = RegionSelection::default();
        selection.apply_click(RegionId(5));

        // Second click on the same row: still selected and targeted, but the
        // row folds shut and no new flight starts.
        assert!(!selection.apply_click(RegionId(5)));
        assert_eq!(selection.selected, Some(RegionId(5)));
        assert_eq!(selection.expanded, None);
        assert_eq!(selection.camera_target, Some(RegionId(5)));
    }

    #[test]
    fn clicking_another_region_moves_the_expansion() {
        let mut selection = RegionSelection::default();
        selection.apply_click(RegionId(0));

        assert!(selection.apply_click(RegionId(7)));
        assert_eq!(selection.expanded, Some(RegionId(7)));
        assert_eq!(selection.selected, Some(RegionId(7)));
        assert_eq!(selection.camera_target, Some(RegionId(7)));
    }

    #[test]
    fn collapse_then_reclick_expands_without_retargeting() {
        let mut selection = RegionSelection::default();
        selection.apply_click(RegionId(1));
        selection.apply_click(RegionId(1));

        // Third click re-expands; the camera target never moved away.
        assert!(!selection.apply_click(RegionId(1)));
        assert_eq!(selection.expanded, Some(RegionId(1)));
    }
}
