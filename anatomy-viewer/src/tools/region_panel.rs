use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::catalog::{AnatomyCatalog, RegionId};
use crate::engine::core::app_state::FpsText;
use crate::tools::selection::{RegionClicked, RegionSelection};

const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.09, 0.14);
const ROW_IDLE: Color = Color::srgb(0.16, 0.14, 0.22);
const ROW_HOVERED: Color = Color::srgb(0.22, 0.19, 0.32);
const ROW_SELECTED: Color = Color::srgb(0.30, 0.24, 0.45);
const INFO_BACKGROUND: Color = Color::srgb(0.13, 0.12, 0.18);
const HEADING_COLOR: Color = Color::srgb(0.93, 0.90, 0.98);
const ROW_TEXT_COLOR: Color = Color::srgb(0.92, 0.90, 0.96);
const INFO_TEXT_COLOR: Color = Color::srgb(0.75, 0.73, 0.82);

const COLLAPSED_GLYPH: &str = "v";
const EXPANDED_GLYPH: &str = "^";

#[derive(Component)]
pub struct RegionPanel;

#[derive(Component)]
pub struct RegionRow {
    pub id: RegionId,
}

#[derive(Component)]
pub struct RegionIndicator {
    pub id: RegionId,
}

#[derive(Component)]
pub struct RegionInfo {
    pub id: RegionId,
}

/// Build the side panel: a heading plus one collapsible entry per catalog
/// region, in catalog order.
pub fn build_region_panel(mut commands: Commands, catalog: Res<AnatomyCatalog>) {
    commands
        .spawn((
            RegionPanel,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Px(320.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                overflow: Overflow::scroll_y(),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Brain Regions"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(HEADING_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ));

            for (id, region) in catalog.iter() {
                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        ..default()
                    })
                    .with_children(|entry| {
                        entry
                            .spawn((
                                Button,
                                RegionRow { id },
                                Node {
                                    flex_direction: FlexDirection::Row,
                                    justify_content: JustifyContent::SpaceBetween,
                                    align_items: AlignItems::Center,
                                    padding: UiRect::axes(Val::Px(8.0), Val::Px(6.0)),
                                    ..default()
                                },
                                BackgroundColor(ROW_IDLE),
                            ))
                            .with_children(|row| {
                                row.spawn((
                                    Text::new(region.name.clone()),
                                    TextFont {
                                        font_size: 16.0,
                                        ..default()
                                    },
                                    TextColor(ROW_TEXT_COLOR),
                                ));
                                row.spawn((
                                    RegionIndicator { id },
                                    Text::new(COLLAPSED_GLYPH),
                                    TextFont {
                                        font_size: 14.0,
                                        ..default()
                                    },
                                    TextColor(INFO_TEXT_COLOR),
                                ));
                            });

                        entry
                            .spawn((
                                RegionInfo { id },
                                Node {
                                    display: Display::None,
                                    padding: UiRect::all(Val::Px(8.0)),
                                    ..default()
                                },
                                BackgroundColor(INFO_BACKGROUND),
                            ))
                            .with_children(|info| {
                                info.spawn((
                                    Text::new(region.info.clone()),
                                    TextFont {
                                        font_size: 13.0,
                                        ..default()
                                    },
                                    TextColor(INFO_TEXT_COLOR),
                                ));
                            });
                    });
            }
        });
}

/// Turn row presses into click events for the selection state.
pub fn region_row_interactions(
    interactions: Query<(&Interaction, &RegionRow), (Changed<Interaction>, With<Button>)>,
    mut clicks: EventWriter<RegionClicked>,
) {
    for (interaction, row) in &interactions {
        if *interaction == Interaction::Pressed {
            clicks.write(RegionClicked { id: row.id });
        }
    }
}

/// Reflect the selection state back into the panel: row highlight, expansion
/// glyph and the collapsible info block.
pub fn sync_region_panel(
    selection: Res<RegionSelection>,
    mut rows: Query<(&RegionRow, &Interaction, &mut BackgroundColor)>,
    mut indicators: Query<(&RegionIndicator, &mut Text)>,
    mut info_blocks: Query<(&RegionInfo, &mut Node)>,
) {
    for (row, interaction, mut background) in &mut rows {
        background.0 = if selection.selected == Some(row.id) {
            ROW_SELECTED
        } else if *interaction == Interaction::Hovered {
            ROW_HOVERED
        } else {
            ROW_IDLE
        };
    }

    for (indicator, mut text) in &mut indicators {
        let glyph = if selection.expanded == Some(indicator.id) {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        };
        if text.0 != glyph {
            text.0 = glyph.to_string();
        }
    }

    for (info, mut node) in &mut info_blocks {
        node.display = if selection.expanded == Some(info.id) {
            Display::Flex
        } else {
            Display::None
        };
    }
}

pub fn spawn_fps_overlay(commands: &mut Commands) {
    commands.spawn((
        FpsText,
        Text::new("FPS: "),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 0.9, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
        {
            text.0 = format!("FPS: {fps:.0}");
        }
    }
}
