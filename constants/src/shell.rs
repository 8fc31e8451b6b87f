use bevy::prelude::*;
use bevy::render::render_resource::ShaderType;

/// Uniform block for the translucent shell material. Everything except `time`
/// is constant for a session; `time` is pushed by the render loop each frame.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct ShellPulseSettings {
    pub base_color: Vec4,
    pub band_color: Vec4,
    pub rim_color: Vec4,
    pub time: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,
    pub band_frequency: f32,
    pub band_speed: f32,
    pub band_edge_min: f32,
    pub band_edge_max: f32,
    pub alpha: f32,
}

pub const SHELL_PULSE_SETTINGS: ShellPulseSettings = ShellPulseSettings {
    base_color: Vec4::new(0.04, 0.03, 0.08, 1.0),
    band_color: Vec4::new(0.30, 0.22, 0.45, 1.0),
    rim_color: Vec4::new(0.45, 0.35, 0.65, 1.0),
    time: 0.0,
    pulse_amplitude: 0.02,
    pulse_frequency: 3.0,
    band_frequency: 20.0,
    band_speed: 0.3,
    band_edge_min: 0.8,
    band_edge_max: 1.0,
    // Fixed translucency; the shell never varies with view or depth.
    alpha: 0.3,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_translucency_is_fixed() {
        assert_eq!(SHELL_PULSE_SETTINGS.alpha, 0.3);
        // Band sharpening window matches the smooth threshold in the shader.
        assert!(SHELL_PULSE_SETTINGS.band_edge_min < SHELL_PULSE_SETTINGS.band_edge_max);
        assert_eq!(SHELL_PULSE_SETTINGS.band_edge_max, 1.0);
    }
}
