/// Translucent pulsing shell material for the brain mesh
use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};

use constants::shell::{SHELL_PULSE_SETTINGS, ShellPulseSettings};

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct BrainShellMaterial {
    #[uniform(0)]
    pub shell: ShellPulseSettings,
}

impl Default for BrainShellMaterial {
    fn default() -> Self {
        Self {
            shell: SHELL_PULSE_SETTINGS,
        }
    }
}

/// The single shared material instance applied to every shell surface.
#[derive(Resource)]
pub struct ShellMaterial {
    pub handle: Handle<BrainShellMaterial>,
}

pub fn create_shell_material(
    mut commands: Commands,
    mut materials: ResMut<Assets<BrainShellMaterial>>,
) {
    let handle = materials.add(BrainShellMaterial::default());
    commands.insert_resource(ShellMaterial { handle });
}

impl Material for BrainShellMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/brain_shell.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/brain_shell.wgsl".into()
    }

    // Blended and excluded from the depth buffer so internal structure stays
    // visible through the outer surface.
    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_NORMAL.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}

/// Push the elapsed-time uniform into every live shell material each frame.
pub fn update_shell_time(time: Res<Time>, mut materials: ResMut<Assets<BrainShellMaterial>>) {
    for (_, material) in materials.iter_mut() {
        material.shell.time = time.elapsed_secs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_uses_session_constants() {
        let material = BrainShellMaterial::default();
        assert_eq!(material.shell.alpha, 0.3);
        assert_eq!(material.shell.pulse_amplitude, 0.02);
        assert_eq!(material.shell.time, 0.0);
    }
}
