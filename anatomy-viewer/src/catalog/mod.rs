use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog entry: its index in the ordered region list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub usize);

/// Static descriptor of one named brain area. Mirrors the JSON structure
/// exactly; never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainRegion {
    pub name: String,
    /// Display hint kept from the source data; currently unused.
    pub color: u32,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub info: String,
}

impl BrainRegion {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::from_array(self.scale)
    }
}

/// Complete anatomy catalog as a Bevy asset loaded from JSON, promoted to a
/// resource once the asset server has it.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct AnatomyCatalog {
    pub regions: Vec<BrainRegion>,
}

impl AnatomyCatalog {
    pub fn get(&self, id: RegionId) -> Option<&BrainRegion> {
        self.regions.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &BrainRegion)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(index, region)| (RegionId(index), region))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<AnatomyCatalog>>,
}

// Kick off the catalog load during startup
pub fn start_catalog_load(mut loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(constants::scene::CATALOG_PATH));
}

/// Promote the catalog asset to a resource once it is available.
pub fn poll_catalog(
    mut commands: Commands,
    loader: Res<CatalogLoader>,
    catalogs: Res<Assets<AnatomyCatalog>>,
    mut progress: ResMut<crate::engine::core::app_state::LoadingProgress>,
) {
    if progress.catalog_loaded {
        return;
    }

    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    if let Some(catalog) = catalogs.get(handle) {
        info!("Anatomy catalog loaded: {} regions", catalog.len());
        commands.insert_resource(catalog.clone());
        progress.catalog_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_catalog() -> AnatomyCatalog {
        serde_json::from_str(include_str!("../../assets/anatomy/brain_regions.json"))
            .expect("seed catalog parses")
    }

    #[test]
    fn seed_catalog_has_twelve_unique_regions() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 12);

        let mut names: Vec<&str> = catalog.regions.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12, "region names must be unique");
    }

    #[test]
    fn seed_catalog_preserves_source_order() {
        let catalog = seed_catalog();
        assert_eq!(catalog.regions[0].name, "Frontal Lobe");
        assert_eq!(catalog.regions[11].name, "Corpus Callosum");
        assert_eq!(catalog.regions[0].position(), Vec3::new(0.0, 2.5, 0.5));
    }

    #[test]
    fn lookup_by_id_is_positional() {
        let catalog = seed_catalog();
        let (id, region) = catalog.iter().nth(3).expect("fourth region");
        assert_eq!(id, RegionId(3));
        assert_eq!(catalog.get(id).expect("lookup").name, region.name);
        assert!(catalog.get(RegionId(catalog.len())).is_none());
    }
}
