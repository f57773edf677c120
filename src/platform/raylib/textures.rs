use std::path::Path;

use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D, Vector2};
use rustc_hash::FxHashMap;

use crate::platform::Visual;

/// A loaded image and the size it is drawn at.
pub struct TextureEntry {
    pub texture: Texture2D,
    pub size: Vector2,
}

/// Loaded textures keyed by visual.
pub struct TextureStore {
    map: FxHashMap<Visual, TextureEntry>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        visual: Visual,
        path: &Path,
        size: Vector2,
    ) -> Result<(), String> {
        let path_str = path.to_string_lossy();
        let texture = rl
            .load_texture(thread, &path_str)
            .map_err(|e| format!("Failed to load texture {:?} for {:?}: {}", path, visual, e))?;
        info!(
            "Loaded {:?} from {:?} ({}x{}, drawn at {}x{})",
            visual, path, texture.width, texture.height, size.x, size.y
        );
        self.map.insert(visual, TextureEntry { texture, size });
        Ok(())
    }

    pub fn get(&self, visual: Visual) -> Option<&TextureEntry> {
        self.map.get(&visual)
    }
}
