use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::overlay::{AssetError, AssetProvider};

/// Loads textures tied to one window's texture creator
pub struct SdlAssets<'t> {
    creator: &'t TextureCreator<WindowContext>,
}

impl<'t> SdlAssets<'t> {
    pub fn new(creator: &'t TextureCreator<WindowContext>) -> Self {
        SdlAssets { creator }
    }
}

impl<'t> AssetProvider for SdlAssets<'t> {
    type Texture = Texture<'t>;

    fn load(&mut self, path: &Path) -> Result<Self::Texture, AssetError> {
        let creator: &'t TextureCreator<WindowContext> = self.creator;
        creator.load_texture(path).map_err(|reason| AssetError::Load {
            path: path.to_path_buf(),
            reason,
        })
    }
}
