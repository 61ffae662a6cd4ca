//! The image capability handed to the presentation layer.
//!
//! User-supplied files (wallpaper, avatars, photo bubbles) are decoded once
//! into natural dimensions plus RGBA pixels; egui textures are uploaded
//! lazily on first paint. A file that fails to decode is kept with unknown
//! dimensions and renders as a placeholder frame — never an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;

use crate::chatlog::ImageId;

struct LoadedImage {
    path: PathBuf,
    /// (0, 0) when the file could not be decoded.
    natural_size: (u32, u32),
    /// Pixels held until the texture is uploaded.
    rgba: Option<(Vec<u8>, [usize; 2])>,
    texture: Option<egui::TextureHandle>,
}

/// Owns every image the studio has loaded, keyed by the opaque ids the
/// transcript carries.
#[derive(Default)]
pub struct ImageStore {
    next_id: u64,
    images: HashMap<ImageId, LoadedImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a file and register it under a fresh id. Decode failure is
    /// non-fatal: the id is still handed out and reports unknown dimensions.
    pub fn load(&mut self, path: &Path) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.images.insert(id, decode_entry(path));
        id
    }

    /// Natural dimensions of an image; (0, 0) when unknown.
    pub fn natural_size(&self, id: ImageId) -> (u32, u32) {
        self.images.get(&id).map_or((0, 0), |img| img.natural_size)
    }

    /// The texture for an image, uploading it on first use. `None` when the
    /// image failed to decode (callers paint a placeholder instead).
    pub fn texture(&mut self, ctx: &egui::Context, id: ImageId) -> Option<egui::TextureHandle> {
        let entry = self.images.get_mut(&id)?;

        if entry.texture.is_none() {
            let (pixels, size) = entry.rgba.take()?;
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
            let name = format!("image-{}", id.0);
            entry.texture = Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR));
        }

        entry.texture.clone()
    }

    /// Source paths of every image, for the project file.
    pub fn persisted_paths(&self) -> Vec<(ImageId, PathBuf)> {
        let mut paths: Vec<_> = self
            .images
            .iter()
            .map(|(id, img)| (*id, img.path.clone()))
            .collect();
        paths.sort_by_key(|(id, _)| id.0);
        paths
    }

    /// Rebuild a store from persisted paths, keeping the original ids so the
    /// transcript's references stay valid. Files that vanished since the
    /// last run degrade to unknown dimensions.
    pub fn restore(entries: &[(ImageId, PathBuf)]) -> Self {
        let mut store = Self::new();
        for (id, path) in entries {
            store.images.insert(*id, decode_entry(path));
            store.next_id = store.next_id.max(id.0 + 1);
        }
        store
    }
}

fn decode_entry(path: &Path) -> LoadedImage {
    match image::open(path) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let (w, h) = rgba.dimensions();
            LoadedImage {
                path: path.to_path_buf(),
                natural_size: (w, h),
                rgba: Some((rgba.into_raw(), [w as usize, h as usize])),
                texture: None,
            }
        }
        Err(e) => {
            eprintln!("Failed to decode image {}: {}", path.display(), e);
            LoadedImage {
                path: path.to_path_buf(),
                natural_size: (0, 0),
                rgba: None,
                texture: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_degrades_to_unknown_size() {
        let mut store = ImageStore::new();
        let id = store.load(Path::new("/nonexistent/image.png"));
        assert_eq!(store.natural_size(id), (0, 0));
    }

    #[test]
    fn test_undecodable_file_degrades_to_unknown_size() {
        let path = std::env::temp_dir().join("chatmock-studio-not-an-image.png");
        fs::write(&path, b"definitely not pixels").unwrap();

        let mut store = ImageStore::new();
        let id = store.load(&path);
        assert_eq!(store.natural_size(id), (0, 0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_id_reports_unknown_size() {
        let store = ImageStore::new();
        assert_eq!(store.natural_size(ImageId(42)), (0, 0));
    }

    #[test]
    fn test_restore_keeps_ids_and_advances_counter() {
        let entries = vec![
            (ImageId(0), PathBuf::from("/gone/a.png")),
            (ImageId(7), PathBuf::from("/gone/b.png")),
        ];
        let mut store = ImageStore::restore(&entries);

        assert_eq!(store.persisted_paths().len(), 2);
        // New loads must not collide with restored ids.
        let fresh = store.load(Path::new("/gone/c.png"));
        assert_eq!(fresh, ImageId(8));
    }

    #[test]
    fn test_persisted_paths_sorted_by_id() {
        let entries = vec![
            (ImageId(5), PathBuf::from("/gone/b.png")),
            (ImageId(1), PathBuf::from("/gone/a.png")),
        ];
        let store = ImageStore::restore(&entries);
        let paths = store.persisted_paths();
        assert_eq!(paths[0].0, ImageId(1));
        assert_eq!(paths[1].0, ImageId(5));
    }
}
