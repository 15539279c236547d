//! Paddle asset loading
//!
//! Texture, material and mesh load strictly in sequence, one stage per
//! `step`. Every stage is observable through `AssetPipeline::stage` and can
//! be retried on failure. The pipeline knows nothing about paddle control;
//! the host attaches a transform sink once it reaches `Ready`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Default retry budget per stage
pub const MAX_ATTEMPTS: u32 = 3;

/// Material slot the paddle texture is bound to
pub const DEFAULT_MATERIAL_SLOT: &str = "01___Default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Where the paddle's assets live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub texture: PathBuf,
    pub material: PathBuf,
    pub mesh: PathBuf,
    /// Material the texture is bound to
    pub material_slot: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            texture: PathBuf::from("assets/paddle.png"),
            material: PathBuf::from("assets/paddle.mtl"),
            mesh: PathBuf::from("assets/paddle.obj"),
            material_slot: DEFAULT_MATERIAL_SLOT.to_string(),
        }
    }
}

/// Loaded paddle resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleAsset {
    pub texture: TextureHandle,
    pub material: MaterialHandle,
    pub mesh: MeshHandle,
}

/// Loading stages that can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Texture,
    Material,
    Mesh,
}

/// Pipeline progress
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStage {
    Idle,
    LoadingTexture,
    LoadingMaterial { texture: TextureHandle },
    LoadingMesh { texture: TextureHandle, material: MaterialHandle },
    Ready(PaddleAsset),
    Failed { stage: LoadStage, reason: String },
}

/// Performs the actual loads (GPU uploads, file reads, ...)
pub trait AssetSource {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError>;

    /// Load a material library and bind `texture` to `slot`
    fn load_material(
        &mut self,
        path: &Path,
        slot: &str,
        texture: TextureHandle,
    ) -> Result<MaterialHandle, AssetError>;

    fn load_mesh(&mut self, path: &Path, material: MaterialHandle) -> Result<MeshHandle, AssetError>;
}

/// Sequential texture → material → mesh loader
#[derive(Debug)]
pub struct AssetPipeline {
    manifest: AssetManifest,
    stage: AssetStage,
    /// Stage to re-enter on retry
    resume: AssetStage,
    attempts: u32,
    max_attempts: u32,
}

impl AssetPipeline {
    pub fn new(manifest: AssetManifest) -> Self {
        Self {
            manifest,
            stage: AssetStage::Idle,
            resume: AssetStage::Idle,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn stage(&self) -> &AssetStage {
        &self.stage
    }

    pub fn asset(&self) -> Option<PaddleAsset> {
        match self.stage {
            AssetStage::Ready(asset) => Some(asset),
            _ => None,
        }
    }

    /// Attempts made on the current (or last failed) stage
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Advance by one stage. Ready and Failed are terminal until `retry`.
    pub fn step(&mut self, source: &mut dyn AssetSource) -> &AssetStage {
        let next = match &self.stage {
            AssetStage::Idle => {
                log::info!("Loading paddle texture {}", self.manifest.texture.display());
                AssetStage::LoadingTexture
            }
            AssetStage::LoadingTexture => {
                self.attempts += 1;
                match source.load_texture(&self.manifest.texture) {
                    Ok(texture) => {
                        self.attempts = 0;
                        AssetStage::LoadingMaterial { texture }
                    }
                    Err(e) => self.fail(LoadStage::Texture, e),
                }
            }
            AssetStage::LoadingMaterial { texture } => {
                let texture = *texture;
                self.attempts += 1;
                match source.load_material(&self.manifest.material, &self.manifest.material_slot, texture) {
                    Ok(material) => {
                        self.attempts = 0;
                        AssetStage::LoadingMesh { texture, material }
                    }
                    Err(e) => self.fail(LoadStage::Material, e),
                }
            }
            AssetStage::LoadingMesh { texture, material } => {
                let (texture, material) = (*texture, *material);
                self.attempts += 1;
                match source.load_mesh(&self.manifest.mesh, material) {
                    Ok(mesh) => {
                        self.attempts = 0;
                        log::info!("Paddle assets ready");
                        AssetStage::Ready(PaddleAsset { texture, material, mesh })
                    }
                    Err(e) => self.fail(LoadStage::Mesh, e),
                }
            }
            AssetStage::Ready(_) | AssetStage::Failed { .. } => return &self.stage,
        };
        self.stage = next;
        &self.stage
    }

    /// Step until Ready or Failed
    pub fn run(&mut self, source: &mut dyn AssetSource) -> &AssetStage {
        while !matches!(self.stage, AssetStage::Ready(_) | AssetStage::Failed { .. }) {
            self.step(source);
        }
        &self.stage
    }

    /// Re-enter the failed stage. Returns false when not failed or out of attempts.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.stage, AssetStage::Failed { .. }) {
            return false;
        }
        if self.attempts >= self.max_attempts {
            log::warn!("Asset retry budget exhausted after {} attempts", self.attempts);
            return false;
        }
        self.stage = self.resume.clone();
        true
    }

    fn fail(&mut self, stage: LoadStage, error: AssetError) -> AssetStage {
        log::warn!("Paddle {stage:?} load failed (attempt {}): {error}", self.attempts);
        self.resume = self.stage.clone();
        AssetStage::Failed {
            stage,
            reason: error.to_string(),
        }
    }
}

/// Loads assets from the local filesystem.
///
/// Handles are sequential ids; the loaded bytes are kept so a renderer can
/// upload them later.
#[derive(Debug, Default)]
pub struct FsAssetSource {
    next_id: u32,
    blobs: HashMap<u32, Vec<u8>>,
}

impl FsAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes behind a handle id
    pub fn bytes(&self, id: u32) -> Option<&[u8]> {
        self.blobs.get(&id).map(Vec::as_slice)
    }

    fn read(&mut self, path: &Path) -> Result<(u32, &[u8]), AssetError> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                AssetError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        log::debug!("Read {} ({} bytes)", path.display(), bytes.len());

        self.next_id += 1;
        let id = self.next_id;
        let stored = self.blobs.entry(id).or_insert(bytes);
        Ok((id, stored.as_slice()))
    }
}

impl AssetSource for FsAssetSource {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError> {
        let (id, _) = self.read(path)?;
        Ok(TextureHandle(id))
    }

    fn load_material(
        &mut self,
        path: &Path,
        slot: &str,
        _texture: TextureHandle,
    ) -> Result<MaterialHandle, AssetError> {
        let (id, bytes) = self.read(path)?;
        let text = String::from_utf8_lossy(bytes);
        let declared = text
            .lines()
            .filter_map(|line| line.trim().strip_prefix("newmtl "))
            .any(|name| name.trim() == slot);
        if !declared {
            return Err(AssetError::MaterialSlot {
                slot: slot.to_string(),
            });
        }
        Ok(MaterialHandle(id))
    }

    fn load_mesh(&mut self, path: &Path, _material: MaterialHandle) -> Result<MeshHandle, AssetError> {
        let (id, _) = self.read(path)?;
        Ok(MeshHandle(id))
    }
}
