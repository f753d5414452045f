use serde::{Deserialize, Serialize};

use crate::foundation::error::{AdcraftError, AdcraftResult};

/// Kind of an imported media asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

impl MediaKind {
    /// Classify a MIME type. Anything that is not `image/*` is treated as video.
    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().to_ascii_lowercase().starts_with("image/") {
            Self::Image
        } else {
            Self::Video
        }
    }
}

/// Media handed over by the import collaborator once it has been read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Unique id assigned by the importer.
    pub id: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Location the renderer loads from (usually a data URI).
    pub url: String,
    /// Original file name.
    pub name: String,
}

/// Imported media plus the current selection.
#[derive(Clone, Debug, Default)]
pub struct MediaLibrary {
    items: Vec<MediaAsset>,
    selected: Option<String>,
}

impl MediaLibrary {
    /// Add an asset. Ids must be unique.
    pub fn import(&mut self, asset: MediaAsset) -> AdcraftResult<()> {
        if asset.id.trim().is_empty() {
            return Err(AdcraftError::validation("media id must be non-empty"));
        }
        if self.items.iter().any(|m| m.id == asset.id) {
            return Err(AdcraftError::validation(format!(
                "duplicate media id '{}'",
                asset.id
            )));
        }
        self.items.push(asset);
        Ok(())
    }

    /// Remove an asset, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: &str) -> AdcraftResult<MediaAsset> {
        let idx = self
            .items
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AdcraftError::UnknownMedia(id.to_owned()))?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(self.items.remove(idx))
    }

    /// Select an imported asset as the creative's media layer.
    pub fn select(&mut self, id: &str) -> AdcraftResult<()> {
        if !self.items.iter().any(|m| m.id == id) {
            return Err(AdcraftError::UnknownMedia(id.to_owned()));
        }
        self.selected = Some(id.to_owned());
        Ok(())
    }

    /// Drop the selection; imported assets stay.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently selected asset.
    pub fn selected(&self) -> Option<&MediaAsset> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|m| m.id == id)
    }

    /// All imported assets in import order.
    pub fn items(&self) -> &[MediaAsset] {
        &self.items
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/media.rs"]
mod tests;
