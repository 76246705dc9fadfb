//! Validated font data.

use std::sync::Arc;

use swash::FontRef;

/// Owned font bytes validated as a parseable face.
///
/// Construction parses the data with swash; a file that exists on disk but
/// is not a valid font face is rejected here, which lets the resolver treat
/// it exactly like a missing candidate. The `FontRef` is guaranteed valid
/// for the lifetime of this struct.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF)
    pub data: Arc<Vec<u8>>,
    /// Swash font reference for glyph coverage queries
    font_ref: FontRef<'static>,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// # Returns
    /// `Some(FontData)` if the bytes parse as a font face, `None` otherwise.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        let data_arc = Arc::new(data);

        // SAFETY: the data outlives the FontRef because both are stored in
        // this struct and dropped together; the Arc keeps the bytes alive
        // across clones.
        let font_ref = unsafe {
            let bytes = data_arc.as_slice();
            let static_bytes: &'static [u8] = std::mem::transmute(bytes);
            FontRef::from_index(static_bytes, 0)?
        };

        Some(FontData {
            data: data_arc,
            font_ref,
        })
    }

    /// Whether the face maps `character` to a real glyph.
    pub fn has_glyph(&self, character: char) -> bool {
        self.font_ref.charmap().map(character) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bytes_rejected() {
        assert!(FontData::new(vec![0u8; 100]).is_none());
    }

    #[test]
    fn empty_bytes_rejected() {
        assert!(FontData::new(Vec::new()).is_none());
    }
}
