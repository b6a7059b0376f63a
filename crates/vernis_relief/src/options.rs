//! Render options.

use vernis_carton::{bitflags, CompactString};

bitflags! {
    /// Output switches for the server renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        /// Emit `data-slot` attributes naming each wrapper part
        const DATA_SLOT = 1 << 0;
        /// Emit `<!--DisplayName-->` before each rendered component
        const DEBUG_NAMES = 1 << 1;
    }
}

/// Options for a single render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub flags: RenderFlags,
    /// Seed mixed into generated element ids
    pub id_seed: CompactString,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            flags: RenderFlags::DATA_SLOT,
            id_seed: CompactString::from("vernis"),
        }
    }
}

impl RenderOptions {
    /// Options with a specific id seed, so two widgets on one page get distinct ids.
    pub fn with_seed(seed: &str) -> Self {
        Self {
            id_seed: seed.into(),
            ..Self::default()
        }
    }
}
