use crate::feed::CatImage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CatsIntent {
    /// A fetch has started. Always precedes `Loaded` or `Failed`.
    Loading,
    /// The feed answered. Replaces the entity list wholesale.
    Loaded { images: Vec<CatImage> },
    /// The fetch ended without a usable payload.
    Failed { reason: String },
}

impl Intent for CatsIntent {}
