//! Geometry for positioning floating elements.

mod placement;

pub use placement::{AnchorRect, Horizontal, Origin, Placement, PopupPosition, Vertical};
