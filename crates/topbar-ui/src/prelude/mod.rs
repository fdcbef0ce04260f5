//! Re-exports of components and common types.

pub use crate::{
    SharedString,
    class::Class,
    layout::{Horizontal, Origin, Placement, Vertical},
    navigation::{
        AnchorElement, AnchoredMenu, DismissReason, MenuItem, PopupMenu, TriggerButton,
        use_menu_handle,
    },
};
