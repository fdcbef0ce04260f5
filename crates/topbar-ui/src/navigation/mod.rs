//! Trigger buttons and popup menus.

mod anchored;
mod item;
mod menu;
mod popup;
mod trigger;

pub use anchored::{AnchoredMenu, AnchoredMenuProps};
pub use item::{MenuItem, MenuItemProps};
pub use menu::{
    AnchorElement, AnchorState, DismissReason, MenuHandle, MenuPhase, use_menu_handle,
};
pub use popup::{PopupMenu, PopupMenuProps};
pub use trigger::{TriggerButton, TriggerButtonProps};
