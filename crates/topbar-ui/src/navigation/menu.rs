use crate::layout::AnchorRect;
use dioxus::prelude::*;
use dioxus_html::{MountedData, MountedResult};
use std::{fmt, rc::Rc};

/// A handle to the mounted element a popup menu is positioned against.
///
/// Two handles are equal if they refer to the same mounted element.
#[derive(Clone)]
pub struct AnchorElement(Rc<MountedData>);

impl AnchorElement {
    /// Creates a new instance.
    #[inline]
    pub fn new(element: Rc<MountedData>) -> Self {
        Self(element)
    }

    /// Returns the underlying mounted element.
    #[inline]
    pub fn mounted(&self) -> &MountedData {
        &self.0
    }

    /// Measures the client rect of the element.
    pub async fn measure(&self) -> MountedResult<AnchorRect> {
        let rect = self.0.get_client_rect().await?;
        Ok(rect.into())
    }
}

impl PartialEq for AnchorElement {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AnchorElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("AnchorElement")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

/// The visibility of an anchored menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    /// No anchor is set and the popup is hidden.
    Closed,
    /// An anchor is set and the popup is shown against it.
    Open,
}

/// The anchor of a popup menu: present while the menu is open.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorState<E = AnchorElement> {
    /// The element the menu is positioned against.
    anchor: Option<E>,
}

impl<E> AnchorState<E> {
    /// Creates a new instance in the closed phase.
    #[inline]
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Opens the menu against `anchor`.
    ///
    /// Activating an open menu re-anchors it and keeps it open.
    #[inline]
    pub fn activate(&mut self, anchor: E) {
        self.anchor = Some(anchor);
    }

    /// Closes the menu, returning the anchor it was open against.
    #[inline]
    pub fn dismiss(&mut self) -> Option<E> {
        self.anchor.take()
    }

    /// Returns `true` if the menu is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> MenuPhase {
        if self.is_open() {
            MenuPhase::Open
        } else {
            MenuPhase::Closed
        }
    }

    /// Returns the anchor if the menu is open.
    #[inline]
    pub fn anchor(&self) -> Option<&E> {
        self.anchor.as_ref()
    }
}

impl<E> Default for AnchorState<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// The reason a popup menu requests to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// A click outside of the menu.
    BackdropClick,
    /// The `Escape` key was pressed.
    EscapeKeyDown,
    /// The `Tab` key was pressed.
    TabKeyDown,
    /// A menu item that closes the menu was selected.
    ItemSelected,
}

impl DismissReason {
    /// Returns the reason a key press closes the menu, if any.
    #[inline]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Self::EscapeKeyDown),
            Key::Tab => Some(Self::TabKeyDown),
            _ => None,
        }
    }

    /// Returns the reason as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackdropClick => "backdropClick",
            Self::EscapeKeyDown => "escapeKeyDown",
            Self::TabKeyDown => "tabKeyDown",
            Self::ItemSelected => "itemSelected",
        }
    }
}

impl fmt::Display for DismissReason {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handle shared with the content of an [`AnchoredMenu`](super::AnchoredMenu).
#[derive(Clone, Copy, PartialEq)]
pub struct MenuHandle {
    /// The anchor state owned by the menu.
    state: Signal<AnchorState>,
}

impl MenuHandle {
    /// Creates a new instance.
    #[inline]
    pub(crate) fn new(state: Signal<AnchorState>) -> Self {
        Self { state }
    }

    /// Returns `true` if the menu is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    /// Closes the menu.
    pub fn dismiss(&self, reason: DismissReason) {
        let mut state = self.state;
        if state.write().dismiss().is_some() {
            tracing::debug!(reason = reason.as_str(), "anchored menu closed");
        }
    }
}

/// Returns the handle of the enclosing [`AnchoredMenu`](super::AnchoredMenu), if any.
#[inline]
pub fn use_menu_handle() -> Option<MenuHandle> {
    try_use_context::<MenuHandle>()
}
