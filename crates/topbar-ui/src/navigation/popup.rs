use super::{AnchorElement, DismissReason};
use crate::{
    SharedString,
    class::Class,
    layout::{AnchorRect, Origin, Placement, PopupPosition},
};
use dioxus::prelude::*;

/// A floating menu positioned against an anchor element.
///
/// Nothing is rendered while the menu is closed. When it is open, the menu
/// covers the viewport with a transparent backdrop and asks to be closed via
/// `on_close` when the backdrop is clicked or `Escape`/`Tab` is pressed.
pub fn PopupMenu(props: PopupMenuProps) -> Element {
    let anchor = props.anchor.clone();
    let open = props.open;
    let anchor_rect = use_resource(use_reactive!(|(anchor, open)| async move {
        let anchor = anchor.filter(|_| open)?;
        match anchor.measure().await {
            Ok(rect) => Some(rect),
            Err(err) => {
                tracing::error!("fail to measure the anchor element: {err}");
                None
            }
        }
    }));
    if !props.open {
        return rsx! {};
    }

    let style = paper_style(
        Placement::new(props.anchor_origin, props.transform_origin),
        props.anchor.is_some(),
        *anchor_rect.read(),
    );
    let on_close = props.on_close;
    rsx! {
        div {
            id: "{props.id}",
            class: props.class,
            role: "presentation",
            div {
                class: props.backdrop_class,
                position: "fixed",
                top: "0",
                right: "0",
                bottom: "0",
                left: "0",
                z_index: 1300,
                "aria-hidden": "true",
                onclick: move |_event| {
                    on_close.call(DismissReason::BackdropClick);
                }
            }
            div {
                class: props.paper_class,
                role: "menu",
                tabindex: "-1",
                style: "position: fixed; z-index: 1301; {style}",
                onmounted: move |event| {
                    spawn(async move {
                        if let Err(err) = event.data.set_focus(true).await {
                            tracing::error!("fail to focus on the popup menu: {err}");
                        }
                    });
                },
                onkeydown: move |event| {
                    if let Some(reason) = DismissReason::from_key(&event.key()) {
                        if reason == DismissReason::TabKeyDown {
                            event.prevent_default();
                        } else {
                            event.stop_propagation();
                        }
                        on_close.call(reason);
                    }
                },
                { props.children }
            }
        }
    }
}

/// Returns the inline style of the menu paper.
///
/// The paper stays hidden only while its anchor is being measured. Without an
/// anchor, or when the measurement fails, it is shown unpositioned.
fn paper_style(
    placement: Placement,
    anchored: bool,
    measured: Option<Option<AnchorRect>>,
) -> String {
    match measured {
        _ if !anchored => String::new(),
        Some(Some(rect)) => placement.resolve(rect).to_style(),
        Some(None) => String::new(),
        None => PopupPosition::UNMEASURED_STYLE.to_owned(),
    }
}

/// The [`PopupMenu`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct PopupMenuProps {
    /// The `id` of the menu, referenced by the trigger's `aria-owns`.
    #[props(into)]
    pub id: SharedString,
    /// The class attribute for the component.
    #[props(into, default = "popup-menu")]
    pub class: Class,
    /// A class to apply to the backdrop.
    #[props(into, default = "popup-menu-backdrop")]
    pub backdrop_class: Class,
    /// A class to apply to the menu paper.
    #[props(into, default = "dropdown-content")]
    pub paper_class: Class,
    /// The element the menu is positioned against.
    #[props(default)]
    pub anchor: Option<AnchorElement>,
    /// The point on the anchor the menu attaches to.
    #[props(default = Origin::TOP_RIGHT)]
    pub anchor_origin: Origin,
    /// The point on the menu that attaches to the anchor.
    #[props(default = Origin::TOP_RIGHT)]
    pub transform_origin: Origin,
    /// A flag to determine whether the menu is shown or not.
    #[props(default)]
    pub open: bool,
    /// An event handler to be called when the menu asks to be closed.
    pub on_close: EventHandler<DismissReason>,
    /// The children to render within the component.
    children: Element,
}
