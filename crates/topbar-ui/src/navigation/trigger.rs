use super::AnchorElement;
use crate::{SharedString, class::Class};
use dioxus::prelude::*;

/// A button that opens a popup menu anchored to itself.
pub fn TriggerButton(props: TriggerButtonProps) -> Element {
    let mut element = use_signal(|| None::<AnchorElement>);
    rsx! {
        button {
            r#type: "button",
            class: props.class,
            color: "inherit",
            "aria-haspopup": "true",
            "aria-owns": props.popup_id.map(|id| id.into_owned()),
            onmounted: move |event| {
                element.set(Some(AnchorElement::new(event.data())));
            },
            onclick: move |event| {
                event.stop_propagation();
                match element() {
                    Some(anchor) => props.on_activate.call(anchor),
                    None => tracing::warn!("the trigger button is clicked before being mounted"),
                }
            },
            ..props.attributes,
            { props.children }
        }
    }
}

/// The [`TriggerButton`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct TriggerButtonProps {
    /// The class attribute for the component.
    #[props(into, default = "button is-inherit")]
    pub class: Class,
    /// The `id` of the popup owned by the button while it is shown.
    #[props(into, default)]
    pub popup_id: Option<SharedString>,
    /// An event handler to be called with the button element when it is clicked.
    pub on_activate: EventHandler<AnchorElement>,
    /// Spreading the props of the `button` element.
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    /// The children to render within the component.
    children: Element,
}
