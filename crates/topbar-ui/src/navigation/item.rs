use super::{DismissReason, use_menu_handle};
use crate::class::Class;
use dioxus::prelude::*;

/// An entry in a popup menu.
pub fn MenuItem(props: MenuItemProps) -> Element {
    let menu = use_menu_handle();
    rsx! {
        div {
            class: props.class,
            role: "menuitem",
            tabindex: "-1",
            onclick: move |event| {
                if let Some(handler) = props.on_click.as_ref() {
                    handler.call(event);
                }
                if props.close_menu {
                    if let Some(menu) = menu {
                        menu.dismiss(DismissReason::ItemSelected);
                    }
                }
            },
            { props.children }
        }
    }
}

/// The [`MenuItem`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MenuItemProps {
    /// The class attribute for the component.
    #[props(into, default = "dropdown-item")]
    pub class: Class,
    /// A flag to determine whether clicking the item closes the enclosing menu.
    #[props(default)]
    pub close_menu: bool,
    /// An event handler to be called when the item is clicked.
    pub on_click: Option<EventHandler<MouseEvent>>,
    /// The children to render within the component.
    children: Element,
}
