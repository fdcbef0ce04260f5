use super::{AnchorState, MenuHandle, PopupMenu, TriggerButton};
use crate::{SharedString, class::Class, layout::Placement};
use dioxus::prelude::*;

/// A button that opens a menu aligned to its top-right corner.
///
/// The menu stays open until it asks to be closed: clicking outside of it,
/// pressing `Escape` or `Tab`, or selecting a [`MenuItem`](super::MenuItem)
/// with `close_menu` set. Clicking the button again keeps the menu open.
pub fn AnchoredMenu(props: AnchoredMenuProps) -> Element {
    let state = use_signal(AnchorState::new);
    render_menu(state, props)
}

/// Renders the trigger and the popup of an [`AnchoredMenu`] owning `state`.
fn render_menu(mut state: Signal<AnchorState>, props: AnchoredMenuProps) -> Element {
    let menu = use_context_provider(|| MenuHandle::new(state));
    let anchor = state.read().anchor().cloned();
    let open = anchor.is_some();
    let id = props.id;
    let menu_id = id.clone();
    rsx! {
        TriggerButton {
            class: props.button_class,
            popup_id: open.then(|| id.clone()),
            on_activate: move |element| {
                let reanchored = state.peek().is_open();
                state.write().activate(element);
                tracing::debug!(id = %menu_id, reanchored, "anchored menu opened");
            },
            { props.button_content }
        }
        PopupMenu {
            id: id.clone(),
            class: props.class,
            paper_class: props.menu_class,
            anchor: anchor,
            anchor_origin: Placement::TOP_RIGHT.anchor_origin,
            transform_origin: Placement::TOP_RIGHT.transform_origin,
            open: open,
            on_close: move |reason| menu.dismiss(reason),
            { props.children }
        }
    }
}

/// The [`AnchoredMenu`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct AnchoredMenuProps {
    /// The `id` of the menu, shared by the trigger's `aria-owns`.
    #[props(into)]
    pub id: SharedString,
    /// The class attribute for the menu container.
    #[props(into, default = "popup-menu")]
    pub class: Class,
    /// A class to apply to the trigger button.
    #[props(into, default = "button is-inherit")]
    pub button_class: Class,
    /// A class to apply to the menu content.
    #[props(into, default = "dropdown-content")]
    pub menu_class: Class,
    /// The content of the trigger button.
    pub button_content: Element,
    /// The menu content to render within the popup.
    children: Element,
}

#[cfg(test)]
mod tests {
    use super::{render_menu, AnchoredMenu, AnchoredMenuProps};
    use crate::navigation::{
        use_menu_handle, AnchorElement, AnchorState, DismissReason, MenuHandle, MenuItem,
    };
    use dioxus::prelude::*;
    use dioxus_html::MountedData;
    use std::{cell::Cell, rc::Rc};

    thread_local! {
        static MENU_STATE: Cell<Option<Signal<AnchorState>>> = const { Cell::new(None) };
        static CONTENT_MENU: Cell<Option<MenuHandle>> = const { Cell::new(None) };
    }

    fn render(app: fn() -> Element) -> String {
        let mut vdom = VirtualDom::new(app);
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }

    fn rerender(vdom: &mut VirtualDom) -> String {
        vdom.mark_dirty(ScopeId::ROOT);
        vdom.render_immediate_to_vec();
        dioxus_ssr::render(vdom)
    }

    fn CaptureMenuHandle() -> Element {
        let menu = use_menu_handle();
        CONTENT_MENU.with(|cell| cell.set(menu));
        rsx! {}
    }

    fn account_menu() -> Element {
        let state = use_signal(AnchorState::new);
        MENU_STATE.with(|cell| cell.set(Some(state)));
        render_menu(
            state,
            AnchoredMenuProps {
                id: "account-menu".into(),
                class: "popup-menu".into(),
                button_class: "button is-inherit".into(),
                menu_class: "dropdown-content".into(),
                button_content: rsx! { span { "Account" } },
                children: rsx! {
                    CaptureMenuHandle {}
                    MenuItem { close_menu: true, "Sign out" }
                },
            },
        )
    }

    #[test]
    fn it_renders_closed() {
        fn app() -> Element {
            rsx! {
                AnchoredMenu {
                    id: "account-menu",
                    button_content: rsx! { span { "Account" } },
                    MenuItem { "Profile" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("<span>Account</span>"));
        assert!(html.contains(r#"aria-haspopup="true""#));
        assert!(html.contains(r#"class="button is-inherit""#));
        assert!(!html.contains("aria-owns"));
        assert!(!html.contains(r#"role="menu""#));
        assert!(!html.contains("Profile"));
    }

    #[test]
    fn it_accepts_empty_content() {
        fn app() -> Element {
            rsx! {
                AnchoredMenu {
                    id: "empty-menu",
                    button_content: rsx! {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("<button"));
        assert!(!html.contains(r#"id="empty-menu""#));
    }

    #[test]
    fn it_opens_and_closes_with_a_shared_id() {
        let mut vdom = VirtualDom::new(account_menu);
        vdom.rebuild_in_place();
        let html = dioxus_ssr::render(&vdom);
        assert!(!html.contains("aria-owns"));
        assert!(!html.contains(r#"id="account-menu""#));

        let mut state = MENU_STATE.with(Cell::get).expect("the menu state should be captured");
        let element = AnchorElement::new(Rc::new(MountedData::new(())));
        vdom.in_runtime(|| state.write().activate(element.clone()));
        let html = rerender(&mut vdom);
        assert!(html.contains(r#"aria-owns="account-menu""#));
        assert!(html.contains(r#"id="account-menu""#));
        assert!(html.contains(r#"role="menu""#));
        assert!(html.contains("<span>Account</span>"));
        assert!(html.contains("Sign out"));
        assert!(html.contains("visibility: hidden;"));

        vdom.in_runtime(|| {
            state.write().activate(element.clone());
            assert_eq!(state.read().anchor(), Some(&element));
        });
        let html = rerender(&mut vdom);
        assert!(html.contains(r#"aria-owns="account-menu""#));

        let menu = CONTENT_MENU
            .with(Cell::get)
            .expect("the menu content should see the menu handle");
        vdom.in_runtime(|| {
            assert!(menu.is_open());
            menu.dismiss(DismissReason::ItemSelected);
            assert!(!menu.is_open());
        });
        let html = rerender(&mut vdom);
        assert!(!html.contains("aria-owns"));
        assert!(!html.contains(r#"id="account-menu""#));
        assert!(!html.contains("Sign out"));
        assert!(html.contains("<span>Account</span>"));
    }
}
