use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Link,
    Danger,
}

/// Button with an optional handler.
///
/// Create Tenant, Edit and Delete pass no `onclick`: they render as controls
/// but stay inert until tenant management is backed by the admin API.
#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let disabled = disabled.unwrap_or(false);

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Link => "c-button--link",
        ButtonVariant::Danger => "c-button--danger",
    };

    rsx! {
        button {
            r#type: "button",
            class: "c-button {variant_class}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inert_danger() -> Element {
        rsx! { Button { variant: ButtonVariant::Danger, "Delete" } }
    }

    #[test]
    fn test_button_without_handler_renders_enabled() {
        let mut dom = VirtualDom::new(inert_danger);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("c-button c-button--danger"));
        assert!(html.contains("type=\"button\""));
        assert!(!html.contains("disabled=true"));
        assert!(html.contains("Delete"));
    }
}
