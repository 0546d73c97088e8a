//! Page header with the dashboard title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Dashboard heading with an optional subtitle.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h1 {
                style: "margin: 0 0 4px 0; color: #2c3e50;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
