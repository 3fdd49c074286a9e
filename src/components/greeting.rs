use dioxus::prelude::*;

use crate::context::use_content;

/// Page header with the recipient's name and the opening line.
#[component]
pub fn GreetingHeader() -> Element {
    let content = use_content();
    let name = content.greeting.name.clone();
    let message = content.greeting.message.clone();

    rsx! {
        header { class: "greeting",
            h1 { class: "greeting-name", "{name}" }
            p { class: "greeting-message", "{message}" }
        }
    }
}
