use dioxus::prelude::*;

use crate::state::Message;

pub static CSS: Asset = asset!("/src/components/chat_message.css");

/// One transcript row. Reply text is split on newlines so multi-line advice
/// renders as separate lines; interpolation leaves escaping to the renderer.
#[component]
pub fn ChatMessage(message: Message) -> Element {
    let class = format!("chat-message chat-message_role_{}", message.role.as_class());

    rsx! {
        div { class: "{class}",
            for line in message.text.lines() {
                p { class: "chat-message__line", "{line}" }
            }
        }
    }
}
