use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::ChatMessage;
use crate::api;
use crate::state::{Message, Role, SendPhase};

pub static CSS: Asset = asset!("/src/components/chat.css");

/// Shown in place of a reply when the relay call fails.
static FALLBACK_REPLY: &str =
    "I'm currently unable to access environmental advice. Please try again later.";

/// Upper bound for the auto-growing input, in rows.
const MAX_INPUT_ROWS: usize = 8;

/// The textarea grows with its content instead of scrolling.
fn input_rows(input: &str) -> usize {
    (input.matches('\n').count() + 1).min(MAX_INPUT_ROWS)
}

#[component]
pub fn Chat() -> Element {
    let mut input = use_signal(String::new);
    let mut messages = use_signal(Vec::<Message>::new);
    let mut phase = use_signal(|| SendPhase::Idle);

    let handle_send = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while let Some(_) = rx.next().await {
            // Reject overlapping submissions so replies land in order.
            if *phase.read() == SendPhase::Pending {
                continue;
            }
            // Empty or whitespace-only input is a no-op, not an error.
            let prompt = match advisor_dto::validate_prompt(&input.read()) {
                Ok(prompt) => prompt.to_string(),
                Err(_) => continue,
            };

            messages.with_mut(|m| {
                m.push(Message {
                    role: Role::User,
                    text: prompt.clone(),
                })
            });
            input.set(String::new());
            phase.set(SendPhase::Pending);

            let reply = match api::send_prompt(&prompt).await {
                Ok(reply) => reply,
                Err(error) => {
                    error!("Chat relay error: {}", error);
                    FALLBACK_REPLY.to_string()
                }
            };
            messages.with_mut(|m| {
                m.push(Message {
                    role: Role::Bot,
                    text: reply,
                })
            });
            phase.set(SendPhase::Idle);
        }
    });

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().shift() {
            evt.prevent_default();
            handle_send.send(());
        }
    };

    let pending = *phase.read() == SendPhase::Pending;
    let rows = input_rows(&input.read());
    let transcript: Vec<(usize, Message)> = messages.read().iter().cloned().enumerate().collect();

    rsx! {
        div { class: "chat",
            div { class: "chat__history",
                // Newest entries first in the DOM; the column-reverse layout
                // keeps them pinned to the bottom of the viewport.
                if pending {
                    div { class: "chat-message chat-message_role_bot chat-message_thinking",
                        span { class: "chat-message__spinner" }
                        "Analyzing..."
                    }
                }
                for (i, message) in transcript.into_iter().rev() {
                    ChatMessage { key: "{i}", message }
                }
            }
            div { class: "chat__input",
                textarea {
                    class: "chat__input-field",
                    placeholder: "Ask for eco-friendly advice...",
                    rows: "{rows}",
                    value: "{input}",
                    disabled: pending,
                    onkeydown: handle_keydown,
                    oninput: move |evt| input.set(evt.value().clone()),
                }
                button {
                    class: "chat__send-button",
                    disabled: pending || input.read().trim().is_empty(),
                    onclick: move |_| handle_send.send(()),
                    "Send"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{input_rows, MAX_INPUT_ROWS};

    #[test]
    fn single_line_input_stays_one_row() {
        assert_eq!(input_rows("hello"), 1);
    }

    #[test]
    fn rows_follow_newlines() {
        assert_eq!(input_rows("one\ntwo\nthree"), 3);
    }

    #[test]
    fn rows_are_clamped() {
        assert_eq!(input_rows(&"\n".repeat(40)), MAX_INPUT_ROWS);
    }
}
