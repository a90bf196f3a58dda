use crate::app::{AppController, AppSnapshot};
use crate::types::Role;
use crate::ui::drive_chat_turn;
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn AnalystView(controller: Signal<AppController>, snapshot: Signal<AppSnapshot>) -> Element {
    let mut controller = controller;
    let mut input = use_signal(String::new);
    let (messages, pending) = {
        let snapshot = snapshot.read();
        (snapshot.chat.clone(), snapshot.chat_pending)
    };

    let mut send_message = move |text: String| {
        let turn = controller.write().begin_chat_turn(&text);
        let Some(turn) = turn else {
            return;
        };
        input.set(String::new());
        drive_chat_turn(controller, turn);
    };

    rsx! {
        div { class: "chat",
            div { class: "chat-list",
                for msg in messages.iter() {
                    div {
                        key: "{msg.id}",
                        class: format_args!("message-row {}", match msg.role { Role::User => "user", Role::Model => "model" }),
                        if matches!(msg.role, Role::Model) {
                            div { class: "bubble model", dangerous_inner_html: "{markdown_to_html(&msg.text)}" }
                        } else {
                            div { class: "bubble user", "{msg.text}" }
                        }
                    }
                }
                if pending {
                    div { class: "message-row model",
                        div { class: "bubble model pending", "Thinking…" }
                    }
                }
            }
            div { class: "composer",
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Ask about safety, ZESA, or reports...",
                    value: "{input}",
                    oninput: move |ev: FormEvent| input.set(ev.value()),
                    onkeydown: move |ev: KeyboardEvent| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            send_message(input());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: pending || input().trim().is_empty(),
                    onclick: move |_| send_message(input()),
                    "Send"
                }
            }
        }
    }
}
