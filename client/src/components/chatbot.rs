//! Floating chat widget: toggle button, message list and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the end of `<body>` on the static portfolio page. Renders
//! from a single `RwSignal<ChatbotState>`; every DOM event is translated into
//! one controller transition. Replies come from `net::chat_api::exchange`,
//! which resolves static-mode turns locally and remote turns over HTTP.

use leptos::prelude::*;
use responder::widget::{self, TextareaSize};

use crate::net::chat_api;
use crate::state::chatbot::{ChatMessage, ChatbotState, MessageKind};
use crate::util::browser;
use crate::util::markdown::render_markdown_html;

/// The chat widget root.
#[component]
pub fn Chatbot() -> impl IntoView {
    let state = RwSignal::new(ChatbotState::new(browser::detect_mode()));
    let input = RwSignal::new(String::new());
    let size = RwSignal::new(widget::textarea_size(0));
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        state.with(|s| {
            let _ = s.messages().len();
            let _ = s.is_loading();
        });

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        if state.with(ChatbotState::is_open) {
            #[cfg(feature = "csr")]
            {
                if let Some(el) = textarea_ref.get() {
                    let _ = el.focus();
                }
            }
        }
    });

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(run_auto_open(state));

    let do_send = move || {
        let text = input.get_untracked();
        let Some(turn) = state.try_update(|s| s.begin_send(&text)).flatten() else {
            return;
        };
        input.set(String::new());
        size.set(widget::textarea_size(0));

        leptos::task::spawn_local(async move {
            match chat_api::exchange(turn).await {
                Ok(reply) => {
                    state.try_update(|s| s.receive(reply));
                }
                Err(failure) => {
                    #[cfg(feature = "csr")]
                    log::error!("Chatbot error: {failure}");
                    state.try_update(|s| s.fail(&failure));
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        input.set(event_target_value(&ev));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = textarea_ref.get() {
                // Collapse to the base height so scrollHeight reflects content.
                // `ElementExt::style` from the prelude shadows the DOM getter.
                let _ = web_sys::HtmlElement::style(&el)
                    .set_property("height", &widget::css_px(widget::TEXTAREA_MIN_HEIGHT));
                size.set(widget::textarea_size(el.scroll_height()));
            }
        }
    };

    let is_open = move || state.with(ChatbotState::is_open);
    let is_loading = move || state.with(ChatbotState::is_loading);

    view! {
        <div class="chatbot-container" id=browser::CONTAINER_ID>
            <button
                class="chatbot-toggle"
                id="chatbot-toggle"
                class:open=is_open
                class:pulse=move || state.with(ChatbotState::is_pulsing)
                on:click=move |_| state.update(ChatbotState::toggle)
                aria-label="Toggle chat"
            >
                <i class="fas fa-comments"></i>
                <i class="fas fa-times"></i>
            </button>

            <div class="chatbot-window" id="chatbot-window" class:open=is_open>
                <div class="chatbot-header">
                    <h3>"Chat with Miguel's AI Assistant"</h3>
                    <p>"Ask me about Miguel's skills and projects!"</p>
                    <button class="chatbot-close" on:click=move |_| state.update(ChatbotState::close)>
                        "×"
                    </button>
                </div>

                <div class="chatbot-messages" node_ref=messages_ref>
                    {move || state.with(|s| s.messages().iter().map(render_message).collect_view())}
                    {move || {
                        is_loading()
                            .then(|| {
                                view! {
                                    <div class="message bot typing">
                                        <div class="typing-indicator">
                                            <div class="typing-dot"></div>
                                            <div class="typing-dot"></div>
                                            <div class="typing-dot"></div>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="chatbot-input">
                    <div class="input-container">
                        <textarea
                            id="chatbot-textarea"
                            placeholder="Type your message here..."
                            rows="1"
                            node_ref=textarea_ref
                            style:height=move || widget::css_px(size.get().height_px)
                            style:overflow-y=move || overflow_y(size.get())
                            prop:value=move || input.get()
                            on:input=on_input
                            on:keydown=on_keydown
                        ></textarea>
                        <button class="send-button" id="send-button" on:click=move |_| do_send() disabled=is_loading>
                            <i class="fas fa-paper-plane"></i>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_message(msg: &ChatMessage) -> AnyView {
    let content = msg.content.clone();
    match msg.kind {
        MessageKind::Bot => {
            let rendered = render_markdown_html(&content);
            view! { <div class="message bot" inner_html=rendered></div> }.into_any()
        }
        MessageKind::User => view! { <div class="message user">{content}</div> }.into_any(),
        MessageKind::Error => view! { <div class="error-message">{content}</div> }.into_any(),
    }
}

fn overflow_y(size: TextareaSize) -> &'static str {
    if size.scrollable { "auto" } else { "hidden" }
}

/// Pulse, open, then close the widget on the attention schedule. Each step is
/// skipped if the visitor got there first.
#[cfg(feature = "csr")]
async fn run_auto_open(state: RwSignal<ChatbotState>) {
    use gloo_timers::future::sleep;
    use responder::widget::AutoOpenSchedule;

    let schedule = AutoOpenSchedule::for_viewport(browser::viewport_width().unwrap_or(f64::MAX));
    sleep(schedule.start_after).await;

    sleep(schedule.pulse_after).await;
    state.try_update(ChatbotState::start_pulse);

    sleep(schedule.open_after.saturating_sub(schedule.pulse_after)).await;
    if !state.try_update(ChatbotState::auto_open).unwrap_or(false) {
        return;
    }

    sleep(schedule.close_after).await;
    state.try_update(ChatbotState::auto_close);
}
