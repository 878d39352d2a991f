//! Leptos Confirm Gate
//!
//! Modal yes/no prompt that guards destructive actions.
//! A caller asks with a title and message; the callback runs exactly once
//! with `true` (accepted) or `false` (declined).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Title and message shown while the gate is open
#[derive(Clone, Debug, PartialEq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Open/closed state with the pending resolver
pub struct GateState<F> {
    pending: Option<(Prompt, F)>,
}

impl<F> Default for GateState<F> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<F> GateState<F> {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.pending.as_ref().map(|(prompt, _)| prompt)
    }

    /// Open with a new prompt. Returns the displaced resolver, if any;
    /// the caller must resolve it as declined.
    pub fn open(&mut self, prompt: Prompt, on_resolve: F) -> Option<F> {
        self.pending
            .replace((prompt, on_resolve))
            .map(|(_, displaced)| displaced)
    }

    /// Close the gate, handing back the pending resolver (None if already closed)
    pub fn take(&mut self) -> Option<F> {
        self.pending.take().map(|(_, resolver)| resolver)
    }
}

type Resolver = Box<dyn FnOnce(bool) + Send + Sync>;

/// Reactive handle to a gate, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct ConfirmGate {
    state: StoredValue<GateState<Resolver>>,
    prompt: RwSignal<Option<Prompt>>,
}

pub fn create_confirm_gate() -> ConfirmGate {
    ConfirmGate {
        state: StoredValue::new(GateState::default()),
        prompt: RwSignal::new(None),
    }
}

impl ConfirmGate {
    /// Show the prompt; `on_resolve` receives the user's answer
    pub fn ask<F>(&self, title: impl Into<String>, message: impl Into<String>, on_resolve: F)
    where
        F: FnOnce(bool) + Send + Sync + 'static,
    {
        let prompt = Prompt::new(title, message);
        let displaced = self
            .state
            .try_update_value(|state| state.open(prompt.clone(), Box::new(on_resolve)))
            .flatten();
        self.prompt.set(Some(prompt));
        if let Some(previous) = displaced {
            previous(false);
        }
    }

    pub fn accept(&self) {
        self.resolve(true);
    }

    pub fn decline(&self) {
        self.resolve(false);
    }

    pub fn resolve(&self, accepted: bool) {
        let pending = self.state.try_update_value(|state| state.take()).flatten();
        self.prompt.set(None);
        // Resolver runs after the gate is closed so it may open another prompt
        if let Some(resolver) = pending {
            resolver(accepted);
        }
    }

    /// Current prompt (tracked)
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt.get()
    }

    pub fn is_open(&self) -> bool {
        self.prompt.with(Option::is_some)
    }
}

/// Decline the open prompt when Escape is pressed anywhere in the document
pub fn bind_escape_to_decline(gate: ConfirmGate) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && gate.prompt.with_untracked(Option::is_some) {
            ev.prevent_default();
            gate.decline();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Modal rendering of the gate. Backdrop click and Cancel decline.
#[component]
pub fn ConfirmDialog(
    gate: ConfirmGate,
    #[prop(into, default = "Confirm".to_string())] confirm_label: String,
    #[prop(into, default = "Cancel".to_string())] cancel_label: String,
) -> impl IntoView {
    view! {
        {move || gate.prompt().map(|prompt| {
            let confirm_label = confirm_label.clone();
            let cancel_label = cancel_label.clone();
            view! {
                <div class="confirm-backdrop" on:click=move |_| gate.decline()>
                    <div
                        class="confirm-dialog"
                        role="alertdialog"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        <h2 class="confirm-title">{prompt.title}</h2>
                        <div class="confirm-message">{prompt.message}</div>
                        <div class="confirm-actions">
                            <button class="cancel-btn" on:click=move |_| gate.decline()>
                                {cancel_label}
                            </button>
                            <button class="confirm-btn danger" autofocus=true on:click=move |_| gate.accept()>
                                {confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
