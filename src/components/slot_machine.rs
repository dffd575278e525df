use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SlotConfig;
use crate::slots::{SpinController, SpinState, TaskScheduler};
use crate::utils::clipboard::copy_text;

/// Element the temporary copy input is attached to
const COPY_HOST_ID: &str = "emoji-slot";

/// Label state of the copy button
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum CopyStatus {
    #[default]
    Ready,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CopyStatus::Ready => "Copy to Clipboard 📋",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Couldn't copy 😢",
        }
    }
}

/// Join the shown symbols in slot order, no separator
pub fn emoji_string(symbols: &[String]) -> String {
    symbols.concat()
}

/// Row of emoji reels with a start/stop button and a copy button
#[component]
pub fn SlotMachine(config: SlotConfig) -> Element {
    let reels = use_signal(|| config.initial_symbols());
    let mut spin_state = use_signal(SpinState::default);
    let mut italic = use_signal(|| false);
    // None until the first toggle creates the copy button
    let mut copy_status = use_signal(|| None::<CopyStatus>);

    let controller = use_hook(|| {
        Rc::new(RefCell::new(SpinController::new(&config, reels, TaskScheduler)))
    });

    let toggle = use_callback(move |_: ()| {
        let state = controller.borrow_mut().toggle();
        spin_state.set(state);
        italic.set(!italic());
        copy_status.set(Some(CopyStatus::Ready));
    });

    let copy = use_callback(move |_: ()| {
        let text = emoji_string(&reels.read()[..]);
        spawn(async move {
            match copy_text(&text, COPY_HOST_ID).await {
                Ok(()) => {
                    log::info!("Copied {} to clipboard", text);
                    copy_status.set(Some(CopyStatus::Copied));
                }
                Err(e) => {
                    log::error!("Failed to copy to clipboard: {:?}", e);
                    copy_status.set(Some(CopyStatus::Failed));
                }
            }
        });
    });

    let label = spin_state().button_label();
    let button_class = if italic() {
        "px-6 py-3 rounded-lg bg-primary text-primary-foreground font-bold italic transition"
    } else {
        "px-6 py-3 rounded-lg bg-primary text-primary-foreground font-bold transition"
    };

    rsx! {
        div {
            id: "emoji-slot",
            class: "flex flex-col items-center gap-6 p-8",

            // Reels
            div {
                id: "slot-row",
                class: "flex gap-4 text-6xl select-none",
                for (i, symbol) in reels.read().iter().enumerate() {
                    span {
                        key: "{i}",
                        class: "slot",
                        "{symbol}"
                    }
                }
            }

            button {
                id: "slot-button",
                class: "{button_class}",
                onclick: move |_| toggle.call(()),
                // Stop double-tap zoom on mobile
                ontouchend: move |evt| {
                    evt.prevent_default();
                    toggle.call(());
                },
                "{label}"
            }

            div {
                id: "clipboard-button-flex",
                class: "flex justify-center",
                if let Some(status) = copy_status() {
                    button {
                        id: "copy-to-clipboard-btn",
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        onclick: move |_| copy.call(()),
                        ontouchend: move |evt| {
                            evt.prevent_default();
                            copy.call(());
                        },
                        {status.label()}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_string_has_no_separator() {
        let shown = vec!["💖".to_string(), "🌈".to_string()];
        assert_eq!(emoji_string(&shown), "💖🌈");
        assert_eq!(emoji_string(&[]), "");
    }

    #[test]
    fn test_copy_labels() {
        assert_eq!(CopyStatus::default().label(), "Copy to Clipboard 📋");
        assert_eq!(CopyStatus::Copied.label(), "Copied!");
        assert_eq!(CopyStatus::Failed.label(), "Couldn't copy 😢");
    }
}
