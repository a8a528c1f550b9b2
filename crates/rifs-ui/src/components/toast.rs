//! Toast overlay with auto-expiry.

use crate::core::store::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
const TOAST_TTL_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    {
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        // Re-arm expiry timers whenever the queue changes; dropping the old
        // handles cancels their callbacks.
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let timers: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(TOAST_TTL_MS, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(timers)
            },
            toasts,
        );
    }

    let entries = props.toasts.iter().map(|toast| {
        let id = toast.id;
        let on_close = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |_| on_dismiss.emit(id))
        };
        html! {
            <div class={classes!("toast", kind_class(toast.kind))} role="status" key={id.to_string()}>
                <span>{toast.message.clone()}</span>
                <button class="ghost" aria-label="Close notification" onclick={on_close}>{"✕"}</button>
            </div>
        }
    });

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for entries}
        </div>
    }
}

const fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    }
}
