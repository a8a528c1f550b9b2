//! Settings screen for the API server URL.

use crate::app::preferences::{api_base_url, clear_base_url, persist_base_url};
use crate::features::settings::logic::{DEFAULT_BASE_URL, normalize_base_url};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let url = use_state(api_base_url);
    let error = use_state(|| None as Option<String>);
    let saved = use_state(|| false);
    let saved_timer = use_mut_ref(|| None as Option<Timeout>);

    let on_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                url.set(input.value());
            }
        })
    };

    let on_save = {
        let url = url.clone();
        let error = error.clone();
        let saved = saved.clone();
        let saved_timer = saved_timer.clone();
        Callback::from(move |_| match normalize_base_url(&url) {
            Ok(value) => {
                persist_base_url(&value);
                url.set(value);
                error.set(None);
                saved.set(true);
                let saved = saved.clone();
                *saved_timer.borrow_mut() = Some(Timeout::new(2000, move || saved.set(false)));
            }
            Err(message) => {
                error.set(Some(message));
                saved.set(false);
            }
        })
    };

    let on_reset = {
        let url = url.clone();
        let error = error.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            clear_base_url();
            url.set(api_base_url());
            error.set(None);
            saved.set(false);
        })
    };

    html! {
        <section class="settings-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="eyebrow">{"Client"}</p>
                        <h3>{"Settings"}</h3>
                        <p class="muted">{"Pick the server this client talks to."}</p>
                    </div>
                    {if *saved {
                        html! { <span class="pill subtle">{"Saved"}</span> }
                    } else {
                        html! {}
                    }}
                </div>
                <div class="stacked">
                    <label class="stack">
                        <span>{"Server URL"}</span>
                        <input
                            type="text"
                            placeholder={DEFAULT_BASE_URL}
                            value={(*url).clone()}
                            oninput={on_input}
                        />
                    </label>
                    {if let Some(message) = error.as_ref() {
                        html! { <p class="error-text">{message.clone()}</p> }
                    } else {
                        html! {}
                    }}
                    <p class="muted">{"Changes apply after the app is reloaded."}</p>
                    <div class="actions">
                        <button class="btn btn-ghost btn-sm" onclick={on_reset}>{"Reset"}</button>
                        <button class="btn btn-primary btn-sm" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
