//! Token sign-in screen shown when the deployment requires auth.
//!
//! # Design
//! - Verify the token against the server before unlocking the app.
//! - Let the server's configured header name win over the manual one.
//! - Keep the submit control disabled while verification is in flight.

use crate::app::api::ApiCtx;
use crate::core::session::Credentials;
use rifs_api_models::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginScreenProps {
    pub on_authenticated: Callback<(Credentials, Option<Role>)>,
}

#[function_component(LoginScreen)]
pub(crate) fn login_screen(props: &LoginScreenProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let token = use_state(String::new);
    let header_name = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="auth-overlay" role="dialog" aria-modal="true">
                <div class="card">
                    <p class="error-text">{"Missing API context."}</p>
                </div>
            </div>
        };
    };

    let submit = {
        let token = token.clone();
        let header_name = header_name.clone();
        let error = error.clone();
        let busy = busy.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let value = token.trim().to_string();
            if value.is_empty() {
                error.set(Some("Access token is required".to_string()));
                return;
            }
            let fallback_header = {
                let trimmed = header_name.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            error.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_authenticated = on_authenticated.clone();
            yew::platform::spawn_local(async move {
                match client.verify_token(&value).await {
                    Ok(response) if response.success => {
                        let header = response
                            .header_name
                            .filter(|name| !name.trim().is_empty())
                            .or(fallback_header);
                        on_authenticated.emit((Credentials::new(value, header), response.role));
                    }
                    Ok(response) => {
                        let message = if response.message.is_empty() {
                            "Token was rejected".to_string()
                        } else {
                            response.message
                        };
                        error.set(Some(message));
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                token.set(input.value());
            }
        })
    };

    let on_header_input = {
        let header_name = header_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                header_name.set(input.value());
            }
        })
    };

    html! {
        <div class="auth-overlay" role="dialog" aria-modal="true">
            <div class="card">
                <header>
                    <h3>{"Sign in"}</h3>
                </header>
                <p class="muted">
                    {"This server requires an access token."}
                </p>
                <label class="stack">
                    <span>{"Access token"}</span>
                    <input
                        type="password"
                        placeholder="Paste your token"
                        value={(*token).clone()}
                        oninput={on_token_input}
                    />
                </label>
                <details class="advanced" open={false}>
                    <summary>{"Advanced"}</summary>
                    <label class="stack">
                        <span>{"Header name"}</span>
                        <input
                            type="text"
                            placeholder="Authorization"
                            value={(*header_name).clone()}
                            oninput={on_header_input}
                        />
                    </label>
                </details>
                {if let Some(err) = error.as_ref() {
                    html! { <p class="error-text">{err.clone()}</p> }
                } else { html! {} }}
                <div class="actions">
                    <button class="solid" onclick={submit} disabled={*busy}>
                        {if *busy { "Verifying…" } else { "Sign in" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
