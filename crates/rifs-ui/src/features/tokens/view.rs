//! Token administration screen: listing, minting, and revocation.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::components::atoms::EmptyState;
use crate::core::logic::{format_size, format_timestamp};
use crate::core::store::{ToastKind, app_dispatch, push_toast};
use crate::features::tokens::api::{create_token, delete_token, fetch_tokens};
use crate::features::tokens::state::TokenFormState;
use crate::services::api::ApiClient;
use crate::services::clipboard::copy_text;
use gloo::dialogs::confirm;
use rifs_api_models::{CreatedToken, TokenPage, TokenRecord};
use yew::prelude::*;

#[function_component(TokensPage)]
pub(crate) fn tokens_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let page = use_state(|| None as Option<TokenPage>);
    let form = use_state(TokenFormState::default);
    let form_error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let minted = use_state(|| None as Option<CreatedToken>);
    let revealed = use_state(|| false);

    {
        let api_ctx = api_ctx.clone();
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    reload(&client, &page).await;
                });
                || ()
            },
            (),
        );
    }

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.name = input.value();
                form.set(next);
            }
        })
    };

    let on_role_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.role = select.value();
                form.set(next);
            }
        })
    };

    let on_quota_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.max_upload_size = input.value();
                form.set(next);
            }
        })
    };

    let on_create = {
        let api_ctx = api_ctx.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let busy = busy.clone();
        let page = page.clone();
        let minted = minted.clone();
        let revealed = revealed.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let form = form.clone();
            let busy = busy.clone();
            let page = page.clone();
            let minted = minted.clone();
            let revealed = revealed.clone();
            yew::platform::spawn_local(async move {
                match create_token(&client, &request).await {
                    Ok(created) => {
                        app_dispatch().reduce_mut(|store| {
                            push_toast(
                                store,
                                ToastKind::Success,
                                format!("Token \"{}\" created", created.token.name),
                            );
                        });
                        revealed.set(false);
                        minted.set(Some(created));
                        form.set(TokenFormState::default());
                        reload(&client, &page).await;
                    }
                    Err(err) => {
                        app_dispatch().reduce_mut(|store| {
                            push_toast(
                                store,
                                ToastKind::Error,
                                format!("Could not create token: {err}"),
                            );
                        });
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let api_ctx = api_ctx.clone();
        let busy = busy.clone();
        let page = page.clone();
        Callback::from(move |(id, name): (i64, String)| {
            if *busy {
                return;
            }
            if !confirm(&format!(
                "Revoke the token \"{name}\"? Clients using it will lose access."
            )) {
                return;
            }
            busy.set(true);
            let client = api_ctx.client.clone();
            let busy = busy.clone();
            let page = page.clone();
            yew::platform::spawn_local(async move {
                match delete_token(&client, id).await {
                    Ok(()) => {
                        app_dispatch().reduce_mut(|store| {
                            push_toast(store, ToastKind::Info, format!("Token \"{name}\" revoked"));
                        });
                        reload(&client, &page).await;
                    }
                    Err(err) => {
                        app_dispatch().reduce_mut(|store| {
                            push_toast(
                                store,
                                ToastKind::Error,
                                format!("Could not revoke token: {err}"),
                            );
                        });
                    }
                }
                busy.set(false);
            });
        })
    };

    let issued = page
        .as_ref()
        .map(|listing| format!("{} issued", listing.total));

    html! {
        <section class="tokens-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="eyebrow">{"Access"}</p>
                        <h3>{"Tokens"}</h3>
                        <p class="muted">{"Bearer tokens clients use against the API."}</p>
                    </div>
                    {if let Some(issued) = issued {
                        html! { <span class="pill subtle">{issued}</span> }
                    } else {
                        html! {}
                    }}
                </div>
                <div class="panel-subhead">
                    <h4>{"Mint a token"}</h4>
                </div>
                <div class="stacked">
                    <div class="field-row">
                        <label class="stack">
                            <span>{"Name"}</span>
                            <input
                                type="text"
                                placeholder="ci uploader"
                                value={form.name.clone()}
                                oninput={on_name_input}
                                disabled={*busy}
                            />
                        </label>
                        <label class="stack">
                            <span>{"Role"}</span>
                            <select onchange={on_role_change} disabled={*busy}>
                                <option value="user" selected={form.role == "user"}>{"User"}</option>
                                <option value="admin" selected={form.role == "admin"}>{"Admin"}</option>
                            </select>
                        </label>
                        <label class="stack">
                            <span>{"Upload quota (bytes)"}</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="unlimited"
                                value={form.max_upload_size.clone()}
                                oninput={on_quota_input}
                                disabled={*busy}
                            />
                        </label>
                    </div>
                    {if let Some(message) = form_error.as_ref() {
                        html! { <p class="error-text">{message.clone()}</p> }
                    } else {
                        html! {}
                    }}
                    <div class="actions">
                        <button class="btn btn-primary btn-sm" onclick={on_create} disabled={*busy}>
                            {if *busy { "Working…" } else { "Create" }}
                        </button>
                    </div>
                </div>
            </div>
            {render_minted(&minted, &revealed)}
            <div class="panel">
                <div class="panel-subhead">
                    <h4>{"Issued tokens"}</h4>
                </div>
                {render_listing(&page, *busy, &on_delete)}
            </div>
        </section>
    }
}

async fn reload(client: &ApiClient, page: &UseStateHandle<Option<TokenPage>>) {
    match fetch_tokens(client).await {
        Ok(listing) => page.set(Some(listing)),
        Err(err) => {
            app_dispatch().reduce_mut(|store| {
                push_toast(store, ToastKind::Error, format!("Could not load tokens: {err}"));
            });
        }
    }
}

fn render_minted(
    minted: &UseStateHandle<Option<CreatedToken>>,
    revealed: &UseStateHandle<bool>,
) -> Html {
    let Some(created) = minted.as_ref() else {
        return html! {};
    };
    let shown = if **revealed {
        created.plaintext.clone()
    } else {
        "\u{2022}".repeat(20)
    };
    let on_toggle = {
        let revealed = revealed.clone();
        Callback::from(move |_| revealed.set(!*revealed))
    };
    let on_copy = {
        let value = created.plaintext.clone();
        Callback::from(move |_| {
            let value = value.clone();
            yew::platform::spawn_local(async move {
                if copy_text(&value).await {
                    app_dispatch()
                        .reduce_mut(|store| push_toast(store, ToastKind::Info, "Copied"));
                }
            });
        })
    };
    let on_dismiss = {
        let minted = minted.clone();
        Callback::from(move |_| minted.set(None))
    };
    html! {
        <div class="panel highlight">
            <div class="panel-head">
                <div>
                    <h4>{format!("Token \"{}\" is ready", created.token.name)}</h4>
                    <p class="muted">{"Copy it now. The secret is not shown again."}</p>
                </div>
                <button class="btn btn-ghost btn-sm" onclick={on_dismiss}>{"Dismiss"}</button>
            </div>
            <div class="token-reveal">
                <code class="mono">{shown}</code>
                <div class="actions">
                    <button class="btn btn-ghost btn-sm" onclick={on_toggle}>
                        {if **revealed { "Hide" } else { "Reveal" }}
                    </button>
                    <button class="btn btn-ghost btn-sm" onclick={on_copy}>{"Copy"}</button>
                </div>
            </div>
        </div>
    }
}

fn render_listing(page: &Option<TokenPage>, busy: bool, on_delete: &Callback<(i64, String)>) -> Html {
    let Some(page) = page.as_ref() else {
        return html! { <div class="spinner" aria-label="Loading" /> };
    };
    if page.items.is_empty() {
        return html! {
            <EmptyState
                title="No tokens yet"
                hint={AttrValue::from("Mint one above to let clients authenticate.")}
            />
        };
    }
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Role"}</th>
                    <th>{"Status"}</th>
                    <th>{"Created"}</th>
                    <th>{"Last used"}</th>
                    <th>{"Quota"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for page.items.iter().map(|token| render_row(token, busy, on_delete))}
            </tbody>
        </table>
    }
}

fn render_row(token: &TokenRecord, busy: bool, on_delete: &Callback<(i64, String)>) -> Html {
    let last_used = token
        .last_used_at
        .as_ref()
        .map_or_else(|| "never".to_string(), format_timestamp);
    let quota = token.max_upload_size.map_or_else(
        || "unlimited".to_string(),
        |limit| {
            format!(
                "{} of {}",
                format_size(token.used_upload_size),
                format_size(limit)
            )
        },
    );
    let onclick = {
        let on_delete = on_delete.clone();
        let id = token.id;
        let name = token.name.clone();
        Callback::from(move |_| on_delete.emit((id, name.clone())))
    };
    html! {
        <tr key={token.id.to_string()}>
            <td><strong>{token.name.clone()}</strong></td>
            <td><span class="pill subtle">{token.role.as_str()}</span></td>
            <td>
                <span class={classes!("pill", if token.is_active { "subtle" } else { "inactive" })}>
                    {if token.is_active { "active" } else { "disabled" }}
                </span>
            </td>
            <td>{format_timestamp(&token.created_at)}</td>
            <td>{last_used}</td>
            <td>{quota}</td>
            <td class="row-actions">
                <button class="btn btn-danger btn-sm" onclick={onclick} disabled={busy}>
                    {"Revoke"}
                </button>
            </td>
        </tr>
    }
}
