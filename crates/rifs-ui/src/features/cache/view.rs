//! Cache administration screen: usage stats and maintenance actions.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::core::logic::{format_size, format_timestamp, short_hash};
use crate::core::store::{ToastKind, app_dispatch, push_toast};
use crate::features::cache::api::{auto_cleanup, clean, clear, decay, fetch_stats};
use crate::features::cache::state::CleanFormState;
use crate::services::api::{ApiClient, ApiError};
use gloo::dialogs::confirm;
use rifs_api_models::CacheStats;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Entries shown in the recent-activity table.
const RECENT_LIMIT: usize = 10;
/// Operation log lines kept on screen.
const LOG_LIMIT: usize = 8;

#[function_component(CachePage)]
pub(crate) fn cache_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let stats = use_state(|| None as Option<CacheStats>);
    let form = use_state(CleanFormState::default);
    let form_error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let log = use_state(Vec::<String>::new);

    {
        let api_ctx = api_ctx.clone();
        let stats = stats.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match fetch_stats(&client).await {
                        Ok(loaded) => stats.set(Some(loaded)),
                        Err(err) => {
                            app_dispatch().reduce_mut(|store| {
                                push_toast(
                                    store,
                                    ToastKind::Error,
                                    format!("Could not load cache stats: {err}"),
                                );
                            });
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_age_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.max_age = input.value();
                form.set(next);
            }
        })
    };

    let on_size_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.max_size = input.value();
                form.set(next);
            }
        })
    };

    let on_clean = {
        let api_ctx = api_ctx.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let busy = busy.clone();
        let stats = stats.clone();
        let log = log.clone();
        Callback::from(move |_| {
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            spawn_maintenance(&api_ctx, &busy, &stats, &log, move |client| async move {
                let result = clean(&client, &request).await?;
                Ok(format!(
                    "Removed {} cached entries, freed {}",
                    result.deleted_count,
                    format_size(result.freed_size)
                ))
            });
        })
    };

    let on_auto = {
        let api_ctx = api_ctx.clone();
        let busy = busy.clone();
        let stats = stats.clone();
        let log = log.clone();
        Callback::from(move |_| {
            if !confirm("Run the retention policy now? Cold entries will be removed.") {
                return;
            }
            spawn_maintenance(&api_ctx, &busy, &stats, &log, |client| async move {
                let result = auto_cleanup(&client).await?;
                Ok(format!(
                    "Auto cleanup removed {} entries, freed {}",
                    result.deleted_count,
                    format_size(result.freed_size)
                ))
            });
        })
    };

    let on_decay = {
        let api_ctx = api_ctx.clone();
        let busy = busy.clone();
        let stats = stats.clone();
        let log = log.clone();
        Callback::from(move |_| {
            if !confirm("Decay access counters for every cached entry?") {
                return;
            }
            spawn_maintenance(&api_ctx, &busy, &stats, &log, |client| async move {
                let count = decay(&client).await?;
                Ok(format!("Decayed access counters on {count} entries"))
            });
        })
    };

    let on_clear = {
        let api_ctx = api_ctx.clone();
        let busy = busy.clone();
        let stats = stats.clone();
        let log = log.clone();
        Callback::from(move |_| {
            // A full clear is unrecoverable, so it has to be confirmed twice.
            if !confirm("Clear the entire transform cache?")
                || !confirm("Really delete every cached transform? This cannot be undone.")
            {
                return;
            }
            spawn_maintenance(&api_ctx, &busy, &stats, &log, |client| async move {
                let result = clear(&client).await?;
                Ok(format!(
                    "Cleared the cache: removed {} entries, freed {}",
                    result.deleted_count,
                    format_size(result.freed_size)
                ))
            });
        })
    };

    html! {
        <section class="cache-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="eyebrow">{"Storage"}</p>
                        <h3>{"Cache"}</h3>
                        <p class="muted">{"Derived transforms kept around for fast delivery."}</p>
                    </div>
                </div>
                {render_stats(&stats)}
                <div class="panel-subhead">
                    <h4>{"Targeted clean"}</h4>
                    <p class="muted">{"Remove entries past an age or a total-size bound."}</p>
                </div>
                <div class="stacked">
                    <div class="field-row">
                        <label class="stack">
                            <span>{"Max age (seconds)"}</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="86400"
                                value={form.max_age.clone()}
                                oninput={on_age_input}
                                disabled={*busy}
                            />
                        </label>
                        <label class="stack">
                            <span>{"Max size (bytes)"}</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="1073741824"
                                value={form.max_size.clone()}
                                oninput={on_size_input}
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
                        <button class="btn btn-primary btn-sm" onclick={on_clean} disabled={*busy}>
                            {"Clean"}
                        </button>
                    </div>
                </div>
                <div class="panel-subhead">
                    <h4>{"Maintenance"}</h4>
                </div>
                <div class="actions">
                    <button class="btn btn-ghost btn-sm" onclick={on_auto} disabled={*busy}>
                        {"Run auto cleanup"}
                    </button>
                    <button class="btn btn-ghost btn-sm" onclick={on_decay} disabled={*busy}>
                        {"Decay counters"}
                    </button>
                    <button class="btn btn-danger btn-sm" onclick={on_clear} disabled={*busy}>
                        {"Clear cache"}
                    </button>
                </div>
            </div>
            <div class="panel">
                <div class="panel-subhead">
                    <h4>{"Recent entries"}</h4>
                </div>
                {render_entries(&stats)}
                {render_log(&log)}
            </div>
        </section>
    }
}

fn render_stats(stats: &Option<CacheStats>) -> Html {
    let Some(stats) = stats.as_ref() else {
        return html! { <div class="spinner" aria-label="Loading" /> };
    };
    html! {
        <div class="stat-cards">
            <div class="stat-card">
                <span class="muted">{"Cached size"}</span>
                <strong>{format_size(stats.total_size)}</strong>
            </div>
            <div class="stat-card">
                <span class="muted">{"Entries"}</span>
                <strong>{stats.total_count.to_string()}</strong>
            </div>
        </div>
    }
}

fn render_entries(stats: &Option<CacheStats>) -> Html {
    let Some(stats) = stats.as_ref() else {
        return html! {};
    };
    if stats.items.is_empty() {
        return html! { <p class="muted">{"The cache is empty."}</p> };
    }
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Source"}</th>
                    <th>{"Format"}</th>
                    <th>{"Size"}</th>
                    <th>{"Last accessed"}</th>
                </tr>
            </thead>
            <tbody>
                {for stats.items.iter().take(RECENT_LIMIT).map(|entry| html! {
                    <tr key={format!("{}-{}", entry.hash, entry.format)}>
                        <td class="mono">{short_hash(&entry.hash)}</td>
                        <td>{entry.format.clone()}</td>
                        <td>{format_size(entry.file_size)}</td>
                        <td>{format_timestamp(&entry.last_accessed)}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn render_log(log: &[String]) -> Html {
    if log.is_empty() {
        return html! {};
    }
    html! {
        <>
            <div class="panel-subhead">
                <h4>{"Activity"}</h4>
            </div>
            <ul class="activity-log">
                {for log.iter().map(|line| html! {
                    <li key={line.clone()}>{line.clone()}</li>
                })}
            </ul>
        </>
    }
}

/// Runs one maintenance call, reports it, and refreshes the stats panel.
fn spawn_maintenance<F, Fut>(
    api_ctx: &ApiCtx,
    busy: &UseStateHandle<bool>,
    stats: &UseStateHandle<Option<CacheStats>>,
    log: &UseStateHandle<Vec<String>>,
    op: F,
) where
    F: FnOnce(Rc<ApiClient>) -> Fut + 'static,
    Fut: Future<Output = Result<String, ApiError>> + 'static,
{
    if **busy {
        return;
    }
    busy.set(true);
    let client = api_ctx.client.clone();
    let busy = busy.clone();
    let stats = stats.clone();
    let log = log.clone();
    yew::platform::spawn_local(async move {
        let dispatch = app_dispatch();
        match op(client.clone()).await {
            Ok(outcome) => {
                dispatch.reduce_mut(|store| push_toast(store, ToastKind::Success, outcome.clone()));
                let time = String::from(js_sys::Date::new_0().to_locale_time_string("en-GB"));
                let mut entries = (*log).clone();
                entries.insert(0, format!("{time} · {outcome}"));
                entries.truncate(LOG_LIMIT);
                log.set(entries);
                match fetch_stats(&client).await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(err) => {
                        gloo::console::warn!(format!("cache stats refresh failed: {err}"));
                    }
                }
            }
            Err(err) => {
                dispatch.reduce_mut(|store| {
                    push_toast(store, ToastKind::Error, format!("Cache operation failed: {err}"));
                });
            }
        }
        busy.set(false);
    });
}
