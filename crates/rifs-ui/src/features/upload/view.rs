//! Upload screen: drop zone, sequential runs, and share links.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::core::store::{ToastKind, app_dispatch, push_toast};
use crate::features::upload::api::upload_file;
use crate::features::upload::logic::build_links;
use crate::features::upload::state::{UploadEntry, UploadRun};
use crate::services::clipboard::copy_text;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};
use yew::prelude::*;

#[function_component(UploadPage)]
pub(crate) fn upload_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let run = use_state(UploadRun::default);
    let busy = use_state(|| false);
    let dragging = use_state(|| false);
    let file_input = use_node_ref();

    let start_run = {
        let api_ctx = api_ctx.clone();
        let run = run.clone();
        let busy = busy.clone();
        Callback::from(move |files: Vec<File>| {
            if *busy || files.is_empty() {
                return;
            }
            busy.set(true);
            run.set(UploadRun::begin(files.len()));
            let client = api_ctx.client.clone();
            let base_url = api_ctx.client.base_url().to_string();
            let run = run.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                let dispatch = app_dispatch();
                let mut tally = UploadRun::begin(files.len());
                for file in &files {
                    let name = file.name();
                    match upload_file(&client, file).await {
                        Ok(stored) => tally.record_success(&name, stored.hash),
                        Err(err) => tally.record_failure(&name, err.to_string()),
                    }
                    run.set(tally.clone());
                }
                let kind = if tally.failed() == 0 {
                    ToastKind::Success
                } else {
                    ToastKind::Error
                };
                dispatch.reduce_mut(|store| push_toast(store, kind, tally.summary()));
                if let Some(entry) = tally.single_success() {
                    if let Some(hash) = entry.hash.as_deref() {
                        let links = build_links(&base_url, &entry.file_name, hash);
                        if copy_text(&links.url).await {
                            dispatch.reduce_mut(|store| {
                                push_toast(store, ToastKind::Info, "Link copied to clipboard");
                            });
                        }
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_pick = {
        let file_input = file_input.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let start_run = start_run.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(files) = input.files() else {
                return;
            };
            let picked = collect_files(&files);
            // Clearing lets the same file trigger another change event.
            input.set_value("");
            start_run.emit(picked);
        })
    };

    let on_drop = {
        let dragging = dragging.clone();
        let start_run = start_run.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            dragging.set(false);
            if let Some(files) = event.data_transfer().and_then(|dt| dt.files()) {
                start_run.emit(collect_files(&files));
            }
        })
    };

    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            dragging.set(true);
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_event: DragEvent| {
            dragging.set(false);
        })
    };

    let base_url = api_ctx.client.base_url().to_string();

    html! {
        <section class="upload-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="eyebrow">{"Share"}</p>
                        <h3>{"Upload"}</h3>
                        <p class="muted">{"Drop images here or browse to upload."}</p>
                    </div>
                </div>
                <div
                    class={classes!("drop-zone", if *dragging { Some("dragging") } else { None })}
                    ondrop={on_drop}
                    ondragover={on_drag_over}
                    ondragleave={on_drag_leave}
                >
                    <p>{"Drag and drop images"}</p>
                    <p class="muted">{"or"}</p>
                    <button class="btn btn-primary" onclick={on_pick} disabled={*busy}>
                        {if *busy { "Uploading…" } else { "Browse files" }}
                    </button>
                    <input
                        ref={file_input}
                        class="file-input-hidden"
                        type="file"
                        accept="image/*"
                        multiple=true
                        onchange={on_file_change}
                    />
                </div>
                {render_progress(&run, *busy)}
                {if run.results.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="upload-results">
                            {for run.results.iter().map(|entry| render_entry(entry, &base_url))}
                        </ul>
                    }
                }}
            </div>
        </section>
    }
}

fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .collect()
}

fn render_progress(run: &UploadRun, busy: bool) -> Html {
    if !busy && run.results.is_empty() {
        return html! {};
    }
    let percent = run.progress_percent();
    html! {
        <div class="upload-progress">
            <div
                class="progress-track"
                role="progressbar"
                aria-valuenow={percent.to_string()}
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div class="progress-fill" style={format!("width: {percent}%")}></div>
            </div>
            <span class="muted">{format!("{} of {} done", run.results.len(), run.total)}</span>
        </div>
    }
}

fn render_entry(entry: &UploadEntry, base_url: &str) -> Html {
    match (&entry.hash, &entry.error) {
        (Some(hash), _) => {
            let links = build_links(base_url, &entry.file_name, hash);
            html! {
                <li class="upload-row" key={hash.clone()}>
                    <div>
                        <strong>{entry.file_name.clone()}</strong>
                        <span class="muted">{links.url.clone()}</span>
                    </div>
                    <div class="actions">
                        {copy_button("URL", links.url)}
                        {copy_button("Markdown", links.markdown)}
                        {copy_button("HTML", links.html)}
                    </div>
                </li>
            }
        }
        (None, Some(error)) => html! {
            <li class="upload-row failed" key={entry.file_name.clone()}>
                <div>
                    <strong>{entry.file_name.clone()}</strong>
                    <span class="error-text">{error.clone()}</span>
                </div>
            </li>
        },
        (None, None) => html! {},
    }
}

fn copy_button(label: &'static str, value: String) -> Html {
    let onclick = Callback::from(move |_| {
        let value = value.clone();
        yew::platform::spawn_local(async move {
            if copy_text(&value).await {
                app_dispatch().reduce_mut(|store| push_toast(store, ToastKind::Info, "Copied"));
            }
        });
    });
    html! {
        <button class="btn btn-ghost btn-sm" onclick={onclick}>{label}</button>
    }
}
