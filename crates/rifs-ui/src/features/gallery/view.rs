//! Gallery screen: incremental grid, bulk selection, and deletion.
//!
//! # Design
//! - Every listing transition runs through the pure state helpers; the
//!   view only wires triggers and renders the result.
//! - Scroll proximity and the manual load control share one in-flight
//!   guard, so overlapping triggers collapse into a single fetch.
//! - Batch deletes run sequentially and report one summary toast.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::components::atoms::{EmptyState, SelectionBar};
use crate::core::logic::{format_size, format_timestamp, image_url};
use crate::core::store::{AppStore, ToastKind, app_dispatch, push_toast};
use crate::features::gallery::actions::GalleryAction;
use crate::features::gallery::api::{delete_image, fetch_page};
use crate::features::gallery::logic::{SCROLL_DEBOUNCE_MS, should_load_more, thumbnail_url};
use crate::features::gallery::state::{
    DeleteOutcome, GalleryState, apply_delete_success, apply_load_failure, apply_page, begin_load,
    clear_selection, needs_backfill, page_request, reset_for_refresh, select_all_visible,
    selected_in_item_order, set_selected, toggle_select_mode,
};
use gloo::dialogs::confirm;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::{document, window};
use rifs_api_models::ImageMeta;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(GalleryView)]
pub(crate) fn gallery_view() -> Html {
    let dispatch = app_dispatch();
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let gallery = use_selector(|store: &AppStore| store.gallery.clone());
    let lightbox = use_state(|| None as Option<ImageMeta>);
    let debounce = use_mut_ref(|| None as Option<Timeout>);

    // First page on mount; the store survives navigation, so a revisit
    // keeps the already materialized listing.
    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                spawn_page_load(&dispatch, &api_ctx, true);
                || ()
            },
            (),
        );
    }

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let debounce = debounce.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&window(), "scroll", move |_| {
                    let dispatch = dispatch.clone();
                    let api_ctx = api_ctx.clone();
                    // Trailing edge: replacing the handle cancels the
                    // previous pending check.
                    let handle = Timeout::new(SCROLL_DEBOUNCE_MS, move || {
                        if near_bottom() {
                            spawn_page_load(&dispatch, &api_ctx, false);
                        }
                    });
                    *debounce.borrow_mut() = Some(handle);
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let lightbox = lightbox.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    let lightbox = lightbox.clone();
                    EventListener::new(&document(), "keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                            if event.key() == "Escape" {
                                lightbox.set(None);
                            }
                        }
                    })
                });
                move || drop(listener)
            },
            lightbox.is_some(),
        );
    }

    let on_action = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |action: GalleryAction| match action {
            GalleryAction::LoadMore => spawn_page_load(&dispatch, &api_ctx, false),
            GalleryAction::Refresh => spawn_refresh(&dispatch, &api_ctx),
            GalleryAction::ToggleSelectMode => {
                dispatch.reduce_mut(|store| toggle_select_mode(&mut store.gallery));
            }
            GalleryAction::SelectAll => {
                dispatch.reduce_mut(|store| select_all_visible(&mut store.gallery));
            }
            GalleryAction::ClearSelection => {
                dispatch.reduce_mut(|store| clear_selection(&mut store.gallery));
            }
            GalleryAction::DeleteSelected => {
                let targets = selected_in_item_order(&dispatch.get().gallery);
                if targets.is_empty() {
                    return;
                }
                let prompt = format!(
                    "Delete {} selected image(s)? This cannot be undone.",
                    targets.len()
                );
                if confirm(&prompt) {
                    spawn_delete_many(&dispatch, &api_ctx, targets);
                }
            }
            GalleryAction::Delete(hash) => {
                if confirm("Delete this image? This cannot be undone.") {
                    spawn_delete_many(&dispatch, &api_ctx, vec![hash]);
                }
            }
        })
    };

    let on_toggle_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |(hash, selected): (String, bool)| {
            dispatch.reduce_mut(|store| set_selected(&mut store.gallery, &hash, selected));
        })
    };

    let on_open = {
        let lightbox = lightbox.clone();
        Callback::from(move |item: ImageMeta| lightbox.set(Some(item)))
    };

    let base_url = api_ctx.client.base_url().to_string();
    let select_mode = gallery.select_mode;
    let all_selected =
        !gallery.items.is_empty() && gallery.selected.len() == gallery.items.len();

    let emit = |action: GalleryAction| {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    html! {
        <section class="gallery-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <p class="eyebrow">{"Library"}</p>
                        <h3>{"Gallery"}</h3>
                        <p class="muted">{format!("{} of {} images", gallery.items.len(), gallery.total)}</p>
                    </div>
                    <div class="actions">
                        <button
                            class="btn btn-ghost btn-sm"
                            onclick={emit(GalleryAction::Refresh)}
                            disabled={gallery.loading}
                        >
                            {"Refresh"}
                        </button>
                        <button class="btn btn-ghost btn-sm" onclick={emit(GalleryAction::ToggleSelectMode)}>
                            {if select_mode { "Done" } else { "Select" }}
                        </button>
                    </div>
                </div>
                {if select_mode {
                    html! {
                        <SelectionBar
                            toggle_label={if all_selected { "Clear selection" } else { "Select all" }}
                            selected_count={gallery.selected.len()}
                            on_toggle={emit(if all_selected {
                                GalleryAction::ClearSelection
                            } else {
                                GalleryAction::SelectAll
                            })}
                        >
                            <button
                                class="btn btn-danger btn-sm"
                                onclick={emit(GalleryAction::DeleteSelected)}
                                disabled={gallery.selected.is_empty()}
                            >
                                {"Delete selected"}
                            </button>
                        </SelectionBar>
                    }
                } else {
                    html! {}
                }}
                <div class="gallery-grid">
                    {for gallery.items.iter().map(|item| render_card(
                        item,
                        &base_url,
                        select_mode,
                        gallery.selected.contains(&item.hash),
                        &on_toggle_select,
                        &on_open,
                    ))}
                </div>
                {render_status(&gallery, &on_action)}
            </div>
            {render_lightbox(&lightbox, &base_url, &on_action)}
        </section>
    }
}

fn render_card(
    item: &ImageMeta,
    base_url: &str,
    select_mode: bool,
    checked: bool,
    on_toggle: &Callback<(String, bool)>,
    on_open: &Callback<ImageMeta>,
) -> Html {
    let name = item.display_name();
    let thumb = thumbnail_url(base_url, &item.hash);
    let primary = if select_mode {
        let on_toggle = on_toggle.clone();
        let hash = item.hash.clone();
        Callback::from(move |_| on_toggle.emit((hash.clone(), !checked)))
    } else {
        let on_open = on_open.clone();
        let item = item.clone();
        Callback::from(move |_| on_open.emit(item.clone()))
    };
    let on_check = {
        let on_toggle = on_toggle.clone();
        let hash = item.hash.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_toggle.emit((hash.clone(), input.checked()));
            }
        })
    };

    html! {
        <div
            key={item.hash.clone()}
            class={classes!("gallery-card", if select_mode && checked { Some("selected") } else { None })}
        >
            <button class="thumb" onclick={primary} aria-label={name.clone()}>
                <img src={thumb} alt={name.clone()} loading="lazy" />
            </button>
            {if select_mode {
                html! {
                    <label class="card-select">
                        <input type="checkbox" checked={checked} onchange={on_check} />
                    </label>
                }
            } else {
                html! {}
            }}
            <div class="card-meta">
                <strong title={name.clone()}>{name}</strong>
                <span class="muted">{format_size(item.size)}</span>
            </div>
        </div>
    }
}

fn render_status(gallery: &GalleryState, on_action: &Callback<GalleryAction>) -> Html {
    let load_more = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(GalleryAction::LoadMore))
    };
    if gallery.loading {
        return html! {
            <div class="gallery-status">
                <div class="spinner" aria-hidden="true"></div>
                <span class="muted">{"Loading…"}</span>
            </div>
        };
    }
    if gallery.items.is_empty() {
        // Items empty with pages left means the first load never landed.
        if gallery.has_more {
            return html! {
                <EmptyState
                    title="Nothing to show"
                    hint={AttrValue::from("The listing could not be loaded.")}
                >
                    <button class="btn btn-ghost" onclick={load_more}>{"Try again"}</button>
                </EmptyState>
            };
        }
        return html! {
            <EmptyState
                title="No images yet"
                hint={AttrValue::from("Uploads appear here as soon as they finish.")}
            />
        };
    }
    if gallery.has_more {
        return html! {
            <div class="gallery-status">
                <button class="btn btn-ghost" onclick={load_more}>{"Load more"}</button>
            </div>
        };
    }
    html! {
        <div class="gallery-status">
            <span class="muted">{"All images loaded"}</span>
        </div>
    }
}

fn render_lightbox(
    lightbox: &UseStateHandle<Option<ImageMeta>>,
    base_url: &str,
    on_action: &Callback<GalleryAction>,
) -> Html {
    let Some(item) = lightbox.as_ref() else {
        return html! {};
    };
    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };
    let delete_this = {
        let on_action = on_action.clone();
        let lightbox = lightbox.clone();
        let hash = item.hash.clone();
        Callback::from(move |_| {
            lightbox.set(None);
            on_action.emit(GalleryAction::Delete(hash.clone()));
        })
    };
    let name = item.display_name();

    html! {
        <div class="lightbox" role="dialog" aria-modal="true" onclick={close.clone()}>
            <figure class="lightbox-body" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <img src={image_url(base_url, &item.hash)} alt={name.clone()} />
                <figcaption>
                    <strong>{name}</strong>
                    <span class="muted">
                        {format!("{} · {}", format_size(item.size), format_timestamp(&item.created_at))}
                    </span>
                    <div class="actions">
                        <button class="btn btn-danger btn-sm" onclick={delete_this}>{"Delete"}</button>
                        <button class="btn btn-ghost btn-sm" onclick={close}>{"Close"}</button>
                    </div>
                </figcaption>
            </figure>
        </div>
    }
}

fn near_bottom() -> bool {
    let scroll_y = window().scroll_y().unwrap_or(0.0);
    let viewport = window()
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let content = document()
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    should_load_more(scroll_y, viewport, content)
}

fn spawn_page_load(dispatch: &Dispatch<AppStore>, api_ctx: &ApiCtx, only_if_empty: bool) {
    let mut request = None;
    dispatch.reduce_mut(|store| {
        if only_if_empty && !store.gallery.items.is_empty() {
            return;
        }
        if begin_load(&mut store.gallery) {
            request = Some(page_request(&store.gallery));
        }
    });
    let Some(request) = request else {
        return;
    };
    let client = api_ctx.client.clone();
    let dispatch = dispatch.clone();
    yew::platform::spawn_local(async move {
        match fetch_page(&client, request).await {
            Ok(page) => dispatch.reduce_mut(|store| apply_page(&mut store.gallery, page)),
            Err(err) => dispatch.reduce_mut(|store| {
                apply_load_failure(&mut store.gallery);
                push_toast(
                    store,
                    ToastKind::Error,
                    format!("Could not load images: {err}"),
                );
            }),
        }
    });
}

fn spawn_refresh(dispatch: &Dispatch<AppStore>, api_ctx: &ApiCtx) {
    let mut proceed = false;
    dispatch.reduce_mut(|store| {
        proceed = reset_for_refresh(&mut store.gallery);
    });
    if proceed {
        spawn_page_load(dispatch, api_ctx, false);
    }
}

fn spawn_delete_many(dispatch: &Dispatch<AppStore>, api_ctx: &ApiCtx, hashes: Vec<String>) {
    if hashes.is_empty() {
        return;
    }
    let client = api_ctx.client.clone();
    let api_ctx = api_ctx.clone();
    let dispatch = dispatch.clone();
    yew::platform::spawn_local(async move {
        let mut outcome = DeleteOutcome::default();
        for hash in &hashes {
            match delete_image(&client, hash).await {
                Ok(()) => {
                    outcome.record_success();
                    dispatch.reduce_mut(|store| apply_delete_success(&mut store.gallery, hash));
                }
                Err(_) => outcome.record_failure(),
            }
        }
        let kind = if outcome.failed == 0 {
            ToastKind::Success
        } else {
            ToastKind::Error
        };
        let mut backfill = false;
        dispatch.reduce_mut(|store| {
            push_toast(store, kind, outcome.summary());
            backfill = needs_backfill(&store.gallery);
        });
        if backfill {
            spawn_page_load(&dispatch, &api_ctx, false);
        }
    });
}
