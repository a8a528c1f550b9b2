use crate::app::api::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::components::login::LoginScreen;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::session::{
    Credentials, SessionPhase, apply_auth_probe, apply_login, apply_logout, apply_user_info,
    can_access,
};
use crate::core::store::{AppStore, ToastKind, app_dispatch, dismiss_toast, push_toast};
use crate::features::cache::view::CachePage;
use crate::features::gallery::view::GalleryView;
use crate::features::settings::view::SettingsPage;
use crate::features::tokens::view::TokensPage;
use crate::features::upload::view::UploadPage;
use preferences::{api_base_url, clear_credential_storage, load_credentials, persist_credentials};
use rifs_api_models::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

pub(crate) use routes::Route;

#[function_component(RifsApp)]
fn rifs_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <AppFrame />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

// Lives inside BrowserRouter so `use_route` tracks navigation.
#[function_component(AppFrame)]
fn app_frame() -> Html {
    let dispatch = app_dispatch();
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let phase = use_selector(|store: &AppStore| store.session.phase);
    let role = use_selector(|store: &AppStore| store.session.role);
    let user_name = use_selector(|store: &AppStore| store.session.user_name.clone());
    let has_credentials = use_selector(|store: &AppStore| store.session.credentials.is_some());
    let toasts = use_selector(|store: &AppStore| store.toasts.entries.clone());
    let route = use_route::<Route>().unwrap_or(Route::Upload);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let stored = load_credentials();
                api_ctx.client.set_credentials(stored.clone());
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    let enabled = match client.fetch_auth_config().await {
                        Ok(config) => Some(config.enabled),
                        Err(err) => {
                            gloo::console::warn!(format!("auth probe failed: {err}"));
                            None
                        }
                    };
                    let mut identify = false;
                    dispatch.reduce_mut(|store| {
                        apply_auth_probe(&mut store.session, enabled, stored);
                        identify =
                            store.session.auth_required && store.session.credentials.is_some();
                    });
                    if identify {
                        let info = client.fetch_user_info().await.ok();
                        dispatch.reduce_mut(|store| apply_user_info(&mut store.session, info));
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_authenticated = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |(credentials, role): (Credentials, Option<Role>)| {
            persist_credentials(&credentials);
            api_ctx.client.set_credentials(Some(credentials.clone()));
            dispatch.reduce_mut(|store| {
                apply_login(&mut store.session, credentials, role);
                push_toast(store, ToastKind::Success, "Signed in");
            });
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                let info = client.fetch_user_info().await.ok();
                dispatch.reduce_mut(|store| apply_user_info(&mut store.session, info));
            });
        })
    };

    let on_logout = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |()| {
            clear_credential_storage();
            api_ctx.client.set_credentials(None);
            dispatch.reduce_mut(|store| {
                apply_logout(&mut store.session);
                push_toast(store, ToastKind::Info, "Signed out");
            });
        })
    };

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| dismiss_toast(store, id));
        })
    };

    let content = match *phase {
        SessionPhase::Probing => html! {
            <div class="boot-screen">
                <div class="spinner" aria-hidden="true"></div>
                <p class="muted">{"Connecting…"}</p>
            </div>
        },
        SessionPhase::Login => html! {
            <LoginScreen on_authenticated={on_authenticated} />
        },
        SessionPhase::Ready => {
            let role_value = *role;
            html! {
                <AppShell
                    role={role_value}
                    active={route}
                    show_logout={*has_credentials}
                    user_name={user_name.as_ref().clone().map(AttrValue::from)}
                    on_logout={on_logout}
                >
                    <Switch<Route> render={move |route| render_route(route, role_value)} />
                </AppShell>
            }
        }
    };

    html! {
        <>
            {content}
            <ToastHost toasts={toasts.as_ref().clone()} on_dismiss={on_dismiss} />
        </>
    }
}

fn render_route(route: Route, role: Role) -> Html {
    if let Some(screen) = route.screen() {
        if !can_access(role, screen) {
            return html! { <AccessDenied /> };
        }
    }
    match route {
        Route::Upload => html! { <UploadPage /> },
        Route::Gallery => html! { <GalleryView /> },
        Route::Cache => html! { <CachePage /> },
        Route::Tokens => html! { <TokensPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! {
            <EmptyState
                title="Page not found"
                hint={AttrValue::from("Use the navigation to return to a supported screen.")}
            />
        },
    }
}

#[function_component(AccessDenied)]
fn access_denied() -> Html {
    html! {
        <div class="placeholder">
            <h2>{"Access restricted"}</h2>
            <p class="muted">{"This screen is limited to administrator tokens."}</p>
            <div class="pill subtle">{"admin only"}</div>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RifsApp>::with_root(root).render();
    } else {
        yew::Renderer::<RifsApp>::new().render();
    }
}
