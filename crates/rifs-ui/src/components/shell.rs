//! Application frame: sidebar navigation, topbar, and the content slot.

use crate::app::Route;
use crate::core::session::{Screen, can_access};
use rifs_api_models::Role;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Route, access screen, and label for each sidebar entry.
const NAV_ENTRIES: [(Route, Screen, &str); 5] = [
    (Route::Upload, Screen::Upload, "Upload"),
    (Route::Gallery, Screen::Gallery, "Gallery"),
    (Route::Cache, Screen::Cache, "Cache"),
    (Route::Tokens, Screen::Tokens, "Tokens"),
    (Route::Settings, Screen::Settings, "Settings"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub role: Role,
    pub active: Route,
    pub show_logout: bool,
    #[prop_or_default]
    pub user_name: Option<AttrValue>,
    pub on_logout: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let sidebar_state = if *nav_open { "open" } else { "closed" };
    let role_label = match props.role {
        Role::Admin => "Admin",
        Role::User => "User",
    };

    let entries = NAV_ENTRIES
        .iter()
        .filter(|(_, screen, _)| can_access(props.role, *screen))
        .map(|(route, _, label)| {
            let marker = if props.active == *route { Some("active") } else { None };
            html! {
                <Link<Route> to={*route} classes={classes!("nav-item", marker)}>{*label}</Link<Route>>
            }
        });

    let who = props
        .user_name
        .as_ref()
        .map(|name| html! { <span class="pill subtle">{name.clone()}</span> })
        .unwrap_or_default();
    let signout = if props.show_logout {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |_| on_logout.emit(()));
        html! { <button class="ghost" onclick={onclick}>{"Sign out"}</button> }
    } else {
        html! {}
    };

    html! {
        <div class="app-shell">
            <aside class={classes!("sidebar", sidebar_state)}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label="Close menu">{"✕"}</button>
                    <strong>{"RIFS"}</strong>
                    <span class="muted">{"Image host"}</span>
                </div>
                <nav>{for entries}</nav>
                <div class="sidebar-footer">
                    {who}
                    {signout}
                </div>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" onclick={toggle_nav} aria-label="Open menu">{"☰"}</button>
                    <div class="top-actions">
                        <span class="pill subtle">{role_label}</span>
                    </div>
                </header>
                <main>{for props.children.iter()}</main>
            </div>
        </div>
    }
}
