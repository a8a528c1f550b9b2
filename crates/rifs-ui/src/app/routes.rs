//! Routing definitions for the RIFS UI.
use crate::core::session::Screen;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Upload,
    #[at("/gallery")]
    Gallery,
    #[at("/cache")]
    Cache,
    #[at("/tokens")]
    Tokens,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The access-controlled screen behind this route, when any.
    pub(crate) const fn screen(&self) -> Option<Screen> {
        match self {
            Self::Upload => Some(Screen::Upload),
            Self::Gallery => Some(Screen::Gallery),
            Self::Cache => Some(Screen::Cache),
            Self::Tokens => Some(Screen::Tokens),
            Self::Settings => Some(Screen::Settings),
            Self::NotFound => None,
        }
    }
}
