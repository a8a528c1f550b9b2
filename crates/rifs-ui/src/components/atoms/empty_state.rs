//! Placeholder panel for lists with nothing to show.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let hint = props
        .hint
        .as_ref()
        .map(|text| html! { <p class="muted">{text.clone()}</p> })
        .unwrap_or_default();
    let actions = if props.children.is_empty() {
        html! {}
    } else {
        html! { <div class="empty-actions">{ for props.children.iter() }</div> }
    };
    html! {
        <div class="empty-state">
            <h4>{props.title.clone()}</h4>
            {hint}
            {actions}
        </div>
    }
}
