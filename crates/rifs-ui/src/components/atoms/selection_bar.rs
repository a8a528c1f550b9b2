//! Toolbar strip shown while bulk selection is active.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectionBarProps {
    pub toggle_label: AttrValue,
    pub selected_count: usize,
    #[prop_or_default]
    pub on_toggle: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SelectionBar)]
pub(crate) fn selection_bar(props: &SelectionBarProps) -> Html {
    html! {
        <div class="select-bar" role="toolbar">
            <button class="ghost" onclick={props.on_toggle.clone()}>
                {props.toggle_label.clone()}
            </button>
            <span class="muted">{format!("{} selected", props.selected_count)}</span>
            <div class="select-bar-actions">{ for props.children.iter() }</div>
        </div>
    }
}
