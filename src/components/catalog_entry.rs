use yew::prelude::*;

use crate::catalog::models::ServiceEntry;
use crate::hover::mediator::use_hover_mediator;

#[derive(Properties, PartialEq)]
pub struct CatalogEntryProps {
    pub entry: ServiceEntry,
}

/// A hoverable heading, optionally followed by display-only sub-items.
#[function_component(CatalogEntry)]
pub fn catalog_entry(props: &CatalogEntryProps) -> Html {
    let mediator = use_hover_mediator();
    let entry = props.entry;
    let onmouseenter = mediator.as_ref().map(|m| m.enter_callback(entry.identifier));
    let onmouseleave = mediator.as_ref().map(|m| m.leave_callback());

    html! {
        <div
            class="catalog-entry"
            data-service={entry.identifier}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <h3>{entry.display_label}</h3>
            {
                if entry.sub_items.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="catalog-sub-items">
                            { for entry.sub_items.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}
