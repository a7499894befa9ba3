use yew::prelude::*;

use crate::catalog::overlays::OverlayTable;
use crate::catalog::regions::SERVICE_CATALOG;
use crate::components::catalog_entry::CatalogEntry;
use crate::hover::mediator::{use_hover_mediator, HoverMediator};
use crate::hover::policy::resolve_overlay;
use crate::motion::in_view::use_in_view;
use crate::motion::presence::OverlayPresence;
use crate::motion::variants::{Phase, Variant, FADE_IN_LEFT, FADE_IN_RIGHT, FADE_IN_UP, STAGGER_CONTAINER};

// Outer columns slide in from their side, the middle one rises.
const COLUMN_VARIANTS: [Variant; 3] = [FADE_IN_LEFT, FADE_IN_UP, FADE_IN_RIGHT];

#[function_component(ServiceCatalog)]
pub fn service_catalog() -> Html {
    let region = &SERVICE_CATALOG;
    let section = use_node_ref();
    let phase = Phase::from_visible(use_in_view(section.clone(), 0.3));
    let mediator = use_hover_mediator();
    let hovered = mediator.as_ref().and_then(HoverMediator::hovered);
    let placement = resolve_overlay(hovered, region, OverlayTable::standard());

    html! {
        <section id={region.section_id} ref={section} class="catalog services" style={STAGGER_CONTAINER.style(phase, 0.0)}>
            <style>
                {r#"
                .catalog.services .catalog-columns {
                    display: flex;
                    gap: 2rem;
                    margin-top: 40px;
                    margin-left: 18px;
                }
                .catalog.services .catalog-column {
                    display: flex;
                    flex-direction: column;
                    width: 350px;
                }
                .catalog.services .catalog-column.single > .catalog-entry:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .catalog.services .catalog-column.stacked {
                    gap: 80px;
                }
                .catalog.services .catalog-column.stacked > .catalog-entry:hover {
                    transform: translateX(10px);
                    background: #f9fafb;
                }
                @media (max-width: 1024px) {
                    .catalog.services .catalog-columns {
                        flex-direction: column;
                        margin-left: 0;
                    }
                    .catalog.services .catalog-column {
                        width: 100%;
                    }
                    .catalog.services .catalog-column.stacked {
                        gap: 3rem;
                    }
                }
                "#}
            </style>
            <h2 style={FADE_IN_UP.style(phase, STAGGER_CONTAINER.child_delay(0))}>{region.heading}</h2>
            <div class="catalog-columns">
                { for region.columns.iter().zip(COLUMN_VARIANTS).enumerate().map(|(index, (column, variant))| {
                    let delay = STAGGER_CONTAINER.child_delay(index + 1);
                    let layout = if column.len() > 1 { "stacked" } else { "single" };
                    html! {
                        <div class={classes!("catalog-column", layout)} style={variant.style(phase, delay)}>
                            { for column.iter().map(|entry| html! {
                                <CatalogEntry key={entry.identifier} entry={*entry} />
                            }) }
                        </div>
                    }
                }) }
            </div>
            <OverlayPresence placement={placement} />
        </section>
    }
}
