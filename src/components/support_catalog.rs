use yew::prelude::*;

use crate::catalog::overlays::OverlayTable;
use crate::catalog::regions::SUPPORT_CATALOG;
use crate::components::catalog_entry::CatalogEntry;
use crate::config;
use crate::hover::mediator::{use_hover_mediator, HoverMediator};
use crate::hover::policy::resolve_overlay;
use crate::motion::in_view::use_in_view;
use crate::motion::presence::OverlayPresence;
use crate::motion::variants::{Phase, FADE_IN_LEFT, FADE_IN_RIGHT, FADE_IN_UP, STAGGER_CONTAINER};

/// Second, independent catalog sharing the page's hover slot.
#[function_component(SupportCatalog)]
pub fn support_catalog() -> Html {
    let region = &SUPPORT_CATALOG;
    let section = use_node_ref();
    let phase = Phase::from_visible(use_in_view(section.clone(), 0.3));
    let mediator = use_hover_mediator();
    let hovered = mediator.as_ref().and_then(HoverMediator::hovered);
    let placement = resolve_overlay(hovered, region, OverlayTable::standard());

    html! {
        <section id={region.section_id} ref={section} class="catalog support">
            <style>
                {r#"
                .catalog.support {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2rem;
                }
                .catalog.support .catalog-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 30px;
                }
                .catalog.support .catalog-entry:hover {
                    transform: translate(10px, -2px);
                    background: #f9fafb;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .catalog.support .catalog-entry:hover h3 {
                    color: #303a7e;
                }
                .catalog.support img {
                    width: 450px;
                    height: 450px;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }
                .catalog.support img:hover {
                    transform: scale(1.02);
                }
                @media (max-width: 1024px) {
                    .catalog.support {
                        flex-direction: column;
                    }
                    .catalog.support img {
                        width: 100%;
                        height: 300px;
                    }
                }
                "#}
            </style>
            <div style={FADE_IN_LEFT.style(phase, 0.0)}>
                <h2 style={FADE_IN_UP.style(phase, 0.0)}>{region.heading}</h2>
                <div class="catalog-list">
                    { for region.entries().enumerate().map(|(index, entry)| html! {
                        <div key={entry.identifier} style={FADE_IN_UP.style(phase, STAGGER_CONTAINER.child_delay(index))}>
                            <CatalogEntry entry={*entry} />
                        </div>
                    }) }
                </div>
            </div>
            <div style={FADE_IN_RIGHT.style(phase, 0.0)}>
                <img src={config::asset_url("image-6.png")} alt="SAP Support" loading="lazy" />
            </div>
            <OverlayPresence placement={placement} />
        </section>
    }
}
