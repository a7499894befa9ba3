use log::info;
use yew::prelude::*;

use crate::catalog::models::RegionKind;
use crate::catalog::regions::regions;
use crate::components::contact_panel::ContactPanel;
use crate::components::hero::HeroBanner;
use crate::components::nav_bar::NavigationBar;
use crate::components::service_catalog::ServiceCatalog;
use crate::components::support_catalog::SupportCatalog;
use crate::hover::mediator::HoverProvider;

#[function_component(Landing)]
pub fn landing() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                || info!("Landing page unmounted")
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    background: #fff;
                    display: grid;
                    justify-items: center;
                    align-items: start;
                    width: 100%;
                    scroll-behavior: smooth;
                    font-family: 'Inter', Helvetica, sans-serif;
                }
                .landing-content {
                    width: 100%;
                    max-width: 1200px;
                    position: relative;
                    overflow: hidden;
                    background: #fff;
                }
                .catalog {
                    margin-top: 120px;
                    padding: 0 60px;
                    position: relative;
                }
                .catalog.support {
                    margin-top: 80px;
                }
                .catalog h2, .contact h2 {
                    font-size: 2.25rem;
                    font-weight: 600;
                    letter-spacing: -0.96px;
                    margin: 0;
                }
                .catalog-entry {
                    padding: 1rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    position: relative;
                    transition: transform 0.2s, box-shadow 0.2s, background 0.2s;
                }
                .catalog-entry h3 {
                    font-size: 1.5rem;
                    font-weight: 500;
                    line-height: 2.25rem;
                    margin: 0;
                    transition: color 0.2s;
                }
                .catalog-sub-items {
                    list-style: none;
                    margin: 0.25rem 0 0;
                    padding: 0;
                    color: #828282;
                    font-size: 1.25rem;
                    line-height: 30px;
                }
                "#}
            </style>
            <HoverProvider>
                <div class="landing-content">
                    <NavigationBar />
                    <HeroBanner />
                    {
                        for regions().into_iter().map(|region| match region.kind {
                            RegionKind::Services => html! { <ServiceCatalog key={region.section_id} /> },
                            RegionKind::Support => html! { <SupportCatalog key={region.section_id} /> },
                        })
                    }
                    <ContactPanel />
                </div>
            </HoverProvider>
        </div>
    }
}
