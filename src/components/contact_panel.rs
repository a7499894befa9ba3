use yew::prelude::*;

use crate::catalog::regions::CONTACT_SECTION;
use crate::config;
use crate::motion::in_view::use_in_view;
use crate::motion::variants::{Phase, FADE_IN_LEFT, FADE_IN_RIGHT, STAGGER_CONTAINER};

#[function_component(ContactPanel)]
pub fn contact_panel() -> Html {
    let section = use_node_ref();
    let phase = Phase::from_visible(use_in_view(section.clone(), 0.0));

    html! {
        <section id={CONTACT_SECTION} ref={section} class="contact" style={STAGGER_CONTAINER.style(phase, 0.0)}>
            <style>
                {r#"
                .contact {
                    margin-top: 80px;
                    width: 100%;
                    box-sizing: border-box;
                    background: #f7f7f7;
                    padding: 60px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .contact-actions {
                    display: flex;
                    gap: 1.5rem;
                }
                .contact-actions a {
                    display: inline-block;
                    font-size: 1.5rem;
                    font-weight: 500;
                    border-radius: 0.5rem;
                    padding: 1.25rem 2rem;
                    text-decoration: none;
                    transition: transform 0.2s, background 0.2s;
                }
                .contact-actions a:hover { transform: scale(1.05); }
                .contact-actions a:active { transform: scale(0.95); }
                .contact-email { background: #303a7e; color: #fff; }
                .contact-email:hover { background: #2a3370; }
                .contact-phone { background: #e6e6e6; color: rgba(0, 0, 0, 0.9); }
                .contact-phone:hover { background: #d1d5db; }
                @media (max-width: 1024px) {
                    .contact { flex-direction: column; }
                }
                "#}
            </style>
            <h2 style={FADE_IN_LEFT.style(phase, STAGGER_CONTAINER.child_delay(0))}>{"Contact Us"}</h2>
            <div class="contact-actions" style={FADE_IN_RIGHT.style(phase, STAGGER_CONTAINER.child_delay(1))}>
                <a class="contact-email" href={config::mailto_href()} target="_blank" rel="noopener noreferrer">
                    {"Email"}
                </a>
                <a class="contact-phone" href={config::tel_href()} target="_blank" rel="noopener noreferrer">
                    {"Phone"}
                </a>
            </div>
        </section>
    }
}
