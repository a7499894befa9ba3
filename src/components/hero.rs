use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::catalog::regions::CONTACT_SECTION;
use crate::config;
use crate::motion::parallax::{use_scroll_progress, HeroParallax};
use crate::motion::variants::{Phase, FADE_IN_UP, STAGGER_CONTAINER};
use crate::navigation::scroll_callback;

const INTRO: &str = "We're a dedicated boutique SAP consulting firm specializing in SAP and Fioneer \
financial services and SAP AMS. With 20+ years of hands-on experience working with clients across \
the globe in areas such as core banking, financials, and architecture. We deliver practical, \
high-impact solutions, from full implementations to ongoing support. Our expertise spans Account \
Origination, Loans and Collateral Management, Financial Accounting, and more.";

const TAGLINE: &str = "SAP made simple. Results made real.";

#[function_component(HeroBanner)]
pub fn hero_banner() -> Html {
    let entered = use_state_eq(|| false);
    let parallax = HeroParallax::at(use_scroll_progress());

    // Flip to visible one tick after mount so the entrance transition runs.
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(0, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let phase = Phase::from_visible(*entered);

    html! {
        <section id="hero" class="hero" style={parallax.style()}>
            <style>
                {r#"
                .hero {
                    display: flex;
                    flex-direction: row;
                    justify-content: space-between;
                    margin-top: 40px;
                    padding: 0 60px;
                    gap: 2rem;
                }
                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    max-width: 700px;
                }
                .hero h1 {
                    font-size: 64px;
                    font-weight: 700;
                    letter-spacing: -1.28px;
                    margin: 0;
                }
                .hero p {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    margin-top: 30px;
                }
                .hero-cta {
                    margin-top: 2.5rem;
                    width: fit-content;
                    background: #303a7e;
                    color: #fff;
                    font-size: 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 1.25rem 2rem;
                    cursor: pointer;
                    transition: transform 0.2s, background 0.2s;
                }
                .hero-cta:hover {
                    background: #2a3370;
                    transform: scale(1.05);
                }
                .hero-cta:active {
                    transform: scale(0.95);
                }
                .hero-image {
                    width: 500px;
                    height: 500px;
                    object-fit: cover;
                    animation: heroImageIn 0.8s 0.4s both;
                    transition: transform 0.2s;
                }
                .hero-image:hover {
                    transform: scale(1.02);
                }
                @keyframes heroImageIn {
                    from { opacity: 0; transform: translateX(100px) scale(0.8); }
                    to { opacity: 1; transform: translateX(0) scale(1); }
                }
                @media (max-width: 1024px) {
                    .hero h1 { font-size: 48px; }
                    .hero p { font-size: 1.125rem; }
                    .hero-image { width: 400px; height: 400px; }
                }
                "#}
            </style>
            <div class="hero-copy" style={STAGGER_CONTAINER.style(phase, 0.0)}>
                <h1 style={FADE_IN_UP.style(phase, STAGGER_CONTAINER.child_delay(0))}>{config::COMPANY_NAME}</h1>
                <p style={FADE_IN_UP.style(phase, STAGGER_CONTAINER.child_delay(1))}>
                    {INTRO}
                    <br />
                    <br />
                    {TAGLINE}
                </p>
                <div style={FADE_IN_UP.style(phase, STAGGER_CONTAINER.child_delay(2))}>
                    <button class="hero-cta" onclick={scroll_callback(CONTACT_SECTION)}>
                        {"Contact Us"}
                    </button>
                </div>
            </div>
            <img class="hero-image" src={config::asset_url("image-5.png")} alt="Raarv Consulting" />
        </section>
    }
}
