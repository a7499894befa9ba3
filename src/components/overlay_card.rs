use yew::prelude::*;

use crate::config::OVERLAY_TRANSITION_MS;
use crate::hover::policy::OverlayPlacement;

#[derive(Properties, PartialEq)]
pub struct OverlayCardProps {
    pub placement: OverlayPlacement,
    #[prop_or_default]
    pub leaving: bool,
}

#[function_component(OverlayCard)]
pub fn overlay_card(props: &OverlayCardProps) -> Html {
    let OverlayPlacement { descriptor, anchor, .. } = props.placement;
    let style = format!(
        "{} animation-duration: {}ms;",
        anchor.style(),
        OVERLAY_TRANSITION_MS
    );

    html! {
        <div
            class={classes!("service-overlay", if props.leaving { "leaving" } else { "entering" })}
            style={style}
            aria-hidden={props.leaving.to_string()}
        >
            <style>
                {r#"
                .service-overlay {
                    position: absolute;
                    top: 0;
                    right: 0;
                    z-index: 50;
                    width: 400px;
                    max-height: 300px;
                    overflow: hidden;
                    padding: 1.5rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    animation-timing-function: ease-out;
                    animation-fill-mode: forwards;
                    pointer-events: none;
                }
                .service-overlay.entering { animation-name: overlayIn; }
                .service-overlay.leaving { animation-name: overlayOut; }
                @keyframes overlayIn {
                    from { opacity: 0; transform: translateY(20px) scale(0.9); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                @keyframes overlayOut {
                    from { opacity: 1; transform: translateY(0) scale(1); }
                    to { opacity: 0; transform: translateY(20px) scale(0.9); }
                }
                .service-overlay h4 {
                    color: #303a7e;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }
                .service-overlay p {
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0 0 1rem;
                }
                .overlay-features {
                    border-top: 1px solid #f3f4f6;
                    padding-top: 0.75rem;
                }
                .overlay-features h5 {
                    color: #1f2937;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin: 0 0 0.5rem;
                }
                .overlay-features ul {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.25rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .overlay-features li {
                    display: flex;
                    align-items: center;
                    color: #4b5563;
                    font-size: 0.75rem;
                }
                .overlay-features li::before {
                    content: '';
                    width: 6px;
                    height: 6px;
                    margin-right: 0.5rem;
                    border-radius: 50%;
                    background: #303a7e;
                }
                .overlay-pointer {
                    position: absolute;
                    top: -0.5rem;
                    left: -0.5rem;
                    width: 1rem;
                    height: 1rem;
                    background: #fff;
                    border-left: 1px solid #e5e7eb;
                    border-top: 1px solid #e5e7eb;
                    transform: rotate(45deg);
                }
                "#}
            </style>
            <div style="position: relative;">
                <h4>{descriptor.title}</h4>
                <p>{descriptor.description}</p>
                <div class="overlay-features">
                    <h5>{"Key Services:"}</h5>
                    <ul>
                        { for descriptor.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                    </ul>
                </div>
                <div class="overlay-pointer"></div>
            </div>
        </div>
    }
}
