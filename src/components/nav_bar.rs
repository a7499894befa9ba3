use yew::prelude::*;

use crate::catalog::regions::{CONTACT_SECTION, NAV_ITEMS};
use crate::config;
use crate::navigation::scroll_callback;

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    html! {
        <header class="site-header">
            <style>
                {r#"
                .site-header {
                    width: 100%;
                    height: 164px;
                    background: #303a7e;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 2rem;
                    box-sizing: border-box;
                    animation: headerDrop 0.8s ease-out both;
                }
                @keyframes headerDrop {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @keyframes logoPop {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                @keyframes linksFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .site-logo {
                    width: 191px;
                    height: 128px;
                    object-fit: cover;
                    cursor: pointer;
                    animation: logoPop 0.6s 0.3s both;
                    transition: transform 0.2s;
                }
                .site-logo:hover {
                    transform: scale(1.05);
                }
                .site-nav {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    animation: linksFade 0.6s 0.5s both;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: transform 0.2s, color 0.2s;
                }
                .nav-link:hover {
                    color: #bfdbfe;
                    transform: translateY(-2px);
                }
                .nav-link:active, .nav-contact:active {
                    transform: scale(0.95);
                }
                .nav-contact {
                    background: #fff;
                    color: #000;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.875rem 1.5rem;
                    cursor: pointer;
                    transition: transform 0.2s, background 0.2s;
                }
                .nav-contact:hover {
                    background: #f3f4f6;
                    transform: scale(1.05);
                }
                "#}
            </style>
            <img
                class="site-logo"
                src={config::asset_url("image-4.png")}
                alt="Raarv Logo"
                onclick={scroll_callback("hero")}
            />
            <nav class="site-nav">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <button class="nav-link" key={item.section_id} onclick={scroll_callback(item.section_id)}>
                        {item.label}
                    </button>
                }) }
                <button class="nav-contact" onclick={scroll_callback(CONTACT_SECTION)}>
                    {"Contact Us"}
                </button>
            </nav>
        </header>
    }
}
