use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::fragment_link::FragmentLink;
use crate::config;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <FragmentLink to={Route::Home} fragment="approach" classes="nav-link">
                            {"Our Approach"}
                        </FragmentLink>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::HowItWorks} classes="nav-link">
                            {"How It Works"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Therapists} classes="nav-link">
                            {"Therapists"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Leaders} classes="nav-link">
                            {"Leadership"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <FragmentLink to={Route::Home} fragment="faq" classes="nav-link">
                            {"FAQ"}
                        </FragmentLink>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::GetStarted} classes="nav-cta">
                            {"Sign Up"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(247, 245, 240, 0.96);
                    box-shadow: 0 2px 12px rgba(31, 45, 42, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: #2f6b5f;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    text-decoration: none;
                    color: #1f2d2a;
                }
                .nav-cta {
                    text-decoration: none;
                    background: #2f6b5f;
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #1f2d2a;
                }
                @media (max-width: 820px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #f7f5f0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
