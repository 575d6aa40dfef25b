use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{config::SITE_NAME}</h3>
                    <p>{"Licensed therapists, matched to you after a free assessment."}</p>
                    <p>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::HowItWorks}>{"How It Works"}</Link<Route>>
                    <Link<Route> to={Route::Therapists}>{"Therapists"}</Link<Route>>
                    <Link<Route> to={Route::Leaders}>{"Leadership"}</Link<Route>>
                    <Link<Route> to={Route::GetStarted}>{"Book Free Assessment"}</Link<Route>>
                </div>
            </div>
            <p class="crisis-notice">{config::CRISIS_LINE}</p>
            <p class="copyright">{format!("© {} {}", year, config::SITE_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #1f2d2a;
                    color: #e8efe9;
                    padding: 3rem 2rem 1.5rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links a {
                    color: #e8efe9;
                    text-decoration: none;
                }
                .crisis-notice {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding: 1rem;
                    border: 1px solid rgba(232, 239, 233, 0.3);
                    border-radius: 8px;
                }
                .copyright {
                    text-align: center;
                    opacity: 0.6;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </footer>
    }
}
