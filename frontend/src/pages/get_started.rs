use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(GetStarted)]
pub fn get_started() -> Html {
    html! {
        <div class="get-started-page">
            <h1>{"Book your free assessment"}</h1>
            <p>{"Email us with a couple of times that work for you and a clinician will reply within one working day to confirm."}</p>
            <a class="cta-button" href={format!("mailto:{}?subject=Free%20assessment", config::CONTACT_EMAIL)}>
                {format!("Email {}", config::CONTACT_EMAIL)}
            </a>
            <div class="get-started-notes">
                <h2>{"Before your call"}</h2>
                <ul>
                    <li>{"Find a quiet, private spot for 15 minutes."}</li>
                    <li>{"Think about what you'd most like help with. It's fine if you're not sure."}</li>
                    <li>{"Have your insurance details nearby if you plan to use them."}</li>
                </ul>
                <p>
                    {"Want to know more first? "}
                    <Link<Route> to={Route::HowItWorks}>{"See how it works"}</Link<Route>>
                </p>
            </div>
            <p class="crisis-notice-inline">{config::CRISIS_LINE}</p>
            <style>
                {r#"
                .get-started-page {
                    padding: 7rem 2rem 4rem;
                    max-width: 720px;
                    margin: 0 auto;
                    text-align: center;
                }
                .get-started-notes {
                    text-align: left;
                    margin-top: 3rem;
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                }
                .crisis-notice-inline {
                    margin-top: 2rem;
                    font-size: 0.9rem;
                    opacity: 0.8;
                }
                "#}
            </style>
        </div>
    }
}
