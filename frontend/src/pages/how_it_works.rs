use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fragment_link::FragmentLink;
use crate::Route;

struct Step {
    title: &'static str,
    summary: &'static str,
    details: &'static [&'static str],
}

const STEPS: &[Step] = &[
    Step {
        title: "Take the free assessment",
        summary: "A 15 minute video call with a licensed clinician, at a time that suits you.",
        details: &[
            "We talk about what brought you here and what you'd like to change.",
            "You leave with a recommendation, whether or not you continue with us.",
        ],
    },
    Step {
        title: "Get matched",
        summary: "We pair you with a therapist based on your needs, schedule and preferences.",
        details: &[
            "Ask for a specific gender, language or cultural background.",
            "Switch therapists at any time, no questions asked.",
        ],
    },
    Step {
        title: "Start your sessions",
        summary: "Weekly or fortnightly 50 minute sessions by video, phone or in person.",
        details: &[
            "Evening and weekend appointments are available.",
            "Message your therapist between sessions when something comes up.",
        ],
    },
    Step {
        title: "Review your progress",
        summary: "Every six sessions we check in on how things are going.",
        details: &[
            "Short questionnaires track symptoms over time.",
            "You and your therapist decide together when to taper or finish.",
        ],
    },
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <div class="how-page">
            <section class="how-hero">
                <h1>{"How Mindbridge works"}</h1>
                <p>{"From first conversation to feeling like yourself again, in four steps."}</p>
            </section>
            <section id="steps" class="how-steps">
                { for STEPS.iter().enumerate().map(|(index, step)| html! {
                    <div class="how-step">
                        <span class="how-step-number">{(index + 1).to_string()}</span>
                        <div>
                            <h2>{step.title}</h2>
                            <p class="how-step-summary">{step.summary}</p>
                            <ul>
                                { for step.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                            </ul>
                        </div>
                    </div>
                }) }
            </section>
            <section id="pricing" class="how-pricing">
                <h2>{"What it costs"}</h2>
                <p>{"The assessment is free. Sessions are billed per session and many insurance plans are accepted. There is no subscription and nothing to cancel."}</p>
            </section>
            <section class="how-cta">
                <Link<Route> to={Route::GetStarted} classes="cta-button">
                    {"Book Free Assessment"}
                </Link<Route>>
                <FragmentLink to={Route::Home} fragment="faq" classes="cta-button secondary">
                    {"Read the FAQ"}
                </FragmentLink>
            </section>
            <style>
                {r#"
                .how-page {
                    padding: 7rem 2rem 4rem;
                    max-width: 900px;
                    margin: 0 auto;
                }
                .how-hero, .how-cta {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .how-cta {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .how-step {
                    display: flex;
                    gap: 1.5rem;
                    margin-bottom: 2.5rem;
                }
                .how-step-number {
                    flex: 0 0 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #2f6b5f;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .how-step-summary {
                    font-size: 1.1rem;
                }
                .how-pricing {
                    background: #e6efe9;
                    border-radius: 16px;
                    padding: 2rem;
                    margin-bottom: 3rem;
                }
                "#}
            </style>
        </div>
    }
}
