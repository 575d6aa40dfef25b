use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::faq::{Faq, FaqAccordion};
use crate::components::fragment_link::FragmentLink;
use crate::directory::find_by_id;
use crate::Route;

const FOUNDER_ID: &str = "1";

const SYMPTOMS: &[(&str, &str)] = &[
    ("Constant worry", "Racing thoughts that won't switch off, even when things are fine."),
    ("Low mood", "Losing interest in things you used to enjoy, or feeling flat most days."),
    ("Trouble sleeping", "Lying awake, waking early, or never feeling rested."),
    ("Stress at work", "Dreading Mondays, snapping at colleagues, running on empty."),
    ("Relationship strain", "The same arguments on repeat, or feeling alone next to someone."),
    ("Big life changes", "A move, a loss, a diagnosis, a new baby. Change is hard."),
];

const BENEFITS: &[(&str, &str)] = &[
    ("Licensed therapists only", "Every therapist holds an active license and is reviewed by our clinical team."),
    ("Matched, not assigned", "We match on needs, style and availability, and you can switch any time."),
    ("Sessions that fit your week", "Video, phone or in person, with evening and weekend slots."),
    ("Transparent pricing", "No subscriptions. Pay per session, or use your insurance."),
];

const FAQS: &[Faq] = &[
    Faq {
        question: "Is the assessment really free?",
        answer: "Yes. The 15 minute assessment costs nothing and there is no obligation to continue.",
    },
    Faq {
        question: "How quickly can I start?",
        answer: "Most people have their first session within a week of the assessment.",
    },
    Faq {
        question: "Do you accept insurance?",
        answer: "We work with many major plans. Bring your details to the assessment and we'll check your coverage.",
    },
    Faq {
        question: "What if I don't click with my therapist?",
        answer: "Tell us and we'll match you with someone else. It happens, and it's not a problem.",
    },
    Faq {
        question: "Is this a crisis service?",
        answer: "No. If you are in immediate danger, call 988 in the US or your local emergency number.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let hero_dim = (scroll_y / 600.0).min(1.0) * 0.5;

    html! {
        <div class="landing-page">
            <section class="hero" style={format!("--hero-dim: {:.3};", hero_dim)}>
                <h1>{"Therapy that meets you where you are"}</h1>
                <p class="hero-subtitle">
                    {"Talk to a licensed therapist who understands what you're going through. Start with a free assessment."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::GetStarted} classes="cta-button">
                        {"Book Free Assessment"}
                    </Link<Route>>
                    <FragmentLink to={Route::Home} fragment="approach" classes="cta-button secondary">
                        {"Learn more"}
                    </FragmentLink>
                </div>
            </section>

            <section id="approach" class="approach">
                <h2>{"Our approach"}</h2>
                <p>
                    {"We start by listening. A short assessment with a clinician helps us understand what you need, then we match you with a therapist trained in the methods that work for it: CBT, EMDR, acceptance and commitment therapy and more."}
                </p>
                <Link<Route> to={Route::HowItWorks} classes="text-link">
                    {"See the full process →"}
                </Link<Route>>
            </section>

            <section id="symptoms" class="symptoms">
                <h2>{"Sound familiar?"}</h2>
                <div class="card-grid">
                    { for SYMPTOMS.iter().map(|(title, text)| html! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="benefits" class="benefits">
                <h2>{"Why Mindbridge"}</h2>
                <div class="card-grid">
                    { for BENEFITS.iter().map(|(title, text)| html! {
                        <div class="card benefit">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            {
                if let Some(founder) = find_by_id(FOUNDER_ID) {
                    html! {
                        <section id="leadership" class="founder-teaser">
                            <img src={founder.photo} alt={founder.name} loading="lazy" />
                            <div>
                                <h2>{"Led by clinicians"}</h2>
                                <p>{founder.bio.first().copied().unwrap_or_default()}</p>
                                <p class="founder-name">{format!("{}, {}", founder.name, founder.title)}</p>
                                <Link<Route> to={Route::Leaders} classes="text-link">
                                    {"Meet the leadership team →"}
                                </Link<Route>>
                            </div>
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <section id="faq" class="faq">
                <h2>{"Frequently asked questions"}</h2>
                <FaqAccordion items={FAQS} />
            </section>

            <section class="footer-cta">
                <h2>{"Ready to talk?"}</h2>
                <p class="subtitle">{"Taking the first step is the hardest part. We'll make the rest easy."}</p>
                <Link<Route> to={Route::GetStarted} classes="cta-button">
                    {"Sign Up"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .landing-page section {
                    padding: 5rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .hero {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    position: relative;
                }
                .hero::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: #1f2d2a;
                    opacity: var(--hero-dim, 0);
                    pointer-events: none;
                    border-radius: 24px;
                }
                .hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.6rem);
                    max-width: 800px;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    max-width: 620px;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .approach {
                    text-align: center;
                    max-width: 760px;
                }
                .text-link {
                    color: #2f6b5f;
                    font-weight: 600;
                    text-decoration: none;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 6px 20px rgba(31, 45, 42, 0.06);
                }
                .card.benefit {
                    border-top: 4px solid #2f6b5f;
                }
                .founder-teaser {
                    display: flex;
                    gap: 2.5rem;
                    align-items: center;
                }
                .founder-teaser img {
                    width: 220px;
                    height: 220px;
                    border-radius: 50%;
                    object-fit: cover;
                    background: #dfe8e3;
                }
                .founder-name {
                    font-weight: 600;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(31, 45, 42, 0.12);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    padding: 1.25rem 0;
                    font-size: 1.1rem;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer {
                    padding-bottom: 1rem;
                }
                .footer-cta {
                    text-align: center;
                }
                @media (max-width: 720px) {
                    .founder-teaser {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
