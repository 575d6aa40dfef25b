use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Therapist {
    name: &'static str,
    credentials: &'static str,
    photo: &'static str,
    focus: &'static [&'static str],
    approach: &'static str,
    languages: &'static str,
}

const THERAPISTS: &[Therapist] = &[
    Therapist {
        name: "Maya Chen",
        credentials: "LCSW",
        photo: "/assets/therapists/maya-chen.svg",
        focus: &["Anxiety", "Work stress", "Burnout"],
        approach: "Cognitive behavioural therapy with a practical, skills-first style.",
        languages: "English, Mandarin",
    },
    Therapist {
        name: "Jordan Ellis",
        credentials: "LPC",
        photo: "/assets/therapists/jordan-ellis.svg",
        focus: &["Depression", "LGBTQ+ identity", "Grief"],
        approach: "Person-centred therapy with acceptance and commitment techniques.",
        languages: "English",
    },
    Therapist {
        name: "Sofia Marín",
        credentials: "LMFT",
        photo: "/assets/therapists/sofia-marin.svg",
        focus: &["Couples", "Family conflict", "Parenting"],
        approach: "Emotionally focused therapy for individuals and couples.",
        languages: "English, Spanish",
    },
    Therapist {
        name: "Dr. Kwame Mensah",
        credentials: "PsyD",
        photo: "/assets/therapists/kwame-mensah.svg",
        focus: &["Trauma", "PTSD", "Sleep"],
        approach: "EMDR and trauma-focused CBT, paced to what feels safe.",
        languages: "English, French",
    },
];

#[function_component(Therapists)]
pub fn therapists() -> Html {
    html! {
        <div class="therapists-page">
            <section class="therapists-hero">
                <h1>{"Meet some of our therapists"}</h1>
                <p>{"Every therapist is licensed, vetted by our clinical team and trained in evidence-based care."}</p>
            </section>
            <section class="therapist-grid">
                { for THERAPISTS.iter().map(|therapist| html! {
                    <div class="therapist-card">
                        <img src={therapist.photo} alt={therapist.name} loading="lazy" />
                        <h2>{therapist.name}<span class="credentials">{format!(", {}", therapist.credentials)}</span></h2>
                        <p class="therapist-approach">{therapist.approach}</p>
                        <ul class="therapist-focus">
                            { for therapist.focus.iter().map(|focus| html! { <li>{*focus}</li> }) }
                        </ul>
                        <p class="therapist-languages">{format!("Languages: {}", therapist.languages)}</p>
                    </div>
                }) }
            </section>
            <section class="therapists-cta">
                <h2>{"Not sure who is right for you?"}</h2>
                <p>{"Take the free assessment and we'll suggest a therapist who fits."}</p>
                <Link<Route> to={Route::GetStarted} classes="cta-button">
                    {"Book Free Assessment"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .therapists-page {
                    padding: 7rem 2rem 4rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .therapists-hero, .therapists-cta {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .therapist-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .therapist-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.75rem;
                    box-shadow: 0 6px 20px rgba(31, 45, 42, 0.06);
                }
                .therapist-card img {
                    width: 100%;
                    aspect-ratio: 1;
                    object-fit: cover;
                    border-radius: 12px;
                    background: #dfe8e3;
                }
                .credentials {
                    font-weight: 400;
                    opacity: 0.7;
                }
                .therapist-focus {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    list-style: none;
                    padding: 0;
                }
                .therapist-focus li {
                    background: #e6efe9;
                    color: #2f6b5f;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                }
                .therapist-languages {
                    font-size: 0.9rem;
                    opacity: 0.75;
                }
                "#}
            </style>
        </div>
    }
}
