use log::debug;
use serde::Serialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::directory::{directory, Directory, LeaderRecord};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Qualifications,
    Achievements,
    Specialties,
}

impl SectionKind {
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Qualifications => "Qualifications",
            SectionKind::Achievements => "Achievements",
            SectionKind::Specialties => "Specialties",
        }
    }

    fn class(self) -> &'static str {
        match self {
            SectionKind::Qualifications => "profile-qualifications",
            SectionKind::Achievements => "profile-achievements",
            SectionKind::Specialties => "profile-specialties",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListSection {
    pub kind: SectionKind,
    pub items: &'static [&'static str],
}

/// Optional sections that actually have something to show, in page order.
pub fn list_sections(leader: &LeaderRecord) -> Vec<ListSection> {
    [
        (SectionKind::Qualifications, leader.qualifications),
        (SectionKind::Achievements, leader.achievements),
        (SectionKind::Specialties, leader.specialties),
    ]
    .into_iter()
    .filter_map(|(kind, items)| {
        items
            .filter(|items| !items.is_empty())
            .map(|items| ListSection { kind, items })
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct EscapeAction {
    pub label: &'static str,
    pub target: Route,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackView {
    pub heading: &'static str,
    pub message: &'static str,
    pub action: EscapeAction,
}

impl Default for FallbackView {
    fn default() -> Self {
        Self {
            heading: "Profile not found",
            message: "We couldn't find the person you were looking for.",
            action: EscapeAction {
                label: "Back to home",
                target: Route::Home,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaderProfileView {
    Found {
        leader: &'static LeaderRecord,
        sections: Vec<ListSection>,
    },
    Fallback(FallbackView),
}

impl LeaderProfileView {
    /// A missing route id and an unknown id both end in the fallback.
    pub fn resolve(id: Option<&str>, directory: &Directory) -> Self {
        match id.and_then(|id| directory.find_by_id(id)) {
            Some(leader) => LeaderProfileView::Found {
                leader,
                sections: list_sections(leader),
            },
            None => {
                debug!("No leader profile for id {:?}", id);
                LeaderProfileView::Fallback(FallbackView::default())
            }
        }
    }
}

#[derive(Serialize)]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "knowsAbout", skip_serializing_if = "Option::is_none")]
    knows_about: Option<&'a [&'a str]>,
}

/// schema.org `Person` block for search engines. `</` is written as `<\/` so
/// the text can never close the surrounding `<script>` element.
pub fn person_json_ld(leader: &LeaderRecord) -> String {
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: leader.name,
        job_title: leader.title,
        image: leader.photo,
        description: leader.bio.first().copied(),
        knows_about: leader.specialties.filter(|items| !items.is_empty()),
    };
    serde_json::to_string(&schema)
        .map(|json| json.replace("</", "<\\/"))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct LeaderProfileProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(LeaderProfile)]
pub fn leader_profile(props: &LeaderProfileProps) -> Html {
    let navigator = use_navigator();

    let content = match LeaderProfileView::resolve(props.id.as_deref(), directory()) {
        LeaderProfileView::Found { leader, sections } => render_profile(leader, &sections),
        LeaderProfileView::Fallback(fallback) => {
            let target = fallback.action.target.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&target);
                }
            });
            html! {
                <div class="profile-fallback">
                    <h1>{fallback.heading}</h1>
                    <p>{fallback.message}</p>
                    <button class="profile-fallback-action" {onclick}>
                        {fallback.action.label}
                    </button>
                </div>
            }
        }
    };

    html! {
        <div class="leader-profile-page">
            {content}
            <style>
                {r#"
                .leader-profile-page {
                    padding: 7rem 2rem 4rem;
                    max-width: 900px;
                    margin: 0 auto;
                }
                .profile-header {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                    margin-bottom: 2.5rem;
                }
                .profile-photo {
                    width: 180px;
                    height: 180px;
                    border-radius: 50%;
                    object-fit: cover;
                    background: #dfe8e3;
                }
                .profile-title {
                    color: #2f6b5f;
                    font-weight: 600;
                    margin: 0.25rem 0;
                }
                .profile-meta {
                    opacity: 0.75;
                    margin: 0.25rem 0;
                }
                .profile-bio p {
                    line-height: 1.7;
                }
                .profile-list-section ul {
                    padding-left: 1.25rem;
                    line-height: 1.8;
                }
                .profile-fallback {
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .profile-fallback-action {
                    background: #2f6b5f;
                    color: #fff;
                    border: none;
                    padding: 0.8rem 1.6rem;
                    border-radius: 999px;
                    cursor: pointer;
                    font-size: 1rem;
                }
                @media (max-width: 640px) {
                    .profile-header {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn render_profile(leader: &LeaderRecord, sections: &[ListSection]) -> Html {
    html! {
        <article class="leader-profile">
            <script type="application/ld+json">{person_json_ld(leader)}</script>
            <header class="profile-header">
                <img class="profile-photo" src={leader.photo} alt={leader.name} />
                <div>
                    <h1>{leader.name}</h1>
                    <p class="profile-title">{leader.title}</p>
                    <p class="profile-meta">{leader.role}</p>
                    <p class="profile-meta">{leader.experience}</p>
                </div>
            </header>
            <section class="profile-bio">
                { for leader.bio.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            </section>
            { for sections.iter().map(|section| html! {
                <section class={classes!("profile-list-section", section.kind.class())}>
                    <h2>{section.kind.heading()}</h2>
                    <ul>
                        { for section.items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </section>
            }) }
            <Link<Route> to={Route::Leaders} classes="profile-back-link">
                {"← All leaders"}
            </Link<Route>>
        </article>
    }
}
