use yew::prelude::*;
use yew_router::prelude::*;

use crate::directory::directory;
use crate::Route;

#[function_component(Leadership)]
pub fn leadership() -> Html {
    html! {
        <div class="leadership-page">
            <section class="leadership-hero">
                <h1>{"The people behind Mindbridge"}</h1>
                <p>{"Clinicians and operators who have spent their careers making therapy easier to reach."}</p>
            </section>
            <section class="leader-grid">
                { for directory().all().map(|leader| html! {
                    <Link<Route> to={Route::Leader { id: leader.id.to_string() }} classes="leader-card">
                        <img src={leader.photo} alt={leader.name} loading="lazy" />
                        <h2>{leader.name}</h2>
                        <p class="leader-card-title">{leader.title}</p>
                        <p class="leader-card-experience">{leader.experience}</p>
                    </Link<Route>>
                }) }
            </section>
            <style>
                {r#"
                .leadership-page {
                    padding: 7rem 2rem 4rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .leadership-hero {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .leader-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .leader-card {
                    display: block;
                    text-decoration: none;
                    color: inherit;
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 6px 20px rgba(31, 45, 42, 0.06);
                    transition: transform 0.2s ease;
                }
                .leader-card:hover {
                    transform: translateY(-4px);
                }
                .leader-card img {
                    width: 140px;
                    height: 140px;
                    border-radius: 50%;
                    object-fit: cover;
                    background: #dfe8e3;
                }
                .leader-card-title {
                    color: #2f6b5f;
                    font-weight: 600;
                }
                .leader-card-experience {
                    opacity: 0.7;
                }
                "#}
            </style>
        </div>
    }
}
