use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

struct ProcessStep {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "One Call",
        description: "15 minutes. No application. Just a real conversation about what you need.",
    },
    ProcessStep {
        number: "02",
        title: "Your Options",
        description: "Within 48 hours: a curated set of options with terms spelled out in plain English.",
    },
    ProcessStep {
        number: "03",
        title: "Guided Clarity",
        description: "We walk you through each path. You choose. No pressure.",
    },
    ProcessStep {
        number: "04",
        title: "Capital, Delivered",
        description: "We handle the paperwork. You handle the business. Funded in 7-14 days.",
    },
];

// (title, tagline)
const SERVICES: &[(&str, &str)] = &[
    ("Term Loans", "Predictable financing for strategic investments"),
    ("SBA Loans", "Government-backed financing with favorable terms"),
    ("Lines of Credit", "Flexible capital when you need it"),
    ("Business Credit Building", "Build the foundation for better financing"),
    ("Alternative Lending", "Fast, flexible funding for unique situations"),
];

const STATS: &[(&str, &str)] = &[("$47M+", "Funded"), ("75+", "Lenders"), ("500+", "Clients")];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="home-hero">
                <span class="overline">{"Business Capital Advisory"}</span>
                <h1>{"Capital. "}<em class="accent">{"Privately."}</em></h1>
                <p class="hero-subtitle">
                    {"Term loans. SBA financing. Credit facilities. Matched to your ambition by advisors who understand the stakes."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="primary-button">
                        {"Talk to an Advisor"}
                    </Link<Route>>
                    <a href="#process" class="ghost-button">{"See How It Works"}</a>
                </div>
                <p class="stats-caption">{"Trusted across 40+ industries"}</p>
                <div class="hero-stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="stat">
                            <span class="stat-value">{*value}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    })}
                </div>
            </section>

            <section class="home-section" id="process">
                <h2>{"How it works"}</h2>
                <div class="process-grid">
                    { for PROCESS.iter().map(|step| html! {
                        <div class="process-step">
                            <span class="process-number">{step.number}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="home-section">
                <h2>{"Capital solutions"}</h2>
                <div class="services-list">
                    { for SERVICES.iter().map(|(title, tagline)| html! {
                        <div class="service-row">
                            <h3>{*title}</h3>
                            <p>{*tagline}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Ready when you are."}</h2>
                <p>{"Four short steps. An advisor reaches out within one business day."}</p>
                <Link<Route> to={Route::Contact} classes="primary-button">
                    {"Begin the Conversation"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    color: #f5f1e8;
                    background: #0d0d0d;
                }
                .home-hero {
                    text-align: center;
                    padding: 10rem 2rem 6rem;
                }
                .home-hero h1 {
                    font-size: 4.5rem;
                    line-height: 0.95;
                    margin-bottom: 2.5rem;
                }
                .overline {
                    display: block;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    font-size: 0.75rem;
                    color: #c9a961;
                    margin-bottom: 2rem;
                }
                .accent { color: #c9a961; }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 3.5rem;
                    font-size: 1.2rem;
                    color: rgba(245, 241, 232, 0.75);
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }
                .primary-button, .ghost-button {
                    padding: 0.9rem 1.8rem;
                    border-radius: 999px;
                    text-decoration: none;
                }
                .primary-button { background: #c9a961; color: #0d0d0d; }
                .ghost-button {
                    color: inherit;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .stats-caption {
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: rgba(245, 241, 232, 0.5);
                    margin-bottom: 1.5rem;
                }
                .hero-stats {
                    display: flex;
                    justify-content: center;
                    gap: 2.5rem;
                }
                .stat { display: flex; flex-direction: column; }
                .stat-value { font-size: 2rem; }
                .stat-label {
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(245, 241, 232, 0.5);
                }
                .home-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }
                .home-section h2, .home-cta h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2.5rem;
                }
                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .process-number { color: #c9a961; font-size: 0.85rem; }
                .process-step p, .service-row p { color: rgba(245, 241, 232, 0.65); }
                .service-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: baseline;
                    padding: 1.5rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .home-cta {
                    text-align: center;
                    padding: 6rem 2rem 8rem;
                }
                .home-cta p { margin-bottom: 2.5rem; color: rgba(245, 241, 232, 0.75); }
                @media (max-width: 768px) {
                    .home-hero h1 { font-size: 3rem; }
                    .process-grid { grid-template-columns: 1fr 1fr; }
                    .service-row { flex-direction: column; }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes="ghost-button">
                    {"Return to Home"}
                </Link<Route>>
            </section>
        </div>
    }
}
