use yew::prelude::*;

/// Hero banner shown above the upload zone.
pub fn render_hero() -> Html {
    html! {
        <header class="hero">
            <h1>{"AI-Powered Pest Detection"}</h1>
            <p class="subtitle">
                {"Upload an image of any pest affecting your crops and get instant \
                  identification plus personalized treatment recommendations"}
            </p>
            <div class="hero-points">
                <span><i class="fa-solid fa-bolt"></i>{" Instant Analysis"}</span>
                <span><i class="fa-solid fa-leaf"></i>{" Organic & Chemical Solutions"}</span>
                <span><i class="fa-solid fa-shield"></i>{" Prevention Strategies"}</span>
            </div>
        </header>
    }
}

pub fn render_features() -> Html {
    html! {
        <section class="features">
            <div class="feature">
                <i class="fa-solid fa-bug"></i>
                <h3>{"Accurate Identification"}</h3>
                <p>{"A classifier trained on thousands of pest images for precise identification"}</p>
            </div>
            <div class="feature">
                <i class="fa-solid fa-seedling"></i>
                <h3>{"Eco-Friendly Options"}</h3>
                <p>{"Prioritized organic and IPM solutions to protect your crops naturally"}</p>
            </div>
            <div class="feature">
                <i class="fa-solid fa-book-open"></i>
                <h3>{"Expert Guidance"}</h3>
                <p>{"Comprehensive treatment plans and prevention strategies from agricultural experts"}</p>
            </div>
        </section>
    }
}
