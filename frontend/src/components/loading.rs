use crate::flow::LoadingStage;
use yew::prelude::*;

fn stage_info(stage: LoadingStage) -> (&'static str, &'static str, &'static str) {
    match stage {
        LoadingStage::Predicting => (
            "fa-solid fa-microscope",
            "Analyzing Image",
            "The classifier is examining your image to identify the pest...",
        ),
        LoadingStage::Analyzing => (
            "fa-solid fa-brain",
            "Processing Results",
            "Comparing with the pest database and determining confidence levels...",
        ),
        LoadingStage::Recommending => (
            "fa-solid fa-bolt",
            "Generating Recommendations",
            "Preparing treatment plans and prevention strategies...",
        ),
    }
}

pub fn render_loading(stage: LoadingStage) -> Html {
    let (icon, title, description) = stage_info(stage);

    html! {
        <div class="loading-screen">
            <div class="loading-icon">
                <i class={icon}></i>
                <div class="loading-ring"></div>
            </div>

            <h2>{ title }</h2>
            <p class="loading-description">{ description }</p>

            <div class="loading-dots">
                <span></span>
                <span></span>
                <span></span>
            </div>

            <div class="loading-tip">
                <p>
                    <strong>{"Tip: "}</strong>
                    {"For best results, ensure your image shows the pest clearly \
                      with good lighting and minimal background distractions."}
                </p>
            </div>
        </div>
    }
}
