use super::super::{Model, Msg};
use crate::flow::{confidence_percent, ConfidenceLevel};
use shared::{Prediction, RecommendationResponse};
use yew::prelude::*;

/// Which treatment list is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreatmentTab {
    Organic,
    Chemical,
}

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    // Results state implies both payloads are present; the flow never
    // renders this view with only one.
    let Some((prediction, recommendation)) = model.flow.results() else {
        return html! {};
    };

    let link = ctx.link();
    let back = link.callback(|_| Msg::BackToUpload);
    let preview_url = model
        .flow
        .selected()
        .map(|image| image.preview_url.to_string());

    html! {
        <div class="results-page">
            <div class="results-header">
                <button class="back-btn" onclick={back.clone()}>
                    <i class="fa-solid fa-arrow-left"></i>{" New Analysis"}
                </button>
                <h1>{"Pest Analysis Results"}</h1>
            </div>

            { render_identification(preview_url, prediction.top(), recommendation) }

            <div class="card">
                <h2 class="card-title">
                    <i class="fa-solid fa-triangle-exclamation"></i>{" About This Pest"}
                </h2>
                <p class="pest-info">{ &recommendation.pest_info }</p>
            </div>

            { render_treatments(model, ctx, recommendation) }
            { render_prevention(recommendation) }

            <div class="results-footer">
                <button class="analyze-btn" onclick={back}>
                    {"Analyze Another Image"}
                </button>
            </div>
        </div>
    }
}

fn render_identification(
    preview_url: Option<String>,
    top: Option<&Prediction>,
    recommendation: &RecommendationResponse,
) -> Html {
    html! {
        <div class="card">
            <h2 class="card-title">
                <i class="fa-solid fa-camera"></i>{" Pest Identification"}
            </h2>
            <div class="identification-grid">
                <div class="uploaded-image">
                    <h3>{"Your Image"}</h3>
                    {
                        if let Some(url) = preview_url {
                            html! { <img src={url} alt="Uploaded pest" /> }
                        } else {
                            html! { <p class="no-preview">{"Preview unavailable"}</p> }
                        }
                    }
                </div>
                <div class="identification-details">
                    <div class="pest-headline">
                        <h2>{ &recommendation.pest_name }</h2>
                        { top.map(render_confidence_badge).unwrap_or_default() }
                    </div>
                    { top.map(render_confidence_details).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

fn render_confidence_badge(top: &Prediction) -> Html {
    let level = ConfidenceLevel::from_confidence(top.confidence);
    html! {
        <span class={classes!("badge", level.css_class())}>{ level.label() }</span>
    }
}

fn render_confidence_details(top: &Prediction) -> Html {
    let level = ConfidenceLevel::from_confidence(top.confidence);
    html! {
        <div class="confidence-details">
            <p>
                <i class="fa-solid fa-chart-column"></i>
                <span>{" Confidence Score: "}</span>
                <strong class={level.css_class()}>
                    { format!("{}%", confidence_percent(top.confidence)) }
                </strong>
            </p>
            <div class="analysis-meta">
                <div>
                    <span class="meta-label">{"Detection Method:"}</span>
                    <p>{"AI Image Recognition"}</p>
                </div>
                <div>
                    <span class="meta-label">{"Classification:"}</span>
                    <p class="class-name">{ top.class_name.replace('_', " ") }</p>
                </div>
            </div>
        </div>
    }
}

fn render_treatments(
    model: &Model,
    ctx: &Context<Model>,
    recommendation: &RecommendationResponse,
) -> Html {
    let link = ctx.link();

    let tab_button = |tab: TreatmentTab, icon: &'static str, label: &'static str| {
        let active = model.active_tab == tab;
        html! {
            <button
                class={classes!("tab-btn", active.then_some("active"))}
                onclick={link.callback(move |_| Msg::SwitchTab(tab))}
            >
                <i class={icon}></i>{ format!(" {}", label) }
            </button>
        }
    };

    html! {
        <div class="card">
            <h2 class="card-title">
                <i class="fa-solid fa-flask"></i>{" Treatment Recommendations"}
            </h2>

            <div class="tab-list">
                { tab_button(TreatmentTab::Organic, "fa-solid fa-leaf", "Organic/IPM Solutions") }
                { tab_button(TreatmentTab::Chemical, "fa-solid fa-flask", "Chemical Solutions") }
            </div>

            {
                match model.active_tab {
                    TreatmentTab::Organic => render_organic_solutions(recommendation),
                    TreatmentTab::Chemical => render_chemical_solutions(recommendation),
                }
            }
        </div>
    }
}

fn render_organic_solutions(recommendation: &RecommendationResponse) -> Html {
    if recommendation.ipm_solutions.is_empty() {
        return html! {
            <p class="empty-list">{"No organic treatments listed for this pest."}</p>
        };
    }

    html! {
        <div class="solution-list">
            { for recommendation.ipm_solutions.iter().map(|solution| html! {
                <div class="solution-item organic">
                    <i class="fa-solid fa-circle-check"></i>
                    <p>{ solution }</p>
                </div>
            })}
        </div>
    }
}

fn render_chemical_solutions(recommendation: &RecommendationResponse) -> Html {
    if recommendation.chemical_solutions.is_empty() {
        return html! {
            <p class="empty-list">{"No chemical treatments listed for this pest."}</p>
        };
    }

    html! {
        <table class="chemical-table">
            <thead>
                <tr>
                    <th>{"Pesticide (Active Ingredient)"}</th>
                    <th>{"Recommended Dosage"}</th>
                    <th>{"Safety Notes"}</th>
                </tr>
            </thead>
            <tbody>
                { for recommendation.chemical_solutions.iter().map(|solution| html! {
                    <tr>
                        <td class="pesticide">{ &solution.pesticide }</td>
                        <td>{ &solution.dosage }</td>
                        <td class="notes">{ &solution.notes }</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn render_prevention(recommendation: &RecommendationResponse) -> Html {
    html! {
        <div class="card">
            <h2 class="card-title">
                <i class="fa-solid fa-shield"></i>{" Prevention Tips"}
            </h2>
            <div class="solution-list">
                { for recommendation.prevention_tips.iter().map(|tip| html! {
                    <div class="solution-item prevention">
                        <i class="fa-solid fa-shield"></i>
                        <p>{ tip }</p>
                    </div>
                })}
            </div>
        </div>
    }
}
