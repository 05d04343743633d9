use super::super::{Model, Msg, SelectedImage};
use super::notice::Notice;
use crate::api;
use crate::flow::LoadingStage;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{PredictionResponse, RecommendationResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

use super::utils::first_image_file;

pub fn handle_image_selected(model: &mut Model, file: GlooFile) -> bool {
    // Replacing a prior selection drops it, which revokes its
    // preview URL.
    if model.flow.select(SelectedImage::new(file)) {
        model.clear_notice();
        true
    } else {
        false
    }
}

pub fn handle_remove_image(model: &mut Model) -> bool {
    model.flow.remove_selection()
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.flow.is_loading() {
        return false;
    }

    let file = match model.flow.begin() {
        Ok(image) => image.file.clone(),
        Err(_) => {
            show_notice(
                model,
                ctx,
                Notice::warning("No image selected", "Please select an image to analyze."),
            );
            return true;
        }
    };

    model.clear_notice();
    run_analysis(ctx, file);
    true
}

/// The sequential two-call analysis task: predict, then recommend.
/// Stage messages in between only drive the loading screen.
fn run_analysis(ctx: &Context<Model>, file: GlooFile) {
    let link = ctx.link().clone();

    spawn_local(async move {
        let prediction = match api::predict(&file).await {
            Ok(prediction) => prediction,
            Err(e) => {
                log::error!("Prediction request failed: {}", e);
                link.send_message(Msg::AnalysisFailed(e.to_string()));
                return;
            }
        };

        link.send_message(Msg::StageChanged(LoadingStage::Analyzing));
        link.send_message(Msg::StageChanged(LoadingStage::Recommending));

        let top_pest = match prediction.top() {
            Some(top) => top.class_name.clone(),
            None => {
                log::error!("Prediction service returned an empty prediction list");
                link.send_message(Msg::AnalysisFailed(
                    "The service could not identify a pest in this image.".to_string(),
                ));
                return;
            }
        };

        match api::recommend(&top_pest).await {
            Ok(recommendation) => {
                link.send_message(Msg::AnalysisComplete(prediction, recommendation))
            }
            Err(e) => {
                log::error!("Recommendation request failed: {}", e);
                link.send_message(Msg::AnalysisFailed(e.to_string()));
            }
        }
    });
}

pub fn handle_stage_changed(model: &mut Model, stage: LoadingStage) -> bool {
    model.flow.stage(stage)
}

pub fn handle_analysis_complete(
    model: &mut Model,
    ctx: &Context<Model>,
    prediction: PredictionResponse,
    recommendation: RecommendationResponse,
) -> bool {
    let summary = prediction.top().map(|top| {
        format!(
            "Detected {} with {}% confidence.",
            recommendation.pest_name,
            crate::flow::confidence_percent(top.confidence)
        )
    });

    if !model.flow.complete(prediction, recommendation) {
        return false;
    }

    model.active_tab = super::results::TreatmentTab::Organic;
    if let Some(message) = summary {
        show_notice(model, ctx, Notice::success("Analysis Complete", message));
    }
    true
}

pub fn handle_analysis_failed(model: &mut Model, ctx: &Context<Model>, message: String) -> bool {
    if !model.flow.fail() {
        return false;
    }
    show_notice(model, ctx, Notice::error("Analysis Failed", message));
    true
}

pub fn handle_back_to_upload(model: &mut Model) -> bool {
    model.flow.reset();
    model.clear_notice();
    model.active_tab = super::results::TreatmentTab::Organic;
    true
}

pub fn handle_show_notice(model: &mut Model, ctx: &Context<Model>, notice: Notice) -> bool {
    show_notice(model, ctx, notice);
    true
}

pub fn handle_dismiss_notice(model: &mut Model) -> bool {
    let had_notice = model.notice.is_some();
    model.clear_notice();
    had_notice
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = if model.theme == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    };
    super::theme::apply_theme(&model.theme);
    super::theme::store_theme(&model.theme);
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        submit_file_list(ctx, &file_list);
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            submit_file_list(ctx, &file_list);
            return true;
        }
    }
    false
}

/// Takes the first image file from a picker, drop, or paste source.
/// Anything without an `image/*` MIME type is skipped with a notice.
pub fn submit_file_list(ctx: &Context<Model>, file_list: &FileList) {
    match first_image_file(file_list) {
        Some(file) => ctx.link().send_message(Msg::ImageSelected(file)),
        None => {
            if let Some(file) = file_list.item(0) {
                log::warn!("Skipping non-image file: {}", file.name());
                ctx.link().send_message(Msg::ShowNotice(Notice::warning(
                    "Unsupported file",
                    format!("Skipped non-image file: {}", file.name()),
                )));
            }
        }
    }
}

/// Shows a transient notice, replacing any prior one and restarting
/// the auto-dismiss timer.
pub fn show_notice(model: &mut Model, ctx: &Context<Model>, notice: Notice) {
    model.clear_notice();
    model.notice = Some(notice);

    let link = ctx.link().clone();
    model.notice_timeout = Some(Timeout::new(5000, move || {
        link.send_message(Msg::DismissNotice);
    }));
}
