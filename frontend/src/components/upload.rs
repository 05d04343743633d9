use super::super::{Model, Msg};
use super::header;
use super::notice::Notice;
use super::utils::{debounce, first_image_file, format_file_size};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement, MouseEvent};
use yew::prelude::*;

pub fn render_upload_page(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-page">
            { header::render_hero() }
            <main class="main-content">
                { render_upload_zone(model, ctx) }
            </main>
            { header::render_features() }
        </div>
    }
}

fn render_upload_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_image_file);

        // Reset so re-selecting the same file fires another change
        // event.
        input.set_value("");

        match file {
            Some(file) => Msg::ImageSelected(file),
            None => Msg::ShowNotice(Notice::warning(
                "Unsupported file",
                "Please choose an image file (JPG, PNG, WebP).",
            )),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                {
                    if model.flow.selected().is_some() {
                        render_preview(model, ctx)
                    } else {
                        render_placeholder()
                    }
                }
            </div>

            { render_analyze_button(model, ctx) }
        </div>
    }
}

fn trigger_file_input() {
    if let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("file-input"))
    {
        if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
            html_input.click();
        }
    }
}

fn render_placeholder() -> Html {
    html! {
        <div class="upload-placeholder">
            <i class="fa-solid fa-cloud-arrow-up"></i>
            <h3>{"Upload Pest Image"}</h3>
            <p>
                {"Upload an image of the pest on your crop to get an instant analysis \
                  and treatment plan. Supported formats: JPG, PNG, WebP"}
            </p>
            <button
                id="upload-button"
                class="choose-btn"
                onclick={debounce(300, trigger_file_input)}
            >
                <i class="fa-solid fa-camera"></i>{" Choose Image"}
            </button>
            <p class="upload-hint">{"or drag and drop your image here"}</p>
        </div>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(image) = model.flow.selected() else {
        return html! {};
    };

    let link = ctx.link();
    let handle_remove = link.callback(|e: MouseEvent| {
        e.stop_propagation();
        Msg::RemoveImage
    });

    html! {
        <div class="selected-preview">
            <div class="preview-frame">
                <img
                    src={image.preview_url.to_string()}
                    alt="Selected pest"
                />
                <button class="remove-btn" title="Remove this image" onclick={handle_remove}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
            <p class="preview-caption">
                { format!("{} ({})", image.file.name(), format_file_size(image.file.size())) }
            </p>
        </div>
    }
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    if model.flow.selected().is_none() {
        return html! {};
    }

    let link = ctx.link().clone();
    let is_loading = model.flow.is_loading();

    html! {
        <div class="analyze-row">
            <button
                class="analyze-btn"
                disabled={is_loading}
                onclick={debounce(300, move || link.callback(|_| Msg::Analyze).emit(()))}
            >
                {
                    if is_loading {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Pest"}</> }
                    }
                }
            </button>
        </div>
    }
}
