use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{PredictionResponse, RecommendationResponse};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod api;
mod components;
mod flow;

use components::handlers;
use components::loading::render_loading;
use components::notice::{render_notice, Notice};
use components::results::{render_results, TreatmentTab};
use components::theme;
use components::upload::render_upload_page;
use flow::{Flow, FlowState, LoadingStage};

/// The image currently staged for analysis. Dropping it revokes the
/// preview object URL.
pub struct SelectedImage {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

impl SelectedImage {
    pub fn new(file: GlooFile) -> Self {
        let preview_url = ObjectUrl::from(file.clone());
        Self { file, preview_url }
    }
}

pub enum Msg {
    // Image selection
    ImageSelected(GlooFile),
    RemoveImage,

    // Analysis flow
    Analyze,
    StageChanged(LoadingStage),
    AnalysisComplete(PredictionResponse, RecommendationResponse),
    AnalysisFailed(String),
    BackToUpload,

    // UI state
    ShowNotice(Notice),
    DismissNotice,
    SetDragging(bool),
    ToggleTheme,
    SwitchTab(TreatmentTab),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

pub struct Model {
    flow: Flow<SelectedImage>,
    notice: Option<Notice>,
    notice_timeout: Option<Timeout>,
    is_dragging: bool,
    theme: String,
    active_tab: TreatmentTab,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let stored = theme::stored_theme();
        theme::apply_theme(&stored);

        let mut model = Self {
            flow: Flow::new(),
            notice: None,
            notice_timeout: None,
            is_dragging: false,
            theme: stored,
            active_tab: TreatmentTab::Organic,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image selection
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, file),
            Msg::RemoveImage => handlers::handle_remove_image(self),

            // Analysis flow
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::StageChanged(stage) => handlers::handle_stage_changed(self, stage),
            Msg::AnalysisComplete(prediction, recommendation) => {
                handlers::handle_analysis_complete(self, ctx, prediction, recommendation)
            }
            Msg::AnalysisFailed(message) => handlers::handle_analysis_failed(self, ctx, message),
            Msg::BackToUpload => handlers::handle_back_to_upload(self),

            // UI state
            Msg::ShowNotice(notice) => handlers::handle_show_notice(self, ctx, notice),
            Msg::DismissNotice => handlers::handle_dismiss_notice(self),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
            Msg::SwitchTab(tab) => {
                self.active_tab = tab;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = match self.flow.state() {
            FlowState::Upload => render_upload_page(self, ctx),
            FlowState::Loading(stage) => render_loading(stage),
            FlowState::Results => render_results(self, ctx),
        };

        html! {
            <div class="app">
                { theme::render_theme_toggle(&self.theme, ctx.link()) }
                { render_notice(self, ctx) }
                { page }
            </div>
        }
    }
}

impl Model {
    fn clear_notice(&mut self) {
        if let Some(timeout) = self.notice_timeout.take() {
            timeout.cancel();
        }
        self.notice = None;
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Pest detection client starting...");
    yew::Renderer::<Model>::new().render();
}
