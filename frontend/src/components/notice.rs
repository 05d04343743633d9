use super::super::{Model, Msg};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Warning => "notice-warning",
            NoticeKind::Error => "notice-error",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "fa-solid fa-circle-check",
            NoticeKind::Warning => "fa-solid fa-triangle-exclamation",
            NoticeKind::Error => "fa-solid fa-circle-exclamation",
        }
    }
}

/// A transient toast shown over the current view.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub fn render_notice(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(notice) = &model.notice {
        html! {
            <div class={classes!("notice", notice.kind.css_class())}>
                <i class={notice.kind.icon_class()}></i>
                <div class="notice-body">
                    <p class="notice-title">{ &notice.title }</p>
                    <p class="notice-text">{ &notice.message }</p>
                </div>
                <button
                    class="notice-dismiss"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::DismissNotice)}
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
