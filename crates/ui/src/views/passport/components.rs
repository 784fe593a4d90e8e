use dioxus::prelude::*;

use crate::vm::{BadgeVm, ProgressVm, StationBubbleVm, StationDetailVm, UnlockFormVm};

#[component]
pub fn LevelBadge(badge: BadgeVm) -> Element {
    rsx! {
        if badge.visible {
            span { id: "level-badge", class: "{badge.class}", "{badge.label}" }
        }
    }
}

#[component]
pub fn ProgressBar(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { id: "progress-bar-fill", class: "progress-fill", style: "{progress.fill_style()}" }
                span {
                    id: "progress-marker",
                    class: "progress-marker",
                    style: "{progress.marker_style()}",
                    "{progress.glyph}"
                }
            }
            p { id: "progress-label", class: "progress-label", "{progress.label}" }
        }
    }
}

#[component]
pub fn StationGallery(
    stations: Vec<StationBubbleVm>,
    onselect: EventHandler<StationDetailVm>,
) -> Element {
    rsx! {
        div { id: "cluster-container", class: "cluster-container",
            for bubble in stations {
                StationBubble { key: "{bubble.name}", bubble: bubble.clone(), onselect }
            }
        }
    }
}

// Props compare by value, so only the bubble whose vm changed re-renders.
#[component]
fn StationBubble(bubble: StationBubbleVm, onselect: EventHandler<StationDetailVm>) -> Element {
    let detail = bubble.detail();
    rsx! {
        div {
            class: "{bubble.class()}",
            "data-station-name": "{bubble.name}",
            onclick: move |_| onselect.call(detail.clone()),
            div { class: "station-image", style: "{bubble.image_style()}" }
            div { class: "station-label", "{bubble.name}" }
        }
    }
}

#[component]
pub fn DetailsPopup(detail: StationDetailVm, onclose: EventHandler<()>) -> Element {
    rsx! {
        div {
            id: "details-popup",
            class: "details-popup visible",
            onclick: move |_| onclose.call(()),
            div {
                class: "popup-content",
                onclick: move |evt| evt.stop_propagation(),
                h3 { id: "popup-title", "{detail.title}" }
                p { id: "popup-description", "{detail.description}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| onclose.call(()),
                    "Close"
                }
            }
        }
    }
}

#[component]
pub fn UnlockPanel(
    form: UnlockFormVm,
    oncode: EventHandler<String>,
    onsubmit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "unlock-panel",
            input {
                id: "code-input",
                class: "code-input",
                r#type: "text",
                placeholder: "Enter station code",
                value: "{form.code}",
                oninput: move |evt| oncode.call(evt.value()),
                onkeyup: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        onsubmit.call(());
                    }
                },
            }
            button {
                id: "unlock-button",
                class: "btn btn-primary",
                r#type: "button",
                disabled: form.busy,
                onclick: move |_| onsubmit.call(()),
                "{form.button_label()}"
            }
            if let Some(message) = form.message.as_ref() {
                p { id: "unlock-message", class: "{message.class()}", "{message.text}" }
            }
        }
    }
}
