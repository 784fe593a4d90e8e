#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use passport_core::PassState;
use tracing::info;

use super::components::{DetailsPopup, LevelBadge, ProgressBar, StationGallery, UnlockPanel};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StationDetailVm, UnlockFormVm, render_pass, render_station_patch};

#[component]
pub fn PassportView() -> Element {
    let ctx = use_context::<AppContext>();
    let passport = ctx.passport();
    let email = ctx.email();

    let resource = use_resource(move || {
        let passport = passport.clone();
        let email = email.clone();
        async move {
            let Some(email) = email else {
                return Err(ViewError::IdentityMissing);
            };
            passport.load(&email).await.map_err(ViewError::from)
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page passport-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "message-area", "Loading passport..." }
                },
                ViewState::Error(err) => rsx! {
                    div { id: "message-area", class: "message-area",
                        p { class: "message-error", "{err.message()}" }
                    }
                },
                ViewState::Ready(pass) => rsx! {
                    PassportPage { initial: pass }
                },
            }
        }
    }
}

/// The loaded passport.
///
/// Renders everything once from `initial`; after a confirmed unlock only the
/// affected bubble, the badge and the progress bar are patched.
#[component]
fn PassportPage(initial: PassState) -> Element {
    let ctx = use_context::<AppContext>();
    let passport = ctx.passport();
    let fallback_email = ctx.email().unwrap_or_default();

    let pass = use_signal(|| initial.clone());
    let view = use_signal(|| render_pass(&initial));
    let mut form = use_signal(UnlockFormVm::new);
    let mut selected = use_signal(|| None::<StationDetailVm>);

    let submit = use_callback(move |()| {
        let Some(code) = form.write().begin() else {
            return;
        };
        let passport = passport.clone();
        let email = {
            let email = pass.read().user().email.clone();
            if email.is_empty() {
                fallback_email.clone()
            } else {
                email
            }
        };
        let mut pass = pass;
        let mut view = view;
        let mut form = form;
        spawn(async move {
            match passport.submit_unlock(&email, &code).await {
                Ok(result) => {
                    let applied = pass.write().apply_unlock(&result);
                    info!(station = ?result.unlocked_station, ?applied, "unlock confirmed");
                    if applied.changed_state() {
                        let patch = result
                            .unlocked_station
                            .as_deref()
                            .and_then(|name| render_station_patch(&pass.read(), name));
                        if let Some(patch) = patch {
                            view.write().apply_patch(patch);
                        }
                    }
                    form.write().succeed(result.message);
                }
                Err(err) => {
                    info!(error = %err, "unlock not accepted");
                    form.write().fail(err.to_string());
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<UnlockTestHandles>() {
                handles.register(submit, form);
            }
        }
    }

    let page = view.read().clone();

    rsx! {
        header { class: "view-header",
            h2 { id: "welcome-title", class: "view-title", "{page.title}" }
            LevelBadge { badge: page.badge }
        }
        ProgressBar { progress: page.progress }
        StationGallery {
            stations: page.stations,
            onselect: move |detail| selected.set(Some(detail)),
        }
        UnlockPanel {
            form: form.read().clone(),
            oncode: move |code| form.write().set_code(code),
            onsubmit: move |()| submit.call(()),
        }
        if let Some(detail) = selected() {
            DetailsPopup { detail, onclose: move |()| selected.set(None) }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct UnlockTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    form: Rc<RefCell<Option<Signal<UnlockFormVm>>>>,
}

#[cfg(test)]
impl UnlockTestHandles {
    pub(crate) fn register(&self, submit: Callback<()>, form: Signal<UnlockFormVm>) {
        *self.submit.borrow_mut() = Some(submit);
        *self.form.borrow_mut() = Some(form);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("unlock submit registered")
    }

    pub(crate) fn form(&self) -> Signal<UnlockFormVm> {
        (*self.form.borrow()).expect("unlock form registered")
    }
}
