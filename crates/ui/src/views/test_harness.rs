use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use passport_core::{Station, UnlockResult};
use services::{GatewayError, InitialResponse, PassportService, RemoteGateway, UserDto};
use tokio::sync::Notify;

use crate::context::{UiApp, build_app_context};
use crate::views::PassportView;
use crate::views::passport::UnlockTestHandles;
use crate::vm::UnlockFormVm;

/// The one code the fake backend accepts; it unlocks station "A".
pub const VALID_CODE: &str = "alpha";

/// What the fake backend answers to `fetch_initial`.
#[derive(Clone)]
pub enum Backend {
    Passport {
        level: &'static str,
        stations: Vec<&'static str>,
        stamped: Vec<&'static str>,
    },
    Rejects(&'static str),
    Unreachable,
}

struct FakeGateway {
    backend: Backend,
    /// When set, unlock answers wait for one `notify_one`.
    gate: Option<Arc<Notify>>,
    unlock_calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl RemoteGateway for FakeGateway {
    async fn fetch_initial(&self, email: &str) -> Result<InitialResponse, GatewayError> {
        match &self.backend {
            Backend::Passport {
                level,
                stations,
                stamped,
            } => Ok(InitialResponse {
                success: true,
                error: None,
                user: Some(UserDto {
                    name: "Ada".into(),
                    email: email.into(),
                    level: (*level).into(),
                }),
                stations: stations
                    .iter()
                    .map(|name| {
                        Station::new(
                            *name,
                            format!("About {name}"),
                            format!("{name}-locked.png"),
                            format!("{name}-unlocked.png"),
                        )
                    })
                    .collect(),
                stamped: stamped.iter().map(|name| (*name).to_string()).collect(),
            }),
            Backend::Rejects(error) => Ok(InitialResponse {
                success: false,
                error: Some((*error).into()),
                ..InitialResponse::default()
            }),
            Backend::Unreachable => Err(GatewayError::MissingField("body")),
        }
    }

    async fn submit_unlock(&self, _email: &str, code: &str) -> Result<UnlockResult, GatewayError> {
        self.unlock_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if code == VALID_CODE {
            Ok(UnlockResult {
                unlocked_icon: Some("A-unlocked.png".into()),
                ..UnlockResult::unlocked("A", "Welcome to A")
            })
        } else {
            Ok(UnlockResult::rejected("Invalid code"))
        }
    }
}

struct TestApp {
    email: Option<String>,
    passport: Arc<PassportService>,
}

impl UiApp for TestApp {
    fn email(&self) -> Option<String> {
        self.email.clone()
    }

    fn passport(&self) -> Arc<PassportService> {
        Arc::clone(&self.passport)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    unlock_handles: UnlockTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let handles = props.unlock_handles.clone();
    use_context_provider(|| handles);
    rsx! { PassportView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    unlock_handles: UnlockTestHandles,
    unlock_calls: Arc<AtomicUsize>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Lets spawned futures (initial fetch, unlock requests) finish and re-renders.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Types `code` into the unlock input.
    pub fn enter_code(&mut self, code: &str) {
        let mut form = self.unlock_handles.form();
        self.dom.in_runtime(|| form.write().set_code(code.to_string()));
        drive_dom(&mut self.dom);
    }

    /// Presses the unlock button.
    pub fn submit(&mut self) {
        let submit = self.unlock_handles.submit();
        self.dom.in_runtime(|| submit.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn form(&self) -> UnlockFormVm {
        let form = self.unlock_handles.form();
        self.dom.in_runtime(|| form.peek().clone())
    }

    pub fn unlock_calls(&self) -> usize {
        self.unlock_calls.load(Ordering::SeqCst)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(email: Option<&str>, backend: Backend) -> ViewHarness {
    build_harness(email, backend, None)
}

/// Like `setup_view_harness`, but unlock answers are held until `gate` is notified.
pub fn setup_gated_harness(
    email: Option<&str>,
    backend: Backend,
    gate: Arc<Notify>,
) -> ViewHarness {
    build_harness(email, backend, Some(gate))
}

fn build_harness(email: Option<&str>, backend: Backend, gate: Option<Arc<Notify>>) -> ViewHarness {
    let unlock_calls = Arc::new(AtomicUsize::new(0));
    let gateway = FakeGateway {
        backend,
        gate,
        unlock_calls: Arc::clone(&unlock_calls),
    };
    let passport = Arc::new(PassportService::new(Arc::new(gateway)));
    let app = Arc::new(TestApp {
        email: email.map(str::to_string),
        passport,
    });
    let unlock_handles = UnlockTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            unlock_handles: unlock_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        unlock_handles,
        unlock_calls,
    }
}
