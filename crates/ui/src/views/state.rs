use dioxus::prelude::*;
use services::LoadError;

/// Blocking failures of the initial load. None of them leaves a partial UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    IdentityMissing,
    FetchFailed(String),
    BackendRejected(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::IdentityMissing => LoadError::IdentityMissing.to_string(),
            Self::FetchFailed(cause) => format!("A critical error occurred: {cause}"),
            Self::BackendRejected(reason) => format!("Error: {reason}"),
        }
    }
}

impl From<LoadError> for ViewError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::IdentityMissing => Self::IdentityMissing,
            LoadError::BackendRejected(reason) => Self::BackendRejected(reason),
            LoadError::FetchFailed(cause) => Self::FetchFailed(cause.to_string()),
            other => Self::FetchFailed(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
