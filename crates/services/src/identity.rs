//! Resolving which passport to show.
//!
//! Order: explicit value (flag or env), then the saved value, then an
//! interactive prompt. Explicit and prompted values are saved for the next
//! launch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::error::IdentityError;

/// Persists the last used email between launches.
pub trait IdentityStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `IdentityError` if the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, IdentityError>;

    /// # Errors
    ///
    /// Returns `IdentityError` if the backing store cannot be written.
    fn save(&self, email: &str) -> Result<(), IdentityError>;
}

/// Asks the user for an email when nothing else is available.
pub trait EmailPrompt {
    fn ask(&self) -> Option<String>;
}

/// Prompt that never answers, for non-interactive launches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl EmailPrompt for NoPrompt {
    fn ask(&self) -> Option<String> {
        None
    }
}

/// Returns the resolved email, or `None` if every source came up empty.
#[must_use]
pub fn resolve_email(
    explicit: Option<&str>,
    store: &dyn IdentityStore,
    prompt: &dyn EmailPrompt,
) -> Option<String> {
    if let Some(email) = explicit.and_then(non_blank) {
        remember(store, &email);
        return Some(email);
    }

    match store.load() {
        Ok(Some(saved)) => {
            if let Some(email) = non_blank(&saved) {
                return Some(email);
            }
        }
        Ok(None) => {}
        Err(err) => warn!(error = %err, "could not read saved identity"),
    }

    let typed = prompt.ask().as_deref().and_then(non_blank)?;
    remember(store, &typed);
    Some(typed)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn remember(store: &dyn IdentityStore, email: &str) {
    if let Err(err) = store.save(email) {
        warn!(error = %err, "could not save identity");
    }
}

//
// ─── STORES ───────────────────────────────────────────────────────────────────
//

/// Stores the email as a single line in a text file.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

/// Used when no home directory can be determined.
const FALLBACK_IDENTITY_FILE: &str = "passport-identity.txt";

impl FileIdentityStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/passport/identity.txt`, or a file in the working directory
    /// when there is no home directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        identity_path_under(dirs::home_dir())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn identity_path_under(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) => home.join(".config").join("passport").join("identity.txt"),
        None => PathBuf::from(FALLBACK_IDENTITY_FILE),
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<Option<String>, IdentityError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, email: &str) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{email}\n"))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    email: Mutex<Option<String>>,
}

impl InMemoryIdentityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Mutex::new(Some(email.into())),
        }
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn load(&self) -> Result<Option<String>, IdentityError> {
        Ok(self.email.lock().ok().and_then(|guard| guard.clone()))
    }

    fn save(&self, email: &str) -> Result<(), IdentityError> {
        if let Ok(mut guard) = self.email.lock() {
            *guard = Some(email.to_string());
        }
        Ok(())
    }
}
