#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockTone {
    Success,
    Attention,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockMessageVm {
    pub text: String,
    pub tone: UnlockTone,
}

impl UnlockMessageVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            UnlockTone::Success => "unlock-message success",
            UnlockTone::Attention => "unlock-message attention",
        }
    }
}

/// State of the unlock control.
///
/// At most one submission is in flight: `begin` refuses while busy, and
/// both `succeed` and `fail` release the control again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnlockFormVm {
    pub code: String,
    pub busy: bool,
    pub message: Option<UnlockMessageVm>,
}

impl UnlockFormVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.busy { "Checking..." } else { "Unlock" }
    }

    /// Marks the control busy and returns the trimmed code to submit.
    ///
    /// Returns `None` (and changes nothing) while a request is in flight or
    /// when the code is blank.
    pub fn begin(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        let code = self.code.trim();
        if code.is_empty() {
            return None;
        }
        let code = code.to_string();
        self.busy = true;
        self.message = None;
        Some(code)
    }

    /// Clears the code and shows `message` in the success tone.
    pub fn succeed(&mut self, message: String) {
        self.busy = false;
        self.code.clear();
        self.message = Some(UnlockMessageVm {
            text: message,
            tone: UnlockTone::Success,
        });
    }

    /// Keeps the code for correction and shows `message` in the attention tone.
    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.message = Some(UnlockMessageVm {
            text: message,
            tone: UnlockTone::Attention,
        });
    }
}
