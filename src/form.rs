//! Waitlist form logic: the weak email check and the submission state
//! machine that drives the button presentation.

/// Accept anything non-empty that contains an '@' after trimming. This is
/// deliberately not full address validation; the store is the arbiter.
pub fn validate(raw: &str) -> Option<&str> {
    let email = raw.trim();
    if email.is_empty() || !email.contains('@') {
        None
    } else {
        Some(email)
    }
}

/// Submission lifecycle. Both terminal states revert to `Idle` after the
/// same fixed display window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle | Phase::Submitting => "Join Waitlist",
            Phase::Success => "Added \u{2713}",
            Phase::Failure => "Error!",
        }
    }

    /// Button background override; `None` restores the stylesheet color.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Phase::Idle | Phase::Submitting => None,
            Phase::Success => Some("#4CAF50"),
            Phase::Failure => Some("#FF4444"),
        }
    }

    /// The control stays disabled and dimmed from submit until the revert
    /// window closes, which also rules out overlapping submissions.
    pub fn disabled(self) -> bool {
        self != Phase::Idle
    }

    pub fn opacity(self) -> &'static str {
        if self == Phase::Idle {
            "1"
        } else {
            "0.7"
        }
    }
}
