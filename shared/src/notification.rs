//! Transient notifications: severity styling and the per-notice lifecycle.
//!
//! A notice moves strictly forward through
//! `Pending -> Visible -> Dismissing -> Removed`; the close button may also
//! take a still-pending notice straight to `Dismissing`. The close button and
//! the auto-dismiss timer can both fire for the same notice; whichever arrives
//! second hits an illegal transition and is dropped.
//!
//! The board also decides the timing. [`NotificationBoard::push`] and
//! [`NotificationBoard::advance`] hand back the [`FollowUp`] steps the caller
//! must arm as timers, and every timer still pending for a notice is cancelled
//! once it is removed.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Delay between inserting a notice and marking it visible, so the entry
/// animation has a frame to start from.
pub const SHOW_DELAY_MS: u32 = 10;
/// A notice still visible after this long dismisses itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Time the exit animation gets before the element is dropped.
pub const REMOVAL_GRACE_MS: u32 = 300;

/// Identifier handed out by [`NotificationBoard::push`].
pub type NoticeId = u64;

/// A lifecycle step requested by a timer or the close button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Start the entry animation.
    Reveal,
    /// Start the exit animation.
    Dismiss,
    /// Drop the element.
    Remove,
}

/// A step to run `delay_ms` from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    /// Notice the step applies to.
    pub id: NoticeId,
    /// Delay from the moment the follow-up was handed out.
    pub delay_ms: u32,
    /// What to do when it fires.
    pub step: Step,
}

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral information.
    #[default]
    Info,
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Something the reader should look at.
    Warning,
}

impl Severity {
    /// Lowercase name used in CSS classes and on the JS boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon name (without the `fa-` prefix).
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
        }
    }

    /// Modifier class, e.g. `notification-success`.
    pub fn class_name(self) -> String {
        format!("notification-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for severity names outside the four known ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notification severity `{0}`")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Where a notice is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Inserted, entry animation not started yet.
    Pending,
    /// On screen.
    Visible,
    /// Exit animation running.
    Dismissing,
    /// Gone. Terminal.
    Removed,
}

/// A lifecycle step that is not allowed from the current state, or that
/// targets a notice the board no longer holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The notice exists but cannot move to the requested state.
    #[error("notice {id}: illegal transition {from:?} -> {to:?}")]
    Illegal {
        /// Notice the step was requested for.
        id: NoticeId,
        /// State the notice was in.
        from: Lifecycle,
        /// State that was requested.
        to: Lifecycle,
    },
    /// The notice was already removed from the board.
    #[error("notice {0} is not on the board")]
    Unknown(NoticeId),
}

impl Lifecycle {
    fn can_step_to(self, next: Lifecycle) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Visible)
                | (Self::Pending | Self::Visible, Self::Dismissing)
                | (Self::Dismissing, Self::Removed)
        )
    }
}

/// One notice on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: NoticeId,
    severity: Severity,
    message: String,
    lifecycle: Lifecycle,
}

impl Notice {
    /// Board-unique identifier.
    pub fn id(&self) -> NoticeId {
        self.id
    }

    /// Severity used for styling.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Text shown to the reader.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether the `show` class should be present.
    pub fn is_shown(&self) -> bool {
        self.lifecycle == Lifecycle::Visible
    }
}

/// Ordered set of live notices. Append order is display order; there is no
/// cap on how many can be live at once.
#[derive(Debug, Default)]
pub struct NotificationBoard {
    next_id: NoticeId,
    notices: Vec<Notice>,
}

impl NotificationBoard {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending notice. Returns its id together with the reveal and
    /// auto-dismiss steps, both timed from now.
    pub fn push(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
    ) -> (NoticeId, [FollowUp; 2]) {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            severity,
            message: message.into(),
            lifecycle: Lifecycle::Pending,
        });
        let follow_ups = [
            FollowUp {
                id,
                delay_ms: SHOW_DELAY_MS,
                step: Step::Reveal,
            },
            FollowUp {
                id,
                delay_ms: AUTO_DISMISS_MS,
                step: Step::Dismiss,
            },
        ];
        (id, follow_ups)
    }

    /// Run `step` for `id`. A dismissal hands back the removal step; the
    /// other steps need nothing further.
    pub fn advance(&mut self, id: NoticeId, step: Step) -> Result<Option<FollowUp>, TransitionError> {
        match step {
            Step::Reveal => self.reveal(id).map(|()| None),
            Step::Dismiss => self.dismiss(id).map(|()| {
                Some(FollowUp {
                    id,
                    delay_ms: REMOVAL_GRACE_MS,
                    step: Step::Remove,
                })
            }),
            Step::Remove => self.remove(id).map(|()| None),
        }
    }

    /// `Pending -> Visible`.
    pub fn reveal(&mut self, id: NoticeId) -> Result<(), TransitionError> {
        self.step(id, Lifecycle::Visible)
    }

    /// `Pending | Visible -> Dismissing`. The loser of a close-click / timeout race gets
    /// an [`TransitionError::Illegal`] back and should do nothing.
    pub fn dismiss(&mut self, id: NoticeId) -> Result<(), TransitionError> {
        self.step(id, Lifecycle::Dismissing)
    }

    /// `Dismissing -> Removed`, dropping the notice from the board.
    pub fn remove(&mut self, id: NoticeId) -> Result<(), TransitionError> {
        self.step(id, Lifecycle::Removed)?;
        self.notices.retain(|notice| notice.id != id);
        Ok(())
    }

    /// Look up a live notice.
    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.notices.iter().find(|notice| notice.id == id)
    }

    /// Live notices in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Number of live notices.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// `true` when nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    fn step(&mut self, id: NoticeId, to: Lifecycle) -> Result<(), TransitionError> {
        let notice = self
            .notices
            .iter_mut()
            .find(|notice| notice.id == id)
            .ok_or(TransitionError::Unknown(id))?;

        if !notice.lifecycle.can_step_to(to) {
            return Err(TransitionError::Illegal {
                id,
                from: notice.lifecycle,
                to,
            });
        }

        tracing::trace!(id, from = ?notice.lifecycle, ?to, "notice transition");
        notice.lifecycle = to;
        Ok(())
    }
}
