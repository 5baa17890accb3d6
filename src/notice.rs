//! User-facing notices raised by processing policy.
//!
//! Notices are fire-and-forget: the processor reports them on the view,
//! the caller hands them to a [`Notifier`], and nothing is returned.

use std::fmt;

use serde::Serialize;

/// A short-lived message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notice {
    /// A non-empty search left nothing to show.
    NoResults,

    /// A search term was entered on a screen that needs a filter field first.
    SelectFilterFirst,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoResults => "No results found",
            Self::SelectFilterFirst => "Select a filter first to search",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Delivers notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Writes notices to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(?notice, "raising notice");
        eprintln!("{notice}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notice>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[test]
    fn messages_match_display() {
        assert_eq!(Notice::NoResults.to_string(), "No results found");
        assert_eq!(
            Notice::SelectFilterFirst.to_string(),
            "Select a filter first to search"
        );
    }

    #[test]
    fn notifier_receives_each_notice() {
        let recorder = Recorder::default();
        for notice in [Notice::SelectFilterFirst, Notice::NoResults] {
            recorder.notify(notice);
        }
        assert_eq!(
            *recorder.0.borrow(),
            [Notice::SelectFilterFirst, Notice::NoResults]
        );
    }
}
