//! The session module sequences the two user-triggered operations (metadata
//! fetch and analysis) against the form store.
//!
//! Each operation is an independent Idle/Busy pair: starting one clears its
//! previous outcome, and every completion returns to Idle so the user can
//! always retry. The two operations are deliberately not cross-locked; they
//! touch disjoint network resources and mostly disjoint form fields.

use log::debug;

use crate::analyze::AnalysisError;
use crate::fetch::{FetchError, PageMeta};
use crate::form::{FormData, FormPatch, FormStore, StatePersistence};

/// Per-operation progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpState {
    #[default]
    Idle,
    Busy,
}

/// Outcome of the last metadata fetch, shown inline near the URL field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchNotice {
    /// Hard failure: proxy/network error or non-success status.
    Error(String),
    /// The page was fetched but carried neither tag. Non-blocking.
    NothingFound,
}

impl FetchNotice {
    pub fn message(&self) -> &str {
        match self {
            FetchNotice::Error(message) => message,
            FetchNotice::NothingFound => {
                "Could not find meta title or description on the page."
            }
        }
    }
}

/// Proof that an operation was started; completions must present it.
///
/// The embedded epoch invalidates completions that land after a `reset`.
#[derive(Debug)]
pub struct Ticket {
    epoch: u64,
}

/// Read-only snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub form: FormData,
    pub fetch_busy: bool,
    pub analyze_busy: bool,
    pub fetch_notice: Option<String>,
    pub analysis_error: Option<String>,
    pub report: Option<String>,
}

/// Owns the form store and the state of both operations.
pub struct Session<P: StatePersistence> {
    form: FormStore<P>,
    fetch_state: OpState,
    analyze_state: OpState,
    fetch_notice: Option<FetchNotice>,
    analysis_error: Option<String>,
    report: Option<String>,
    epoch: u64,
}

impl<P: StatePersistence> Session<P> {
    pub fn new(form: FormStore<P>) -> Self {
        Self {
            form,
            fetch_state: OpState::default(),
            analyze_state: OpState::default(),
            fetch_notice: None,
            analysis_error: None,
            report: None,
            epoch: 0,
        }
    }

    pub fn form(&self) -> &FormData {
        self.form.get()
    }

    /// Merges edited fields into the form. Editing the URL clears any
    /// lingering fetch notice, since it no longer describes the input.
    pub fn edit_form(&mut self, patch: FormPatch) {
        if patch.url.is_some() {
            self.fetch_notice = None;
        }
        self.form.set(patch);
    }

    /// Starts a metadata fetch.
    ///
    /// Returns `None` without leaving Idle when a fetch is already running
    /// or the URL field is empty; the empty-URL case records an inline
    /// notice instead.
    pub fn begin_fetch(&mut self) -> Option<Ticket> {
        if self.fetch_state == OpState::Busy {
            return None;
        }
        if self.form.get().url.is_empty() {
            self.fetch_notice = Some(FetchNotice::Error("Please enter a URL first.".to_string()));
            return None;
        }

        self.fetch_state = OpState::Busy;
        self.fetch_notice = None;
        Some(Ticket { epoch: self.epoch })
    }

    /// Applies a fetch outcome.
    ///
    /// Extracted values are written to the form even when empty; a page with
    /// neither tag yields a [`FetchNotice::NothingFound`] warning rather
    /// than an error. Stale tickets (issued before a reset) are discarded.
    pub fn complete_fetch(&mut self, ticket: Ticket, outcome: Result<PageMeta, FetchError>) {
        if ticket.epoch != self.epoch {
            debug!("Discarding fetch result from before the last reset");
            return;
        }
        self.fetch_state = OpState::Idle;

        match outcome {
            Ok(meta) => {
                let nothing_found = meta.is_empty();
                self.form.set(FormPatch {
                    current_title: Some(meta.title),
                    current_description: Some(meta.description),
                    ..FormPatch::default()
                });
                if nothing_found {
                    self.fetch_notice = Some(FetchNotice::NothingFound);
                }
            }
            Err(err) => {
                self.fetch_notice = Some(FetchNotice::Error(err.to_string()));
            }
        }
    }

    /// Starts an analysis, clearing the previous report and error.
    ///
    /// Returns `None` when an analysis is already running.
    pub fn begin_analysis(&mut self) -> Option<Ticket> {
        if self.analyze_state == OpState::Busy {
            return None;
        }

        self.analyze_state = OpState::Busy;
        self.report = None;
        self.analysis_error = None;
        Some(Ticket { epoch: self.epoch })
    }

    /// Stores the analysis outcome: the Markdown report verbatim on success,
    /// the normalized message on failure. Stale tickets are discarded.
    pub fn complete_analysis(&mut self, ticket: Ticket, outcome: Result<String, AnalysisError>) {
        if ticket.epoch != self.epoch {
            debug!("Discarding analysis result from before the last reset");
            return;
        }
        self.analyze_state = OpState::Idle;

        match outcome {
            Ok(report) => self.report = Some(report),
            Err(err) => self.analysis_error = Some(err.to_string()),
        }
    }

    /// Clears the form, notices and report unconditionally, and invalidates
    /// any operation still in flight.
    pub fn reset(&mut self) {
        self.form.reset();
        self.fetch_notice = None;
        self.analysis_error = None;
        self.report = None;
        self.fetch_state = OpState::Idle;
        self.analyze_state = OpState::Idle;
        self.epoch += 1;
    }

    pub fn fetch_notice(&self) -> Option<&FetchNotice> {
        self.fetch_notice.as_ref()
    }

    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    pub fn analysis_error(&self) -> Option<&str> {
        self.analysis_error.as_deref()
    }

    /// Snapshots the session for the presentation layer.
    pub fn view(&self) -> SessionView {
        SessionView {
            form: self.form.get().clone(),
            fetch_busy: self.fetch_state == OpState::Busy,
            analyze_busy: self.analyze_state == OpState::Busy,
            fetch_notice: self.fetch_notice.as_ref().map(|n| n.message().to_string()),
            analysis_error: self.analysis_error.clone(),
            report: self.report.clone(),
        }
    }
}
