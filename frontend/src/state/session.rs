use std::cell::{Ref, RefCell};
use std::rc::Rc;

use shared::{DayTypeChoice, MonthRef};

use super::calendar_editor::{AbsenceCatalog, CalendarEditor, LoadTicket, NavUnit, UpdateRejected};
use crate::services::api::CalendarApi;

const COMPONENT: &str = "calendar-session";

/// How a confirm action ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Applied,
    Rejected(UpdateRejected),
    Failed(String),
}

/// Drives a [`CalendarEditor`] against a [`CalendarApi`]
///
/// Single-threaded: the editor sits in a `RefCell` and no borrow is held
/// across an `.await`, so concurrent operations interleave only at network
/// calls. Cloning is cheap and shares the same editor.
pub struct CalendarSession<A> {
    api: Rc<A>,
    editor: Rc<RefCell<CalendarEditor>>,
    on_change: Rc<dyn Fn()>,
    on_update_failed: Rc<dyn Fn(&str)>,
}

impl<A> Clone for CalendarSession<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            editor: Rc::clone(&self.editor),
            on_change: Rc::clone(&self.on_change),
            on_update_failed: Rc::clone(&self.on_update_failed),
        }
    }
}

impl<A: CalendarApi> CalendarSession<A> {
    pub fn new(api: A, month: MonthRef) -> Self {
        Self {
            api: Rc::new(api),
            editor: Rc::new(RefCell::new(CalendarEditor::new(month))),
            on_change: Rc::new(|| {}),
            on_update_failed: Rc::new(|_| {}),
        }
    }

    /// Called after every state change (re-render trigger)
    pub fn with_change_listener(mut self, listener: impl Fn() + 'static) -> Self {
        self.on_change = Rc::new(listener);
        self
    }

    /// Called with the user-facing message when a bulk update fails
    pub fn with_update_failure_reporter(mut self, reporter: impl Fn(&str) + 'static) -> Self {
        self.on_update_failed = Rc::new(reporter);
        self
    }

    pub fn editor(&self) -> Ref<'_, CalendarEditor> {
        self.editor.borrow()
    }

    fn notify(&self) {
        (self.on_change)();
    }

    /// Run a state transition and notify if it reported a change
    fn apply(&self, transition: impl FnOnce(&mut CalendarEditor) -> bool) -> bool {
        let changed = transition(&mut self.editor.borrow_mut());
        if changed {
            self.notify();
        }
        changed
    }

    async fn run_load(&self, ticket: LoadTicket) {
        self.notify();
        let result = self.api.month_days(ticket.month).await;
        let applied = self.editor.borrow_mut().finish_load(ticket, result);
        if applied {
            self.notify();
        }
    }

    /// Display and load a month. Errors end up in the grid, never returned.
    pub async fn load_month(&self, year: i32, month: u32) {
        let Some(month) = MonthRef::new(year, month) else {
            log::warn!(target: COMPONENT, "Ignoring invalid month {}-{}", year, month);
            return;
        };
        log::info!(target: COMPONENT, "📅 Loading calendar data for {}", month);
        let ticket = self.editor.borrow_mut().show_month(month);
        self.run_load(ticket).await;
    }

    /// Reload whatever month is displayed
    pub async fn reload(&self) {
        let ticket = self.editor.borrow_mut().begin_load();
        self.run_load(ticket).await;
    }

    pub async fn navigate(&self, delta: i32, unit: NavUnit) {
        let ticket = self.editor.borrow_mut().navigate(delta, unit);
        log::debug!(target: COMPONENT, "Navigated to {}", ticket.month);
        self.run_load(ticket).await;
    }

    pub async fn jump_to(&self, year: i32, month: u32) {
        self.load_month(year, month).await;
    }

    /// Fetch the absence-code catalog. On failure the chooser keeps only the built-in choices.
    pub async fn load_catalog(&self) {
        match self.api.absence_codes().await {
            Ok(codes) => {
                log::debug!(target: COMPONENT, "Loaded {} absence codes", codes.len());
                self.editor.borrow_mut().set_catalog(AbsenceCatalog::new(codes));
                self.notify();
            }
            Err(e) => {
                log::error!(target: COMPONENT, "Failed to fetch absence codes: {}", e);
            }
        }
    }

    pub fn begin_selection(&self, date: &str) -> bool {
        self.apply(|editor| editor.begin_selection(date))
    }

    pub fn extend_selection(&self, date: &str) -> bool {
        self.apply(|editor| editor.extend_selection(date))
    }

    pub fn end_selection(&self) -> bool {
        self.apply(|editor| editor.end_selection())
    }

    pub fn dismiss_confirmation(&self) {
        self.apply(|editor| {
            editor.dismiss_confirmation();
            true
        });
    }

    /// Send one bulk update for the whole selection, then reload the displayed month
    pub async fn confirm_day_type(&self, choice: DayTypeChoice) -> ConfirmOutcome {
        let begun = self.editor.borrow_mut().begin_update(choice);
        let request = match begun {
            Ok(request) => request,
            Err(rejected) => {
                log::warn!(target: COMPONENT, "Update not sent: {}", rejected);
                // An in-flight rejection leaves a notice in the modal
                self.notify();
                return ConfirmOutcome::Rejected(rejected);
            }
        };
        self.notify();

        log::info!(
            target: COMPONENT,
            "Setting {} day(s) to {}",
            request.dates.len(),
            request.day_type.as_wire()
        );
        let result = self.api.update_days(&request).await;
        let failure = result.as_ref().err().map(|e| e.to_string());

        let reload = self.editor.borrow_mut().finish_update(result);
        self.notify();

        if let Some(message) = failure {
            log::error!(target: COMPONENT, "Failed to save day types: {}", message);
            (self.on_update_failed)(&message);
            return ConfirmOutcome::Failed(message);
        }

        if let Some(ticket) = reload {
            self.run_load(ticket).await;
        }
        ConfirmOutcome::Applied
    }
}
