use std::collections::HashMap;

use shared::{format_date_for_display, DayRecord, DayType, DayTypeChoice, MonthRef, UpdateDaysRequest};
use thiserror::Error;

use super::selection::SelectionSet;
use crate::services::api::ApiError;

const COMPONENT: &str = "calendar-editor";

/// One slot of the 7-column (Sunday-first) month grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    /// Padding before the 1st of the month
    Blank,
    Day {
        day: u32,
        date: String,
        day_type: DayType,
    },
}

impl GridCell {
    pub fn date(&self) -> Option<&str> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { date, .. } => Some(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridState {
    Loading,
    Ready(Vec<GridCell>),
    /// The load failed; the grid shows a single error block with this detail
    Failed(String),
}

/// Press-drag-release gesture over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUnit {
    Month,
    Year,
}

/// Identifies one issued month load. Only the latest ticket's result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub month: MonthRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateRejected {
    #[error("No days selected")]
    EmptySelection,
    #[error("An update is already in progress")]
    InFlight,
}

/// Text for the confirmation surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub heading: String,
    pub label: String,
}

/// Absence codes offered in the chooser, fetched once per page load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceCatalog {
    codes: Vec<String>,
}

impl AbsenceCatalog {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// Revert and work day first, then every catalog code in server order
    pub fn choices(&self) -> Vec<DayTypeChoice> {
        let mut choices = vec![DayTypeChoice::RevertToDefault, DayTypeChoice::WorkDay];
        choices.extend(self.codes.iter().cloned().map(DayTypeChoice::Absence));
        choices
    }
}

/// Lay out a month: blank padding up to the first weekday, then one cell per day.
/// Dates the server did not report are work days.
pub fn build_grid(month: MonthRef, records: &[DayRecord]) -> Vec<GridCell> {
    let by_date: HashMap<&str, &DayType> = records
        .iter()
        .map(|record| (record.date.as_str(), &record.day_type))
        .collect();

    let blanks = month.first_weekday() as usize;
    let mut cells = Vec::with_capacity(blanks + month.days_in_month() as usize);
    cells.extend(std::iter::repeat(GridCell::Blank).take(blanks));

    for (day, date) in (1..).zip(month.dates()) {
        let day_type = by_date
            .get(date.as_str())
            .map(|day_type| (*day_type).clone())
            .unwrap_or_default();
        cells.push(GridCell::Day { day, date, day_type });
    }
    cells
}

/// State of the monthly day-type editor
///
/// Performs no I/O. Loads and updates are split into a `begin_*` call that
/// hands back what to fetch and a `finish_*` call that takes the result.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEditor {
    month: MonthRef,
    grid: GridState,
    selection: SelectionSet,
    gesture: Gesture,
    latest_generation: u64,
    update_in_flight: bool,
    submitted: Option<Vec<String>>,
    confirmation_open: bool,
    update_error: Option<String>,
    catalog: AbsenceCatalog,
}

impl CalendarEditor {
    pub fn new(month: MonthRef) -> Self {
        Self {
            month,
            grid: GridState::Loading,
            selection: SelectionSet::new(),
            gesture: Gesture::Idle,
            latest_generation: 0,
            update_in_flight: false,
            submitted: None,
            confirmation_open: false,
            update_error: None,
            catalog: AbsenceCatalog::default(),
        }
    }

    pub fn month(&self) -> MonthRef {
        self.month
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.grid, GridState::Loading)
    }

    pub fn is_update_in_flight(&self) -> bool {
        self.update_in_flight
    }

    pub fn is_confirmation_open(&self) -> bool {
        self.confirmation_open
    }

    pub fn update_error(&self) -> Option<&str> {
        self.update_error.as_deref()
    }

    pub fn set_catalog(&mut self, catalog: AbsenceCatalog) {
        self.catalog = catalog;
    }

    pub fn day_type_choices(&self) -> Vec<DayTypeChoice> {
        self.catalog.choices()
    }

    // ---- loading ----

    /// Display `month` and issue a load for it
    pub fn show_month(&mut self, month: MonthRef) -> LoadTicket {
        self.month = month;
        self.begin_load()
    }

    /// Issue a load for the displayed month, superseding any load in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_generation += 1;
        self.grid = GridState::Loading;
        LoadTicket {
            generation: self.latest_generation,
            month: self.month,
        }
    }

    /// Apply a load result. Results from superseded tickets are dropped; returns
    /// whether this one was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<DayRecord>, ApiError>) -> bool {
        if ticket.generation != self.latest_generation || ticket.month != self.month {
            log::debug!(
                target: COMPONENT,
                "Dropping stale load for {} (generation {}, latest {})",
                ticket.month,
                ticket.generation,
                self.latest_generation
            );
            return false;
        }

        self.grid = match result {
            Ok(records) => GridState::Ready(build_grid(ticket.month, &records)),
            Err(e) => {
                log::error!(target: COMPONENT, "Failed to load calendar for {}: {}", ticket.month, e);
                GridState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn navigate(&mut self, delta: i32, unit: NavUnit) -> LoadTicket {
        let target = match unit {
            NavUnit::Month => self.month.shift_months(delta),
            NavUnit::Year => self.month.shift_years(delta),
        };
        self.show_month(target)
    }

    /// Jump straight to a month from the selectors; ignored if `month` is not 1-12
    pub fn jump_to(&mut self, year: i32, month: u32) -> Option<LoadTicket> {
        MonthRef::new(year, month).map(|target| self.show_month(target))
    }

    // ---- selection gesture ----

    /// The rendered, non-blank cell for a date, if any
    pub fn day_cell(&self, date: &str) -> Option<&GridCell> {
        match &self.grid {
            GridState::Ready(cells) => cells.iter().find(|cell| cell.date() == Some(date)),
            _ => None,
        }
    }

    pub fn is_selected(&self, date: &str) -> bool {
        self.selection.contains(date)
    }

    /// Press on a cell: start a fresh selection containing just this cell
    pub fn begin_selection(&mut self, date: &str) -> bool {
        if self.day_cell(date).is_none() {
            return false;
        }
        self.selection.clear();
        self.selection.toggle(date);
        self.gesture = Gesture::Dragging;
        true
    }

    /// Drag over a cell: toggle it. No-op unless dragging over a rendered day.
    pub fn extend_selection(&mut self, date: &str) -> bool {
        if self.gesture != Gesture::Dragging || self.day_cell(date).is_none() {
            return false;
        }
        self.selection.toggle(date);
        true
    }

    /// Release anywhere: stop dragging and open the confirmation if anything is selected
    pub fn end_selection(&mut self) -> bool {
        if self.gesture != Gesture::Dragging {
            return false;
        }
        self.gesture = Gesture::Idle;
        if self.selection.is_empty() {
            return false;
        }
        self.confirmation_open = true;
        self.update_error = None;
        true
    }

    /// Close the confirmation without saving. Any update already sent still completes.
    pub fn dismiss_confirmation(&mut self) {
        self.confirmation_open = false;
        self.update_error = None;
        self.selection.clear();
    }

    pub fn confirmation_prompt(&self) -> Option<ConfirmationPrompt> {
        let mut dates = self.selection.iter();
        let first = dates.next()?;

        if dates.next().is_none() {
            let current = match self.day_cell(first) {
                Some(GridCell::Day { day_type, .. }) => day_type.label(),
                _ => "Unknown".to_string(),
            };
            Some(ConfirmationPrompt {
                heading: format_date_for_display(first),
                label: format!("Change Type (Current: {})", current),
            })
        } else {
            Some(ConfirmationPrompt {
                heading: format!("{} days selected", self.selection.len()),
                label: "Set New Type for All Selected Days".to_string(),
            })
        }
    }

    // ---- bulk update ----

    /// Snapshot the selection into an update request. Only one update may be in flight.
    pub fn begin_update(&mut self, choice: DayTypeChoice) -> Result<UpdateDaysRequest, UpdateRejected> {
        if self.selection.is_empty() {
            return Err(UpdateRejected::EmptySelection);
        }
        if self.update_in_flight {
            self.update_error = Some(UpdateRejected::InFlight.to_string());
            return Err(UpdateRejected::InFlight);
        }

        let dates = self.selection.to_vec();
        self.update_in_flight = true;
        self.update_error = None;
        self.submitted = Some(dates.clone());
        Ok(UpdateDaysRequest {
            dates,
            day_type: choice,
        })
    }

    /// Record the update outcome. A reload of the month displayed *now* is
    /// issued on success. The confirmation and selection are only touched if
    /// they still hold the submitted dates: success closes and clears them,
    /// failure keeps them for a retry.
    pub fn finish_update(&mut self, result: Result<(), ApiError>) -> Option<LoadTicket> {
        self.update_in_flight = false;
        let submitted = self.submitted.take().unwrap_or_default();
        let still_showing = self.confirmation_open && self.selection.to_vec() == submitted;

        match result {
            Ok(()) => {
                if still_showing {
                    self.confirmation_open = false;
                    self.update_error = None;
                    self.selection.clear();
                }
                Some(self.begin_load())
            }
            Err(e) => {
                if still_showing {
                    self.update_error = Some(e.to_string());
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june() -> MonthRef {
        MonthRef::new(2024, 6).unwrap()
    }

    fn sick() -> DayType {
        DayType::Absence("SICK".to_string())
    }

    /// Editor showing June 2024 with the given records loaded
    fn loaded_editor(records: Vec<DayRecord>) -> CalendarEditor {
        let mut editor = CalendarEditor::new(june());
        let ticket = editor.begin_load();
        assert!(editor.finish_load(ticket, Ok(records)));
        editor
    }

    fn record(date: &str, day_type: DayType) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            day_type,
        }
    }

    fn cells(editor: &CalendarEditor) -> &[GridCell] {
        match editor.grid() {
            GridState::Ready(cells) => cells,
            other => panic!("grid not ready: {:?}", other),
        }
    }

    #[test]
    fn test_blank_and_day_counts_for_every_month() {
        for year in [1999, 2000, 2023, 2024, 2025] {
            for m in 1..=12 {
                let month = MonthRef::new(year, m).unwrap();
                let grid = build_grid(month, &[]);
                let blanks = grid.iter().filter(|c| **c == GridCell::Blank).count();
                let days = grid.len() - blanks;
                assert_eq!(blanks as u32, month.first_weekday(), "{}", month);
                assert_eq!(days as u32, month.days_in_month(), "{}", month);
                // Blanks only ever lead the grid
                assert!(grid[..blanks].iter().all(|c| *c == GridCell::Blank));
            }
        }
    }

    #[test]
    fn test_build_grid_defaults_missing_days_to_work_day() {
        let grid = build_grid(june(), &[record("2024-06-03", sick())]);
        // June 2024 starts on Saturday
        assert_eq!(grid.len(), 6 + 30);
        assert_eq!(
            grid[6],
            GridCell::Day {
                day: 1,
                date: "2024-06-01".to_string(),
                day_type: DayType::WorkDay
            }
        );
        match &grid[8] {
            GridCell::Day { day, day_type, .. } => {
                assert_eq!(*day, 3);
                assert_eq!(*day_type, sick());
            }
            other => panic!("unexpected cell {:?}", other),
        }
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut editor = CalendarEditor::new(june());
        let slow = editor.begin_load();
        let july = editor.navigate(1, NavUnit::Month);

        assert!(editor.finish_load(july, Ok(vec![record("2024-07-04", sick())])));
        assert!(!editor.finish_load(slow, Ok(vec![record("2024-06-01", sick())])));

        assert_eq!(editor.month(), MonthRef::new(2024, 7).unwrap());
        assert!(editor.day_cell("2024-07-04").is_some());
        assert!(editor.day_cell("2024-06-01").is_none());
    }

    #[test]
    fn test_stale_load_for_same_month_is_dropped() {
        let mut editor = CalendarEditor::new(june());
        let first = editor.begin_load();
        let second = editor.begin_load();

        assert!(editor.finish_load(second, Ok(vec![record("2024-06-05", sick())])));
        assert!(!editor.finish_load(first, Ok(vec![])));

        match editor.day_cell("2024-06-05") {
            Some(GridCell::Day { day_type, .. }) => assert_eq!(*day_type, sick()),
            other => panic!("unexpected cell {:?}", other),
        }
    }

    #[test]
    fn test_failed_load_shows_single_error() {
        let mut editor = CalendarEditor::new(june());
        let ticket = editor.begin_load();
        let applied = editor.finish_load(
            ticket,
            Err(ApiError::Fetch {
                message: "Server error 500".to_string(),
            }),
        );
        assert!(applied);
        assert_eq!(editor.grid(), &GridState::Failed("Server error 500".to_string()));
        assert!(editor.day_cell("2024-06-01").is_none());
        assert!(!editor.begin_selection("2024-06-01"));
    }

    #[test]
    fn test_navigation_rolls_years() {
        let mut editor = CalendarEditor::new(MonthRef::new(2024, 3).unwrap());
        editor.navigate(-1, NavUnit::Month);
        assert_eq!(editor.month(), MonthRef::new(2024, 2).unwrap());

        let mut editor = CalendarEditor::new(MonthRef::new(2024, 1).unwrap());
        let ticket = editor.navigate(-1, NavUnit::Month);
        assert_eq!(editor.month(), MonthRef::new(2023, 12).unwrap());
        assert_eq!(ticket.month, editor.month());

        editor.navigate(1, NavUnit::Year);
        assert_eq!(editor.month(), MonthRef::new(2024, 12).unwrap());
    }

    #[test]
    fn test_jump_to_ignores_invalid_month() {
        let mut editor = CalendarEditor::new(june());
        assert!(editor.jump_to(2024, 13).is_none());
        assert_eq!(editor.month(), june());

        let ticket = editor.jump_to(2030, 2).unwrap();
        assert_eq!(ticket.month, MonthRef::new(2030, 2).unwrap());
        assert!(editor.is_loading());
    }

    #[test]
    fn test_blank_and_unloaded_cells_cannot_be_selected() {
        let mut editor = CalendarEditor::new(june());
        // Still loading
        assert!(!editor.begin_selection("2024-06-01"));

        let mut editor = loaded_editor(vec![]);
        assert!(!editor.begin_selection("2024-05-31"));
        assert!(!editor.begin_selection(""));
        assert_eq!(editor.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_drag_toggles_cells() {
        let mut editor = loaded_editor(vec![]);
        assert!(editor.begin_selection("2024-06-10"));
        assert!(editor.extend_selection("2024-06-11"));
        assert!(editor.extend_selection("2024-06-12"));
        // Dragging back over a cell deselects it
        assert!(editor.extend_selection("2024-06-11"));

        assert!(editor.is_selected("2024-06-10"));
        assert!(!editor.is_selected("2024-06-11"));
        assert!(editor.is_selected("2024-06-12"));
        assert_eq!(editor.selection().len(), 2);
    }

    #[test]
    fn test_even_and_odd_visits() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        for _ in 0..3 {
            editor.extend_selection("2024-06-20");
        }
        assert!(editor.is_selected("2024-06-20"));
        editor.extend_selection("2024-06-20");
        assert!(!editor.is_selected("2024-06-20"));
    }

    #[test]
    fn test_extend_while_idle_is_noop() {
        let mut editor = loaded_editor(vec![]);
        assert!(!editor.extend_selection("2024-06-10"));
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_new_gesture_clears_previous_selection() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-10");
        editor.extend_selection("2024-06-11");
        editor.end_selection();

        editor.begin_selection("2024-06-20");
        assert_eq!(editor.selection().to_vec(), vec!["2024-06-20"]);
    }

    #[test]
    fn test_end_selection_opens_confirmation_only_when_non_empty() {
        let mut editor = loaded_editor(vec![]);
        // Release while idle
        assert!(!editor.end_selection());
        assert!(!editor.is_confirmation_open());

        // Press then drag back over the same cell: empty on release
        editor.begin_selection("2024-06-10");
        editor.extend_selection("2024-06-10");
        assert!(!editor.end_selection());
        assert!(!editor.is_confirmation_open());
        assert_eq!(editor.gesture(), Gesture::Idle);

        editor.begin_selection("2024-06-10");
        assert!(editor.end_selection());
        assert!(editor.is_confirmation_open());
        // A second release is a no-op
        assert!(!editor.end_selection());
    }

    #[test]
    fn test_confirmation_prompt_single_day() {
        let mut editor = loaded_editor(vec![record("2024-06-01", DayType::Absence("Weekend".to_string()))]);
        editor.begin_selection("2024-06-01");
        editor.end_selection();

        let prompt = editor.confirmation_prompt().unwrap();
        assert_eq!(prompt.heading, "June 1, 2024");
        assert_eq!(prompt.label, "Change Type (Current: Weekend)");
    }

    #[test]
    fn test_confirmation_prompt_many_days() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-03");
        editor.extend_selection("2024-06-04");
        editor.extend_selection("2024-06-05");
        editor.end_selection();

        let prompt = editor.confirmation_prompt().unwrap();
        assert_eq!(prompt.heading, "3 days selected");
        assert_eq!(prompt.label, "Set New Type for All Selected Days");
    }

    #[test]
    fn test_dismiss_clears_selection() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-03");
        editor.end_selection();
        editor.dismiss_confirmation();
        assert!(!editor.is_confirmation_open());
        assert!(editor.selection().is_empty());
        assert!(editor.confirmation_prompt().is_none());
    }

    #[test]
    fn test_begin_update_with_empty_selection_is_rejected() {
        let mut editor = loaded_editor(vec![]);
        assert_eq!(
            editor.begin_update(DayTypeChoice::WorkDay),
            Err(UpdateRejected::EmptySelection)
        );
        assert!(!editor.is_update_in_flight());
    }

    #[test]
    fn test_only_one_update_in_flight() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.extend_selection("2024-06-02");
        editor.end_selection();

        let request = editor
            .begin_update(DayTypeChoice::Absence("SICK".to_string()))
            .unwrap();
        assert_eq!(request.dates, vec!["2024-06-01", "2024-06-02"]);
        assert_eq!(
            editor.begin_update(DayTypeChoice::WorkDay),
            Err(UpdateRejected::InFlight)
        );
        assert_eq!(editor.update_error(), Some("An update is already in progress"));
        assert!(editor.is_confirmation_open());

        // The notice goes away with the modal once the first update lands
        assert!(editor.finish_update(Ok(())).is_some());
        assert_eq!(editor.update_error(), None);
        assert!(!editor.is_confirmation_open());
    }

    #[test]
    fn test_late_success_keeps_newer_selection() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.end_selection();
        let request = editor
            .begin_update(DayTypeChoice::Absence("SICK".to_string()))
            .unwrap();
        assert_eq!(request.dates, vec!["2024-06-01"]);

        // Close the modal mid-save and drag out a new range
        editor.dismiss_confirmation();
        editor.begin_selection("2024-06-20");
        editor.extend_selection("2024-06-21");
        editor.end_selection();

        let reload = editor.finish_update(Ok(()));
        assert_eq!(reload.map(|ticket| ticket.month), Some(june()));
        assert_eq!(editor.selection().to_vec(), vec!["2024-06-20", "2024-06-21"]);
        assert!(editor.is_confirmation_open());
        assert_eq!(editor.update_error(), None);
    }

    #[test]
    fn test_late_failure_does_not_mark_newer_selection() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.end_selection();
        editor.begin_update(DayTypeChoice::WorkDay).unwrap();

        editor.dismiss_confirmation();
        editor.begin_selection("2024-06-20");
        editor.end_selection();

        let reload = editor.finish_update(Err(ApiError::Fetch {
            message: "Server error 500".to_string(),
        }));
        assert!(reload.is_none());
        assert_eq!(editor.update_error(), None);
        assert_eq!(editor.selection().to_vec(), vec!["2024-06-20"]);
        assert!(!editor.is_update_in_flight());
    }

    #[test]
    fn test_successful_update_clears_and_reloads_current_month() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.end_selection();
        editor.begin_update(DayTypeChoice::Absence("SICK".to_string())).unwrap();

        // User navigates while the update is pending
        editor.navigate(1, NavUnit::Month);

        let reload = editor.finish_update(Ok(())).unwrap();
        assert_eq!(reload.month, MonthRef::new(2024, 7).unwrap());
        assert!(editor.selection().is_empty());
        assert!(!editor.is_confirmation_open());
        assert!(!editor.is_update_in_flight());
    }

    #[test]
    fn test_failed_update_keeps_selection() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.end_selection();
        editor.begin_update(DayTypeChoice::WorkDay).unwrap();

        let reload = editor.finish_update(Err(ApiError::Fetch {
            message: "Invalid request body".to_string(),
        }));
        assert!(reload.is_none());
        assert_eq!(editor.update_error(), Some("Invalid request body"));
        assert!(editor.is_confirmation_open());
        assert_eq!(editor.selection().to_vec(), vec!["2024-06-01"]);

        // Retry is allowed without reselecting
        assert!(editor.begin_update(DayTypeChoice::WorkDay).is_ok());
        assert_eq!(editor.update_error(), None);
    }

    #[test]
    fn test_update_targets_selection_held_at_confirm_time() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.extend_selection("2024-06-02");
        editor.end_selection();

        // A re-render in between does not prune the selection
        let ticket = editor.begin_load();
        editor.finish_load(ticket, Ok(vec![]));

        let request = editor.begin_update(DayTypeChoice::RevertToDefault).unwrap();
        assert_eq!(request.dates, vec!["2024-06-01", "2024-06-02"]);
        assert_eq!(request.day_type, DayTypeChoice::RevertToDefault);
    }

    #[test]
    fn test_catalog_choices_order() {
        let mut editor = CalendarEditor::new(june());
        editor.set_catalog(AbsenceCatalog::new(vec![
            "VACATION".to_string(),
            "SICK_LEAVE".to_string(),
        ]));
        let labels: Vec<String> = editor.day_type_choices().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["(Revert to Default)", "Work Day", "VACATION", "SICK LEAVE"]
        );
        assert_eq!(editor.day_type_choices().len(), 4);
    }

    #[test]
    fn test_sick_scenario_reflected_after_reload() {
        let mut editor = loaded_editor(vec![]);
        editor.begin_selection("2024-06-01");
        editor.extend_selection("2024-06-02");
        editor.end_selection();
        let request = editor
            .begin_update(DayTypeChoice::Absence("SICK".to_string()))
            .unwrap();

        let reload = editor.finish_update(Ok(())).unwrap();
        // What the server now reports for June
        let records = request
            .dates
            .iter()
            .map(|date| record(date, sick()))
            .collect();
        assert!(editor.finish_load(reload, Ok(records)));

        let grid = cells(&editor);
        for date in ["2024-06-01", "2024-06-02"] {
            let cell = grid.iter().find(|c| c.date() == Some(date)).unwrap();
            assert!(matches!(cell, GridCell::Day { day_type, .. } if *day_type == sick()));
        }
    }
}
