use std::rc::Rc;

use shared::{DayTypeChoice, MonthRef};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::calendar_editor::{CalendarEditor, ConfirmationPrompt, GridState, NavUnit};
use crate::state::session::CalendarSession;

type Session = CalendarSession<ApiClient>;

/// Render snapshot of the editor
#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub month: MonthRef,
    pub grid: GridState,
    pub selected_dates: Vec<String>,
    pub confirmation_open: bool,
    pub prompt: Option<ConfirmationPrompt>,
    pub choices: Vec<DayTypeChoice>,
    pub saving: bool,
    pub update_error: Option<String>,
}

impl From<&CalendarEditor> for CalendarState {
    fn from(editor: &CalendarEditor) -> Self {
        Self {
            month: editor.month(),
            grid: editor.grid().clone(),
            selected_dates: editor.selection().to_vec(),
            confirmation_open: editor.is_confirmation_open(),
            prompt: editor.confirmation_prompt(),
            choices: editor.day_type_choices(),
            saving: editor.is_update_in_flight(),
            update_error: editor.update_error().map(str::to_string),
        }
    }
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub prev_year: Callback<MouseEvent>,
    pub next_year: Callback<MouseEvent>,
    pub jump_to: Callback<MonthRef>,
    pub begin_selection: Callback<String>,
    pub extend_selection: Callback<String>,
    pub end_selection: Callback<()>,
    pub confirm_day_type: Callback<DayTypeChoice>,
    pub dismiss_confirmation: Callback<()>,
}

fn navigate_callback(session: &Rc<Session>, delta: i32, unit: NavUnit) -> Callback<MouseEvent> {
    let session = Rc::clone(session);
    Callback::from(move |_: MouseEvent| {
        let session = (*session).clone();
        spawn_local(async move {
            session.navigate(delta, unit).await;
        });
    })
}

#[hook]
pub fn use_calendar(api_client: &ApiClient) -> UseCalendarResult {
    let rerender = use_force_update();

    let session = {
        let api_client = api_client.clone();
        use_memo((), move |_| {
            CalendarSession::new(api_client, MonthRef::current())
                .with_change_listener(move || rerender.force_update())
                .with_update_failure_reporter(|message| {
                    gloo::dialogs::alert(&format!("Error saving changes: {}", message));
                })
        })
    };

    // Catalog first so the chooser is ready, then the current month
    {
        let session = Rc::clone(&session);
        use_effect_with((), move |_| {
            Logger::info_with_component("calendar-hook", "🚀 Initializing monthly calendar");
            let session = (*session).clone();
            spawn_local(async move {
                session.load_catalog().await;
                session.reload().await;
            });
            || ()
        });
    }

    let jump_to = {
        let session = Rc::clone(&session);
        use_callback((), move |month: MonthRef, _| {
            let session = (*session).clone();
            spawn_local(async move {
                session.jump_to(month.year, month.month).await;
            });
        })
    };

    let begin_selection = {
        let session = Rc::clone(&session);
        use_callback((), move |date: String, _| {
            session.begin_selection(&date);
        })
    };

    let extend_selection = {
        let session = Rc::clone(&session);
        use_callback((), move |date: String, _| {
            session.extend_selection(&date);
        })
    };

    let end_selection = {
        let session = Rc::clone(&session);
        use_callback((), move |_: (), _| {
            session.end_selection();
        })
    };

    let confirm_day_type = {
        let session = Rc::clone(&session);
        use_callback((), move |choice: DayTypeChoice, _| {
            let session = (*session).clone();
            spawn_local(async move {
                session.confirm_day_type(choice).await;
            });
        })
    };

    let dismiss_confirmation = {
        let session = Rc::clone(&session);
        use_callback((), move |_: (), _| {
            session.dismiss_confirmation();
        })
    };

    let actions = UseCalendarActions {
        prev_month: navigate_callback(&session, -1, NavUnit::Month),
        next_month: navigate_callback(&session, 1, NavUnit::Month),
        prev_year: navigate_callback(&session, -1, NavUnit::Year),
        next_year: navigate_callback(&session, 1, NavUnit::Year),
        jump_to,
        begin_selection,
        extend_selection,
        end_selection,
        confirm_day_type,
        dismiss_confirmation,
    };

    let state = CalendarState::from(&*session.editor());

    UseCalendarResult { state, actions }
}
