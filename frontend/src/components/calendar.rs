use yew::prelude::*;
use web_sys::MouseEvent;
use crate::state::calendar_editor::{GridCell, GridState};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub grid: GridState,
    pub selected_dates: Vec<String>,
    /// Mouse pressed on a day cell (date)
    pub on_cell_press: Callback<String>,
    /// Mouse entered a day cell (date)
    pub on_cell_enter: Callback<String>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let body = match &props.grid {
        GridState::Loading => html! {
            <div class="loading-indicator">{"Loading..."}</div>
        },
        GridState::Failed(detail) => html! {
            <div class="alert alert-danger" title={detail.clone()}>
                {"Could not load calendar data."}
            </div>
        },
        GridState::Ready(cells) => html! {
            <div class="calendar-grid">
                {for cells.iter().map(|cell| render_cell(cell, props))}
            </div>
        },
    };

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                {for WEEKDAYS.iter().map(|day| html! { <div class="weekday">{*day}</div> })}
            </div>
            {body}
        </div>
    }
}

fn render_cell(cell: &GridCell, props: &CalendarProps) -> Html {
    let GridCell::Day { day, date, day_type } = cell else {
        return html! { <div class="day-cell blank"></div> };
    };

    let selected = props.selected_dates.iter().any(|d| d == date);
    let class = classes!(
        "day-cell",
        day_type.css_class(),
        selected.then_some("day-selected")
    );

    let onmousedown = {
        let on_press = props.on_cell_press.clone();
        let date = date.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the drag from selecting text
            e.prevent_default();
            on_press.emit(date.clone());
        })
    };

    let onmouseenter = {
        let on_enter = props.on_cell_enter.clone();
        let date = date.clone();
        Callback::from(move |_: MouseEvent| {
            on_enter.emit(date.clone());
        })
    };

    html! {
        <div class={class} data-date={date.clone()} {onmousedown} {onmouseenter}>
            <div class="day-number">{*day}</div>
            <div class="day-type">{day_type.label()}</div>
        </div>
    }
}
