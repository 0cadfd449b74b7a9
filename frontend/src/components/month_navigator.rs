use yew::prelude::*;
use web_sys::{HtmlSelectElement, MouseEvent};
use shared::{month_name, MonthRef};

/// Years offered in the year selector on each side of the displayed year
const YEAR_SPAN: i32 = 5;

#[derive(Properties, PartialEq)]
pub struct MonthNavigatorProps {
    pub month: MonthRef,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_prev_year: Callback<MouseEvent>,
    pub on_next_year: Callback<MouseEvent>,
    pub on_jump: Callback<MonthRef>,
}

#[function_component(MonthNavigator)]
pub fn month_navigator(props: &MonthNavigatorProps) -> Html {
    let current = props.month;

    let on_year_change = {
        let on_jump = props.on_jump.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(target) = select
                .value()
                .parse::<i32>()
                .ok()
                .and_then(|year| MonthRef::new(year, current.month))
            {
                on_jump.emit(target);
            }
        })
    };

    let on_month_change = {
        let on_jump = props.on_jump.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(target) = select
                .value()
                .parse::<u32>()
                .ok()
                .and_then(|month| MonthRef::new(current.year, month))
            {
                on_jump.emit(target);
            }
        })
    };

    let first_year = current.year.saturating_sub(YEAR_SPAN);
    let last_year = current.year.saturating_add(YEAR_SPAN);

    html! {
        <div class="month-navigator">
            <button class="btn nav-btn" title="Previous year" onclick={props.on_prev_year.clone()}>{"«"}</button>
            <button class="btn nav-btn" title="Previous month" onclick={props.on_prev_month.clone()}>{"‹"}</button>

            <h2 class="month-title">{current.title()}</h2>

            <select class="form-select month-select" onchange={on_month_change}>
                {for (1..=12u32).map(|m| html! {
                    <option value={m.to_string()} selected={m == current.month}>{month_name(m)}</option>
                })}
            </select>
            <select class="form-select year-select" onchange={on_year_change}>
                {for (first_year..=last_year).map(|y| html! {
                    <option value={y.to_string()} selected={y == current.year}>{y}</option>
                })}
            </select>

            <button class="btn nav-btn" title="Next month" onclick={props.on_next_month.clone()}>{"›"}</button>
            <button class="btn nav-btn" title="Next year" onclick={props.on_next_year.clone()}>{"»"}</button>
        </div>
    }
}
