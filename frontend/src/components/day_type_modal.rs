use yew::prelude::*;
use web_sys::{HtmlSelectElement, MouseEvent};
use shared::DayTypeChoice;
use crate::state::calendar_editor::ConfirmationPrompt;

#[derive(Properties, PartialEq)]
pub struct DayTypeModalProps {
    pub is_open: bool,
    pub prompt: Option<ConfirmationPrompt>,
    pub choices: Vec<DayTypeChoice>,
    /// An update request is in flight
    pub saving: bool,
    pub error: Option<String>,
    pub on_save: Callback<DayTypeChoice>,
    pub on_close: Callback<()>,
}

#[function_component(DayTypeModal)]
pub fn day_type_modal(props: &DayTypeModalProps) -> Html {
    // Wire value of the chosen option
    let chosen = use_state(|| Option::<String>::None);

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_select_change = {
        let chosen = chosen.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            chosen.set(Some(select.value()));
        })
    };

    // Fall back to the first option if nothing (or a stale code) is chosen
    let selected_value = (*chosen)
        .clone()
        .filter(|value| props.choices.iter().any(|c| c.as_wire() == value.as_str()))
        .or_else(|| props.choices.first().map(|c| c.as_wire().to_string()));

    let on_save_click = {
        let on_save = props.on_save.clone();
        let selected_value = selected_value.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(value) = &selected_value {
                on_save.emit(DayTypeChoice::from(value.clone()));
            }
        })
    };

    if !props.is_open {
        return html! {};
    }

    let (heading, label) = match &props.prompt {
        Some(prompt) => (prompt.heading.clone(), prompt.label.clone()),
        None => (String::new(), "Day Type".to_string()),
    };

    html! {
        <div class="day-type-modal-backdrop" onclick={on_backdrop_click}>
            <div class="day-type-modal" onclick={on_modal_click}>
                <div class="day-type-modal-content">
                    <h3 class="day-type-title">{"Edit Day Type"}</h3>
                    <p class="selected-date">{heading}</p>

                    <label class="day-type-label" for="dayTypeSelect">{label}</label>
                    <select
                        id="dayTypeSelect"
                        class="form-select"
                        disabled={props.saving}
                        onchange={on_select_change}
                    >
                        {for props.choices.iter().map(|choice| {
                            let value = choice.as_wire().to_string();
                            let selected = selected_value.as_deref() == Some(value.as_str());
                            html! {
                                <option {value} {selected}>{choice.label()}</option>
                            }
                        })}
                    </select>

                    {if let Some(error) = &props.error {
                        html! { <div class="alert alert-danger">{error.clone()}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="day-type-buttons">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_close_click}
                        >
                            {"Close"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled={props.saving || selected_value.is_none()}
                            onclick={on_save_click}
                        >
                            {if props.saving { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
