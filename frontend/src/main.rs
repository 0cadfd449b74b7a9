use gloo::events::EventListener;
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::calendar::Calendar;
use components::day_type_modal::DayTypeModal;
use components::month_navigator::MonthNavigator;
use hooks::use_calendar::use_calendar;
use services::api::ApiClient;
use services::config::AppConfig;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let calendar = use_calendar(&api_client);
    let state = calendar.state;
    let actions = calendar.actions;

    // Releasing the mouse anywhere on the page ends a drag
    {
        let end_selection = actions.end_selection.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::document(), "mouseup", move |_| {
                end_selection.emit(());
            });
            move || drop(listener)
        });
    }

    html! {
        <div class="container monthly-log">
            <MonthNavigator
                month={state.month}
                on_prev_month={actions.prev_month.clone()}
                on_next_month={actions.next_month.clone()}
                on_prev_year={actions.prev_year.clone()}
                on_next_year={actions.next_year.clone()}
                on_jump={actions.jump_to.clone()}
            />
            <Calendar
                grid={state.grid.clone()}
                selected_dates={state.selected_dates.clone()}
                on_cell_press={actions.begin_selection.clone()}
                on_cell_enter={actions.extend_selection.clone()}
            />
            <DayTypeModal
                is_open={state.confirmation_open}
                prompt={state.prompt.clone()}
                choices={state.choices.clone()}
                saving={state.saving}
                error={state.update_error.clone()}
                on_save={actions.confirm_day_type.clone()}
                on_close={actions.dismiss_confirmation.clone()}
            />
        </div>
    }
}

fn main() {
    services::logging::init(AppConfig::from_build_env().log_level);
    yew::Renderer::<App>::new().render();
}
