pub mod calendar;
pub mod day_type_modal;
pub mod month_navigator;
