pub mod calendar_editor;
pub mod selection;
pub mod session;
