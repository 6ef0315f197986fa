pub mod header;
pub mod settings_panel;
pub mod url_input;
pub mod result_view;
