pub mod bottom_nav;
pub mod delete_confirmation;
pub mod empty_state;
pub mod filter_input;
pub mod form_field;
pub mod help_bar;
pub mod help_popup;
pub mod map_picker;
pub mod notice;
pub mod popup;
pub mod scan_indicator;
pub mod screen_title;
