pub mod bar_display;
pub mod buttons;
