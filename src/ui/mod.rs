pub mod circle;
pub mod flash_overlay;
pub mod main;
pub mod mode_button;
pub mod panel_slider;
