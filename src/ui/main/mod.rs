// Submodules for main UI functionality
pub mod animation;
pub mod main_ui;
pub mod theme;
