pub mod actions;
pub mod consts;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod panel;
pub mod reducer;
pub mod render;
pub mod selector;
pub mod settings;
pub mod state;
pub mod store;
