pub mod helpers;
pub mod menu_bar;
pub mod options;
pub mod status;
