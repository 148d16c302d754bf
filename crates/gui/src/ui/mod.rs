pub mod controls;
pub mod status_bar;
