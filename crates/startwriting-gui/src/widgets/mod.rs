/// UI widgets for StartWriting.

pub mod dialogs;
pub mod picture_view;
pub mod status_bar;
pub mod toolbar;
pub mod word_input;
