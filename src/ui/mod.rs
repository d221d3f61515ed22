pub mod app_shell;
mod dialogs;
mod histogram;
mod viewport;
