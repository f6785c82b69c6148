pub mod keyboard;
pub mod keymap;
