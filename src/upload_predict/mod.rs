pub mod core;
pub mod gui;
pub mod main;
pub mod render;
mod run_effect;
#[cfg(test)]
mod tests;
