//! Library exports for reuse in benchmarks and tests.
/// Touch-driven light panel controller.
pub mod app;
/// Typed configuration and runtime errors.
pub mod errors;
/// Tracing subscriber setup.
pub mod logging;
/// Persisted panel configuration.
pub mod settings;
/// Slider value model: pointer mapping, track length, label and fill.
pub mod slider;
/// egui rendering for the panel.
pub mod ui;

#[cfg(test)]
mod tests;
