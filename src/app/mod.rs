pub mod panel_state;
pub mod state;

pub use panel_state::{Mode, PanelState, PanelUpdate, Redraw};
pub use state::*;

impl FlashlightApp {
    /// Applies every queued change in delivery order.
    pub fn process_panel_updates(&mut self) -> Redraw {
        let mut redraw = Redraw::default();
        while let Ok(update) = self.update_rx.try_recv() {
            redraw = redraw.merge(self.state.apply(update));
        }
        if redraw.any() {
            self.request_repaint();
        }
        redraw
    }

    pub fn toggle_mode(&self) {
        let _ = self.update_tx.send(PanelUpdate::ToggleMode);
    }
}
