//! GTK presentation shell.
//!
//! Builds the undecorated panel window around the clock label, installs the
//! stylesheet and drives the refresh loop from a GLib timer.

mod monitor;
mod panel;
mod style;

pub use monitor::DisplayMonitorProbe;
pub use panel::{PanelInit, PanelModel};
pub use style::StyleProvider;

use relm4::RelmApp;
use tracing::info;

/// Application id registered with GTK.
pub const APP_ID: &str = "org.wave.WPanel";

/// Runs the panel until the GTK main loop exits.
///
/// GTK's own command-line parsing is disabled.
pub fn run(init: PanelInit) {
    info!(app_id = APP_ID, "Starting panel");
    let app = RelmApp::new(APP_ID).with_args(Vec::new());
    app.run::<PanelModel>(init);
    info!("Panel stopped");
}
