use relm4::gtk::{self, gdk};
use tracing::debug;

/// CSS provider installed on a display at application priority.
pub struct StyleProvider {
    provider: gtk::CssProvider,
}

impl StyleProvider {
    /// Loads `css` and attaches it to `display`.
    pub fn install(display: &gdk::Display, css: &str) -> Self {
        let provider = gtk::CssProvider::new();
        provider.load_from_data(css);

        gtk::style_context_add_provider_for_display(
            display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        debug!("Installed stylesheet");

        Self { provider }
    }

    /// Replaces the provider's stylesheet; widgets restyle immediately.
    pub fn replace(&self, css: &str) {
        self.provider.load_from_data(css);
        debug!("Replaced stylesheet");
    }
}
