use std::path::{Path, PathBuf};

use relm4::{
    Component, ComponentParts, ComponentSender,
    gtk::{self, glib, prelude::*},
};
use tracing::{debug, info, warn};

use super::{DisplayMonitorProbe, StyleProvider};
use crate::{
    clock::{ClockRefresh, SystemClock, TICK_INTERVAL},
    config::Config,
    file_watcher::FileWatcher,
    placement::resolve_placement,
    stylesheet::{self, LABEL_NAME, WINDOW_NAME},
};

/// Startup data for the panel window.
pub struct PanelInit {
    /// Configuration loaded at startup.
    pub config: Config,
    /// Main config file; watched for style changes when set.
    pub config_path: Option<PathBuf>,
}

/// Panel window state: the clock surface and the installed stylesheet.
pub struct PanelModel {
    refresh: ClockRefresh<SystemClock>,
    style: StyleProvider,
}

/// Messages from the tick timer.
#[derive(Debug)]
pub enum PanelMsg {
    /// One second elapsed.
    Tick,
}

/// Results of background work.
#[derive(Debug)]
pub enum PanelCommand {
    /// A watched file changed; carries the freshly loaded CSS.
    Restyle(String),
}

/// Widgets updated after each message.
pub struct PanelWidgets {
    label: gtk::Label,
}

impl Component for PanelModel {
    type CommandOutput = PanelCommand;
    type Input = PanelMsg;
    type Output = ();
    type Init = PanelInit;
    type Root = gtk::Window;
    type Widgets = PanelWidgets;

    fn init_root() -> Self::Root {
        gtk::Window::builder()
            .name(WINDOW_NAME)
            .decorated(false)
            .build()
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let PanelInit {
            config,
            config_path,
        } = init;

        root.set_title(Some(config.panel.title.as_str()));

        let display = root.display();
        let css = stylesheet::load(&config.styling, config_dir(config_path.as_deref()));
        let style = StyleProvider::install(&display, &css);

        let placement = resolve_placement(&DisplayMonitorProbe::new(display), &config.panel);
        info!(
            width = placement.width,
            height = placement.height,
            x = placement.x,
            y = placement.y,
            source = ?placement.source,
            "Resolved panel placement"
        );
        root.set_default_size(placement.width, placement.height);

        let label = gtk::Label::builder()
            .name(LABEL_NAME)
            .halign(gtk::Align::Center)
            .valign(gtk::Align::Center)
            .build();
        let center_box = gtk::CenterBox::new();
        center_box.set_center_widget(Some(&label));
        root.set_child(Some(&center_box));

        let refresh = ClockRefresh::new(SystemClock);
        label.set_text(refresh.text());

        start_ticker(&sender);
        if let Some(path) = config_path {
            watch_style_sources(&sender, path);
        }

        let model = PanelModel { refresh, style };
        let widgets = PanelWidgets { label };

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>, _root: &Self::Root) {
        match message {
            PanelMsg::Tick => {
                self.refresh.tick();
            }
        }
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            PanelCommand::Restyle(css) => {
                info!("Reloading stylesheet");
                self.style.replace(&css);
            }
        }
    }

    fn update_view(&self, widgets: &mut Self::Widgets, _sender: ComponentSender<Self>) {
        widgets.label.set_text(self.refresh.text());
    }
}

/// Posts a tick every second until the component is torn down.
fn start_ticker(sender: &ComponentSender<PanelModel>) {
    let input = sender.input_sender().clone();

    glib::timeout_add_seconds_local(TICK_INTERVAL.as_secs() as u32, move || {
        if input.send(PanelMsg::Tick).is_ok() {
            glib::ControlFlow::Continue
        } else {
            debug!("Panel closed, stopping clock");
            glib::ControlFlow::Break
        }
    });
}

/// Reloads the stylesheet in the background whenever the config, one of its
/// imports or the external stylesheet changes.
fn watch_style_sources(sender: &ComponentSender<PanelModel>, config_path: PathBuf) {
    let (mut watcher, mut events) = match FileWatcher::new() {
        Ok(pair) => pair,
        Err(e) => {
            warn!(error = %e, "Stylesheet reload disabled");
            return;
        }
    };

    sender.command(move |out, shutdown| {
        shutdown
            .register(async move {
                let config = Config::load_or_default(&config_path);
                sync_watch_list(&mut watcher, &config_path, &config);

                while let Some(event) = events.recv().await {
                    debug!(
                        path = %event.path.display(),
                        kind = ?event.kind,
                        "Watched file changed"
                    );
                    while events.try_recv().is_ok() {}

                    let config = Config::load_or_default(&config_path);
                    sync_watch_list(&mut watcher, &config_path, &config);

                    let css = stylesheet::load(&config.styling, config_path.parent());
                    if out.send(PanelCommand::Restyle(css)).is_err() {
                        break;
                    }
                }
            })
            .drop_on_shutdown()
    });
}

fn sync_watch_list(watcher: &mut FileWatcher, config_path: &Path, config: &Config) {
    let mut files = Config::get_all_config_files(config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Cannot resolve config imports");
        vec![config_path.to_path_buf()]
    });
    files.extend(stylesheet::stylesheet_path(&config.styling, config_path.parent()));

    watcher.update_watched_files(&files);
}

fn config_dir(config_path: Option<&Path>) -> Option<&Path> {
    config_path.and_then(Path::parent)
}
