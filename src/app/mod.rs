//! App module - contains the main application state and logic

mod modals;
mod requests;
mod views;

use crate::api::PredictionClient;
use crate::form::{Form, Outputs};
use crate::settings::Settings;
use crate::theme;
use crate::types::Completion;
use eframe::egui;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form inputs and rendered results
    pub(crate) form: Form,
    pub(crate) outputs: Outputs,
    // Prediction service
    pub(crate) client: PredictionClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) completions_tx: Sender<Completion>,
    pub(crate) completions_rx: Receiver<Completion>,
    pub(crate) in_flight: usize,
    // Blocking alerts, shown front to back
    pub(crate) alerts: VecDeque<String>,
    // Settings dialog
    pub(crate) show_settings: bool,
    pub(crate) api_base_url_str: String,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    /// Build the app for a live window and start the location fetch.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self::with_settings(settings, data_dir)?;
        app.load_locations(&cc.egui_ctx);
        Ok(app)
    }

    /// Build the app state without a window. No request is issued.
    pub fn with_settings(settings: Settings, data_dir: PathBuf) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (completions_tx, completions_rx) = mpsc::channel();

        Ok(Self {
            form: Form::default(),
            outputs: Outputs::default(),
            client: PredictionClient::new(settings.api_base_url.clone()),
            runtime,
            completions_tx,
            completions_rx,
            in_flight: 0,
            alerts: VecDeque::new(),
            show_settings: false,
            api_base_url_str: settings.api_base_url,
            window_pos: match (settings.window_x, settings.window_y) {
                (Some(x), Some(y)) => Some(egui::pos2(x, y)),
                _ => None,
            },
            window_size: match (settings.window_w, settings.window_h) {
                (Some(w), Some(h)) => Some(egui::vec2(w, h)),
                _ => None,
            },
            needs_center: false,
            data_dir,
        })
    }

    pub fn settings(&self) -> Settings {
        Settings {
            api_base_url: self.client.base_url().to_string(),
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        }
    }

    pub fn save_settings(&self) {
        self.settings().save(&self.data_dir);
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
