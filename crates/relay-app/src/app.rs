//! Main egui application — composes the adapters and the controller and
//! routes panel actions to controller futures.
//!
//! Dispatch shape: every user action clears the error banner, snapshots
//! what it needs from the form (the shared secret is read fresh per
//! dispatch), and spawns the controller future via `spawn_local`. Results
//! come back as events on the bus, drained at the top of each frame.
//! Overlapping dispatches are not de-duplicated or cancelled; a late
//! response is applied when it arrives.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use relay_core::controller::SessionController;
use relay_core::event_bus::EventBus;
use relay_core::ports::{NavigatorPort, SessionApi};
use relay_platform::api::HttpSessionApi;
use relay_platform::nav::WindowNavigator;
use relay_platform::storage::detect_storage;
use relay_types::config::RelayConfig;
use relay_types::event::SessionEvent;
use relay_types::RelayError;
use relay_ui::panels::session_form::{session_form, FormAction};
use relay_ui::panels::session_table::{session_table, TableAction};
use relay_ui::state::UiState;
use relay_ui::theme;

/// The main application state
pub struct RelayApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: Rc<SessionController>,
    api: Rc<dyn SessionApi>,
    navigator: Rc<dyn NavigatorPort>,
    first_frame: bool,
}

impl RelayApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = RelayConfig::default();
        let event_bus = EventBus::new();

        let storage = detect_storage(&config.storage);
        let api: Rc<dyn SessionApi> = Rc::new(HttpSessionApi::new(config.api_base.clone()));
        let navigator: Rc<dyn NavigatorPort> = Rc::new(WindowNavigator);
        let controller = Rc::new(SessionController::new(storage, config, event_bus.clone()));

        // Load the catalog and default session into the form and table
        {
            let controller = controller.clone();
            let ctx = cc.egui_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.restore().await;
                ctx.request_repaint();
            });
        }

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller,
            api,
            navigator,
            first_frame: true,
        }
    }

    fn dispatch_create(&mut self, ctx: &egui::Context) {
        self.ui_state.clear_error();
        let controller = self.controller.clone();
        let api = self.api.clone();
        let event_bus = self.event_bus.clone();
        let auth = self.ui_state.auth();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = controller.create(api.as_ref(), auth.as_deref()).await {
                report_error(&event_bus, e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_launch(&mut self, ctx: &egui::Context) {
        self.ui_state.clear_error();
        let controller = self.controller.clone();
        let api = self.api.clone();
        let navigator = self.navigator.clone();
        let event_bus = self.event_bus.clone();
        let request = self.ui_state.launch_request();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = controller
                .launch(api.as_ref(), navigator.as_ref(), request)
                .await
            {
                report_error(&event_bus, e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_fill_in(&mut self, id: String, ctx: &egui::Context) {
        self.ui_state.clear_error();
        let controller = self.controller.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = controller.fill_in(&id).await {
                report_error(&event_bus, e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_delete(&mut self, id: String, ctx: &egui::Context) {
        self.ui_state.clear_error();
        let controller = self.controller.clone();
        let api = self.api.clone();
        let event_bus = self.event_bus.clone();
        let auth = self.ui_state.auth();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = controller.delete(api.as_ref(), &id, auth.as_deref()).await {
                report_error(&event_bus, e);
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for RelayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Fold controller events into the UI state
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Relay")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new("Proxy sessions")
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = session_form(ui, &mut self.ui_state) {
                match action {
                    FormAction::Create => self.dispatch_create(ctx),
                    FormAction::Launch => self.dispatch_launch(ctx),
                }
            }

            ui.add_space(8.0);

            if let Some(action) = session_table(ui, &self.ui_state) {
                match action {
                    TableAction::FillIn(id) => self.dispatch_fill_in(id, ctx),
                    TableAction::Delete(id) => self.dispatch_delete(id, ctx),
                }
            }
        });
    }
}

/// User-facing failures go to the banner; hard faults signal a bug and go
/// to the console instead.
fn report_error(event_bus: &EventBus, error: RelayError) {
    if error.is_hard_fault() {
        log::error!("{}", error);
    } else {
        event_bus.emit(SessionEvent::Error {
            message: error.to_string(),
        });
    }
}
