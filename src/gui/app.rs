use eframe::egui;
use poll_promise::Promise;

use crate::api::GamesClient;
use crate::controller::{GameListController, ListAction, ViewState};

use super::components::{ConfirmDialog, ErrorBanner, Header};
use super::game_form_view::GameFormView;
use super::game_list_view::GameListView;
use super::styles;

type Controller = GameListController<GamesClient>;

/// Network operations run off the UI thread.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Load,
    Submit,
    ConfirmDelete,
}

/// While an operation runs it owns the controller; the UI draws the state
/// as it was when the operation started.
enum Slot {
    Ready(Controller),
    Busy {
        promise: Promise<Controller>,
        snapshot: ViewState,
    },
}

impl Slot {
    fn state_mut(&mut self) -> &mut ViewState {
        match self {
            Slot::Ready(controller) => controller.state_mut(),
            Slot::Busy { snapshot, .. } => snapshot,
        }
    }
}

#[derive(Default)]
struct ViewEvents {
    refresh: bool,
    submit: bool,
    action: Option<ListAction>,
    delete_answer: Option<bool>,
}

pub struct GameCrudApp {
    slot: Option<Slot>,
    statuses: Vec<String>,
}

impl GameCrudApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: GamesClient, statuses: Vec<String>) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);

        let default_status = statuses.first().cloned().unwrap_or_default();
        let mut app = Self {
            slot: Some(Slot::Ready(GameListController::new(client, default_status))),
            statuses,
        };

        app.start(Operation::Load, &cc.egui_ctx);
        app
    }

    fn is_busy(&self) -> bool {
        matches!(self.slot, Some(Slot::Busy { .. }))
    }

    fn start(&mut self, operation: Operation, ctx: &egui::Context) {
        let controller = match self.slot.take() {
            Some(Slot::Ready(controller)) => controller,
            other => {
                log::debug!("Ignoring {:?} while another operation runs", operation);
                self.slot = other;
                return;
            }
        };

        let snapshot = controller.state().clone();
        let ctx = ctx.clone();
        let promise = Promise::spawn_async(async move {
            let controller = run(controller, operation).await;
            ctx.request_repaint();
            controller
        });

        self.slot = Some(Slot::Busy { promise, snapshot });
    }

    fn poll(&mut self) {
        self.slot = match self.slot.take() {
            Some(Slot::Busy { promise, snapshot }) => match promise.try_take() {
                Ok(controller) => Some(Slot::Ready(controller)),
                Err(promise) => Some(Slot::Busy { promise, snapshot }),
            },
            other => other,
        };
    }

    fn handle(&mut self, events: ViewEvents, ctx: &egui::Context) {
        let mut confirmed = false;

        if let Some(Slot::Ready(controller)) = self.slot.as_mut() {
            if let Some(action) = events.action {
                controller.apply(action);
            }
            match events.delete_answer {
                Some(true) => confirmed = true,
                Some(false) => controller.cancel_delete(),
                None => {}
            }
        }

        let operation = if confirmed {
            Some(Operation::ConfirmDelete)
        } else if events.submit {
            Some(Operation::Submit)
        } else if events.refresh {
            Some(Operation::Load)
        } else {
            None
        };

        if let Some(operation) = operation {
            self.start(operation, ctx);
        }
    }
}

async fn run(mut controller: Controller, operation: Operation) -> Controller {
    match operation {
        Operation::Load => controller.load().await,
        Operation::Submit => controller.submit().await,
        Operation::ConfirmDelete => controller.confirm_delete().await,
    }
    controller
}

impl eframe::App for GameCrudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        let busy = self.is_busy();
        let mut events = ViewEvents::default();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            Header::show(ui, busy, &mut events.refresh);
        });

        let statuses = &self.statuses;
        let Some(state) = self.slot.as_mut().map(Slot::state_mut) else {
            return;
        };

        egui::SidePanel::left("form_panel")
            .resizable(false)
            .min_width(300.0)
            .show(ctx, |ui| {
                events.submit = GameFormView::ui(ui, &mut state.form, statuses, !busy);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ErrorBanner::show(ui, state.error());
            events.action = GameListView::ui(ui, state.entries(), !busy);
        });

        if !busy {
            if let Some(game_id) = state.pending_delete() {
                events.delete_answer = ConfirmDialog::show(ctx, game_id);
            }
        }

        self.handle(events, ctx);

        if busy {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
