//! Egui backend implementation for FormBackend trait.

use eframe::egui;
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};
use survey_record::{
    FormBackend, FormState, MAX_AGE, MIN_AGE, Notice, NoticeKind, Rating, RecordWriter, Session,
    Technology,
};
use thiserror::Error;

const HEADER: &str = "Анкета зворотного зв'язку";
const NAME_LABEL: &str = "1. Прізвище та ім'я користувача:";
const NAME_HINT: &str = "Введіть ваше ПІБ...";
const AGE_LABEL: &str = "2. Вкажіть ваш повний вік:";
const RATING_LABEL: &str = "3. Оцініть складність проекту (1-5):";
const TECHNOLOGY_LABEL: &str = "4. Які технології ви вивчаєте?";
const COMMENT_LABEL: &str = "5. Ваші додаткові пропозиції:";
const COMMENT_HINT: &str = "Напишіть відгук тут...";
const SAVE_LABEL: &str = "ЗБЕРЕГТИ РЕЗУЛЬТАТИ";

const INK: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xfc, 0xfd, 0xfe);
const SAVE_GREEN: egui::Color32 = egui::Color32::from_rgb(0x27, 0xae, 0x60);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(0xc0, 0x39, 0x2b);

/// Error type for the Egui backend.
#[derive(Debug, Error)]
pub enum EguiError {
    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    EguiError(String),
}

/// Builder/configuration for the Egui backend.
#[derive(Debug, Clone)]
pub struct EguiBackend {
    /// Window title.
    title: String,
    /// Window size [width, height].
    window_size: [f32; 2],
}

impl Default for EguiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiBackend {
    /// Minimum window width in points.
    pub const MIN_WIDTH: f32 = 500.0;

    /// Create a new Egui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Survey Pro v5.0 | High-Contrast Edition".to_string(),
            window_size: [Self::MIN_WIDTH, 760.0],
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size. The width never goes below [`Self::MIN_WIDTH`].
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = [size[0].max(Self::MIN_WIDTH), size[1]];
        self
    }
}

/// Everything the window mutates between frames.
struct FormSession {
    form: FormState,
    writer: RecordWriter,
    /// Notices shown so far.
    notices: Vec<Notice>,
    /// Notice waiting to be acknowledged. The form is disabled meanwhile.
    pending: Option<Notice>,
}

impl FormSession {
    fn new(form: FormState, writer: RecordWriter) -> Self {
        Self {
            form,
            writer,
            notices: Vec::new(),
            pending: None,
        }
    }

    fn is_blocked(&self) -> bool {
        self.pending.is_some()
    }

    fn save(&mut self) {
        let notice = self.form.save(&self.writer);
        self.notices.push(notice.clone());
        self.pending = Some(notice);
    }

    fn acknowledge(&mut self) {
        self.pending = None;
    }

    fn take_session(&mut self) -> Session {
        Session {
            form: std::mem::take(&mut self.form),
            notices: std::mem::take(&mut self.notices),
        }
    }
}

/// The egui application that renders the survey form.
struct SurveyApp {
    state: Arc<Mutex<FormSession>>,
}

impl SurveyApp {
    fn section_label(ui: &mut egui::Ui, text: &str) {
        ui.label(egui::RichText::new(text).strong().size(15.0).color(INK));
    }

    fn render_name(ui: &mut egui::Ui, form: &mut FormState) {
        Self::section_label(ui, NAME_LABEL);
        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text(NAME_HINT)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);
    }

    fn render_age(ui: &mut egui::Ui, form: &mut FormState) {
        Self::section_label(ui, AGE_LABEL);
        let mut age = form.age();
        if ui
            .add(egui::DragValue::new(&mut age).range(MIN_AGE..=MAX_AGE))
            .changed()
        {
            form.set_age(age);
        }
        ui.add_space(12.0);
    }

    fn render_rating(ui: &mut egui::Ui, form: &mut FormState) {
        ui.group(|ui| {
            Self::section_label(ui, RATING_LABEL);
            ui.horizontal(|ui| {
                for rating in Rating::ALL {
                    ui.radio_value(&mut form.rating, Some(rating), rating.label());
                }
            });
        });
        ui.add_space(12.0);
    }

    fn render_technologies(ui: &mut egui::Ui, form: &mut FormState) {
        ui.group(|ui| {
            Self::section_label(ui, TECHNOLOGY_LABEL);
            for technology in Technology::ALL {
                let mut checked = form.has_technology(technology);
                if ui.checkbox(&mut checked, technology.description()).changed() {
                    form.set_technology(technology, checked);
                }
            }
        });
        ui.add_space(12.0);
    }

    fn render_comment(ui: &mut egui::Ui, form: &mut FormState) {
        Self::section_label(ui, COMMENT_LABEL);
        ui.add(
            egui::TextEdit::multiline(&mut form.comment)
                .hint_text(COMMENT_HINT)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(16.0);
    }

    /// Returns true when the save button was clicked this frame.
    fn render_save_button(ui: &mut egui::Ui) -> bool {
        let text = egui::RichText::new(SAVE_LABEL)
            .strong()
            .size(16.0)
            .color(egui::Color32::WHITE);
        ui.add(
            egui::Button::new(text)
                .fill(SAVE_GREEN)
                .min_size(egui::vec2(ui.available_width(), 44.0)),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
    }

    /// Show `notice`; returns true once the user acknowledged it.
    ///
    /// Enter only counts when `accept_enter` is set, so the key press that
    /// activated "Save" cannot also dismiss the notice it produced.
    fn render_notice(ctx: &egui::Context, notice: &Notice, accept_enter: bool) -> bool {
        let color = match notice.kind {
            NoticeKind::Success => SAVE_GREEN,
            NoticeKind::Error => ERROR_RED,
        };

        let mut acknowledged = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.colored_label(color, notice.message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        acknowledged || (accept_enter && ctx.input(|i| i.key_pressed(egui::Key::Enter)))
    }

    /// Run the save requested this frame and keep its notice on screen.
    fn finish_frame(ctx: &egui::Context, state: &mut FormSession, save_clicked: bool) {
        if save_clicked {
            state.save();
        }

        if let Some(notice) = state.pending.clone() {
            if Self::render_notice(ctx, &notice, !save_clicked) {
                state.acknowledge();
            }
        }
    }
}

impl eframe::App for SurveyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let blocked = state.is_blocked();
        let mut save_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        let header = egui::RichText::new(HEADER).size(26.0).strong().color(INK);
                        ui.heading(header);
                    });
                    ui.add_space(10.0);

                    let form = &mut state.form;
                    Self::render_name(ui, form);
                    Self::render_age(ui, form);
                    Self::render_rating(ui, form);
                    Self::render_technologies(ui, form);
                    Self::render_comment(ui, form);

                    save_clicked = Self::render_save_button(ui);
                });
            });
        });

        Self::finish_frame(ctx, &mut state, save_clicked);
    }
}

fn high_contrast_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(egui::Color32::BLACK);
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = egui::Color32::WHITE;
    visuals
}

impl FormBackend for EguiBackend {
    type Error = EguiError;

    fn run(&self, form: FormState, writer: RecordWriter) -> Result<Session, Self::Error> {
        let state = Arc::new(Mutex::new(FormSession::new(form, writer)));

        // Create native options
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size([Self::MIN_WIDTH, 0.0]),
            ..Default::default()
        };

        let app_state = Arc::clone(&state);
        debug!("opening survey window '{}'", self.title);

        // eframe::run_native blocks until the window is closed
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(high_contrast_visuals());
                Ok(Box::new(SurveyApp { state: app_state }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| EguiError::EguiError(e.to_string()))?;

        let session = state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take_session();
        debug!("survey window closed after {} save(s)", session.saved());
        Ok(session)
    }
}
