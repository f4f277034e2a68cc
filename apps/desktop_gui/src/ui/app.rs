use std::{path::PathBuf, time::Instant};

use client_core::{
    controller::{Action, InputMode, SessionState, StaleResponsePolicy},
    intake::{self, FileCandidate},
    notify::{Severity, EXTRACTION_FALLBACKS},
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{DocumentKind, Section, SOURCE_LANGUAGES, TARGET_LANGUAGES},
    error::ErrorCode,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch, SystemClipboard};
use crate::ui::{
    content,
    theme::{self, ACCENT, ERROR, MUTED_TEXT, PINK, SUCCESS},
    toasts::ToastClock,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StartupConfig {
    pub stale_policy: StaleResponsePolicy,
}

/// Requests collected while rendering and applied once the frame's borrows end.
enum Intent {
    Dispatch(Action),
    PickFile,
}

pub struct TranslatorApp {
    session: SessionState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    clipboard: SystemClipboard,
    toast_clock: ToastClock,
    backend_status: Option<String>,
    expanded_faq: Option<usize>,
}

impl TranslatorApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        startup: StartupConfig,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        cc.egui_ctx.set_visuals(theme::visuals());
        Self {
            session: SessionState::new(startup.stale_policy),
            cmd_tx,
            ui_rx,
            clipboard: SystemClipboard,
            toast_clock: ToastClock::default(),
            backend_status: None,
            expanded_faq: None,
        }
    }

    fn dispatch(&mut self, action: Action) {
        dispatch(&mut self.session, action, &self.cmd_tx, &mut self.clipboard);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Completed(action) => self.dispatch(action),
                UiEvent::BackendUnavailable(message) => {
                    tracing::error!("{message}");
                    self.backend_status = Some(message);
                }
            }
        }
    }

    fn expire_toasts(&mut self) {
        let expired = self
            .toast_clock
            .expired(self.session.notifications(), Instant::now());
        for id in expired {
            self.dispatch(Action::DismissNotification(id));
        }
    }

    fn apply(&mut self, intents: Vec<Intent>) {
        for intent in intents {
            match intent {
                Intent::Dispatch(action) => self.dispatch(action),
                Intent::PickFile => self.pick_file(),
            }
        }
    }

    fn pick_file(&mut self) {
        let extensions: Vec<&str> = DocumentKind::ALL.iter().map(|kind| kind.extension()).collect();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Documents", &extensions)
            .pick_file()
        {
            self.select_path(path);
        }
    }

    fn select_path(&mut self, path: PathBuf) {
        match FileCandidate::from_path(&path) {
            Ok(candidate) => self.dispatch(Action::SelectFile(candidate)),
            Err(err) => {
                tracing::warn!(path = %path.display(), "could not inspect file: {err}");
                self.session
                    .notifications_mut()
                    .error(ErrorCode::Internal, EXTRACTION_FALLBACKS.unreachable);
            }
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if self.session.section() != Section::Home {
            return;
        }
        // Single-file intake: extra files in one drop are ignored.
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if let Some(path) = file.path {
            self.select_path(path);
        } else if let Some(bytes) = file.bytes {
            let mime_type = (!file.mime.is_empty()).then_some(file.mime);
            self.dispatch(Action::SelectFile(FileCandidate::from_bytes(
                file.name,
                mime_type,
                bytes.to_vec(),
            )));
        }
    }

    fn show_nav(&self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::NONE
                    .fill(theme::CARD_FILL)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(content::APP_NAME)
                            .size(22.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.add_space(32.0);
                    for section in Section::ALL {
                        let selected = self.session.section() == section;
                        if ui.selectable_label(selected, section.label()).clicked() && !selected {
                            intents.push(Intent::Dispatch(Action::Navigate(section)));
                        }
                    }
                });
                if let Some(status) = &self.backend_status {
                    ui.colored_label(ERROR, status);
                }
            });
    }

    fn show_footer(ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(24, 10)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(content::FOOTER).color(MUTED_TEXT));
                });
            });
    }

    fn show_toasts(&self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        if self.session.notifications().is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 72.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                for notification in self.session.notifications().iter() {
                    let color = match notification.severity {
                        Severity::Success => SUCCESS,
                        Severity::Error => ERROR,
                    };
                    theme::card_frame()
                        .stroke(egui::Stroke::new(1.5, color))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&notification.title).strong().color(color));
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    if ui.small_button("✕").clicked() {
                                        intents.push(Intent::Dispatch(Action::DismissNotification(
                                            notification.id,
                                        )));
                                    }
                                });
                            });
                            if !notification.message.is_empty() {
                                ui.label(&notification.message);
                            }
                        });
                    ui.add_space(8.0);
                }
            });
    }

    fn show_home(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new(content::HERO_TITLE)
                    .size(44.0)
                    .strong()
                    .color(ACCENT),
            );
            ui.add_space(8.0);
            ui.label(egui::RichText::new(content::HERO_SUBTITLE).size(18.0).color(MUTED_TEXT));
            ui.add_space(24.0);
        });

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.show_input_tabs(ui, intents);
            ui.add_space(16.0);
            self.show_language_pickers(ui, intents);
            ui.add_space(16.0);
            self.show_translate_button(ui, intents);
            self.show_result(ui, intents);
        });

        ui.add_space(24.0);
        card_row(ui, &content::FEATURES);
    }

    fn show_input_tabs(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let mode = self.session.input_mode();
        ui.columns(2, |columns| {
            for (column, (tab, label)) in columns.iter_mut().zip([
                (InputMode::Upload, "Upload file"),
                (InputMode::PasteText, "Paste text"),
            ]) {
                column.vertical_centered_justified(|ui| {
                    if ui.selectable_label(mode == tab, label).clicked() && mode != tab {
                        intents.push(Intent::Dispatch(Action::SetInputMode(tab)));
                    }
                });
            }
        });
        ui.add_space(12.0);

        match mode {
            InputMode::Upload => self.show_drop_zone(ui, intents),
            InputMode::PasteText => {
                let mut text = self.session.input_text().to_string();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .hint_text("Paste text to translate...")
                        .desired_rows(12)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    intents.push(Intent::Dispatch(Action::EditInputText(text)));
                }
            }
        }
    }

    fn show_drop_zone(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let stroke_color = if hovering { ACCENT } else { theme::CARD_STROKE };
        let response = egui::Frame::NONE
            .fill(if hovering { theme::ACCENT_SOFT } else { theme::CARD_FILL })
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .corner_radius(egui::CornerRadius::same(16))
            .inner_margin(egui::Margin::same(40))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if self.session.is_extracting() {
                        ui.spinner();
                        ui.label(egui::RichText::new(content::EXTRACTING_LABEL).size(16.0));
                    } else if let Some(file) = self.session.selected_file() {
                        ui.label(egui::RichText::new(&file.name).size(16.0).strong().color(SUCCESS));
                        ui.label(
                            egui::RichText::new(intake::size_label(file.byte_size)).color(MUTED_TEXT),
                        );
                    } else {
                        ui.label(egui::RichText::new(content::DROP_HINT).size(16.0));
                        ui.label(egui::RichText::new(content::UPLOAD_LIMITS).color(MUTED_TEXT));
                    }
                });
            })
            .response
            .interact(egui::Sense::click());
        if response.clicked() && !self.session.is_extracting() {
            intents.push(Intent::PickFile);
        }

        if self.session.selected_file().is_some() {
            ui.add_space(8.0);
            let clicked = ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new("Choose another file"))
                .clicked();
            if clicked {
                intents.push(Intent::Dispatch(Action::ClearFile));
            }
        }
    }

    fn show_language_pickers(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.columns(2, |columns| {
            language_combo(
                &mut columns[0],
                "Source language",
                self.session.source_language(),
                &SOURCE_LANGUAGES,
                Action::SetSourceLanguage,
                intents,
            );
            language_combo(
                &mut columns[1],
                "Target language",
                self.session.target_language(),
                &TARGET_LANGUAGES,
                Action::SetTargetLanguage,
                intents,
            );
        });
    }

    fn show_translate_button(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let translating = self.session.is_translating();
        let label = if translating {
            "Translating..."
        } else {
            "Translate text"
        };
        let button = egui::Button::new(egui::RichText::new(label).size(18.0).strong().color(egui::Color32::WHITE))
            .fill(if translating { PINK.gamma_multiply(0.6) } else { ACCENT });
        let clicked = ui
            .add_enabled_ui(!translating, |ui| {
                ui.add_sized([ui.available_width(), 48.0], button)
            })
            .inner
            .clicked();
        if clicked {
            intents.push(Intent::Dispatch(Action::RequestTranslation));
        }
    }

    fn show_result(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let translated = self.session.translated_text();
        if translated.is_empty() {
            return;
        }
        ui.add_space(16.0);
        egui::Frame::NONE
            .fill(theme::ACCENT_SOFT)
            .stroke(egui::Stroke::new(1.5, theme::CARD_STROKE))
            .corner_radius(egui::CornerRadius::same(14))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Translation result").size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Copy").clicked() {
                            intents.push(Intent::Dispatch(Action::CopyResult));
                        }
                    });
                });
                ui.add_space(8.0);
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(egui::Label::new(translated).wrap());
                });
            });
    }

    fn show_about(ui: &mut egui::Ui) {
        theme::section_heading(ui, Section::About.label());
        theme::card_frame().show(ui, |ui| {
            for paragraph in content::ABOUT {
                ui.label(egui::RichText::new(paragraph).size(16.0));
                ui.add_space(12.0);
            }
        });
    }

    fn show_services(ui: &mut egui::Ui) {
        theme::section_heading(ui, "Our services");
        for pair in content::SERVICES.chunks(2) {
            card_row(ui, pair);
            ui.add_space(12.0);
        }
    }

    fn show_portfolio(ui: &mut egui::Ui) {
        theme::section_heading(ui, Section::Portfolio.label());
        let projects: Vec<u32> = (1..=content::PORTFOLIO_PROJECTS).collect();
        for row in projects.chunks(3) {
            ui.columns(row.len(), |columns| {
                for (column, project) in columns.iter_mut().zip(row) {
                    theme::card_frame().show(column, |ui| {
                        ui.set_width(ui.available_width());
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), 96.0),
                            egui::Sense::hover(),
                        );
                        ui.painter()
                            .rect_filled(rect, egui::CornerRadius::same(10), PINK.gamma_multiply(0.35));
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(format!("Project {project}")).size(18.0).strong());
                        ui.label(egui::RichText::new(content::PORTFOLIO_CAPTION).color(MUTED_TEXT));
                    });
                }
            });
            ui.add_space(12.0);
        }
    }

    fn show_blog(ui: &mut egui::Ui) {
        theme::section_heading(ui, Section::Blog.label());
        for post in &content::BLOG_POSTS {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(post.title).size(18.0).strong());
                ui.label(egui::RichText::new(post.date_label()).color(MUTED_TEXT));
            });
            ui.add_space(12.0);
        }
    }

    fn show_faq(&mut self, ui: &mut egui::Ui) {
        theme::section_heading(ui, "Questions and answers");
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (index, entry) in content::FAQ.iter().enumerate() {
                let open = self.expanded_faq == Some(index);
                let marker = if open { "▾" } else { "▸" };
                let heading = egui::RichText::new(format!("{marker} {}", entry.title))
                    .size(16.0)
                    .strong();
                if ui.selectable_label(open, heading).clicked() {
                    self.expanded_faq = if open { None } else { Some(index) };
                }
                if open {
                    ui.label(entry.body);
                }
                ui.separator();
            }
        });
    }

    fn show_contact(ui: &mut egui::Ui) {
        theme::section_heading(ui, Section::Contact.label());
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(content::CONTACT_HEADING).size(20.0).strong());
            ui.add_space(12.0);
            for entry in &content::CONTACTS {
                ui.label(egui::RichText::new(entry.title).strong().color(ACCENT));
                ui.label(entry.body);
                ui.add_space(8.0);
            }
        });
    }
}

fn card_row(ui: &mut egui::Ui, cards: &[content::Card]) {
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            theme::card_frame().show(column, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(card.title).size(18.0).strong());
                ui.label(egui::RichText::new(card.body).color(MUTED_TEXT));
            });
        }
    });
}

fn language_combo(
    ui: &mut egui::Ui,
    label: &str,
    current: &str,
    options: &[&str],
    on_select: impl Fn(String) -> Action,
    intents: &mut Vec<Intent>,
) {
    ui.label(egui::RichText::new(label).strong());
    egui::ComboBox::from_id_salt(label)
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                if ui.selectable_label(current == *option, *option).clicked() && current != *option {
                    intents.push(Intent::Dispatch(on_select((*option).to_string())));
                }
            }
        });
}

impl eframe::App for TranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.collect_dropped_files(ctx);
        self.expire_toasts();

        let mut intents = Vec::new();
        self.show_nav(ctx, &mut intents);
        Self::show_footer(ctx);
        let section = self.session.section();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(960.0);
                    match section {
                        Section::Home => self.show_home(ui, &mut intents),
                        Section::About => Self::show_about(ui),
                        Section::Services => Self::show_services(ui),
                        Section::Portfolio => Self::show_portfolio(ui),
                        Section::Blog => Self::show_blog(ui),
                        Section::Faq => self.show_faq(ui),
                        Section::Contact => Self::show_contact(ui),
                    }
                });
        });
        self.show_toasts(ctx, &mut intents);
        self.apply(intents);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
