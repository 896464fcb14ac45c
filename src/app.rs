//! Main application UI and state management.
//! Owns the catalog, review store and progress, and wires them to the study,
//! quiz and guided-session screens.

use eframe::egui;
use hsk_flashcards::audio::AudioCommand;
use hsk_flashcards::config::AppConfig;
use hsk_flashcards::database::db;
use hsk_flashcards::dataset::{self, LoadedDataset};
use hsk_flashcards::export::csv::{export_progress_csv, import_progress_csv};
use hsk_flashcards::export::json::export_catalog_json;
use hsk_flashcards::models::progress::dashboard;
use hsk_flashcards::models::{
    GuidedSession, GuidedStage, LearningSession, Progress, ReviewStore, Settings,
    VocabularyCatalog, build_queue,
};
use hsk_flashcards::quiz::{MISMATCH_UNLOCK, Quiz, QuizKind, TypedMode};
use rand_chacha::ChaCha8Rng;
use rusqlite::Connection;
use std::time::{Duration, Instant};

/// Application screen states
#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum AppScreen {
    #[default]
    Dashboard,
    Study,
    Quiz,
    Guided,
    Settings,
}

/// Deferred quiz input, applied after rendering to avoid borrowing conflicts
enum QuizAction {
    Pick(String),
    Submit,
    Play,
    Left(usize),
    Right(usize),
}

/// Main application state
pub struct MyApp {
    config: AppConfig,
    conn: Connection,
    rng: ChaCha8Rng,

    catalog: VocabularyCatalog,
    store: ReviewStore,
    progress: Progress,
    settings: Settings,
    dataset_status: String,

    current_screen: AppScreen,
    learning_session: Option<LearningSession>,

    quiz: Option<Quiz>,
    quiz_input: String,
    quiz_feedback: Option<String>,
    quiz_recap: Option<String>,

    guided: Option<GuidedSession>,
    guided_recap: Option<String>,

    speech_rate: f32,
    audio_log: Vec<String>,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.settings.dark_theme {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_screen, AppScreen::Dashboard, "Dashboard");
                ui.selectable_value(&mut self.current_screen, AppScreen::Study, "Study");
                ui.selectable_value(&mut self.current_screen, AppScreen::Quiz, "Quiz");
                ui.selectable_value(&mut self.current_screen, AppScreen::Guided, "Guided");
                ui.selectable_value(&mut self.current_screen, AppScreen::Settings, "Settings");
            });
        });

        self.check_guided_timer(ctx);

        match self.current_screen {
            AppScreen::Dashboard => self.render_dashboard(ctx),
            AppScreen::Study => self.render_study_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
            AppScreen::Guided => self.render_guided_screen(ctx),
            AppScreen::Settings => self.render_settings(ctx),
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl MyApp {
    /// Creates the application from an open database and an already loaded dataset
    pub fn new(
        config: AppConfig,
        conn: Connection,
        dataset: LoadedDataset,
        rng: ChaCha8Rng,
    ) -> Self {
        let store = db::load_review_store(&conn);
        let settings = db::load_settings(&conn);
        let mut progress = db::load_progress(&conn);

        // Opening the app counts as activity for today
        let today = db::get_current_date(&conn);
        progress.streak.touch(today, settings.streak_policy);
        if let Err(e) = db::save_progress(&progress, &conn) {
            log::warn!("Failed to save streak: {}", e);
        }

        Self {
            config,
            conn,
            rng,
            catalog: dataset.catalog,
            store,
            progress,
            settings,
            dataset_status: dataset.status,
            current_screen: AppScreen::Dashboard,
            learning_session: None,
            quiz: None,
            quiz_input: String::new(),
            quiz_feedback: None,
            quiz_recap: None,
            guided: None,
            guided_recap: None,
            speech_rate: 1.0,
            audio_log: Vec::new(),
            show_confirmation_dialog: false,
            allowed_to_close: false,
            show_result_dialog: false,
            result_message: String::new(),
        }
    }

    fn today(&self) -> chrono::NaiveDate {
        db::get_current_date(&self.conn)
    }

    fn persist(&self) {
        if let Err(e) = db::save_review_store(&self.store, &self.conn) {
            log::error!("Failed to save review progress: {}", e);
        }
        if let Err(e) = db::save_progress(&self.progress, &self.conn) {
            log::error!("Failed to save experience: {}", e);
        }
    }

    fn show_message(&mut self, message: String) {
        self.result_message = message;
        self.show_result_dialog = true;
    }

    fn emit(&mut self, command: AudioCommand) {
        log::info!("Audio request: {}", command);
        self.audio_log.push(command.to_string());
        if self.audio_log.len() > 5 {
            self.audio_log.remove(0);
        }
    }

    /// Rebuilds today's queue; `include_new = false` gives a reviews-only session
    fn start_learning_session(&mut self, include_new: bool, new_limit: usize) {
        let today = self.today();
        let max_new = include_new.then_some(new_limit);
        let queue = build_queue(
            &self.catalog,
            &self.store,
            today,
            max_new,
            self.settings.max_reviews,
            &mut self.rng,
        );
        log::info!("{}", queue.info());
        self.learning_session = Some(LearningSession::new(queue));
    }

    fn grade(&mut self, quality: u8) {
        let today = self.today();
        if let Some(session) = &mut self.learning_session {
            let graded =
                session.grade_current_card(quality, &mut self.store, &mut self.progress, today);
            if graded.is_some() {
                self.progress.streak.touch(today, self.settings.streak_policy);
                self.persist();
            }
        }
    }

    fn start_quiz(&mut self, kind: QuizKind) {
        self.quiz = Some(Quiz::start(kind, &self.catalog, &mut self.rng));
        self.quiz_input.clear();
        self.quiz_feedback = None;
        self.quiz_recap = None;
    }

    /// Renders the dashboard with counts, streak, experience and category progress
    fn render_dashboard(&mut self, ctx: &egui::Context) {
        let today = self.today();
        let stats = dashboard(&self.catalog, &self.store, &self.progress, today);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(today.format("%Y-%m-%d").to_string());
                if ui.button("Next Day").clicked() {
                    if let Err(e) = db::advance_day(&self.conn) {
                        log::error!("Failed to advance day: {}", e);
                    }
                }
            });
            ui.label(&self.dataset_status);
            ui.separator();

            ui.heading("Today");
            ui.label(format!(
                "Learned: {} · Due today: {}",
                stats.learned, stats.due_today
            ));
            ui.label(format!("Streak: {}🔥", stats.streak));
            ui.label(format!("XP: {} · Level {}", stats.xp, stats.level));
            let badges = if stats.badges.is_empty() {
                "—".to_string()
            } else {
                stats.badges.join(" · ")
            };
            ui.label(format!("Badges: {}", badges));

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label("New words:");
                ui.add(egui::Slider::new(&mut self.settings.new_per_day, 1..=100));
            });
            ui.horizontal(|ui| {
                if ui.button("Start new + reviews").clicked() {
                    self.save_settings();
                    self.start_learning_session(true, self.settings.new_per_day);
                    self.current_screen = AppScreen::Study;
                }
                if ui.button("Reviews only").clicked() {
                    self.start_learning_session(false, 0);
                    self.current_screen = AppScreen::Study;
                }
                if ui.button("Guided session").clicked() {
                    self.current_screen = AppScreen::Guided;
                }
            });

            ui.separator();
            ui.heading("Progress by category");
            egui::ScrollArea::vertical()
                .id_salt("tag_progress")
                .max_height(200.0)
                .show(ui, |ui| {
                    for (category, counts) in &stats.categories {
                        ui.label(format!(
                            "{}: {}/{} ({}%)",
                            category,
                            counts.learned,
                            counts.total,
                            counts.percent()
                        ));
                    }
                });
        });
    }

    fn render_study_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_study_body(ui);
        });
    }

    /// Renders the current flashcard with reveal and grading controls
    fn render_study_body(&mut self, ui: &mut egui::Ui) {
        let show_pinyin = self.settings.show_pinyin;
        let mut action_toggle = false;
        let mut action_grade: Option<u8> = None;
        let mut action_speak: Option<AudioCommand> = None;
        let mut action_restart = false;

        match &self.learning_session {
            None => {
                ui.label("No study session. Start one from the dashboard.");
                if ui.button("Start new + reviews").clicked() {
                    action_restart = true;
                }
            }
            Some(session) if session.is_completed() => {
                ui.heading("All done for now! 🎉");
                ui.label(format!("Cards graded this session: {}", session.graded_count));
            }
            Some(session) => {
                ui.label(session.phase_message());
                ui.add_space(10.0);

                if let Some(card) = session.current_card() {
                    let flipped = session.show_answer;
                    ui.group(|ui| {
                        ui.set_min_height(220.0);
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.label(egui::RichText::new(&card.hanzi).size(56.0));
                            if flipped {
                                let pinyin = if show_pinyin {
                                    card.pinyin.as_str()
                                } else {
                                    "• • •"
                                };
                                ui.label(egui::RichText::new(pinyin).size(22.0));
                                ui.label(&card.english);
                                ui.add_space(10.0);
                                ui.label(&card.example);
                            } else {
                                ui.label("(Click 'Flip' to reveal)");
                            }
                        });
                    });

                    ui.horizontal(|ui| {
                        if ui.button(if flipped { "Hide" } else { "Flip" }).clicked() {
                            action_toggle = true;
                        }
                        if ui.button("🔊 Word").clicked() {
                            action_speak = Some(AudioCommand::speak(&card.hanzi, self.speech_rate));
                        }
                        if ui.button("🔊 Sentence").clicked() {
                            action_speak =
                                Some(AudioCommand::speak(&card.example, self.speech_rate));
                        }
                    });
                    ui.add(egui::Slider::new(&mut self.speech_rate, 0.5..=1.5).text("Rate"));

                    if flipped {
                        ui.label("Rate your recall:");
                        ui.horizontal(|ui| {
                            for (quality, label) in
                                [(0, "0 - Blackout"), (1, "1 - Wrong"), (2, "2 - Familiar")]
                            {
                                if ui.button(label).clicked() {
                                    action_grade = Some(quality);
                                }
                            }
                        });
                        ui.horizontal(|ui| {
                            for (quality, label) in
                                [(3, "3 - Difficult"), (4, "4 - Correct"), (5, "5 - Perfect")]
                            {
                                if ui.button(label).clicked() {
                                    action_grade = Some(quality);
                                }
                            }
                        });
                    }
                }
            }
        }

        // Execute deferred actions
        if action_restart {
            self.start_learning_session(true, self.settings.new_per_day);
        }
        if action_toggle {
            if let Some(session) = &mut self.learning_session {
                session.toggle_answer();
            }
        }
        if let Some(command) = action_speak {
            self.emit(command);
        }
        if let Some(quality) = action_grade {
            self.grade(quality);
        }
    }

    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for kind in QuizKind::ALL {
                    if ui.button(kind.label()).clicked() {
                        self.start_quiz(kind);
                    }
                }
            });
            ui.separator();
            self.render_quiz_body(ui);
        });
    }

    /// Renders the quiz in progress and its recap
    fn render_quiz_body(&mut self, ui: &mut egui::Ui) {
        let mut action: Option<QuizAction> = None;
        let now = Instant::now();
        let flash = match &self.quiz {
            Some(Quiz::Matching(quiz)) => quiz.mismatch(now),
            _ => None,
        };
        if flash.is_some() {
            ui.ctx().request_repaint_after(MISMATCH_UNLOCK);
        }

        match &self.quiz {
            None => {
                ui.label("Pick a quiz mode above.");
            }
            Some(Quiz::Choice(quiz)) => {
                if let Some(question) = quiz.current() {
                    let (done, total) = quiz.position();
                    ui.label(format!("Question {}/{}", done + 1, total));
                    ui.label(egui::RichText::new(&question.prompt).size(32.0));
                    ui.add_space(10.0);
                    for option in &question.options {
                        if ui.button(option).clicked() {
                            action = Some(QuizAction::Pick(option.clone()));
                        }
                    }
                }
            }
            Some(Quiz::Typed(quiz)) => {
                if let Some(question) = quiz.current() {
                    let (done, total) = quiz.position();
                    ui.label(format!("Question {}/{}", done + 1, total));
                    if quiz.mode() == TypedMode::Listening && ui.button("🔊 Play").clicked() {
                        action = Some(QuizAction::Play);
                    }
                    ui.label(egui::RichText::new(&question.prompt).size(24.0));
                    let response = ui.text_edit_singleline(&mut self.quiz_input);
                    let entered =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Check").clicked() || entered {
                        action = Some(QuizAction::Submit);
                    }
                }
            }
            Some(Quiz::Matching(quiz)) => {
                ui.label("Match Hanzi → English");
                ui.columns(2, |columns| {
                    for i in 0..quiz.left().len() {
                        let label = quiz.left_label(i).unwrap_or_default();
                        let mut button = egui::Button::new(label)
                            .selected(quiz.selected_left() == Some(i));
                        if flash.is_some_and(|(fi, _)| fi == i) {
                            button = button.fill(egui::Color32::DARK_RED);
                        }
                        if columns[0]
                            .add_enabled(!quiz.is_left_locked(i), button)
                            .clicked()
                        {
                            action = Some(QuizAction::Left(i));
                        }
                    }
                    for (j, english) in quiz.right().iter().enumerate() {
                        let mut button = egui::Button::new(english);
                        if flash.is_some_and(|(_, fj)| fj == j) {
                            button = button.fill(egui::Color32::DARK_RED);
                        }
                        if columns[1]
                            .add_enabled(!quiz.is_right_locked(j), button)
                            .clicked()
                        {
                            action = Some(QuizAction::Right(j));
                        }
                    }
                });
            }
        }

        if let Some(feedback) = &self.quiz_feedback {
            ui.label(feedback);
        }
        if let Some(recap) = &self.quiz_recap {
            ui.separator();
            ui.strong(recap);
        }

        if let Some(action) = action {
            self.apply_quiz_action(action);
        }
    }

    fn apply_quiz_action(&mut self, action: QuizAction) {
        let mut speak: Option<AudioCommand> = None;
        match (&mut self.quiz, action) {
            (Some(Quiz::Choice(quiz)), QuizAction::Pick(option)) => {
                let answer = quiz.current().map(|q| q.answer.clone()).unwrap_or_default();
                if let Some(correct) = quiz.answer(&option) {
                    self.quiz_feedback = Some(if correct {
                        "✔ Correct".to_string()
                    } else {
                        format!("✘ Answer: {}", answer)
                    });
                }
            }
            (Some(Quiz::Typed(quiz)), QuizAction::Submit) => {
                let target = quiz.current().map(|q| q.target);
                if let (Some(correct), Some(target)) = (quiz.answer(&self.quiz_input), target) {
                    self.quiz_feedback = Some(if correct {
                        "✔ Correct".to_string()
                    } else {
                        format!("✘ Answer: {} — {}", target.hanzi, target.pinyin)
                    });
                }
                self.quiz_input.clear();
            }
            (Some(Quiz::Typed(quiz)), QuizAction::Play) => {
                speak = quiz.play();
            }
            (Some(Quiz::Matching(quiz)), QuizAction::Left(i)) => {
                quiz.select_left(i, Instant::now());
            }
            (Some(Quiz::Matching(quiz)), QuizAction::Right(j)) => {
                quiz.select_right(j, Instant::now());
            }
            _ => {}
        }

        if let Some(command) = speak {
            self.emit(command);
        }

        if let Some(quiz) = &self.quiz {
            if quiz.is_finished() && self.quiz_recap.is_none() {
                let outcome = quiz.outcome();
                log::info!("Quiz finished: {}", outcome.recap());
                self.quiz_recap = Some(outcome.recap());
            }
        }
    }

    /// Renders the timed guided session: stage header, countdown and the stage's content
    fn render_guided_screen(&mut self, ctx: &egui::Context) {
        let now = Instant::now();

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut action_begin = false;
            let mut action_next = false;
            let mut action_end = false;

            match &self.guided {
                None => {
                    ui.heading("Guided session");
                    ui.label(format!(
                        "New words, reviews, then typing, listening and cloze quizzes in {} minutes.",
                        self.settings.session_mins
                    ));
                    if ui.button("Begin").clicked() {
                        action_begin = true;
                    }
                    if let Some(recap) = &self.guided_recap {
                        ui.separator();
                        ui.strong(recap);
                    }
                }
                Some(guided) => {
                    ui.horizontal(|ui| {
                        ui.heading(guided.stage_label());
                        ui.label(guided.timer_text(now));
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Finish stage").clicked() {
                            action_next = true;
                        }
                        if ui.button("End session").clicked() {
                            action_end = true;
                        }
                    });
                    ui.separator();
                    ctx.request_repaint_after(Duration::from_secs(1));
                }
            }

            if let Some(stage) = self.guided.as_ref().and_then(|g| g.current_stage()) {
                match stage {
                    GuidedStage::NewCards(_) | GuidedStage::Reviews => self.render_study_body(ui),
                    GuidedStage::Quiz(_) => self.render_quiz_body(ui),
                }
            }

            if action_begin {
                self.guided = Some(GuidedSession::begin(
                    self.settings.session_mins,
                    Instant::now(),
                ));
                self.guided_recap = None;
                self.next_guided_stage();
            }
            if action_next {
                self.next_guided_stage();
            }
            if action_end {
                self.end_guided();
            }
        });
    }

    fn next_guided_stage(&mut self) {
        let Some(guided) = &mut self.guided else {
            return;
        };
        match guided.next_stage() {
            Some(GuidedStage::NewCards(count)) => self.start_learning_session(true, count),
            Some(GuidedStage::Reviews) => self.start_learning_session(false, 0),
            Some(GuidedStage::Quiz(kind)) => self.start_quiz(kind),
            None => self.end_guided(),
        }
    }

    /// Ends an expired guided session whichever tab is open
    fn check_guided_timer(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some(remaining) = self.guided.as_ref().map(|g| g.remaining(now)) else {
            return;
        };
        if remaining.is_zero() {
            self.end_guided();
        } else {
            ctx.request_repaint_after(remaining);
        }
    }

    fn end_guided(&mut self) {
        if self.guided.take().is_some() {
            self.guided_recap = Some(format!(
                "Session done! Words learned so far: {}.",
                self.store.len()
            ));
        }
    }

    fn save_settings(&self) {
        if let Err(e) = db::save_settings(&self.settings, &self.conn) {
            log::error!("Failed to save settings: {}", e);
        }
    }

    /// Renders settings, dataset maintenance and progress import/export
    fn render_settings(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut changed = false;
            ui.heading("Study");
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.new_per_day, 1..=100).text("New per day"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.max_reviews, 1..=999).text("Max reviews"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.settings.session_mins, 5..=180)
                        .text("Session minutes"),
                )
                .changed();
            changed |= ui.checkbox(&mut self.settings.show_pinyin, "Show pinyin").changed();
            changed |= ui.checkbox(&mut self.settings.dark_theme, "Dark theme").changed();
            if changed {
                self.save_settings();
            }

            ui.separator();
            ui.heading("Progress");
            ui.horizontal(|ui| {
                if ui.button("Export CSV").clicked() {
                    self.handle_export_csv();
                }
                if ui.button("Import CSV").clicked() {
                    self.handle_import_csv();
                }
                if ui.button("Reset progress").clicked() {
                    self.handle_reset_progress();
                }
            });

            ui.separator();
            ui.heading("Dataset");
            ui.label(&self.dataset_status);
            ui.horizontal(|ui| {
                if ui.button("Bake data now").clicked() {
                    self.handle_bake();
                }
                if ui.button("Download current dataset").clicked() {
                    self.handle_download_dataset();
                }
            });

            if !self.audio_log.is_empty() {
                ui.separator();
                ui.label("Recent audio requests:");
                for line in &self.audio_log {
                    ui.small(line);
                }
            }
        });
    }

    /// Handles progress export to a CSV file
    fn handle_export_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("hsk1_progress.csv")
            .add_filter("CSV files", &["csv"])
            .save_file()
        {
            let message = match export_progress_csv(&self.catalog, &self.store, &path) {
                Ok(_) => format!("Progress exported to '{}'", path.display()),
                Err(e) => format!("Export failed: {}", e),
            };
            self.show_message(message);
        }
    }

    /// Handles progress import from a CSV file
    fn handle_import_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file()
        {
            let message = match import_progress_csv(&self.catalog, &mut self.store, &path) {
                Ok(_) => {
                    self.persist();
                    "Import complete.".to_string()
                }
                Err(e) => format!("Import failed: {}", e),
            };
            self.show_message(message);
        }
    }

    /// Clears review records, XP and streak. Settings survive.
    fn handle_reset_progress(&mut self) {
        let message = match db::reset_progress(&self.conn) {
            Ok(()) => {
                self.store = ReviewStore::new();
                self.progress = Progress::default();
                self.learning_session = None;
                "Progress reset.".to_string()
            }
            Err(e) => format!("Reset failed: {}", e),
        };
        self.show_message(message);
    }

    /// Fetches the remote word list, caches it and reloads the catalog
    fn handle_bake(&mut self) {
        match dataset::bake_dataset(&self.conn, &self.config, &mut self.rng) {
            Ok(loaded) => {
                self.catalog = loaded.catalog;
                self.dataset_status = loaded.status.clone();
                self.learning_session = None;
                self.quiz = None;
                self.show_message(loaded.status);
            }
            Err(e) => {
                log::warn!("Bake failed: {}", e);
                self.show_message(
                    "Failed to fetch now. Ensure you're online and try again.".to_string(),
                );
            }
        }
    }

    /// Saves the normalized catalog as JSON
    fn handle_download_dataset(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("current_dataset.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            let message = match export_catalog_json(&self.catalog, &path) {
                Ok(_) => format!("Dataset saved to '{}'", path.display()),
                Err(e) => format!("Export failed: {}", e),
            };
            self.show_message(message);
        }
    }
}
