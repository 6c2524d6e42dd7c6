// Application state for the TUI
//
// Owns the roster state plus everything that only matters on screen: table
// selection, form focus, the open modal and the toast. Key handling never
// performs IO. Mutations produce `Ticket`s in the outbox, which the event
// loop drains and runs on spawned tasks; their `Completion`s come back
// through `on_completion`.

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::roster::{Completion, Notice, Outcome, RosterError, RosterState, Student, Ticket};
use crate::theme::Theme;
use crate::tui::components::{FormInput, RosterTable, StudentForm, Toast};
use crate::tui::modal::{Modal, ModalAction};
use crate::tui::traits::Interactive;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct App {
    pub state: RosterState,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub table: RosterTable,
    pub form: StudentForm,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    /// Requests spawned but not yet applied
    in_flight: usize,
    outbox: Vec<Ticket>,
    animation_frame: usize,
    service_url: String,
    start_time: Instant,
}

impl App {
    pub fn new(log_buffer: LogBuffer, theme: Theme, service_url: impl Into<String>) -> Self {
        Self {
            state: RosterState::new(),
            theme,
            log_buffer,
            table: RosterTable::new(),
            form: StudentForm::new(),
            modal: None,
            toast: None,
            should_quit: false,
            in_flight: 0,
            outbox: Vec::new(),
            animation_frame: 0,
            service_url: service_url.into(),
            start_time: Instant::now(),
        }
    }

    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        Self::new(log_buffer, Theme::by_name(&config.theme), config.service_url.clone())
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Advance spinners and expire the toast
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Uptime as "up 1h 02m" / "up 3m 12s"
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        if secs >= 3600 {
            format!("up {}h {:02}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("up {}m {:02}s", secs / 60, secs % 60)
        }
    }

    /// Keybinds for whatever currently receives keys
    pub fn focus_hint(&self) -> &'static str {
        match &self.modal {
            Some(Modal::ConfirmDelete { .. }) => "y:delete  n/Esc:keep",
            Some(_) => "Esc:close",
            None if self.editing_draft() => self.form.focus_hint(),
            None => self.table.focus_hint(),
        }
    }

    /// Whether keys go to the draft (creation form or edit row)
    pub fn editing_draft(&self) -> bool {
        self.state.show_form() || self.state.editing_id().is_some()
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.table
            .selected()
            .and_then(|i| self.state.students().get(i))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Requests
    // ─────────────────────────────────────────────────────────────────────

    /// Queue the initial load
    pub fn request_reload(&mut self) {
        let ticket = self.state.prepare_load();
        self.enqueue(ticket);
    }

    fn enqueue(&mut self, ticket: Ticket) {
        tracing::debug!(seq = ticket.seq, request = ticket.request.label(), "Request queued");
        self.in_flight += 1;
        self.outbox.push(ticket);
    }

    /// Tickets queued since the last call
    pub fn take_outbox(&mut self) -> Vec<Ticket> {
        std::mem::take(&mut self.outbox)
    }

    /// Fold a finished request into the UI
    pub fn on_completion(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);

        let created = match &completion.outcome {
            Outcome::Created(Ok(student)) => Some(student.id),
            _ => None,
        };

        if let Some(notice) = self.state.apply(completion.outcome) {
            self.notify(notice);
        }

        self.table.sync(self.state.students().len());
        if let Some(id) = created {
            self.table.select_id(&self.state, id);
            self.form.reset();
        }
    }

    fn notify(&mut self, notice: Notice) {
        if notice.is_blocking() {
            self.modal = Some(Modal::alert(notice));
        } else {
            self.toast = Some(Toast::new(notice.message()));
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Keyboard input
    // Layered dispatch: Ctrl+C → Modal → Draft → Table → Actions
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.handle_modal_key(key) {
            return;
        }

        if self.editing_draft() {
            self.handle_draft_key(key);
            return;
        }

        if self.table.handle_key(key).was_handled() {
            return;
        }

        self.handle_action_key(key);
    }

    /// Modal captures all input when open
    fn handle_modal_key(&mut self, key: KeyEvent) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };

        match modal.handle_input(key.code) {
            ModalAction::None => {}
            ModalAction::Close => self.modal = None,
            ModalAction::Confirm => {
                if let Some(Modal::ConfirmDelete { id, .. }) = self.modal.take() {
                    match self.state.prepare_delete(id) {
                        Ok(ticket) => self.enqueue(ticket),
                        Err(e) => tracing::warn!("Delete skipped: {}", e),
                    }
                }
            }
        }
        true
    }

    fn handle_draft_key(&mut self, key: KeyEvent) {
        match self.form.input(key, self.state.form_data()) {
            FormInput::Ignored | FormInput::Moved => {}
            FormInput::Set(field, value) => self.state.update_draft_field(field, &value),
            FormInput::Submit => self.submit_draft(),
            FormInput::Cancel => {
                if self.state.editing_id().is_some() {
                    self.state.cancel_edit();
                } else {
                    self.state.cancel_create();
                }
                self.form.reset();
            }
        }
    }

    fn submit_draft(&mut self) {
        let prepared = match self.state.editing_id() {
            Some(id) => self.state.prepare_edit(id),
            None => self.state.prepare_create().map_err(RosterError::from),
        };

        match prepared {
            Ok(ticket) => self.enqueue(ticket),
            Err(RosterError::Validation(e)) => {
                tracing::debug!("Draft rejected: {}", e);
                self.modal = Some(Modal::alert(Notice::Invalid(e)));
            }
            Err(e) => {
                // Row vanished under a reload
                tracing::warn!("{}", e);
                self.state.cancel_edit();
                self.form.reset();
            }
        }
    }

    fn handle_action_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => {
                self.state.toggle_form();
                self.form.reset();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(student) = self.selected_student().cloned() {
                    self.state.begin_edit(&student);
                    self.form.reset();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let prompt = self
                    .selected_student()
                    .map(|s| Modal::confirm_delete(s.id, s.name.clone()));
                if prompt.is_some() {
                    self.modal = prompt;
                }
            }
            KeyCode::Char('r') => self.request_reload(),
            KeyCode::Char('?') => self.modal = Some(Modal::help()),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::error::{Operation, ServiceError};
    use crate::roster::state::Request;
    use crate::roster::validation::ValidationError;
    use crate::roster::{DraftField, Grade, Major};

    fn app() -> App {
        App::new(LogBuffer::new(), Theme::default(), "http://localhost:8000")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn student(id: u64, name: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            grade: Grade::B,
            major: Major::Biotechnology,
        }
    }

    fn loaded(app: &mut App, students: Vec<Student>) {
        app.request_reload();
        let ticket = app.take_outbox().remove(0);
        app.on_completion(Completion {
            seq: ticket.seq,
            outcome: Outcome::Loaded(Ok(students)),
        });
    }

    #[test]
    fn load_completion_fills_table() {
        let mut app = app();
        app.request_reload();
        assert_eq!(app.in_flight(), 1);

        let ticket = app.take_outbox().remove(0);
        assert_eq!(ticket.request, Request::LoadAll);
        app.on_completion(Completion {
            seq: ticket.seq,
            outcome: Outcome::Loaded(Ok(vec![student(1, "Ann Lee"), student(2, "Bob Ray")])),
        });

        assert_eq!(app.in_flight(), 0);
        assert_eq!(app.state.students().len(), 2);
        assert_eq!(app.selected_student().map(|s| s.id), Some(1));
    }

    #[test]
    fn loaded_row_renders_all_four_fields() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = app();
        loaded(&mut app, vec![student(1, "Ann Lee")]);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| crate::tui::views::draw(f, &mut app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect();

        let row = lines
            .iter()
            .find(|line| line.contains("Ann Lee"))
            .expect("row for Ann Lee");
        let cells: Vec<&str> = row
            .split(|c: char| c == '│' || c.is_whitespace())
            .filter(|cell| !cell.is_empty())
            .collect();
        assert!(cells.contains(&"1"), "{}", row);
        assert!(cells.contains(&"B"), "{}", row);
        assert!(cells.contains(&"Biotechnology"), "{}", row);
    }

    #[test]
    fn invalid_create_opens_alert_without_request() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.state.show_form());

        type_str(&mut app, "Al");
        assert_eq!(app.state.form_data().name, "Al");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.take_outbox().is_empty());
        assert_eq!(
            app.modal,
            Some(Modal::Alert(Notice::Invalid(ValidationError::InvalidName)))
        );

        // Alert swallows keys until dismissed; the draft survives
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.modal, None);
        assert_eq!(app.state.form_data().name, "Al");
    }

    #[test]
    fn valid_create_queues_request() {
        let mut app = app();
        loaded(&mut app, vec![student(1, "Ann Lee")]);

        app.handle_key(key(KeyCode::Char('n')));
        type_str(&mut app, "Zed Park");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.field(), DraftField::Major);
        app.handle_key(key(KeyCode::Enter));

        let outbox = app.take_outbox();
        assert_eq!(outbox.len(), 1);
        match &outbox[0].request {
            Request::Create(draft) => {
                assert_eq!(draft.name, "Zed Park");
                assert_eq!(draft.grade, Grade::A);
                assert_eq!(draft.major, Major::ComputerScience);
            }
            other => panic!("expected create, got {:?}", other),
        }

        app.on_completion(Completion {
            seq: outbox[0].seq,
            outcome: Outcome::Created(Ok(Student {
                id: 2,
                name: "Zed Park".to_string(),
                grade: Grade::A,
                major: Major::ComputerScience,
            })),
        });
        assert!(!app.state.show_form());
        assert_eq!(app.selected_student().map(|s| s.id), Some(2));
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Added Zed Park"));
    }

    #[test]
    fn edit_row_escape_cancels() {
        let mut app = app();
        loaded(&mut app, vec![student(1, "Ann Lee")]);

        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.state.editing_id(), Some(1));
        type_str(&mut app, "x");
        assert_eq!(app.state.form_data().name, "Ann Leex");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state.editing_id(), None);
        assert_eq!(app.state.students()[0].name, "Ann Lee");
    }

    #[test]
    fn edit_submit_queues_update() {
        let mut app = app();
        loaded(&mut app, vec![student(1, "Ann Lee")]);

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Enter));

        let outbox = app.take_outbox();
        match &outbox[0].request {
            Request::Update { id, fields } => {
                assert_eq!(*id, 1);
                assert_eq!(fields.name, "Ann Le");
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app();
        loaded(&mut app, vec![student(1, "Ann Lee"), student(2, "Bob Ray")]);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(app.modal, Some(Modal::ConfirmDelete { id: 2, .. })));

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.modal, None);
        assert!(app.take_outbox().is_empty());

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        let outbox = app.take_outbox();
        assert_eq!(outbox[0].request, Request::Delete { id: 2 });
    }

    #[test]
    fn failed_request_opens_alert() {
        let mut app = app();
        loaded(&mut app, vec![student(1, "Ann Lee")]);

        app.on_completion(Completion {
            seq: 9,
            outcome: Outcome::Deleted {
                id: 1,
                result: Err(ServiceError::status(Operation::Delete, 500, "boom")),
            },
        });

        assert!(matches!(app.modal, Some(Modal::Alert(Notice::Failed(_)))));
        assert_eq!(app.state.students().len(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(key(KeyCode::Char('n')));
        // 'q' is text while the form is open
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
