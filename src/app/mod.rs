//! Interactive application state.
//!
//! `App` owns the rendered transcript plus everything that moves: scroll and
//! selection, the persistent prompt, pending navigation/exit deadlines, the
//! reveal animation, the metrics overlay and the contact form. All timing is
//! deadline-based against the injected [`TimeSource`], so the whole state
//! machine is drivable from tests without sleeping.

pub mod contact;
pub mod dispatch;

use crate::config::PortfolioConfig;
use crate::render::{self, LineKind, RenderStyle, Section, Transcript};
use crate::services::clipboard::Clipboard;
use crate::services::form_post::SubmitOutcome;
use crate::services::time_source::SharedTimeSource;
use crate::view::theme::Theme;
use contact::ContactForm;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Delay between the "Redirecting..." echo and the actual scroll.
pub const NAV_DELAY: Duration = Duration::from_millis(500);
/// Delay between the goodbye echo and the goodbye screen.
pub const EXIT_DELAY: Duration = Duration::from_millis(1500);
/// Per-line reveal stagger within a section.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(200);
/// Prompt cursor blink half-period.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// Lifetime of transient status messages.
pub const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Where key input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Moving the selection over the transcript.
    Browse,
    /// Typing into the command prompt.
    Prompt,
}

/// A line appended below the transcript by the dispatcher.
#[derive(Debug, Clone)]
pub struct TailLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug)]
pub struct App {
    pub config: PortfolioConfig,
    pub theme: Theme,
    pub transcript: Transcript,

    pub focus: Focus,
    /// Top visible line index.
    pub scroll: usize,
    /// Selected line index (Browse focus).
    pub selected: usize,
    /// Prompt input buffer.
    pub input: String,
    /// Cleared by `exit`; nothing re-enables it.
    pub prompt_enabled: bool,
    /// Dispatcher output, displayed after the transcript.
    pub tail: Vec<TailLine>,

    pub overlay_visible: bool,
    pub form: ContactForm,
    pub goodbye: bool,
    pub should_quit: bool,
    pub clipboard: Clipboard,

    status: Option<(String, Instant)>,
    pending_nav: Option<(Section, Instant)>,
    pending_exit: Option<Instant>,
    blink_on: bool,
    last_blink: Instant,
    /// Reveal clocks, created lazily when a section first becomes visible.
    reveal_started: HashMap<Section, Instant>,
    tooltip_dismissed: bool,
    viewport_height: usize,

    time_source: SharedTimeSource,
}

impl App {
    pub fn new(config: PortfolioConfig, style: RenderStyle, time_source: SharedTimeSource) -> Self {
        let transcript = render::render(&config, style);
        let theme = Theme::from_tokens(&config.customization.theme);
        let now = time_source.now();

        let mut app = Self {
            config,
            theme,
            transcript,
            focus: Focus::Prompt,
            scroll: 0,
            selected: 0,
            input: String::new(),
            prompt_enabled: true,
            tail: Vec::new(),
            overlay_visible: false,
            form: ContactForm::default(),
            goodbye: false,
            should_quit: false,
            clipboard: Clipboard::new(),
            status: None,
            pending_nav: None,
            pending_exit: None,
            blink_on: true,
            last_blink: now,
            reveal_started: HashMap::new(),
            tooltip_dismissed: false,
            viewport_height: 24,
            time_source,
        };
        app.ensure_visible_reveals(now);
        app
    }

    // ----- geometry fed back from the view -----

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.ensure_visible_reveals(self.time_source.now());
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Transcript lines plus dispatcher tail.
    pub fn total_lines(&self) -> usize {
        self.transcript.len() + self.tail.len()
    }

    // ----- reveal animation -----

    fn animations_enabled(&self) -> bool {
        let anim = &self.config.customization.animations;
        anim.typing_effect && !anim.reduced_motion
    }

    fn ensure_visible_reveals(&mut self, now: Instant) {
        if !self.animations_enabled() {
            return;
        }
        let visible = self.scroll..self.scroll + self.viewport_height;
        for section in Section::ALL {
            if let Some(range) = self.transcript.section_range(section) {
                if range.start < visible.end && visible.start < range.end {
                    self.reveal_started.entry(section).or_insert(now);
                }
            }
        }
    }

    /// Whether a line has revealed yet. Unrevealed lines draw blank; tail
    /// lines are always shown.
    pub fn is_line_revealed(&self, idx: usize) -> bool {
        if idx >= self.transcript.len() || !self.animations_enabled() {
            return true;
        }
        let Some(section) = self.transcript.section_at(idx) else {
            return true;
        };
        let Some(started) = self.reveal_started.get(&section) else {
            return false;
        };
        let Some(range) = self.transcript.section_range(section) else {
            return true;
        };
        let elapsed = self.time_source.elapsed_since(*started);
        let revealed = (elapsed.as_millis() / REVEAL_STAGGER.as_millis()) as usize + 1;
        idx - range.start < revealed
    }

    // ----- status / tooltip / blink accessors for the view -----

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        let expiry = self.time_source.now() + STATUS_DURATION;
        self.status = Some((message.into(), expiry));
    }

    /// Tooltip for the selected line, when tooltips are enabled, focus is on
    /// the transcript, and Escape has not dismissed it.
    pub fn tooltip(&self) -> Option<&str> {
        if !self.config.customization.features.tooltips
            || self.focus != Focus::Browse
            || self.tooltip_dismissed
            || self.form.active
            || self.overlay_visible
        {
            return None;
        }
        self.transcript
            .lines()
            .get(self.selected)
            .and_then(|line| line.tip.as_deref())
            .filter(|_| self.is_line_revealed(self.selected))
    }

    pub fn cursor_visible(&self) -> bool {
        self.blink_on
    }

    pub fn pending_navigation(&self) -> Option<Section> {
        self.pending_nav.map(|(s, _)| s)
    }

    // ----- tick -----

    /// Advance all deadline-driven behavior. Called once per frame.
    pub fn tick(&mut self) {
        let now = self.time_source.now();

        if self.config.customization.animations.cursor_blink {
            while now.saturating_duration_since(self.last_blink) >= BLINK_INTERVAL {
                self.blink_on = !self.blink_on;
                self.last_blink += BLINK_INTERVAL;
            }
        } else {
            self.blink_on = true;
        }

        if self.status.as_ref().is_some_and(|(_, expiry)| now >= *expiry) {
            self.status = None;
        }

        if let Some((section, deadline)) = self.pending_nav {
            if now >= deadline {
                self.pending_nav = None;
                self.scroll_to_section(section);
            }
        }

        if let Some(deadline) = self.pending_exit {
            if now >= deadline {
                self.pending_exit = None;
                self.goodbye = true;
            }
        }

        if let Some(outcome) = self.form.poll() {
            match outcome {
                SubmitOutcome::Success => self.set_status("Message sent!"),
                SubmitOutcome::Failure(reason) => {
                    self.set_status(format!("Failed to send: {reason}"))
                }
            }
        }

        self.ensure_visible_reveals(now);
    }

    // ----- navigation -----

    pub fn scroll_to_section(&mut self, section: Section) {
        let start = self.transcript.section_start(section);
        self.scroll = start;
        self.selected = start;
        self.tooltip_dismissed = false;
        self.ensure_visible_reveals(self.time_source.now());
        tracing::debug!("Scrolled to section {}", section.name());
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.total_lines();
        if total == 0 {
            return;
        }
        let max = total - 1;
        self.selected = if delta.is_negative() {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(max)
        };
        self.tooltip_dismissed = false;

        // Keep the selection inside the viewport
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.viewport_height {
            self.scroll = self.selected + 1 - self.viewport_height;
        }
        self.ensure_visible_reveals(self.time_source.now());
    }

    fn scroll_to_bottom(&mut self) {
        let total = self.total_lines();
        self.scroll = total.saturating_sub(self.viewport_height);
        self.selected = total.saturating_sub(1);
        self.ensure_visible_reveals(self.time_source.now());
    }

    // ----- key handling -----

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // On the goodbye screen any key quits
        if self.goodbye {
            self.should_quit = true;
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Escape closes whatever is active, before anything else sees the key
        if key.code == KeyCode::Esc {
            self.handle_escape();
            return;
        }

        if self.form.active {
            self.handle_form_key(key);
            return;
        }

        match self.focus {
            Focus::Prompt => self.handle_prompt_key(key),
            Focus::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_escape(&mut self) {
        if self.form.active {
            self.form.close();
        } else if self.overlay_visible {
            self.overlay_visible = false;
        } else if self.tooltip().is_some() {
            self.tooltip_dismissed = true;
        } else if self.focus == Focus::Prompt {
            self.focus = Focus::Browse;
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                if self.form.can_submit() {
                    let id = self.config.contact.formspree_id.clone();
                    let honeypot = self.config.contact.honeypot;
                    self.form.submit(&id, honeypot);
                    self.set_status("Sending...");
                } else if !self.form.submitting {
                    self.set_status("Fill in all fields first");
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_line(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => self.focus = Focus::Browse,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let shortcuts = self.config.customization.features.keyboard_shortcuts;
        match key.code {
            KeyCode::Tab | KeyCode::Char(':') | KeyCode::Char('i') => {
                if self.prompt_enabled {
                    self.focus = Focus::Prompt;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(self.viewport_height as isize)),
            KeyCode::PageDown => self.move_selection(self.viewport_height as isize),
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                self.scroll = 0;
                self.tooltip_dismissed = false;
            }
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            // The overlay toggle only works outside editable fields; the
            // form case never reaches here because form keys are routed
            // earlier.
            KeyCode::Char('m') if shortcuts => {
                self.overlay_visible = !self.overlay_visible;
            }
            KeyCode::Char('f') if shortcuts => self.form.open(),
            KeyCode::Char('c') => self.copy_selected(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn line_at(&self, idx: usize) -> Option<(&LineKind, Option<&str>)> {
        if idx < self.transcript.len() {
            let line = &self.transcript.lines()[idx];
            Some((&line.kind, line.copy.as_deref()))
        } else {
            self.tail
                .get(idx - self.transcript.len())
                .map(|line| (&line.kind, None))
        }
    }

    fn copy_selected(&mut self) {
        if !self.config.customization.features.copy_buttons {
            return;
        }
        let Some((_, Some(payload))) = self.line_at(self.selected) else {
            self.set_status("Nothing to copy");
            return;
        };
        let payload = payload.to_string();
        if self.clipboard.copy(&payload) {
            self.set_status("Copied to clipboard!");
        } else {
            self.set_status("Failed to copy");
        }
    }

    fn open_selected(&mut self) {
        let Some((LineKind::Link { url }, _)) = self.line_at(self.selected) else {
            return;
        };
        let url = url.clone();
        match open::that(&url) {
            Ok(()) => self.set_status(format!("Opening {url}")),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", url, e);
                self.set_status("Failed to open link");
            }
        }
    }

    // ----- the dispatcher -----

    fn push_tail(&mut self, kind: LineKind, text: impl Into<String>) {
        self.tail.push(TailLine {
            kind,
            text: text.into(),
        });
    }

    /// Interpret the prompt buffer. The prompt clears and stays focused; any
    /// pending navigation is cancelled by the new command.
    pub fn submit_line(&mut self) {
        if !self.prompt_enabled {
            return;
        }
        let input = std::mem::take(&mut self.input);
        let result = dispatch::dispatch(&input);
        let is_empty = result == dispatch::Dispatch::Empty;

        if !is_empty {
            self.push_tail(LineKind::Command, input.trim());
        }

        // A new command supersedes any navigation still waiting to fire
        self.pending_nav = None;

        match result {
            dispatch::Dispatch::Empty => {}
            dispatch::Dispatch::Help => {
                for line in dispatch::help_output() {
                    self.push_tail(LineKind::Output, line);
                }
            }
            dispatch::Dispatch::Navigate(section) => {
                self.push_tail(
                    LineKind::Output,
                    format!("Redirecting to {} section...", section.name()),
                );
                let deadline = self.time_source.now() + NAV_DELAY;
                self.pending_nav = Some((section, deadline));
                tracing::debug!("Navigation to {} queued", section.name());
            }
            dispatch::Dispatch::Exit => {
                self.push_tail(LineKind::Output, dispatch::GOODBYE_MESSAGE);
                self.prompt_enabled = false;
                self.focus = Focus::Browse;
                self.pending_exit = Some(self.time_source.now() + EXIT_DELAY);
                tracing::info!("Session exit requested");
            }
            dispatch::Dispatch::Unknown(cmd) => {
                self.push_tail(LineKind::Output, dispatch::not_found_message(&cmd));
            }
        }

        if !is_empty {
            self.scroll_to_bottom();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::time_source::TestTimeSource;
    use std::sync::Arc;

    fn test_app() -> (App, Arc<TestTimeSource>) {
        let time = TestTimeSource::shared();
        let mut config = PortfolioConfig::default();
        // Tests reason about reveal explicitly where they need it
        config.customization.animations.reduced_motion = true;
        let mut app = App::new(config, RenderStyle::Cards, time.clone());
        app.clipboard.set_internal_only(true);
        (app, time)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_command(app: &mut App, cmd: &str) {
        for c in cmd.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_help_appends_output() {
        let (mut app, _) = test_app();
        type_command(&mut app, "help");

        assert!(app.input.is_empty(), "prompt clears after submit");
        assert_eq!(app.focus, Focus::Prompt, "prompt stays focused");
        assert!(app
            .tail
            .iter()
            .any(|l| l.text.starts_with("Available commands:")));
    }

    #[test]
    fn test_navigation_fires_after_delay() {
        let (mut app, time) = test_app();
        type_command(&mut app, "projects");

        assert_eq!(app.pending_navigation(), Some(Section::Projects));
        app.tick();
        assert_eq!(
            app.pending_navigation(),
            Some(Section::Projects),
            "not yet due"
        );

        time.advance(NAV_DELAY);
        app.tick();
        assert_eq!(app.pending_navigation(), None);
        assert_eq!(app.scroll, app.transcript.section_start(Section::Projects));
    }

    #[test]
    fn test_second_command_cancels_pending_navigation() {
        let (mut app, time) = test_app();
        type_command(&mut app, "projects");
        time.advance(Duration::from_millis(200));
        type_command(&mut app, "contact");

        time.advance(NAV_DELAY);
        app.tick();
        // Only the second navigation ran
        assert_eq!(app.scroll, app.transcript.section_start(Section::Contact));
    }

    #[test]
    fn test_unknown_command_message() {
        let (mut app, _) = test_app();
        type_command(&mut app, "  SUDO Make-Me-A-Sandwich ");

        let last = app.tail.last().unwrap();
        assert_eq!(
            last.text,
            "Command not found: sudo make-me-a-sandwich. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_empty_input_appends_nothing() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.tail.is_empty());
        assert_eq!(app.focus, Focus::Prompt);
    }

    #[test]
    fn test_exit_disables_prompt_then_shows_goodbye() {
        let (mut app, time) = test_app();
        type_command(&mut app, "exit");

        assert!(!app.prompt_enabled);
        assert_eq!(
            app.tail.last().unwrap().text,
            dispatch::GOODBYE_MESSAGE
        );

        // Typing no longer reaches a prompt
        let tail_len = app.tail.len();
        type_command(&mut app, "help");
        assert_eq!(app.tail.len(), tail_len);

        time.advance(EXIT_DELAY);
        app.tick();
        assert!(app.goodbye);

        // Any key on the goodbye screen quits
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_overlay_toggle_suppressed_in_editable_focus() {
        let (mut app, _) = test_app();

        // In the prompt, 'm' is text
        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.overlay_visible);
        assert_eq!(app.input, "m");
        app.input.clear();

        // In browse, 'm' toggles
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Browse);
        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.overlay_visible);

        // With the contact form open, 'm' is text again
        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.overlay_visible);
        app.handle_key(key(KeyCode::Char('f')));
        assert!(app.form.active);
        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.overlay_visible);
        assert_eq!(app.form.name, "m");
    }

    #[test]
    fn test_escape_closes_innermost_first() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Char('f')));
        assert!(app.form.active && app.overlay_visible);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.form.active && app.overlay_visible);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.overlay_visible);
    }

    #[test]
    fn test_copy_sets_clipboard_and_status() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Tab));

        // Move onto the email line in the contact section
        let range = app.transcript.section_range(Section::Contact).unwrap();
        let email_idx = (range.start..range.end)
            .find(|&i| app.transcript.lines()[i].text.starts_with("Email:"))
            .unwrap();
        app.selected = email_idx;

        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(
            app.clipboard.get_internal(),
            app.config.personal.email.as_str()
        );
        assert_eq!(app.status_message(), Some("Copied to clipboard!"));
    }

    #[test]
    fn test_status_expires() {
        let (mut app, time) = test_app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('c'))); // line 0 has no payload
        assert_eq!(app.status_message(), Some("Nothing to copy"));

        time.advance(STATUS_DURATION);
        app.tick();
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn test_reduced_motion_reveals_everything() {
        let (app, _) = test_app();
        for i in 0..app.transcript.len() {
            assert!(app.is_line_revealed(i));
        }
    }

    #[test]
    fn test_reveal_staggers_with_time() {
        let time = TestTimeSource::shared();
        let app = App::new(
            PortfolioConfig::default(),
            RenderStyle::Cards,
            time.clone(),
        );

        // Home is visible from the start, so its clock is running
        let home = app.transcript.section_range(Section::Home).unwrap();
        assert!(app.is_line_revealed(home.start));
        let third = home.start + 2;
        assert!(!app.is_line_revealed(third));

        time.advance(REVEAL_STAGGER * 2);
        assert!(app.is_line_revealed(third));

        // A section never scrolled into view has not started revealing
        let contact = app.transcript.section_range(Section::Contact).unwrap();
        assert!(!app.is_line_revealed(contact.start));
    }

    #[test]
    fn test_cursor_blink_toggles() {
        let (mut app, time) = test_app();
        assert!(app.cursor_visible());

        time.advance(BLINK_INTERVAL);
        app.tick();
        assert!(!app.cursor_visible());

        time.advance(BLINK_INTERVAL);
        app.tick();
        assert!(app.cursor_visible());
    }

    #[test]
    fn test_blink_disabled_keeps_cursor_on() {
        let (mut app, time) = test_app();
        app.config.customization.animations.cursor_blink = false;

        time.advance(BLINK_INTERVAL);
        app.tick();
        assert!(app.cursor_visible());
    }

    #[test]
    fn test_tooltip_follows_selection() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Tab));

        let skills = app.transcript.section_range(Section::Skills).unwrap();
        let tipped = (skills.start..skills.end)
            .find(|&i| app.transcript.lines()[i].tip.is_some())
            .unwrap();
        app.selected = tipped;
        assert!(app.tooltip().is_some());

        // Escape dismisses; moving the selection brings it back
        app.handle_key(key(KeyCode::Esc));
        assert!(app.tooltip().is_none());
        app.selected = tipped + 1;
        app.handle_key(key(KeyCode::Up)); // back onto the tipped line
        assert_eq!(app.selected, tipped);
        assert!(app.tooltip().is_some());
    }
}
