//! Canned command dispatcher.
//!
//! The prompt recognizes a fixed vocabulary and nothing else: no grammar, no
//! history, no completion. Input is normalized (trim + lowercase) and matched
//! exactly; anything unrecognized gets the not-found line with the normalized
//! input echoed back.

use crate::render::Section;

/// Result of interpreting one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Empty input: just a fresh prompt.
    Empty,
    Help,
    /// Scroll the named section into view after the navigation delay.
    Navigate(Section),
    Exit,
    /// Unrecognized input, already normalized.
    Unknown(String),
}

/// Normalize and match one input line.
pub fn dispatch(input: &str) -> Dispatch {
    let cmd = input.trim().to_lowercase();
    match cmd.as_str() {
        "" => Dispatch::Empty,
        "help" => Dispatch::Help,
        "about" => Dispatch::Navigate(Section::About),
        "skills" => Dispatch::Navigate(Section::Skills),
        "experience" => Dispatch::Navigate(Section::Experience),
        "education" => Dispatch::Navigate(Section::Education),
        "projects" => Dispatch::Navigate(Section::Projects),
        "contact" => Dispatch::Navigate(Section::Contact),
        "exit" => Dispatch::Exit,
        _ => Dispatch::Unknown(cmd),
    }
}

/// The dispatcher's own help text. Lists what actually runs, unlike the
/// decorative `help` block in the home transcript.
pub fn help_output() -> Vec<String> {
    vec![
        "Available commands:".to_string(),
        "  help        - show this message".to_string(),
        "  about       - jump to the about section".to_string(),
        "  skills      - jump to the skills section".to_string(),
        "  experience  - jump to the experience section".to_string(),
        "  education   - jump to the education section".to_string(),
        "  projects    - jump to the projects section".to_string(),
        "  contact     - jump to the contact section".to_string(),
        "  exit        - close the session".to_string(),
    ]
}

/// Message shown for unrecognized input.
pub fn not_found_message(cmd: &str) -> String {
    format!("Command not found: {cmd}. Type 'help' for available commands.")
}

/// Message shown by `exit` before the session closes.
pub const GOODBYE_MESSAGE: &str = "Connection closed. Thank you for visiting.";
