//! Pure content renderer: `PortfolioConfig` in, `Transcript` out.
//!
//! The transcript is immutable data describing what the terminal session
//! looks like: fake command lines, their output, blank separators, links.
//! Nothing here touches the terminal; `view` draws a transcript, `app`
//! scrolls and reveals it. One config always renders to the same transcript.

pub mod stamp;
pub mod table;

use crate::config::{Education, Experience, PortfolioConfig, Project};
use std::collections::HashMap;
use std::ops::Range;

/// The seven transcript sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    /// Lowercase name, identical to the dispatcher's command word.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// What a transcript line is, structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A fake command; the view prefixes the prompt.
    Command,
    Output,
    /// Output that carries a URL the user can open.
    Link { url: String },
    Blank,
}

/// One line of the rendered session.
#[derive(Debug, Clone)]
pub struct TermLine {
    pub kind: LineKind,
    pub text: String,
    pub section: Section,
    /// Tooltip text shown when the selection rests on this line.
    pub tip: Option<String>,
    /// Payload copied to the clipboard on request.
    pub copy: Option<String>,
}

/// Presentation strategy over the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Rich per-entry blocks with metrics tables.
    #[default]
    Cards,
    /// Flat `[timestamp] [INFO]` log text.
    LogLines,
}

/// The rendered session: ordered lines plus per-section ranges.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<TermLine>,
    sections: Vec<(Section, Range<usize>)>,
}

impl Transcript {
    pub fn lines(&self) -> &[TermLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line range of a section.
    pub fn section_range(&self, section: Section) -> Option<Range<usize>> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| r.clone())
    }

    /// First line index of a section; 0 when the section rendered nothing.
    pub fn section_start(&self, section: Section) -> usize {
        self.section_range(section).map(|r| r.start).unwrap_or(0)
    }

    /// Section containing the given line index.
    pub fn section_at(&self, line: usize) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, r)| r.contains(&line))
            .map(|(s, _)| s)
            .copied()
    }
}

/// Canonical display labels for project metric keys; unknown keys fall back
/// to the raw key and sort after these.
const KNOWN_METRICS: [(&str, &str); 5] = [
    ("riskReduction", "Risk Reduction"),
    ("costReduction", "Cost Reduction"),
    ("latency", "Latency"),
    ("accuracy", "Accuracy"),
    ("usability", "Usability"),
];

/// Order a project's metrics map into display rows.
pub fn metric_rows(metrics: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut rows = Vec::with_capacity(metrics.len());
    for (key, label) in KNOWN_METRICS {
        if let Some(value) = metrics.get(key) {
            rows.push((label.to_string(), value.clone()));
        }
    }
    let mut rest: Vec<&String> = metrics
        .keys()
        .filter(|k| !KNOWN_METRICS.iter().any(|(known, _)| known == k))
        .collect();
    rest.sort();
    for key in rest {
        rows.push((key.clone(), metrics[key].clone()));
    }
    rows
}

/// Filesystem-ish slug for pseudo file names.
fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            dash = false;
        } else if !dash && !out.is_empty() {
            out.push('-');
            dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

struct Builder {
    lines: Vec<TermLine>,
    sections: Vec<(Section, Range<usize>)>,
    current: Section,
    section_start: usize,
}

impl Builder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            sections: Vec::new(),
            current: Section::Home,
            section_start: 0,
        }
    }

    fn begin(&mut self, section: Section) {
        if self.lines.len() > self.section_start {
            self.sections
                .push((self.current, self.section_start..self.lines.len()));
        }
        self.current = section;
        self.section_start = self.lines.len();
    }

    fn push(&mut self, kind: LineKind, text: String, tip: Option<String>, copy: Option<String>) {
        self.lines.push(TermLine {
            kind,
            text,
            section: self.current,
            tip,
            copy,
        });
    }

    fn command(&mut self, cmd: &str) {
        self.push(LineKind::Command, cmd.to_string(), None, None);
    }

    fn output(&mut self, text: impl Into<String>) {
        self.push(LineKind::Output, text.into(), None, None);
    }

    fn output_tip(&mut self, text: impl Into<String>, tip: Option<&str>) {
        self.push(
            LineKind::Output,
            text.into(),
            tip.map(str::to_string),
            None,
        );
    }

    fn output_copy(&mut self, text: impl Into<String>, copy: &str) {
        self.push(LineKind::Output, text.into(), None, Some(copy.to_string()));
    }

    fn link(&mut self, text: impl Into<String>, url: &str) {
        self.push(
            LineKind::Link {
                url: url.to_string(),
            },
            text.into(),
            None,
            Some(url.to_string()),
        );
    }

    fn blank(&mut self) {
        self.push(LineKind::Blank, String::new(), None, None);
    }

    fn finish(mut self) -> Transcript {
        if self.lines.len() > self.section_start {
            self.sections
                .push((self.current, self.section_start..self.lines.len()));
        }
        Transcript {
            lines: self.lines,
            sections: self.sections,
        }
    }
}

/// Render a config into a transcript. Pure: no IO, no clock, no randomness.
pub fn render(config: &PortfolioConfig, style: RenderStyle) -> Transcript {
    let mut b = Builder::new();
    let user = listing_user(&config.terminal.prompt);

    render_home(&mut b, config);
    render_about(&mut b, config);
    render_skills(&mut b, config);
    render_experience(&mut b, config, &user, style);
    render_education(&mut b, config, &user);
    render_projects(&mut b, config, &user, style);
    render_contact(&mut b, config);

    b.finish()
}

/// User name for `ls -la` rows, taken from the prompt's `user@host` part.
fn listing_user(prompt: &str) -> String {
    let user = prompt.split('@').next().unwrap_or("");
    if user.is_empty() || user.len() > 32 {
        "user".to_string()
    } else {
        user.to_string()
    }
}

fn render_home(b: &mut Builder, config: &PortfolioConfig) {
    b.begin(Section::Home);
    for line in &config.terminal.welcome_message {
        b.output(line.clone());
    }
    b.blank();
    b.command("whoami");
    b.output(format!(
        "{} - {}",
        config.personal.name, config.personal.title
    ));
    b.blank();
    b.command("help");
    for line in &config.terminal.commands.help.output {
        b.output(line.clone());
    }
    b.blank();
}

fn render_about(b: &mut Builder, config: &PortfolioConfig) {
    b.begin(Section::About);
    b.command("cat about.txt");
    b.output(config.about.description.clone());
    b.blank();

    let edu = &config.about.education;
    if !edu.degree.is_empty() {
        b.output("Education:");
        b.output(format!("  {}", edu.degree));
        b.output(format!("  {} ({})", edu.university, edu.year));
        if !edu.gpa.is_empty() {
            b.output(format!("  GPA: {}", edu.gpa));
        }
        if !edu.focus.is_empty() {
            b.output(format!("  Focus: {}", edu.focus));
        }
    }
    b.blank();
}

fn render_skills(b: &mut Builder, config: &PortfolioConfig) {
    b.begin(Section::Skills);
    b.command("ls skills/");
    for category in &config.skills.categories {
        b.output(format!("{}/", category.name));
    }
    b.blank();

    for category in &config.skills.categories {
        b.command(&format!("cat skills/{}.txt", slug(&category.name)));
        for item in &category.items {
            b.output_tip(format!("  - {}", item.name()), item.tip());
        }
        b.blank();
    }
}

fn render_experience(b: &mut Builder, config: &PortfolioConfig, user: &str, style: RenderStyle) {
    b.begin(Section::Experience);
    b.command("ls -la experience/");
    b.output(format!("total {}", config.experience.len()));
    for entry in &config.experience {
        let file = format!("{}.log", slug(&entry.title));
        b.output(format!(
            "-rw-r--r-- 1 {user} {user} {:>5} {} {file}",
            stamp::file_size(&file),
            stamp::modified_stamp(&file, &entry.duration),
        ));
    }
    b.blank();

    for entry in &config.experience {
        match style {
            RenderStyle::Cards => render_experience_card(b, entry),
            RenderStyle::LogLines => render_experience_log(b, entry),
        }
        b.blank();
    }
}

fn render_experience_card(b: &mut Builder, entry: &Experience) {
    b.command(&format!("cat experience/{}.log", slug(&entry.title)));
    b.output(format!("{} @ {}", entry.title, entry.company));
    b.output(format!("Duration: {}", entry.duration));
    if !entry.location.is_empty() {
        b.output(format!("Location: {}", entry.location));
    }
    for achievement in &entry.achievements {
        b.output(format!("  * {achievement}"));
    }
    if !entry.technologies.is_empty() {
        b.output(format!("Technologies: {}", entry.technologies.join(", ")));
    }
}

fn render_experience_log(b: &mut Builder, entry: &Experience) {
    let seed = slug(&entry.title);
    let ts = stamp::log_stamp(&seed, &entry.duration);
    b.command(&format!("cat experience/{seed}.log"));
    b.output(format!(
        "[{ts}] [INFO] {} @ {} ({})",
        entry.title, entry.company, entry.duration
    ));
    for achievement in &entry.achievements {
        b.output(format!("[{ts}] [INFO] {achievement}"));
    }
    if !entry.technologies.is_empty() {
        b.output(format!(
            "[{ts}] [INFO] Technologies: {}",
            entry.technologies.join(", ")
        ));
    }
    b.output(format!("[{ts}] [DONE] Record complete"));
}

fn render_education(b: &mut Builder, config: &PortfolioConfig, user: &str) {
    b.begin(Section::Education);
    b.command("ls -la education/");
    b.output(format!("total {}", config.education.len()));
    for entry in &config.education {
        let file = format!("{}.log", slug(&entry.degree));
        b.output(format!(
            "-rw-r--r-- 1 {user} {user} {:>5} {} {file}",
            stamp::file_size(&file),
            stamp::modified_stamp(&file, &entry.duration),
        ));
    }
    b.blank();

    for entry in &config.education {
        render_education_block(b, entry);
        b.blank();
    }
}

fn render_education_block(b: &mut Builder, entry: &Education) {
    let seed = slug(&entry.degree);
    let ts = stamp::log_stamp(&seed, &entry.duration);
    b.command(&format!("cat education/{seed}.log"));
    b.output(format!("[{ts}] [INFO] Enrolled: {}", entry.degree));
    b.output(format!(
        "[{ts}] [INFO] Institution: {} ({})",
        entry.university, entry.duration
    ));
    if !entry.gpa.is_empty() {
        b.output(format!("[{ts}] [INFO] GPA: {}", entry.gpa));
    }
    if !entry.focus.is_empty() {
        b.output(format!("[{ts}] [INFO] Focus: {}", entry.focus));
    }
    if !entry.thesis.is_empty() {
        b.output(format!("[{ts}] [INFO] Thesis: {}", entry.thesis));
    }
    if !entry.coursework.is_empty() {
        b.output(format!(
            "[{ts}] [INFO] Coursework: {}",
            entry.coursework.join(", ")
        ));
    }
    b.output(format!("[{ts}] [DONE] Record complete"));
}

fn render_projects(b: &mut Builder, config: &PortfolioConfig, user: &str, style: RenderStyle) {
    b.begin(Section::Projects);
    b.command("ls -la projects/");
    b.output(format!("total {}", config.projects.len()));
    for project in &config.projects {
        b.output(format!(
            "drwxr-xr-x 2 {user} {user}  4096 {} {}/",
            stamp::modified_stamp(&project.name, ""),
            project.name,
        ));
    }
    b.blank();

    for project in &config.projects {
        match style {
            RenderStyle::Cards => render_project_card(b, project),
            RenderStyle::LogLines => render_project_log(b, project),
        }
        b.blank();
    }
}

fn render_project_card(b: &mut Builder, project: &Project) {
    b.command(&format!("cat projects/{}/README.md", project.name));
    b.output(format!("# {}", project.title));
    b.output(project.description.clone());
    if !project.technologies.is_empty() {
        b.output(format!("Technologies: {}", project.technologies.join(", ")));
    }
    let rows = metric_rows(&project.metrics);
    for line in table::render(&rows) {
        b.output(line);
    }
    if !project.github.is_empty() {
        b.link(format!("GitHub: {}", project.github), &project.github);
    }
    if !project.demo.is_empty() {
        b.link(format!("Demo: {}", project.demo), &project.demo);
    }
}

fn render_project_log(b: &mut Builder, project: &Project) {
    let ts = stamp::log_stamp(&project.name, "");
    b.command(&format!("cat projects/{}/README.md", project.name));
    b.output(format!("[{ts}] [INFO] {}", project.title));
    b.output(format!("[{ts}] [INFO] {}", project.description));
    if !project.technologies.is_empty() {
        b.output(format!(
            "[{ts}] [INFO] Technologies: {}",
            project.technologies.join(", ")
        ));
    }
    for (label, value) in metric_rows(&project.metrics) {
        b.output(format!("[{ts}] [INFO] {label}: {value}"));
    }
    if !project.github.is_empty() {
        b.link(format!("GitHub: {}", project.github), &project.github);
    }
    if !project.demo.is_empty() {
        b.link(format!("Demo: {}", project.demo), &project.demo);
    }
}

fn render_contact(b: &mut Builder, config: &PortfolioConfig) {
    b.begin(Section::Contact);
    b.command("cat contact.txt");
    let p = &config.personal;
    b.output_copy(format!("Email:    {}", p.email), &p.email);
    if !p.phone.is_empty() {
        b.output_copy(format!("Phone:    {}", p.phone), &p.phone);
    }
    if !p.location.is_empty() {
        b.output_copy(format!("Location: {}", p.location), &p.location);
    }
    b.blank();
    if !p.github.is_empty() {
        b.link(format!("GitHub:   {}", p.github), &p.github);
    }
    if !p.linkedin.is_empty() {
        b.link(format!("LinkedIn: {}", p.linkedin), &p.linkedin);
    }
    if !p.website.is_empty() {
        b.link(format!("Website:  {}", p.website), &p.website);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_commands(t: &Transcript, section: Section, prefix: &str) -> usize {
        let range = t.section_range(section).unwrap();
        t.lines()[range]
            .iter()
            .filter(|l| l.kind == LineKind::Command && l.text.starts_with(prefix))
            .count()
    }

    #[test]
    fn test_one_block_per_entry_in_order() {
        let config = PortfolioConfig::default();
        let t = render(&config, RenderStyle::Cards);

        assert_eq!(
            count_commands(&t, Section::Experience, "cat experience/"),
            config.experience.len()
        );
        assert_eq!(
            count_commands(&t, Section::Education, "cat education/"),
            config.education.len()
        );
        assert_eq!(
            count_commands(&t, Section::Projects, "cat projects/"),
            config.projects.len()
        );
        assert_eq!(
            count_commands(&t, Section::Skills, "cat skills/"),
            config.skills.categories.len()
        );

        // Input order is preserved: the project READMEs appear in config order
        let readmes: Vec<&str> = t
            .lines()
            .iter()
            .filter(|l| l.kind == LineKind::Command && l.text.starts_with("cat projects/"))
            .map(|l| l.text.as_str())
            .collect();
        let expected: Vec<String> = config
            .projects
            .iter()
            .map(|p| format!("cat projects/{}/README.md", p.name))
            .collect();
        assert_eq!(readmes, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicate_entries_both_render() {
        let mut config = PortfolioConfig::default();
        let dup = config.projects[0].clone();
        config.projects.push(dup);

        let t = render(&config, RenderStyle::Cards);
        assert_eq!(
            count_commands(&t, Section::Projects, "cat projects/"),
            config.projects.len()
        );
    }

    #[test]
    fn test_missing_optionals_omit_lines() {
        let mut config = PortfolioConfig::default();
        config.projects[0].github.clear();
        config.projects[0].demo.clear();
        config.education[0].thesis.clear();

        let t = render(&config, RenderStyle::Cards);
        let first_project = &config.projects[0].name;
        let block_cmd = format!("cat projects/{first_project}/README.md");

        // Lines between this block's command and the next command
        let lines = t.lines();
        let start = lines
            .iter()
            .position(|l| l.text == block_cmd)
            .unwrap();
        let block: Vec<&TermLine> = lines[start + 1..]
            .iter()
            .take_while(|l| l.kind != LineKind::Command)
            .collect();
        assert!(block.iter().all(|l| !l.text.starts_with("GitHub:")));
        assert!(block.iter().all(|l| !l.text.starts_with("Demo:")));

        // Siblings keep their links
        assert!(t
            .lines()
            .iter()
            .any(|l| matches!(l.kind, LineKind::Link { .. }) && l.text.starts_with("GitHub:")));

        // Thesis line gone only for the cleared entry
        assert!(!t
            .lines()
            .iter()
            .any(|l| l.text.contains("Thesis: Bridging the Gap")));
    }

    #[test]
    fn test_sections_cover_all_lines_in_order() {
        let t = render(&PortfolioConfig::default(), RenderStyle::Cards);

        let mut covered = 0;
        for section in Section::ALL {
            let range = t.section_range(section).unwrap();
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, t.len());
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = PortfolioConfig::default();
        let a = render(&config, RenderStyle::Cards);
        let b = render(&config, RenderStyle::Cards);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.lines().iter().zip(b.lines()) {
            assert_eq!(x.text, y.text);
        }
    }

    #[test]
    fn test_log_style_one_block_per_entry() {
        let config = PortfolioConfig::default();
        let t = render(&config, RenderStyle::LogLines);

        assert_eq!(
            count_commands(&t, Section::Experience, "cat experience/"),
            config.experience.len()
        );
        assert_eq!(
            count_commands(&t, Section::Projects, "cat projects/"),
            config.projects.len()
        );
        // Log style emits log-formatted entry lines
        assert!(t
            .lines()
            .iter()
            .any(|l| l.text.contains("] [INFO] ") && l.section == Section::Experience));
    }

    #[test]
    fn test_skill_tips_attached() {
        let t = render(&PortfolioConfig::default(), RenderStyle::Cards);
        let tipped = t
            .lines()
            .iter()
            .find(|l| l.text.contains("Python") && l.section == Section::Skills)
            .unwrap();
        assert_eq!(tipped.tip.as_deref(), Some("Primary Coding Language"));
    }

    #[test]
    fn test_contact_lines_copyable() {
        let config = PortfolioConfig::default();
        let t = render(&config, RenderStyle::Cards);
        let email_line = t
            .lines()
            .iter()
            .find(|l| l.text.starts_with("Email:"))
            .unwrap();
        assert_eq!(email_line.copy.as_deref(), Some(config.personal.email.as_str()));
    }

    #[test]
    fn test_metric_rows_canonical_order() {
        let mut metrics = HashMap::new();
        metrics.insert("latency".to_string(), "low".to_string());
        metrics.insert("riskReduction".to_string(), "65%".to_string());
        metrics.insert("zcustom".to_string(), "x".to_string());
        metrics.insert("acustom".to_string(), "y".to_string());

        let rows = metric_rows(&metrics);
        let labels: Vec<&str> = rows.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["Risk Reduction", "Latency", "acustom", "zcustom"]);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Member of Technical Staff (DevOps Engineer)"), "member-of-technical-staff-devops-engineer");
        assert_eq!(slug("Master's Degree - Computer Science"), "master-s-degree-computer-science");
    }

    #[test]
    fn test_listing_user_from_prompt() {
        assert_eq!(listing_user("ashutosh@portfolio:~$"), "ashutosh");
        assert_eq!(listing_user("@weird"), "user");
    }
}
