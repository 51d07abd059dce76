//! Portfolio configuration: the static content record everything renders from.
//!
//! The whole record is plain data, immutable after load. A complete default
//! is embedded so the app works with no config file at all; a JSON file (see
//! `load_or_default`) overrides it wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub personal: Personal,

    #[serde(default)]
    pub about: About,

    #[serde(default)]
    pub skills: Skills,

    #[serde(default = "default_experience")]
    pub experience: Vec<Experience>,

    #[serde(default = "default_education")]
    pub education: Vec<Education>,

    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub seo: Seo,

    #[serde(default)]
    pub social: Social,

    #[serde(default)]
    pub contact: Contact,

    #[serde(default)]
    pub analytics: Analytics,

    #[serde(default)]
    pub customization: Customization,
}

/// Identity fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub description: String,
    #[serde(default)]
    pub education: EducationSummary,
}

/// Short education summary shown in the about section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationSummary {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub focus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<SkillItem>,
}

/// A skill is either a bare label or a label with tooltip text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillItem {
    Label(String),
    Detailed { name: String, tip: String },
}

impl SkillItem {
    pub fn name(&self) -> &str {
        match self {
            SkillItem::Label(name) => name,
            SkillItem::Detailed { name, .. } => name,
        }
    }

    /// Tooltip text, if this skill carries one.
    pub fn tip(&self) -> Option<&str> {
        match self {
            SkillItem::Label(_) => None,
            SkillItem::Detailed { tip, .. } => Some(tip.as_str()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub duration: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub focus: String,
    /// Empty string means no thesis line is rendered.
    #[serde(default)]
    pub thesis: String,
    #[serde(default)]
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Directory-like identifier (`threat-model-recommender/`)
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Repository URL; empty means no GitHub link line.
    #[serde(default)]
    pub github: String,
    /// Live demo URL; empty means no demo link line.
    #[serde(default)]
    pub demo: String,
    /// Named display-string claims (risk reduction, latency, ...).
    #[serde(default)]
    pub metrics: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub welcome_message: Vec<String>,
    #[serde(default)]
    pub commands: TerminalCommands,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalCommands {
    #[serde(default)]
    pub help: CannedCommand,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CannedCommand {
    #[serde(default)]
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub substack: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Formspree form id; empty disables submission.
    #[serde(default)]
    pub formspree_id: String,
    /// Include a honeypot field in the posted form.
    #[serde(default = "default_true")]
    pub honeypot: bool,
}

/// Carried for config-contract completeness; consumed by nothing here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub google_analytics: String,
    #[serde(default)]
    pub hotjar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customization {
    #[serde(default)]
    pub theme: ThemeTokens,
    #[serde(default)]
    pub animations: Animations,
    #[serde(default)]
    pub features: Features,
}

/// Hex color tokens, resolved by `view::theme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeTokens {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_primary_color")]
    pub link_color: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animations {
    #[serde(default = "default_true")]
    pub typing_effect: bool,
    #[serde(default = "default_true")]
    pub cursor_blink: bool,
    /// When set, reveal animations are skipped entirely.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Features {
    #[serde(default = "default_true")]
    pub copy_buttons: bool,
    #[serde(default = "default_true")]
    pub tooltips: bool,
    #[serde(default = "default_true")]
    pub keyboard_shortcuts: bool,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "ashutosh@portfolio:~$".to_string()
}

fn default_primary_color() -> String {
    "#eab308".to_string()
}

fn default_background_color() -> String {
    "#000000".to_string()
}

fn default_text_color() -> String {
    "#cccccc".to_string()
}

fn default_border_color() -> String {
    "#333333".to_string()
}

impl Default for Personal {
    fn default() -> Self {
        Self {
            name: "Ashutosh Sonar".to_string(),
            title: "DevOps | Cloud | Infra | Security".to_string(),
            email: "ashusonar1998@gmail.com".to_string(),
            phone: "+1 (234) 567-890".to_string(),
            location: "Melbourne, Florida".to_string(),
            website: "https://ashutoshsonar.dev".to_string(),
            github: "https://github.com/hack-monk".to_string(),
            linkedin: "https://linkedin.com/in/ashutosh-sonar".to_string(),
            resume: "Ashutosh_Sonar_DevOps_Engineer_Resume.pdf".to_string(),
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self {
            description: "I harden CI/CD and cloud platforms so teams can ship fast, safely. \
                          My focus is secure-by-design DevOps: threat modeling in the pipeline, \
                          least-privilege IAM, signed/container-scanned releases, and observable, \
                          self-healing Kubernetes on AWS."
                .to_string(),
            education: EducationSummary {
                degree: "Master's Degree - Computer Science".to_string(),
                university: "Florida Institute of Technology".to_string(),
                year: "2023 - 2025".to_string(),
                gpa: "3.25/4.0".to_string(),
                focus: "DevOps, Cloud Computing, Distributed Systems, Security".to_string(),
            },
        }
    }
}

impl Default for Skills {
    fn default() -> Self {
        fn item(name: &str, tip: &str) -> SkillItem {
            SkillItem::Detailed {
                name: name.to_string(),
                tip: tip.to_string(),
            }
        }
        fn category(name: &str, items: Vec<SkillItem>) -> SkillCategory {
            SkillCategory {
                name: name.to_string(),
                items,
            }
        }

        Self {
            categories: vec![
                category(
                    "Programming_Languages",
                    vec![
                        item("Python", "Primary Coding Language"),
                        item(
                            "Shell/Bash Scripting",
                            "Release/rollback scripts, health probes, log pipelines",
                        ),
                        item("SQL", "MySQL queries & migrations; audit logs & reporting"),
                        item(
                            "Powershell",
                            "Windows hardening (CIS), IIS deploys, event log shipping",
                        ),
                        item("Go", "Currently learning"),
                    ],
                ),
                category(
                    "DevOps_Tools",
                    vec![
                        item("Git", "Branching, PR reviews, signed commits, release tagging"),
                        item("Jenkins", "Pipelines-as-code; blue/green deploys; parallel stages"),
                        item("ArgoCD", "GitOps sync waves; health checks; RBAC; rollbacks"),
                        item("Docker", "Multi-stage builds; minimal images; SBOM; signed images"),
                        item("Kubernetes", "EKS; HPA; Ingress/ALB; canary & rollbacks"),
                        item(
                            "Ansible",
                            "Idempotent playbooks; CIS hardening; patching; Vault secrets",
                        ),
                        item(
                            "Terraform",
                            "Modules; workspaces; remote state; IAM least-privilege",
                        ),
                    ],
                ),
                category(
                    "Cloud_and_Infra",
                    vec![
                        item(
                            "AWS(EC2, S3, IAM, RDS, Lambda, EKS, Cloudwatch)",
                            "AWS landing zone IaC; VPC/IAM least-privilege; EKS+ALB; \
                             KMS/CloudWatch/RDS backups",
                        ),
                        item(
                            "Linux (Ubuntu, CentOS, RedHat)",
                            "CIS hardening; systemd/networking; SELinux/AppArmor; \
                             patch & log automation",
                        ),
                        item(
                            "Windows",
                            "Windows Server ops; PowerShell DSC; Event Log forwarding",
                        ),
                        item("VMWare", "vSphere/ESXi provisioning; templates & snapshots"),
                        item(
                            "KVM Hypervisor",
                            "KVM/QEMU + libvirt; cloud-init images; virtio; bridged/NAT networking",
                        ),
                    ],
                ),
                category(
                    "Monitoring_and_Logging",
                    vec![
                        item("Prometheus", "Exporters, recording rules, SLI/SLO alerting"),
                        item(
                            "ELK Stack",
                            "Logstash pipelines, JSON logs, fast correlation/search",
                        ),
                        item(
                            "Grafana",
                            "SLO dashboards, unified alerts, Prometheus/CloudWatch",
                        ),
                    ],
                ),
                category(
                    "Database_and_Messaging",
                    vec![
                        item("MySQL", "InnoDB, indexes, slow-query tuning"),
                        item("MongoDB", "Schema design, replica sets, sharding"),
                        item("Cassandra", "CQL, wide rows, tunable consistency"),
                        item("Couchbase", "Buckets, N1QL, XDCR"),
                        item("Neo4j", "Cypher, graph modeling, traversals"),
                        item("Redis", "Caching, pub/sub, Lua scripts"),
                        item("Apache Kafka", "Topics, partitions, consumer groups"),
                    ],
                ),
                category(
                    "Networking",
                    vec![
                        item("TCP/IP", "Network troubleshooting, TCP/IP protocols, routing"),
                        item(
                            "Load Balancing",
                            "Configured load balancers, handled 1M+ requests/day",
                        ),
                        item("Security", "Security groups, WAF, SSL/TLS certificates"),
                    ],
                ),
                category(
                    "Concepts",
                    vec![
                        item("IaC", "Terraform modules, remote state, drift"),
                        item(
                            "Site Reliability Engineering",
                            "SLIs/SLOs, error budgets, runbooks",
                        ),
                        item(
                            "Zero-Downtime Deployment",
                            "Blue/green, canary, auto-rollback",
                        ),
                        item("Secure DevOps", "Policy-gated CI/CD, SAST/SBOM"),
                        item("Threat Modeling", "STRIDE/LINDDUN, CI-integrated"),
                        item("Virtualization", "KVM/VMware, templates, snapshots"),
                        item("Agile", "Scrum/Kanban, iterative delivery"),
                        item("Object Oriented Programming", "SOLID, clean abstractions"),
                    ],
                ),
            ],
        }
    }
}

fn default_experience() -> Vec<Experience> {
    vec![
        Experience {
            title: "Graduate Research Assistant and Grader".to_string(),
            company: "Florida Institute of Technology".to_string(),
            duration: "Aug 2023 - May 2025".to_string(),
            location: "Melbourne, Florida, USA".to_string(),
            achievements: vec![
                "Embedded threat-modeling gates in CI/CD, improving early vuln detection by ~40%."
                    .to_string(),
                "Explored secure deployment patterns for AI/ML (STRIDE, LINDDUN) and pipeline \
                 policy checks."
                    .to_string(),
                "Graded 100+ advanced SWE/DB projects with security and reliability criteria."
                    .to_string(),
            ],
            technologies: vec![
                "DevOps".to_string(),
                "Cyber Security".to_string(),
                "Database Management".to_string(),
                "Advanced Software Engineering".to_string(),
            ],
        },
        Experience {
            title: "Member of Technical Staff (DevOps Engineer)".to_string(),
            company: "Coriolis Technology Pvt. Ltd.".to_string(),
            duration: "Aug 2020 - Jul 2023".to_string(),
            location: "Pune, MH India".to_string(),
            achievements: vec![
                "Built Jenkins->ArgoCD pipelines; reduced manual release effort by ~50%."
                    .to_string(),
                "Ran self-healing K8s for microservices with measured 99.999% availability."
                    .to_string(),
                "Provisioned multi-env AWS with Terraform/Ansible; integrated security scans."
                    .to_string(),
                "Designed Prometheus/Grafana & CloudWatch dashboards; cut MTTR by ~40%."
                    .to_string(),
            ],
            technologies: vec![
                "Kubernetes".to_string(),
                "AWS".to_string(),
                "Terraform".to_string(),
                "Ansible".to_string(),
                "Prometheus".to_string(),
                "Grafana".to_string(),
            ],
        },
        Experience {
            title: "Intern".to_string(),
            company: "Hackedemist".to_string(),
            duration: "Jul 2017 - Jun 2019".to_string(),
            location: "Pune, India".to_string(),
            achievements: vec![
                "Built AES-encrypted storage with sub-second integrity checks.".to_string(),
                "Integrated MQTT on AWS for IoT; improved packet reliability by ~25%.".to_string(),
                "Delivered 10+ sessions on secure coding & network defense to 200+ learners."
                    .to_string(),
            ],
            technologies: vec![
                "AES".to_string(),
                "SHA-256".to_string(),
                "AWS".to_string(),
                "MQTT".to_string(),
            ],
        },
    ]
}

fn default_education() -> Vec<Education> {
    vec![
        Education {
            degree: "Master's Degree - Computer Science".to_string(),
            university: "Florida Institute of Technology".to_string(),
            duration: "2023 - 2025".to_string(),
            gpa: "3.25/4.0".to_string(),
            focus: "DevOps, Cloud Computing, Distributed Systems".to_string(),
            thesis: "Bridging the Gap: Enhancing DevOps Security Through Comprehensive Threat \
                     Modeling"
                .to_string(),
            coursework: vec![
                "Cybersecurity".to_string(),
                "Computer Networks".to_string(),
                "Advanced Software Engineering".to_string(),
                "Cryptography".to_string(),
            ],
        },
        Education {
            degree: "Bachelor's Degree - Computer Engineering".to_string(),
            university: "University of Pune".to_string(),
            duration: "2016 - 2020".to_string(),
            gpa: "3.69/4.0".to_string(),
            focus: "Software Engineering, Systems".to_string(),
            thesis: String::new(),
            coursework: vec![
                "Data Structures".to_string(),
                "Cyber Security".to_string(),
                "Software Engineering".to_string(),
            ],
        },
    ]
}

fn default_projects() -> Vec<Project> {
    fn metrics(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    vec![
        Project {
            name: "threat-model-recommender".to_string(),
            title: "Threat Model Recommender".to_string(),
            description: "CLI that recommends hybrid threat models for AI/ML systems; plugs into \
                          CI to guide secure architecture choices and PR checks."
                .to_string(),
            technologies: vec![
                "Python".to_string(),
                "CI/CD".to_string(),
                "STRIDE".to_string(),
                "LINDDUN".to_string(),
                "AWS EC2".to_string(),
            ],
            github: "https://github.com/hack-monk/ThreatModelRecommeder.git".to_string(),
            demo: String::new(),
            metrics: metrics(&[(
                "riskReduction",
                "\u{2248}65% fewer undetected risks in pilot assessments",
            )]),
        },
        Project {
            name: "encrypted-video-tamper-detection".to_string(),
            title: "Encrypted Video Tampering & Localization (Cloud)".to_string(),
            description: "AES + SHA-256 based integrity verification and tamper localization with \
                          serverless storage for low-cost scale."
                .to_string(),
            technologies: vec![
                "AES".to_string(),
                "SHA-256".to_string(),
                "AWS Lambda".to_string(),
                "S3".to_string(),
            ],
            github: "https://github.com/hack-monk/encrypted-video-tampering-detection-and-localization-via-cloud.git"
                .to_string(),
            demo: String::new(),
            metrics: metrics(&[
                ("costReduction", "\u{2248}25% cloud cost reduction"),
                ("latency", "near real-time verification"),
            ]),
        },
        Project {
            name: "mysh".to_string(),
            title: "Custom Python Shell (mysh)".to_string(),
            description: "A feature-complete Python shell with pipelines, completion, and \
                          persistent history - built to understand shell internals and harden CLI \
                          tooling."
                .to_string(),
            technologies: vec!["Python".to_string()],
            github: "https://github.com/hack-monk/mysh.git".to_string(),
            demo: String::new(),
            metrics: metrics(&[("usability", "Improved developer workflow for repeatable ops")]),
        },
        Project {
            name: "sdn-ids-ml".to_string(),
            title: "IDS for Software-Defined Networks (ML)".to_string(),
            description: "ML-powered intrusion detection for SDN. Simulated large-scale DDoS in \
                          Mininet/Ryu; achieved high detection accuracy."
                .to_string(),
            technologies: vec!["Mininet".to_string(), "Ryu".to_string(), "ML".to_string()],
            github: String::new(),
            demo: String::new(),
            metrics: metrics(&[("accuracy", "\u{2248}95% accuracy; ~30% reliability improvement")]),
        },
    ]
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            welcome_message: vec![
                "Welcome to the Interactive Portfolio Terminal!".to_string(),
                "Type 'help' to see available commands.".to_string(),
                "Type 'exit' to close the terminal.".to_string(),
            ],
            commands: TerminalCommands {
                help: CannedCommand {
                    output: vec![
                        "Available commands:".to_string(),
                        "  whoami".to_string(),
                        "  cat intro.txt".to_string(),
                        "  stats".to_string(),
                        "  ls            | ls -la       | ls skills/".to_string(),
                        "  tree skills/  | cat experience.log".to_string(),
                        "  projects      | projects <name>".to_string(),
                        "  clear         | exit".to_string(),
                    ],
                },
            },
        }
    }
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            title: "Ashutosh Sonar - DevOps | Cloud | Infra | Security".to_string(),
            description: "Ashutosh Sonar - DevOps | Cloud | Infra | Security".to_string(),
            keywords: "DevOps, Cloud, Security, CI/CD, Kubernetes, AWS, Terraform, Ansible, \
                       Prometheus, Grafana"
                .to_string(),
            author: "Ashutosh Sonar".to_string(),
            url: "https://ashutoshsonar.dev".to_string(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            formspree_id: "xwprojje".to_string(),
            honeypot: true,
        }
    }
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            theme: ThemeTokens::default(),
            animations: Animations::default(),
            features: Features::default(),
        }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            background_color: default_background_color(),
            text_color: default_text_color(),
            link_color: default_primary_color(),
            border_color: default_border_color(),
        }
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            typing_effect: true,
            cursor_blink: true,
            reduced_motion: false,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            copy_buttons: true,
            tooltips: true,
            keyboard_shortcuts: true,
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            personal: Personal::default(),
            about: About::default(),
            skills: Skills::default(),
            experience: default_experience(),
            education: default_education(),
            projects: default_projects(),
            terminal: TerminalConfig::default(),
            seo: Seo::default(),
            social: Social {
                github: "hack-monk".to_string(),
                linkedin: "ashutosh-sonar".to_string(),
                twitter: String::new(),
                substack: "hackmonk".to_string(),
            },
            contact: Contact::default(),
            analytics: Analytics::default(),
            customization: Customization::default(),
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: PortfolioConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Default config file location (`<user config dir>/termfolio/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("termfolio").join("config.json"))
    }

    /// Load from an explicit path, the default location, or fall back to the
    /// embedded default. A missing or unreadable file is a diagnostic, not an
    /// error: the app still renders.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let candidate = explicit
            .map(Path::to_path_buf)
            .or_else(Self::default_path);

        let Some(path) = candidate else {
            return Self::default();
        };

        if !path.exists() {
            if explicit.is_some() {
                tracing::warn!("Config file not found: {}, using defaults", path.display());
            }
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.prompt.is_empty() {
            return Err(ConfigError::ValidationError(
                "terminal.prompt cannot be empty".to_string(),
            ));
        }

        if self.personal.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "personal.name cannot be empty".to_string(),
            ));
        }

        let theme = &self.customization.theme;
        for (field, value) in [
            ("primary_color", &theme.primary_color),
            ("background_color", &theme.background_color),
            ("text_color", &theme.text_color),
            ("link_color", &theme.link_color),
            ("border_color", &theme.border_color),
        ] {
            if crate::view::theme::parse_hex_color(value).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "customization.theme.{field} is not a hex color: {value:?}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PortfolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terminal.prompt, "ashutosh@portfolio:~$");
        assert_eq!(config.skills.categories.len(), 7);
        assert_eq!(config.experience.len(), 3);
        assert_eq!(config.projects.len(), 4);
    }

    #[test]
    fn test_config_validation_rejects_empty_prompt() {
        let mut config = PortfolioConfig::default();
        config.terminal.prompt = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_theme_color() {
        let mut config = PortfolioConfig::default();
        config.customization.theme.primary_color = "yellow-ish".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let config = PortfolioConfig::default();
        config.save_to_file(&config_path).unwrap();

        let loaded = PortfolioConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.personal.name, loaded.personal.name);
        assert_eq!(config.experience.len(), loaded.experience.len());
        assert_eq!(config.terminal.prompt, loaded.terminal.prompt);
    }

    #[test]
    fn test_skill_item_untagged_forms() {
        let json = r#"["Rust", {"name": "Go", "tip": "Currently learning"}]"#;
        let items: Vec<SkillItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "Rust");
        assert!(items[0].tip().is_none());
        assert_eq!(items[1].name(), "Go");
        assert_eq!(items[1].tip(), Some("Currently learning"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{
            "personal": {
                "name": "Jane Doe",
                "title": "SRE",
                "email": "jane@example.com"
            }
        }"#;

        let config: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.personal.name, "Jane Doe");
        // Unspecified groups come from the embedded defaults
        assert!(!config.terminal.prompt.is_empty());
        assert!(config.customization.animations.cursor_blink);
    }

    #[test]
    fn test_missing_config_file_degrades_to_default() {
        let config =
            PortfolioConfig::load_or_default(Some(Path::new("/nonexistent/config.json")));
        assert_eq!(config.personal.name, PortfolioConfig::default().personal.name);
    }
}
