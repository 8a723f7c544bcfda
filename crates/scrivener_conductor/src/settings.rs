//! Layered configuration.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use scrivener_actors::{
    DEFAULT_AUTHOR_PREAMBLE, DEFAULT_CRITIC_PREAMBLE, DEFAULT_EDITOR_PREAMBLE,
    DEFAULT_LOG_TRUNCATE,
};
use scrivener_error::{ConfigError, ConfigErrorKind, ScrivenerResult};
use scrivener_models::LlmConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../scrivener.toml");

/// Name of the configuration file looked up in the home and working directories.
pub const CONFIG_FILE_NAME: &str = "scrivener.toml";

/// Prefix of environment variable overrides, e.g. `SCRIVENER__IDEATION__WORKERS`.
pub const ENV_PREFIX: &str = "SCRIVENER";

/// Parallel ideation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct IdeationConfig {
    /// Concurrent ideation requests
    #[serde(default = "default_workers")]
    workers: usize,
}

fn default_workers() -> usize {
    4
}

impl IdeationConfig {
    /// Ideation with `workers` concurrent requests.
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Default for IdeationConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

/// Identity preambles of the model-backed actors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ActorsConfig {
    /// Author system message
    #[serde(default = "default_author_preamble")]
    author_preamble: String,
    /// Critic system message
    #[serde(default = "default_critic_preamble")]
    critic_preamble: String,
    /// Editor system message
    #[serde(default = "default_editor_preamble")]
    editor_preamble: String,
    /// Characters of prompt and response text kept in debug logs
    #[serde(default = "default_log_truncate")]
    log_truncate: usize,
}

fn default_author_preamble() -> String {
    DEFAULT_AUTHOR_PREAMBLE.to_string()
}

fn default_critic_preamble() -> String {
    DEFAULT_CRITIC_PREAMBLE.to_string()
}

fn default_editor_preamble() -> String {
    DEFAULT_EDITOR_PREAMBLE.to_string()
}

fn default_log_truncate() -> usize {
    DEFAULT_LOG_TRUNCATE
}

impl Default for ActorsConfig {
    fn default() -> Self {
        Self {
            author_preamble: default_author_preamble(),
            critic_preamble: default_critic_preamble(),
            editor_preamble: default_editor_preamble(),
            log_truncate: default_log_truncate(),
        }
    }
}

/// Prompt table location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct PromptsConfig {
    /// Prompt file replacing the bundled table
    #[serde(default)]
    file: Option<PathBuf>,
}

impl PromptsConfig {
    /// Use a prompt file instead of the bundled table.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Shape of a drafted novel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct LongformConfig {
    /// Number of chapters
    #[serde(default = "default_chapters")]
    chapters: usize,
    /// Pages written per chapter
    #[serde(default = "default_pages_per_chapter")]
    pages_per_chapter: usize,
    /// Target words per page
    #[serde(default = "default_words_per_page")]
    words_per_page: u32,
    /// Preceding pages of the chapter shown when writing a page
    #[serde(default = "default_section_window")]
    section_window: usize,
    /// Earlier chapter summaries shown when writing a page
    #[serde(default = "default_summary_window")]
    summary_window: usize,
    /// Review and revise each chapter
    #[serde(default)]
    editorial_pass: bool,
}

fn default_chapters() -> usize {
    12
}

fn default_pages_per_chapter() -> usize {
    10
}

fn default_words_per_page() -> u32 {
    300
}

fn default_section_window() -> usize {
    2
}

fn default_summary_window() -> usize {
    3
}

impl Default for LongformConfig {
    fn default() -> Self {
        Self {
            chapters: default_chapters(),
            pages_per_chapter: default_pages_per_chapter(),
            words_per_page: default_words_per_page(),
            section_window: default_section_window(),
            summary_window: default_summary_window(),
            editorial_pass: false,
        }
    }
}

/// Shape of a drafted podcast episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct PodcastConfig {
    /// Number of segments
    #[serde(default = "default_segments")]
    segments: usize,
    /// Target words per segment
    #[serde(default = "default_words_per_segment")]
    words_per_segment: u32,
    /// Earlier segment summaries shown when writing a segment
    #[serde(default = "default_summary_window")]
    summary_window: usize,
    /// Review and revise each segment
    #[serde(default)]
    editorial_pass: bool,
}

fn default_segments() -> usize {
    6
}

fn default_words_per_segment() -> u32 {
    600
}

impl Default for PodcastConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            words_per_segment: default_words_per_segment(),
            summary_window: default_summary_window(),
            editorial_pass: false,
        }
    }
}

/// Drafting settings per genre.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct DraftConfig {
    /// Longform fiction
    #[serde(default)]
    longform: LongformConfig,
    /// History podcast
    #[serde(default)]
    podcast: PodcastConfig,
}

/// Complete configuration.
///
/// # Example
///
/// ```no_run
/// use scrivener_conductor::ScrivenerConfig;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScrivenerConfig::load(Some(Path::new("./work")), None)?;
/// println!("ideation workers: {}", config.ideation().workers());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct ScrivenerConfig {
    /// Model backend
    #[serde(default)]
    llm: LlmConfig,
    /// Parallel ideation
    #[serde(default)]
    ideation: IdeationConfig,
    /// Actor preambles
    #[serde(default)]
    actors: ActorsConfig,
    /// Prompt table
    #[serde(default)]
    prompts: PromptsConfig,
    /// Drafting
    #[serde(default)]
    draft: DraftConfig,
}

fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> ScrivenerResult<ScrivenerConfig> {
    let config = builder
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Build(e.to_string())))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Deserialize(e.to_string())))?;
    Ok(config)
}

impl ScrivenerConfig {
    /// Load configuration with precedence, later sources overriding earlier:
    ///
    /// 1. Bundled defaults
    /// 2. `~/.config/scrivener/scrivener.toml`
    /// 3. `scrivener.toml` in the working directory
    /// 4. `explicit`, which must exist when given
    /// 5. `SCRIVENER__*` environment variables
    #[instrument]
    pub fn load(working_dir: Option<&Path>, explicit: Option<&Path>) -> ScrivenerResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scrivener").join(CONFIG_FILE_NAME);
            builder = builder.add_source(File::from(home_config).required(false));
        }

        if let Some(dir) = working_dir {
            builder = builder.add_source(File::from(dir.join(CONFIG_FILE_NAME)).required(false));
        }

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::new(ConfigErrorKind::FileNotFound(
                    path.display().to_string(),
                ))
                .into());
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        build(builder)
    }

    /// Bundled defaults overlaid with TOML text.
    pub fn from_toml_str(overrides: &str) -> ScrivenerResult<Self> {
        build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from_str(overrides, FileFormat::Toml)),
        )
    }

    /// Bundled defaults only.
    pub fn bundled() -> ScrivenerResult<Self> {
        Self::from_toml_str("")
    }

    /// Replace the prompt settings.
    pub fn with_prompts(mut self, prompts: PromptsConfig) -> Self {
        self.prompts = prompts;
        self
    }

    /// Replace the ideation settings.
    pub fn with_ideation(mut self, ideation: IdeationConfig) -> Self {
        self.ideation = ideation;
        self
    }
}
