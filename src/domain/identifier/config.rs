// src/domain/identifier/config.rs
use super::value_objects::TargetField;
use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_SUFFIX_ITERATIONS: usize = 10;

/// Upper bound on suffixed variants per suggestion; one Postgres statement
/// accepts at most 65 535 bind parameters.
pub const MAX_SUFFIX_ITERATIONS: usize = 65_535;

/// How disposable-word entries are matched against a candidate.
///
/// `Pattern` compiles each entry as a regular expression between word
/// boundaries, so `"prep(aratory)?"` drops both spellings. `Literal` escapes
/// the entry first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisposableMode {
    #[default]
    Pattern,
    Literal,
}

impl DisposableMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisposableMode::Pattern => "pattern",
            DisposableMode::Literal => "literal",
        }
    }
}

impl FromStr for DisposableMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(DisposableMode::Pattern),
            "literal" => Ok(DisposableMode::Literal),
            other => Err(DomainError::Validation(format!(
                "unknown disposable mode: {other}"
            ))),
        }
    }
}

/// Immutable per-entity settings for identifier generation.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    target_field: TargetField,
    disposable_words: Vec<String>,
    disposable_patterns: Vec<Regex>,
    disposable_mode: DisposableMode,
    suffix_template: Option<String>,
    suffix_iterations: usize,
}

impl GenerationConfig {
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    pub fn target_field(&self) -> &TargetField {
        &self.target_field
    }

    pub fn disposable_words(&self) -> &[String] {
        &self.disposable_words
    }

    pub(crate) fn disposable_patterns(&self) -> &[Regex] {
        &self.disposable_patterns
    }

    pub fn disposable_mode(&self) -> DisposableMode {
        self.disposable_mode
    }

    pub fn suffix_template(&self) -> Option<&str> {
        self.suffix_template.as_deref()
    }

    pub fn suffix_iterations(&self) -> usize {
        self.suffix_iterations
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_field: TargetField::default(),
            disposable_words: Vec::new(),
            disposable_patterns: Vec::new(),
            disposable_mode: DisposableMode::default(),
            suffix_template: None,
            suffix_iterations: DEFAULT_SUFFIX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    target_field: String,
    disposable_words: Vec<String>,
    disposable_mode: DisposableMode,
    suffix_template: Option<String>,
    suffix_iterations: usize,
}

impl Default for GenerationConfigBuilder {
    fn default() -> Self {
        Self {
            target_field: TargetField::CONVENTIONAL.to_string(),
            disposable_words: Vec::new(),
            disposable_mode: DisposableMode::default(),
            suffix_template: None,
            suffix_iterations: DEFAULT_SUFFIX_ITERATIONS,
        }
    }
}

impl GenerationConfigBuilder {
    pub fn target_field(mut self, field: impl Into<String>) -> Self {
        self.target_field = field.into();
        self
    }

    pub fn disposable_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disposable_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn disposable_mode(mut self, mode: DisposableMode) -> Self {
        self.disposable_mode = mode;
        self
    }

    pub fn suffix_template(mut self, template: impl Into<String>) -> Self {
        self.suffix_template = Some(template.into());
        self
    }

    pub fn suffix_iterations(mut self, iterations: usize) -> Self {
        self.suffix_iterations = iterations;
        self
    }

    pub fn build(self) -> DomainResult<GenerationConfig> {
        let target_field = TargetField::new(self.target_field)?;

        if self.suffix_template.is_some() && self.suffix_iterations == 0 {
            return Err(DomainError::Validation(
                "suffix_iterations must be positive when a suffix is configured".into(),
            ));
        }
        if self.suffix_iterations > MAX_SUFFIX_ITERATIONS {
            return Err(DomainError::Validation(format!(
                "suffix_iterations must not exceed {MAX_SUFFIX_ITERATIONS}"
            )));
        }
        if let Some(template) = &self.suffix_template {
            validate_suffix_template(template)?;
        }

        let disposable_patterns = self
            .disposable_words
            .iter()
            .map(|word| compile_disposable(word, self.disposable_mode))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(GenerationConfig {
            target_field,
            disposable_words: self.disposable_words,
            disposable_patterns,
            disposable_mode: self.disposable_mode,
            suffix_template: self.suffix_template,
            suffix_iterations: self.suffix_iterations,
        })
    }
}

/// Suffixes are appended to identifiers verbatim, so they must be URL-safe and
/// carry at least one alphanumeric character for `increment` to advance.
fn validate_suffix_template(template: &str) -> DomainResult<()> {
    if template.is_empty() {
        return Err(DomainError::Validation("suffix template cannot be empty".into()));
    }
    if let Some(bad) = template
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(DomainError::Validation(format!(
            "suffix template {template:?} contains {bad:?}; only [A-Za-z0-9_-] is allowed"
        )));
    }
    if !template.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::Validation(format!(
            "suffix template {template:?} needs an alphanumeric character to increment"
        )));
    }
    Ok(())
}

fn compile_disposable(word: &str, mode: DisposableMode) -> DomainResult<Regex> {
    if word.trim().is_empty() {
        return Err(DomainError::Validation(
            "disposable words cannot be empty".into(),
        ));
    }
    let body = match mode {
        DisposableMode::Pattern => word.to_string(),
        DisposableMode::Literal => regex::escape(word),
    };
    Regex::new(&format!(r"\b(?:{body})\b")).map_err(|err| {
        DomainError::Validation(format!("invalid disposable pattern `{word}`: {err}"))
    })
}

/// Declaration-shaped options, as a host would write them in its own config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub target: Option<String>,
    pub disposable: Vec<String>,
    pub disposable_mode: DisposableMode,
    pub suffix: Option<String>,
    pub suffix_iterations: Option<usize>,
}

impl TryFrom<GenerationOptions> for GenerationConfig {
    type Error = DomainError;

    fn try_from(options: GenerationOptions) -> Result<Self, Self::Error> {
        let target = options.target.ok_or(DomainError::MissingTargetField)?;

        let mut builder = GenerationConfig::builder()
            .target_field(target)
            .disposable_words(options.disposable)
            .disposable_mode(options.disposable_mode);
        if let Some(suffix) = options.suffix {
            builder = builder.suffix_template(suffix);
        }
        if let Some(iterations) = options.suffix_iterations {
            builder = builder.suffix_iterations(iterations);
        }
        builder.build()
    }
}
