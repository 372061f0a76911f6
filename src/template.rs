use crate::errors::{PipelineError, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// `{name}` placeholders, plus `{{` / `}}` escapes for literal braces
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .expect("placeholder pattern should be valid")
});

/// Named values substituted into a prompt template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFields(BTreeMap<String, String>);

impl PromptFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PromptFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// A prompt blueprint with `{name}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Every distinct placeholder name the template references
    pub fn placeholders(&self) -> BTreeSet<&str> {
        PLACEHOLDER
            .captures_iter(&self.text)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str())
            .collect()
    }

    /// Fails with the first placeholder that `available` cannot supply
    pub fn check_fields<'a>(&self, available: impl IntoIterator<Item = &'a str>) -> Result<()> {
        let available = available.into_iter().collect::<BTreeSet<_>>();
        match self
            .placeholders()
            .into_iter()
            .find(|name| !available.contains(*name))
        {
            Some(missing) => Err(PipelineError::Template(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Substitutes every placeholder with its field value.
    ///
    /// A placeholder without a value is a `Template` error; nothing is
    /// partially rendered.
    pub fn render(&self, fields: &PromptFields) -> Result<String> {
        let mut rendered = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            rendered.push_str(&self.text[last..whole.start()]);

            match caps.get(1) {
                Some(name) => {
                    let value = fields
                        .get(name.as_str())
                        .ok_or_else(|| PipelineError::Template(name.as_str().to_string()))?;
                    rendered.push_str(value);
                }
                // `{{` or `}}`
                None => rendered.push_str(&whole.as_str()[..1]),
            }
            last = whole.end();
        }

        rendered.push_str(&self.text[last..]);
        Ok(rendered)
    }
}
