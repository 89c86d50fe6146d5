// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Template filenames with a single mode placeholder.
//!
//! ```text
//!  config.{{MODE}}.js
//!  \_____/\______/\_/
//!  prefix  token  suffix
//!
//!  resolve("prod")  -> config.prod.js
//!  match("config.qa.js") -> Some("qa")
//!  stripped_name()  -> config.js   (one adjacent separator dropped)
//! ```

use crate::error::TemplateError;

/// Placeholder used when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "{{MODE}}";

/// Characters treated as separators next to the placeholder.
const SEPARATORS: [char; 3] = ['.', '-', '_'];

/// A parsed template filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    placeholder: String,
    prefix: String,
    suffix: String,
}

impl Template {
    /// Split `file_name` around its single `placeholder`.
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder is empty, missing or repeated, or
    /// if removing it leaves an empty filename or only an extension.
    pub fn parse(file_name: &str, placeholder: &str) -> Result<Self, TemplateError> {
        if placeholder.is_empty() {
            return Err(TemplateError::EmptyPlaceholder);
        }

        let count = file_name.matches(placeholder).count();
        let (prefix, suffix) = match count {
            0 => {
                return Err(TemplateError::NoPlaceholder {
                    template: file_name.to_string(),
                    placeholder: placeholder.to_string(),
                });
            }
            1 => file_name
                .split_once(placeholder)
                .ok_or_else(|| TemplateError::NoPlaceholder {
                    template: file_name.to_string(),
                    placeholder: placeholder.to_string(),
                })?,
            count => {
                return Err(TemplateError::MultiplePlaceholders {
                    template: file_name.to_string(),
                    placeholder: placeholder.to_string(),
                    count,
                });
            }
        };

        let template = Self {
            raw: file_name.to_string(),
            placeholder: placeholder.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        };

        if template.stripped_name().is_empty() {
            return Err(TemplateError::EmptyStrippedName(file_name.to_string()));
        }
        // `{{MODE}}.js` would otherwise promote to a file named `js`.
        if template.prefix.is_empty()
            && template
                .suffix
                .strip_prefix('.')
                .is_some_and(|ext| !ext.contains('.'))
        {
            return Err(TemplateError::BareExtension(file_name.to_string()));
        }
        Ok(template)
    }

    /// The template filename as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Substitute `mode` for the placeholder.
    #[must_use]
    pub fn resolve(&self, mode: &str) -> String {
        format!("{}{mode}{}", self.prefix, self.suffix)
    }

    /// If `file_name` has this template's shape, return the token standing in
    /// for the placeholder.
    #[must_use]
    pub fn match_token<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
            .filter(|token| !token.is_empty())
    }

    /// The filename with the placeholder and one adjacent separator removed.
    ///
    /// The separator before the placeholder is dropped; the one after it only
    /// when the placeholder starts the name.
    #[must_use]
    pub fn stripped_name(&self) -> String {
        if let Some(head) = self.prefix.strip_suffix(SEPARATORS) {
            return format!("{head}{}", self.suffix);
        }
        if self.prefix.is_empty()
            && let Some(tail) = self.suffix.strip_prefix(SEPARATORS)
        {
            return tail.to_string();
        }
        format!("{}{}", self.prefix, self.suffix)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
