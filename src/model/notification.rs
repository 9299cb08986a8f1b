use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::{Document, NotificationChannel};
use crate::error::{Error, Result};

/// Message template with `{name}` placeholders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: String,
    #[serde(rename = "type")]
    pub channel: NotificationChannel,
    pub subject: String,
    pub template: String,
    /// Placeholder names the template declares
    pub variables: Vec<String>,
    pub active: bool,
}

impl NotificationTemplate {
    /// Placeholder names actually used in the body
    pub fn placeholders(&self) -> BTreeSet<&str> {
        let mut found = BTreeSet::new();
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    found.insert(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        found
    }

    /// Substitute placeholders; unknown placeholders are left untouched
    pub fn render(&self, values: &HashMap<&str, String>) -> String {
        values
            .iter()
            .fold(self.template.clone(), |body, (name, value)| {
                body.replace(&format!("{{{}}}", name), value)
            })
    }
}

impl Document for NotificationTemplate {
    const COLLECTION: &'static str = "notification_templates";

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn validate(&self) -> Result<()> {
        let declared: BTreeSet<&str> = self.variables.iter().map(String::as_str).collect();
        let undeclared: Vec<&str> = self
            .placeholders()
            .into_iter()
            .filter(|name| !declared.contains(name))
            .collect();

        if undeclared.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(format!(
                "template {}: undeclared placeholders {}",
                self.id,
                undeclared.join(", ")
            )))
        }
    }
}
