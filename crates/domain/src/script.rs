//! Automation scripts, the units of work shown on the dashboard.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A named automation script the user can trigger.
///
/// Scripts carry no identity of their own. They are addressed by their
/// position in the catalog that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationScript {
    /// Human-readable name, shown as the primary row text.
    pub name: String,
    /// Short description, shown as the secondary row text. May be empty.
    #[serde(default)]
    pub description: String,
}

impl AutomationScript {
    /// Start building a new script.
    #[must_use]
    pub fn builder() -> AutomationScriptBuilder {
        AutomationScriptBuilder::default()
    }

    /// Validate domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when the name is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Builder for [`AutomationScript`].
#[derive(Debug, Default)]
pub struct AutomationScriptBuilder {
    name: Option<String>,
    description: Option<String>,
}

impl AutomationScriptBuilder {
    /// Set the script name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the script description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the script, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when no name was set or the
    /// name is empty.
    pub fn build(self) -> Result<AutomationScript, ValidationError> {
        let script = AutomationScript {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        script.validate()?;
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_script_when_name_is_present() {
        let script = AutomationScript::builder()
            .name("Morning lights")
            .description("Turn on the hallway lights")
            .build()
            .unwrap();

        assert_eq!(script.name, "Morning lights");
        assert_eq!(script.description, "Turn on the hallway lights");
    }

    #[test]
    fn should_allow_empty_description() {
        let script = AutomationScript::builder().name("Nightly backup").build();
        assert!(script.is_ok());
        assert_eq!(script.unwrap().description, "");
    }

    #[test]
    fn should_reject_empty_name() {
        let result = AutomationScript::builder().description("No name").build();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn should_reject_missing_name() {
        let result = AutomationScript::builder().build();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn should_roundtrip_through_json() {
        let script = AutomationScript::builder()
            .name("Script 1")
            .description("This is script 1")
            .build()
            .unwrap();

        let json = serde_json::to_string(&script).unwrap();
        let back: AutomationScript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
    }

    #[test]
    fn should_default_description_when_absent_in_json() {
        let back: AutomationScript = serde_json::from_str(r#"{"name":"Script 1"}"#).unwrap();
        assert_eq!(back.name, "Script 1");
        assert_eq!(back.description, "");
    }
}
