use std::sync::RwLock;

/// A setting for display and editing.
#[derive(Debug, Clone)]
pub struct SettingDisplay {
    pub name: String,
    pub label: String,
    pub value: String,
    pub description: String,
    pub setting_type: String, // "text", "number", "boolean"
}

/// In-memory settings, initialized with defaults at startup. Edits live for
/// the process lifetime only.
pub struct SettingsStore {
    inner: RwLock<Vec<SettingDisplay>>,
}

fn defaults() -> Vec<SettingDisplay> {
    vec![
        SettingDisplay {
            name: "app.name".to_string(),
            label: "Application name".to_string(),
            value: "Bindline".to_string(),
            description: "Shown in the header and page titles".to_string(),
            setting_type: "text".to_string(),
        },
        SettingDisplay {
            name: "pipeline.list_variant".to_string(),
            label: "List progress style".to_string(),
            value: "compact".to_string(),
            description: "Progress indicator used on the prospect list (horizontal or compact)"
                .to_string(),
            setting_type: "text".to_string(),
        },
        SettingDisplay {
            name: "pipeline.show_labels".to_string(),
            label: "Show stage labels".to_string(),
            value: "true".to_string(),
            description: "Show short stage labels under progress bar nodes".to_string(),
            setting_type: "boolean".to_string(),
        },
    ]
}

impl SettingsStore {
    pub fn new() -> Self {
        SettingsStore {
            inner: RwLock::new(defaults()),
        }
    }

    /// Override the application name (startup configuration hook).
    pub fn set_app_name(&self, name: &str) {
        self.update_value("app.name", name);
    }

    pub fn find_all(&self) -> Vec<SettingDisplay> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get a single setting's value by name, returning a default if not found.
    pub fn get_value(&self, name: &str, default: &str) -> String {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.clone())
            .unwrap_or_else(|| default.to_string())
    }

    /// Update a setting's value by name. Unknown names are ignored.
    pub fn update_value(&self, name: &str, value: &str) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match guard.iter_mut().find(|s| s.name == name) {
            Some(s) => {
                s.value = value.trim().to_string();
                true
            }
            None => false,
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_present() {
        let store = SettingsStore::new();
        assert_eq!(store.get_value("app.name", "x"), "Bindline");
        assert_eq!(store.get_value("missing.key", "fallback"), "fallback");
    }

    #[test]
    fn update_known_and_unknown_names() {
        let store = SettingsStore::new();
        assert!(store.update_value("pipeline.list_variant", " horizontal "));
        assert_eq!(store.get_value("pipeline.list_variant", ""), "horizontal");
        assert!(!store.update_value("nope", "v"));
    }
}
