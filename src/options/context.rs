use std::collections::BTreeMap;

/// Keys forced to a fixed value while a production (non-custom) framework is
/// selected.
pub const DEFAULT_ENFORCED_DEFAULTS: &[(&str, bool)] = &[
    ("authorize", false),
    ("credentials_cookie", false),
    ("api_key", false),
];

pub fn default_enforced_defaults() -> BTreeMap<String, bool> {
    DEFAULT_ENFORCED_DEFAULTS
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

/// Everything the resolver needs to know about the console's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    /// True when the user supplies their own framework URL.
    pub framework_is_custom: bool,
    /// The user's code, searched for onLoad callback names.
    pub code_body: String,
    /// Keys owned by the framework when it is not custom.
    pub enforced_defaults: BTreeMap<String, bool>,
}

impl ResolutionContext {
    /// Context for a production framework with the default enforced keys.
    pub fn new(code_body: impl Into<String>) -> Self {
        Self {
            framework_is_custom: false,
            code_body: code_body.into(),
            enforced_defaults: default_enforced_defaults(),
        }
    }

    pub fn with_custom_framework(mut self, framework_is_custom: bool) -> Self {
        self.framework_is_custom = framework_is_custom;
        self
    }

    pub fn with_enforced_defaults(mut self, enforced_defaults: BTreeMap<String, bool>) -> Self {
        self.enforced_defaults = enforced_defaults;
        self
    }

    /// Whether the code body mentions the given onLoad callback name.
    pub fn on_load_defined(&self, callback: &str) -> bool {
        self.code_body.contains(callback)
    }

    /// The enforced value for `key`, if the current framework enforces one.
    pub fn enforced_value(&self, key: &str) -> Option<bool> {
        if self.framework_is_custom {
            return None;
        }
        self.enforced_defaults.get(key).copied()
    }
}
