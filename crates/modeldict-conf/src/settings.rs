//! Serializer settings
//!
//! Settings are plain data. They can be built in code, parsed from TOML, or
//! overridden from `MODELDICT_*` environment variables.
//!
//! ```toml
//! reverse_suffix = "_set"
//! max_depth = 8
//!
//! [display_names."someapp.Goal"]
//! todo = "todos"
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Suffix appended to reverse relation names that have no attribute of their own
pub const DEFAULT_REVERSE_SUFFIX: &str = "_set";

/// Prefix of environment variables read by [`SerializerSettings::apply_env_vars`]
pub const ENV_PREFIX: &str = "MODELDICT_";

/// Settings for the record serializer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerSettings {
	/// Suffix used when a materialized relation has no same-named attribute
	pub reverse_suffix: String,

	/// Optional bound on nesting depth; `None` means unbounded
	pub max_depth: Option<usize>,

	/// Explicit output names: model label -> relation name -> output name
	pub display_names: HashMap<String, HashMap<String, String>>,
}

impl Default for SerializerSettings {
	fn default() -> Self {
		Self {
			reverse_suffix: DEFAULT_REVERSE_SUFFIX.to_string(),
			max_depth: None,
			display_names: HashMap::new(),
		}
	}
}

impl SerializerSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse and validate settings from a TOML document
	///
	/// Missing keys fall back to their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use modeldict_conf::SerializerSettings;
	///
	/// let settings = SerializerSettings::from_toml_str(r#"
	///     max_depth = 4
	///
	///     [display_names."someapp.Goal"]
	///     todo = "todos"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.reverse_suffix, "_set");
	/// assert_eq!(settings.max_depth, Some(4));
	/// assert_eq!(settings.display_name("someapp.Goal", "todo"), Some("todos"));
	/// ```
	pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read, parse and validate a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading serializer settings");
		Self::from_toml_str(&content)
	}

	/// Apply overrides from the process environment
	pub fn with_env(self) -> ConfigResult<Self> {
		self.apply_env_vars(std::env::vars())
	}

	/// Apply `MODELDICT_REVERSE_SUFFIX` and `MODELDICT_MAX_DEPTH` overrides
	///
	/// `MODELDICT_MAX_DEPTH` accepts a positive integer, or `none` / an empty
	/// string to remove the bound. Other variables are ignored.
	pub fn apply_env_vars<I, K, V>(mut self, vars: I) -> ConfigResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		for (key, value) in vars {
			let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
				continue;
			};
			let value = value.as_ref().trim();
			match name {
				"REVERSE_SUFFIX" => self.reverse_suffix = value.to_string(),
				"MAX_DEPTH" => {
					self.max_depth = if value.is_empty() || value.eq_ignore_ascii_case("none") {
						None
					} else {
						Some(value.parse().map_err(|_| {
							ConfigError::invalid(
								key.as_ref(),
								format!("expected a positive integer, got '{value}'"),
							)
						})?)
					};
				}
				_ => {}
			}
		}
		self.validate()?;
		Ok(self)
	}

	/// Set the reverse relation suffix
	pub fn with_reverse_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.reverse_suffix = suffix.into();
		self
	}

	/// Bound the nesting depth
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	/// Register an explicit output name for a materialized relation
	pub fn with_display_name(
		mut self,
		model: impl Into<String>,
		relation: impl Into<String>,
		name: impl Into<String>,
	) -> Self {
		self.display_names
			.entry(model.into())
			.or_default()
			.insert(relation.into(), name.into());
		self
	}

	/// Explicit output name for `relation` on `model`, if one is configured
	pub fn display_name(&self, model: &str, relation: &str) -> Option<&str> {
		self.display_names
			.get(model)
			.and_then(|names| names.get(relation))
			.map(String::as_str)
	}

	/// Check that every setting is usable
	pub fn validate(&self) -> ConfigResult<()> {
		if self.reverse_suffix.is_empty() {
			return Err(ConfigError::invalid(
				"reverse_suffix",
				"must not be empty",
			));
		}
		if self.max_depth == Some(0) {
			return Err(ConfigError::invalid("max_depth", "must be at least 1"));
		}
		for (model, names) in &self.display_names {
			if let Some((relation, _)) = names.iter().find(|(_, name)| name.is_empty()) {
				return Err(ConfigError::invalid(
					format!("display_names.{model}.{relation}"),
					"must not be empty",
				));
			}
		}
		Ok(())
	}
}
