//! # modeldict-conf
//!
//! Settings for the modeldict serializer: reverse-relation naming, explicit
//! display names and an optional nesting bound.
//!
//! ```
//! use modeldict_conf::SerializerSettings;
//!
//! let settings = SerializerSettings::default().with_max_depth(6);
//! assert!(settings.validate().is_ok());
//! ```

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{DEFAULT_REVERSE_SUFFIX, ENV_PREFIX, SerializerSettings};
