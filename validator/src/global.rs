//! Process-wide validator access.

use std::sync::OnceLock;

use crate::config::ValidatorConfig;
use crate::validator::Validator;

/// Global validator singleton.
static GLOBAL_VALIDATOR: OnceLock<Validator> = OnceLock::new();

/// Get the process-wide validator.
///
/// The first call creates it from `config`; later calls ignore `config` and
/// return the same instance.
pub fn get(config: Option<ValidatorConfig>) -> &'static Validator {
    GLOBAL_VALIDATOR.get_or_init(|| {
        let validator = create(config);
        tracing::debug!(enabled = validator.is_enabled(), "initialized global validator");
        validator
    })
}

/// Create a new, independent validator.
pub fn create(config: Option<ValidatorConfig>) -> Validator {
    Validator::new(config.unwrap_or_default())
}
