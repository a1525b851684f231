//! Environment variable source: ENVHASH_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses ENVHASH_ prefix and __ as separator for nested keys; file and
/// directory lists are comma separated (ENVHASH__FINGERPRINT__FILES=a.json,b.lock).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("ENVHASH")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("fingerprint.files")
            .with_list_parse_key("fingerprint.directories")
            .try_parsing(true),
    );
    Ok(builder)
}
