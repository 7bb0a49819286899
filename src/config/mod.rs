mod settings;

pub use settings::{
    resolve, CliOverrides, ConfigError, DeviceSelector, FileSettings, TinymixConfig,
    TinymixConfigBuilder, TINYMIX_BINARY,
};
