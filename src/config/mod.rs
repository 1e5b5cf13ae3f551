mod envelope;
mod loader;
mod wing;

pub use envelope::{EnvelopeConfig, EnvelopeConfigBuilder, GustConfig, RawEnvelopeConfig};
pub use loader::{read_raw, ConfigError, Quantity};
pub use wing::{RawWingConfig, WingConfig};
