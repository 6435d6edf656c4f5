//! Common utilities shared across demos.

#![allow(dead_code)]

use fixlens::engine::DecoderConfig;
use std::env;

/// Sample FIX 4.1 session between an order entry client and an executor.
///
/// Fields are shown separated by `|`; [`sample_session`] swaps in SOH.
pub const SAMPLE_SESSION: &[&str] = &[
    "8=FIX.4.1|9=61|35=A|34=1|49=EXEC|52=20121105-23:24:06|56=BANZAI|98=0|108=30|10=003|",
    "8=FIX.4.1|9=61|35=A|34=1|49=BANZAI|52=20121105-23:24:06|56=EXEC|98=0|108=30|10=003|",
    "8=FIX.4.1|9=49|35=0|34=2|49=BANZAI|52=20121105-23:24:37|56=EXEC|10=228|",
    "8=FIX.4.1|9=49|35=0|34=2|49=EXEC|52=20121105-23:24:37|56=BANZAI|10=228|",
    "8=FIX.4.1|9=103|35=D|34=3|49=BANZAI|52=20121105-23:24:42|56=EXEC|11=1352157882577|21=1|38=10000|40=1|54=1|55=MSFT|59=0|10=062|",
    "8=FIX.4.1|9=139|35=8|34=3|49=EXEC|52=20121105-23:24:42|56=BANZAI|6=0|11=1352157882577|14=0|17=1|20=0|31=0|32=0|37=1|38=10000|39=0|54=1|55=MSFT|150=2|151=0|10=059|",
    "8=FIX.4.1|9=153|35=8|34=4|49=EXEC|52=20121105-23:24:42|56=BANZAI|6=12.3|11=1352157882577|14=10000|17=2|20=0|31=12.3|32=10000|37=2|38=10000|39=2|54=1|55=MSFT|150=2|151=0|10=230|",
    "8=FIX.4.1|9=103|35=D|34=4|49=BANZAI|52=20121105-23:24:55|56=EXEC|11=1352157895032|21=1|38=10000|40=1|54=1|55=ORCL|59=0|10=047|",
    "8=FIX.4.1|9=139|35=8|34=5|49=EXEC|52=20121105-23:24:55|56=BANZAI|6=0|11=1352157895032|14=0|17=3|20=0|31=0|32=0|37=3|38=10000|39=0|54=1|55=ORCL|150=2|151=0|10=049|",
    "8=FIX.4.1|9=153|35=8|34=6|49=EXEC|52=20121105-23:24:55|56=BANZAI|6=12.3|11=1352157895032|14=10000|17=4|20=0|31=12.3|32=10000|37=4|38=10000|39=2|54=1|55=ORCL|150=2|151=0|10=220|",
    "8=FIX.4.1|9=108|35=D|34=5|49=BANZAI|52=20121105-23:25:12|56=EXEC|11=1352157912357|21=1|38=10000|40=2|44=10|54=1|55=SPY|59=0|10=003|",
    "8=FIX.4.1|9=138|35=8|34=7|49=EXEC|52=20121105-23:25:12|56=BANZAI|6=0|11=1352157912357|14=0|17=5|20=0|31=0|32=0|37=5|38=10000|39=0|54=1|55=SPY|150=2|151=0|10=252|",
    "8=FIX.4.1|9=104|35=F|34=6|49=BANZAI|52=20121105-23:25:16|56=EXEC|11=1352157916437|38=10000|41=1352157912357|54=1|55=SPY|10=198|",
    "8=FIX.4.1|9=82|35=3|34=8|49=EXEC|52=20121105-23:25:16|56=BANZAI|45=6|58=Unsupported message type|10=000|",
    "8=FIX.4.1|9=104|35=F|34=7|49=BANZAI|52=20121105-23:25:25|56=EXEC|11=1352157925309|38=10000|41=1352157912357|54=1|55=SPY|10=197|",
    "8=FIX.4.1|9=82|35=3|34=9|49=EXEC|52=20121105-23:25:25|56=BANZAI|45=7|58=Unsupported message type|10=002|",
];

/// Returns the sample session as one SOH-separated blob.
#[must_use]
pub fn sample_session() -> String {
    SAMPLE_SESSION.concat().replace('|', "\u{1}")
}

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Fixed field separator, if any.
    pub delimiter: Option<String>,
    /// Whether unknown correlations abort decoding.
    pub strict_correlation: bool,
}

impl DemoConfig {
    /// Reads `FIXLENS_DELIMITER` and `FIXLENS_STRICT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            delimiter: env::var("FIXLENS_DELIMITER").ok().filter(|d| !d.is_empty()),
            strict_correlation: env::var("FIXLENS_STRICT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Converts into a decoder configuration.
    #[must_use]
    pub fn decoder_config(&self) -> DecoderConfig {
        let config = DecoderConfig::new().with_strict_correlation(self.strict_correlation);
        match &self.delimiter {
            Some(delimiter) => config.with_delimiter(delimiter.as_str()),
            None => config,
        }
    }
}

/// Initializes logging for demos.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
