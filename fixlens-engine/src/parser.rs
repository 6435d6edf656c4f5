/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Text-to-message decode pipeline.
//!
//! [`FixParser`] owns a dictionary, a correlation store and a configuration,
//! and runs extraction, separator inference, splitting and decoration in
//! order. Correlations recorded while decoding one blob remain available to
//! later calls on the same parser until [`FixParser::reset_correlations`].

use crate::config::{DecoderConfig, DelimiterMode};
use crate::decorator::MessageDecorator;
use fixlens_core::error::DecodeError;
use fixlens_core::field::FieldMap;
use fixlens_core::message::{DecodedMessage, RawMessage};
use fixlens_dictionary::TagDictionary;
use fixlens_store::{CorrelationStore, MemoryStore};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Decodes FIX text into readable messages.
#[derive(Debug)]
pub struct FixParser<S: CorrelationStore = MemoryStore> {
    dictionary: Arc<TagDictionary>,
    store: Arc<S>,
    config: DecoderConfig,
}

impl FixParser<MemoryStore> {
    /// Creates a parser with the embedded dictionary, an in-memory store and
    /// default settings.
    ///
    /// # Errors
    /// Returns an error if the embedded dictionary cannot be loaded.
    pub fn new() -> fixlens_core::Result<Self> {
        FixParserBuilder::new().build()
    }

    /// Returns a builder for a parser.
    #[must_use]
    pub fn builder() -> FixParserBuilder<MemoryStore> {
        FixParserBuilder::new()
    }
}

impl<S: CorrelationStore> FixParser<S> {
    /// Returns the tag dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &TagDictionary {
        &self.dictionary
    }

    /// Returns the correlation store.
    #[must_use]
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns the decoder configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Forgets every correlated message seen so far.
    pub fn reset_correlations(&self) {
        self.store.clear();
        debug!("correlation store cleared");
    }

    /// Finds every FIX message embedded in `text`.
    ///
    /// # Errors
    /// Returns `DecodeError::InputTooLarge` if `text` exceeds the configured
    /// maximum, `DecodeError::EmptyInput` for empty text and
    /// `DecodeError::NoMessagesFound` if nothing matched.
    pub fn extract_messages<'a>(&self, text: &'a str) -> Result<Vec<RawMessage<'a>>, DecodeError> {
        if text.len() > self.config.max_input_size {
            return Err(DecodeError::InputTooLarge {
                size: text.len(),
                max_size: self.config.max_input_size,
            });
        }

        let messages = fixlens_tagvalue::extract_messages(text)?;
        debug!(count = messages.len(), bytes = text.len(), "extracted messages");
        Ok(messages)
    }

    /// Infers the field separator of a message.
    ///
    /// # Errors
    /// Returns `DecodeError::MalformedHeader` if tag 9 or tag 35 cannot be
    /// located.
    pub fn guess_delimiter<'a>(&self, message: &RawMessage<'a>) -> Result<&'a str, DecodeError> {
        fixlens_tagvalue::guess_delimiter(message)
    }

    /// Splits a message into raw tag/value pairs.
    #[must_use]
    pub fn split_key_vals<'a>(&self, message: &RawMessage<'a>, delimiter: &str) -> FieldMap<'a> {
        fixlens_tagvalue::split_key_vals(message, delimiter)
    }

    /// Decodes one message.
    ///
    /// The separator is `delimiter` if given, else the configured one, else
    /// inferred from the message itself.
    ///
    /// # Errors
    /// Returns `DecodeError::MalformedHeader` if the separator has to be
    /// inferred and cannot be, or `DecodeError::MissingCorrelation` for an
    /// unknown original order in strict mode.
    pub fn to_json(
        &self,
        message: &RawMessage<'_>,
        delimiter: Option<&str>,
    ) -> Result<DecodedMessage, DecodeError> {
        let delimiter = match delimiter.or(self.config.delimiter.as_deref()) {
            Some(delimiter) => delimiter,
            None => self.guess_delimiter(message)?,
        };
        let fields = self.split_key_vals(message, delimiter);
        self.decorator().decorate(&fields)
    }

    /// Decorates an already split message.
    ///
    /// # Errors
    /// Returns `DecodeError::MissingCorrelation` for an unknown original order
    /// in strict mode.
    pub fn decorate(&self, fields: &FieldMap<'_>) -> Result<DecodedMessage, DecodeError> {
        self.decorator().decorate(fields)
    }

    /// Returns the tags of a split message that the dictionary cannot name.
    #[must_use]
    pub fn unresolved_tags<'a>(&self, fields: &FieldMap<'a>) -> Vec<&'a str> {
        self.decorator().unresolved_tags(fields)
    }

    /// Returns the separator shared by every message of a blob.
    ///
    /// This is the configured delimiter if any, else the one inferred from the
    /// first message in `PerBatch` mode. `None` means each message needs its
    /// own inference.
    ///
    /// # Errors
    /// Returns `DecodeError::MalformedHeader` if the first message's separator
    /// cannot be inferred.
    pub fn batch_delimiter<'s, 'a: 's>(
        &'s self,
        messages: &[RawMessage<'a>],
    ) -> Result<Option<&'s str>, DecodeError> {
        match (self.config.delimiter.as_deref(), self.config.delimiter_mode) {
            (Some(delimiter), _) => Ok(Some(delimiter)),
            (None, DelimiterMode::PerBatch) => messages
                .first()
                .map(|first| self.guess_delimiter(first))
                .transpose(),
            (None, DelimiterMode::PerMessage) => Ok(None),
        }
    }

    /// Decodes every message in a text blob, in order of appearance.
    ///
    /// # Errors
    /// Stops at the first message that fails and returns its error. Messages
    /// decoded before the failure stay recorded in the correlation store.
    pub fn parse(&self, text: &str) -> Result<Vec<DecodedMessage>, DecodeError> {
        let messages = self.extract_messages(text)?;
        let batch_delimiter = self.batch_delimiter(&messages)?;

        let decoded = messages
            .iter()
            .map(|message| self.to_json(message, batch_delimiter))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            messages = decoded.len(),
            correlations = self.store.len(),
            "decoded text"
        );
        Ok(decoded)
    }

    fn decorator(&self) -> MessageDecorator<'_, '_, S> {
        MessageDecorator::new(&self.dictionary, self.store.as_ref())
            .with_strict_correlation(self.config.strict_correlation)
    }
}

/// Builder for a [`FixParser`].
#[derive(Debug)]
pub struct FixParserBuilder<S: CorrelationStore = MemoryStore> {
    dictionary: Option<Arc<TagDictionary>>,
    store: Arc<S>,
    config: DecoderConfig,
}

impl Default for FixParserBuilder<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl FixParserBuilder<MemoryStore> {
    /// Creates a builder with an in-memory store and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dictionary: None,
            store: Arc::new(MemoryStore::new()),
            config: DecoderConfig::default(),
        }
    }
}

impl<S: CorrelationStore> FixParserBuilder<S> {
    /// Sets the tag dictionary.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: TagDictionary) -> Self {
        self.dictionary = Some(Arc::new(dictionary));
        self
    }

    /// Sets a tag dictionary shared with other parsers.
    #[must_use]
    pub fn with_shared_dictionary(mut self, dictionary: Arc<TagDictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Loads the tag dictionary from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn with_dictionary_path(self, path: impl AsRef<Path>) -> fixlens_core::Result<Self> {
        let dictionary = TagDictionary::from_path(path)?;
        Ok(self.with_dictionary(dictionary))
    }

    /// Sets the correlation store.
    #[must_use]
    pub fn with_store<T: CorrelationStore>(self, store: T) -> FixParserBuilder<T> {
        self.with_shared_store(Arc::new(store))
    }

    /// Sets a correlation store shared with other parsers.
    #[must_use]
    pub fn with_shared_store<T: CorrelationStore>(self, store: Arc<T>) -> FixParserBuilder<T> {
        FixParserBuilder {
            dictionary: self.dictionary,
            store,
            config: self.config,
        }
    }

    /// Sets the decoder configuration.
    #[must_use]
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the decoder configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Builds the parser, loading the embedded dictionary if none was set.
    ///
    /// # Errors
    /// Returns an error if the embedded dictionary cannot be loaded.
    pub fn build(self) -> fixlens_core::Result<FixParser<S>> {
        let dictionary = match self.dictionary {
            Some(dictionary) => dictionary,
            None => Arc::new(TagDictionary::embedded()?),
        };
        debug!(
            version = dictionary.version(),
            tags = dictionary.len(),
            "parser built"
        );
        Ok(FixParser {
            dictionary,
            store: self.store,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_core::message::MsgDetail;

    const SESSION: &[&str] = &[
        "8=FIX.4.1|9=61|35=A|34=1|49=EXEC|52=20121105-23:24:06|56=BANZAI|98=0|108=30|10=003|",
        "8=FIX.4.1|9=61|35=A|34=1|49=BANZAI|52=20121105-23:24:06|56=EXEC|98=0|108=30|10=003|",
        "8=FIX.4.1|9=49|35=0|34=2|49=BANZAI|52=20121105-23:24:37|56=EXEC|10=228|",
        "8=FIX.4.1|9=103|35=D|34=3|49=BANZAI|52=20121105-23:24:42|56=EXEC|11=1352157882577|21=1|38=10000|40=1|54=1|55=MSFT|59=0|10=062|",
        "8=FIX.4.1|9=153|35=8|34=4|49=EXEC|52=20121105-23:24:42|56=BANZAI|6=12.3|11=1352157882577|14=10000|17=2|20=0|31=12.3|32=10000|37=2|38=10000|39=2|54=1|55=MSFT|150=2|151=0|10=230|",
        "8=FIX.4.1|9=108|35=D|34=5|49=BANZAI|52=20121105-23:25:12|56=EXEC|11=1352157912357|21=1|38=10000|40=2|44=10|54=1|55=SPY|59=0|10=003|",
        "8=FIX.4.1|9=104|35=F|34=6|49=BANZAI|52=20121105-23:25:16|56=EXEC|11=1352157916437|38=10000|41=1352157912357|54=1|55=SPY|10=198|",
        "8=FIX.4.1|9=82|35=3|34=8|49=EXEC|52=20121105-23:25:16|56=BANZAI|45=6|58=Unsupported message type|10=000|",
    ];

    fn session() -> String {
        SESSION.concat().replace('|', "\u{1}")
    }

    fn parser() -> FixParser {
        FixParser::new().unwrap()
    }

    #[test]
    fn test_parse_session() {
        let parser = parser();
        let decoded = parser.parse(&session()).unwrap();

        assert_eq!(decoded.len(), SESSION.len());
        assert_eq!(decoded[0].msg_type(), Some("LOGON"));
        assert_eq!(decoded[0].get("HeartBtInt"), Some("30"));
        assert_eq!(decoded[2].msg_type(), Some("HEARTBEAT"));
        assert_eq!(decoded[3].get("Side"), Some("BUY"));
        assert!(decoded[3].detail().is_none());
    }

    #[test]
    fn test_parse_session_details() {
        let parser = parser();
        let decoded = parser.parse(&session()).unwrap();

        // No OrigClOrdID, so nothing to correlate with.
        assert_eq!(
            decoded[4].detail(),
            Some(&MsgDetail::ExecutionReport {
                percent_complete: None
            })
        );
        assert_eq!(
            decoded[6].detail(),
            Some(&MsgDetail::OrderCancelRequest {
                original_price: Some("10".to_string())
            })
        );
        assert_eq!(
            decoded[7].detail(),
            Some(&MsgDetail::Reject {
                text: "Unsupported message type".to_string()
            })
        );
    }

    #[test]
    fn test_parse_records_correlations() {
        let parser = parser();
        parser.parse(&session()).unwrap();

        let store = parser.store();
        // Two orders and one cancel request carry a ClOrdID; the execution
        // report reuses the first order's id.
        assert_eq!(store.len(), 3);
        let order = store.get("1352157882577").unwrap();
        assert_eq!(order.msg_type(), Some("ORDER_SINGLE"));
    }

    #[test]
    fn test_correlation_spans_calls() {
        let parser = parser();
        parser.parse(&session()).unwrap();

        let cancel = "8=FIX.4.1|9=10|35=F|11=C2|41=1352157912357|10=000|";
        let decoded = parser.parse(cancel).unwrap();
        assert_eq!(
            decoded[0].detail(),
            Some(&MsgDetail::OrderCancelRequest {
                original_price: Some("10".to_string())
            })
        );
    }

    #[test]
    fn test_first_write_wins() {
        let parser = parser();
        let text = concat!(
            "8=FIX.4.4|9=10|35=D|11=A1|44=10|10=000|",
            "8=FIX.4.4|9=10|35=D|11=A1|44=20|10=000|",
            "8=FIX.4.4|9=10|35=F|11=C1|41=A1|10=000|",
        );
        let decoded = parser.parse(text).unwrap();
        assert_eq!(
            decoded[2].detail(),
            Some(&MsgDetail::OrderCancelRequest {
                original_price: Some("10".to_string())
            })
        );
    }

    #[test]
    fn test_execution_report_percent_complete() {
        let parser = parser();
        let text = concat!(
            "8=FIX.4.4|9=10|35=D|11=A1|38=10000|10=000|",
            "8=FIX.4.4|9=10|35=8|11=E1|41=A1|38=10000|14=2500|10=000|",
            "8=FIX.4.4|9=10|35=8|11=E2|41=A1|38=10000|14=10000|10=000|",
        );
        let decoded = parser.parse(text).unwrap();
        assert_eq!(
            decoded[1].detail(),
            Some(&MsgDetail::ExecutionReport {
                percent_complete: Some(25.0)
            })
        );
        assert_eq!(
            decoded[2].detail(),
            Some(&MsgDetail::ExecutionReport {
                percent_complete: Some(100.0)
            })
        );
    }

    #[test]
    fn test_missing_correlation_strict() {
        let parser = parser();
        let text = "8=FIX.4.4|9=10|35=F|11=C1|41=UNKNOWN|10=000|";
        assert_eq!(
            parser.parse(text),
            Err(DecodeError::MissingCorrelation {
                orig_cl_ord_id: Some("UNKNOWN".to_string())
            })
        );
    }

    #[test]
    fn test_missing_correlation_lenient() {
        let parser = FixParser::builder()
            .with_config(DecoderConfig::new().with_strict_correlation(false))
            .build()
            .unwrap();
        let text = "8=FIX.4.4|9=10|35=F|11=C1|41=UNKNOWN|10=000|";
        let decoded = parser.parse(text).unwrap();
        assert_eq!(
            decoded[0].detail(),
            Some(&MsgDetail::OrderCancelRequest {
                original_price: None
            })
        );
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        let parser = parser();
        let decoded = parser
            .parse("8=FIX.4.4|9=10|35=0|9999=x|10=000|")
            .unwrap();
        assert!(decoded[0].iter().all(|(_, value)| value != "x"));
        assert_eq!(decoded[0].get("CheckSum"), Some("000"));
    }

    #[test]
    fn test_per_batch_uses_first_delimiter() {
        let parser = parser();
        let text = "8=FIX.4.4|9=5|35=0|10=000|8=FIX.4.4;9=5;35=0;10=000;";
        let decoded = parser.parse(text).unwrap();
        assert_eq!(decoded[0].msg_type(), Some("HEARTBEAT"));
        assert_eq!(decoded[1].msg_type(), None);
    }

    #[test]
    fn test_per_message_delimiter() {
        let parser = FixParser::builder()
            .with_config(DecoderConfig::new().with_delimiter_mode(DelimiterMode::PerMessage))
            .build()
            .unwrap();
        let text = "8=FIX.4.4|9=5|35=0|10=000|8=FIX.4.4;9=5;35=0;10=000;";
        let decoded = parser.parse(text).unwrap();
        assert_eq!(decoded[0].msg_type(), Some("HEARTBEAT"));
        assert_eq!(decoded[1].msg_type(), Some("HEARTBEAT"));
    }

    #[test]
    fn test_batch_delimiter_follows_mode() {
        let text = "8=FIX.4.4|9=5|35=0|10=000|8=FIX.4.4;9=5;35=0;10=000;";

        let parser = parser();
        let messages = parser.extract_messages(text).unwrap();
        assert_eq!(parser.batch_delimiter(&messages).unwrap(), Some("|"));

        let parser = FixParser::builder()
            .with_config(DecoderConfig::new().with_delimiter_mode(DelimiterMode::PerMessage))
            .build()
            .unwrap();
        assert_eq!(parser.batch_delimiter(&messages).unwrap(), None);

        let parser = FixParser::builder()
            .with_config(DecoderConfig::new().with_delimiter(";"))
            .build()
            .unwrap();
        assert_eq!(parser.batch_delimiter(&messages).unwrap(), Some(";"));
    }

    #[test]
    fn test_batch_delimiter_tolerates_malformed_later_messages() {
        // Only the first header is inspected in PerBatch mode
        let parser = parser();
        let text = "8=FIX.4.4|9=5|35=0|10=000|8=FIX.4.4|35=0|10=000|";
        let messages = parser.extract_messages(text).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(parser.guess_delimiter(&messages[1]).is_err());
        assert_eq!(parser.batch_delimiter(&messages).unwrap(), Some("|"));
        assert_eq!(parser.parse(text).unwrap().len(), 2);
    }

    #[test]
    fn test_split_then_decorate() {
        let parser = parser();
        let messages = parser
            .extract_messages("8=FIX.4.4|9=5|35=0|9999=x|10=000|")
            .unwrap();
        let fields = parser.split_key_vals(&messages[0], "|");

        assert_eq!(parser.unresolved_tags(&fields), vec!["9999"]);
        let decoded = parser.decorate(&fields).unwrap();
        assert_eq!(decoded.msg_type(), Some("HEARTBEAT"));
    }

    #[test]
    fn test_configured_delimiter() {
        let parser = FixParser::builder()
            .with_config(DecoderConfig::new().with_delimiter("^"))
            .build()
            .unwrap();
        let decoded = parser.parse("8=FIX.4.4^9=5^35=0^10=000^").unwrap();
        assert_eq!(decoded[0].msg_type(), Some("HEARTBEAT"));
    }

    #[test]
    fn test_to_json_explicit_delimiter() {
        let parser = parser();
        let text = "8=FIX.4.4|9=5|35=0|10=000|";
        let messages = parser.extract_messages(text).unwrap();

        let decoded = parser.to_json(&messages[0], Some("|")).unwrap();
        assert_eq!(decoded.get("BeginString"), Some("FIX.4.4"));

        let decoded = parser.to_json(&messages[0], None).unwrap();
        assert_eq!(decoded.get("BodyLength"), Some("5"));
    }

    #[test]
    fn test_to_json_serializes() {
        let parser = parser();
        let decoded = parser.parse(&session()).unwrap();
        let value = serde_json::to_value(&decoded[7]).unwrap();
        assert_eq!(value["MsgType"], "REJECT");
        assert_eq!(value["MsgDetail"]["text"], "Unsupported message type");

        let value = serde_json::to_value(&decoded[0]).unwrap();
        assert!(value["MsgDetail"].is_null());
    }

    #[test]
    fn test_input_errors() {
        let parser = parser();
        assert_eq!(parser.parse(""), Err(DecodeError::EmptyInput));
        assert_eq!(
            parser.parse("nothing to see here"),
            Err(DecodeError::NoMessagesFound)
        );

        let parser = FixParser::builder()
            .with_config(DecoderConfig::new().with_max_input_size(10))
            .build()
            .unwrap();
        assert_eq!(
            parser.parse("8=FIX.4.4|9=5|35=0|10=000|"),
            Err(DecodeError::InputTooLarge {
                size: 26,
                max_size: 10
            })
        );
    }

    #[test]
    fn test_malformed_header() {
        let parser = parser();
        assert_eq!(
            parser.parse("8=FIX.4.4|35=0|10=000|"),
            Err(DecodeError::MalformedHeader { tag: 9 })
        );
    }

    #[test]
    fn test_reset_correlations() {
        let parser = parser();
        parser.parse("8=FIX.4.4|9=10|35=D|11=A1|44=10|10=000|").unwrap();
        assert_eq!(parser.store().len(), 1);

        parser.reset_correlations();
        assert!(parser.store().is_empty());
        assert!(
            parser
                .parse("8=FIX.4.4|9=10|35=F|11=C1|41=A1|10=000|")
                .is_err()
        );
    }

    #[test]
    fn test_builder_with_custom_parts() {
        let dictionary = TagDictionary::from_json_str(
            r#"{"version":"TEST","fields":[{"tag":35,"name":"MsgType","values":{"0":"HEARTBEAT"}}]}"#,
        )
        .unwrap();
        let store = Arc::new(MemoryStore::with_capacity_limit(1));

        let parser = FixParser::builder()
            .with_dictionary(dictionary)
            .with_shared_store(Arc::clone(&store))
            .build()
            .unwrap();
        assert_eq!(parser.dictionary().version(), "TEST");

        let decoded = parser.parse("8=FIX.4.4|9=5|35=0|10=000|").unwrap();
        assert_eq!(decoded[0].len(), 1);
        assert_eq!(decoded[0].msg_type(), Some("HEARTBEAT"));
    }

    #[test]
    fn test_builder_missing_dictionary_file() {
        let result = FixParser::builder().with_dictionary_path("/nonexistent/fix.json");
        assert!(result.is_err());
    }
}
