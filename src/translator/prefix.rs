//! Base URI prefixing

use super::{TranslationError, TranslationLink, TranslationResult};
use oxiri::Iri;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in path segments; `/`, `#` and `:` stay literal
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Prepends the base URI to a percent-encoded path
#[derive(Debug, Clone)]
pub struct PrefixLink {
    /// Base URI without its trailing slash
    base: String,
}

impl PrefixLink {
    pub fn new(base_uri: &str) -> TranslationResult<Self> {
        let invalid = |reason: String| TranslationError::InvalidBaseUri {
            uri: base_uri.to_string(),
            reason,
        };

        let iri = Iri::parse(base_uri).map_err(|e| invalid(e.to_string()))?;
        if iri.query().is_some() || iri.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }

        Ok(Self {
            base: base_uri.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl TranslationLink for PrefixLink {
    fn apply(&self, value: &str) -> TranslationResult<String> {
        if !value.starts_with('/') {
            return Err(TranslationError::OutOfDomain(value.to_string()));
        }
        Ok(format!("{}{}", self.base, utf8_percent_encode(value, PATH_ESCAPES)))
    }

    fn reverse(&self, value: &str) -> TranslationResult<String> {
        let out_of_domain = || TranslationError::OutOfDomain(value.to_string());

        let rest = value.strip_prefix(self.base.as_str()).ok_or_else(out_of_domain)?;
        if rest.is_empty() {
            return Ok("/".to_string());
        }
        if !rest.starts_with('/') && !rest.starts_with('#') {
            return Err(out_of_domain());
        }

        let decoded = percent_decode_str(rest)
            .decode_utf8()
            .map_err(|_| out_of_domain())?;
        // "#frag" directly on the base is a hash resource of the root
        if decoded.starts_with('#') {
            Ok(format!("/{}", decoded))
        } else {
            Ok(decoded.into_owned())
        }
    }
}
