//! Hash resource addressing: `/a/#/frag` ↔ `/a#frag`

use super::{TranslationError, TranslationLink, TranslationResult};

const HASH_PATH: &str = "/#/";

#[derive(Debug, Clone, Copy, Default)]
pub struct HashLink;

impl TranslationLink for HashLink {
    fn apply(&self, value: &str) -> TranslationResult<String> {
        let out_of_domain = || TranslationError::OutOfDomain(value.to_string());

        let Some(pos) = value.find(HASH_PATH) else {
            // a raw '#' would read back as a hash resource
            if value.contains('#') {
                return Err(out_of_domain());
            }
            return Ok(value.to_string());
        };

        let (owner, fragment) = (&value[..pos], &value[pos + HASH_PATH.len()..]);
        if owner.contains('#') || fragment.is_empty() || fragment.contains('#') {
            return Err(out_of_domain());
        }

        let owner = if owner.is_empty() { "/" } else { owner };
        Ok(format!("{}#{}", owner, fragment))
    }

    fn reverse(&self, value: &str) -> TranslationResult<String> {
        let Some((owner, fragment)) = value.split_once('#') else {
            return Ok(value.to_string());
        };
        if fragment.is_empty() || fragment.contains('#') {
            return Err(TranslationError::OutOfDomain(value.to_string()));
        }

        if owner == "/" || owner.is_empty() {
            Ok(format!("{}{}", HASH_PATH, fragment))
        } else {
            Ok(format!("{}{}{}", owner.trim_end_matches('/'), HASH_PATH, fragment))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_paths() {
        assert_eq!(HashLink.apply("/a/#/frag").unwrap(), "/a#frag");
        assert_eq!(HashLink.reverse("/a#frag").unwrap(), "/a/#/frag");
        assert_eq!(HashLink.apply("/#/top").unwrap(), "/#top");
        assert_eq!(HashLink.reverse("/#top").unwrap(), "/#/top");
    }

    #[test]
    fn test_plain_paths_unchanged() {
        assert_eq!(HashLink.apply("/a/b").unwrap(), "/a/b");
        assert_eq!(HashLink.reverse("/a/b").unwrap(), "/a/b");
    }

    #[test]
    fn test_raw_hash_out_of_domain() {
        assert!(!HashLink.in_domain("/a#b"));
        assert!(!HashLink.in_domain("/a/#/b#c"));
        assert!(HashLink.reverse("/a#b#c").is_err());
    }
}
