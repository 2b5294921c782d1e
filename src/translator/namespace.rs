//! Per-segment namespace prefix renaming

use super::{TranslationError, TranslationLink, TranslationResult};
use indexmap::IndexMap;

/// Renames `internal:` segment prefixes to `external:` and back
///
/// A segment that already carries an external prefix on the way out (or an
/// internal one on the way in) would collide with a renamed segment, so it is
/// rejected as out of domain.
#[derive(Debug, Clone)]
pub struct NamespaceLink {
    /// internal prefix → external prefix
    aliases: IndexMap<String, String>,
}

impl NamespaceLink {
    pub fn new<I, K, V>(aliases: I) -> TranslationResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let aliases: IndexMap<String, String> = aliases
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (internal, external) in &aliases {
            if internal.is_empty() || external.is_empty() || internal == external {
                return Err(TranslationError::InvalidAlias(format!("{} -> {}", internal, external)));
            }
            if aliases.contains_key(external) {
                return Err(TranslationError::InvalidAlias(format!(
                    "{} is used both as an internal and an external prefix",
                    external
                )));
            }
            if aliases.values().filter(|v| *v == external).count() > 1 {
                return Err(TranslationError::InvalidAlias(format!(
                    "{} is the target of several prefixes",
                    external
                )));
            }
        }

        Ok(Self { aliases })
    }

    fn rewrite<F, G>(&self, value: &str, rename: F, forbidden: G) -> TranslationResult<String>
    where
        F: Fn(&str) -> Option<String>,
        G: Fn(&str) -> bool,
    {
        let mut segments = Vec::new();
        for segment in value.split('/') {
            match segment.split_once(':') {
                Some((prefix, local)) => {
                    if forbidden(prefix) {
                        return Err(TranslationError::OutOfDomain(value.to_string()));
                    }
                    match rename(prefix) {
                        Some(renamed) => segments.push(format!("{}:{}", renamed, local)),
                        None => segments.push(segment.to_string()),
                    }
                }
                None => segments.push(segment.to_string()),
            }
        }
        Ok(segments.join("/"))
    }
}

impl TranslationLink for NamespaceLink {
    fn apply(&self, value: &str) -> TranslationResult<String> {
        self.rewrite(
            value,
            |prefix| self.aliases.get(prefix).cloned(),
            |prefix| self.aliases.values().any(|external| external == prefix),
        )
    }

    fn reverse(&self, value: &str) -> TranslationResult<String> {
        self.rewrite(
            value,
            |prefix| {
                self.aliases
                    .iter()
                    .find(|(_, external)| *external == prefix)
                    .map(|(internal, _)| internal.clone())
            },
            |prefix| self.aliases.contains_key(prefix),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> NamespaceLink {
        NamespaceLink::new([("fedora", "fcr")]).unwrap()
    }

    #[test]
    fn test_rename_segments() {
        let link = link();
        assert_eq!(link.apply("/a/fedora:metadata").unwrap(), "/a/fcr:metadata");
        assert_eq!(link.reverse("/a/fcr:metadata").unwrap(), "/a/fedora:metadata");
        assert_eq!(link.apply("/a/ex:thing").unwrap(), "/a/ex:thing");
    }

    #[test]
    fn test_colliding_segments_rejected() {
        let link = link();
        assert!(!link.in_domain("/a/fcr:metadata"));
        assert!(link.reverse("/a/fedora:metadata").is_err());
    }

    #[test]
    fn test_ambiguous_aliases_rejected() {
        assert!(NamespaceLink::new([("a", "b"), ("b", "c")]).is_err());
        assert!(NamespaceLink::new([("a", "c"), ("b", "c")]).is_err());
        assert!(NamespaceLink::new([("a", "a")]).is_err());
    }
}
