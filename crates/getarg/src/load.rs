//! Token loading: turns an argv-style sequence into an [`ArgStore`].

use crate::store::{ArgStore, strip_dashes};
use crate::value::{bool_str, interpret_bool};

/// Prefix that marks a negation key (`-noIPC` negates `-IPC`).
pub const NEGATION_PREFIX: &str = "no";

/// Split an option token into its key and value.
///
/// Returns `None` for tokens that do not start with `-`.
fn split_token(token: &str) -> Option<(&str, &str)> {
    if !token.starts_with('-') {
        return None;
    }
    let (raw_key, value) = token.split_once('=').unwrap_or((token, ""));
    Some((strip_dashes(raw_key), value))
}

impl ArgStore {
    /// Parse invocation tokens (program name already removed) into a store.
    ///
    /// Parsing stops at the first token that does not start with `-`; that
    /// token and everything after it are kept verbatim in [`ArgStore::rest`].
    pub fn parse<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut store = Self::new();
        store.reload(tokens);
        store
    }

    /// Discard the current contents and rebuild from `tokens`.
    pub fn reload<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.clear();

        let mut tokens = tokens.into_iter();
        for token in tokens.by_ref() {
            let token = token.as_ref();
            let Some((key, value)) = split_token(token) else {
                self.push_rest(token);
                break;
            };
            tracing::trace!(key, value, "option");
            self.insert_explicit(key, value);
        }
        for token in tokens {
            self.push_rest(token.as_ref());
        }

        self.derive_negations();

        tracing::debug!(keys = self.len(), rest = self.rest().len(), "arguments loaded");
    }

    /// Fill in `KEY` from `-noKEY` wherever `KEY` was not given explicitly.
    fn derive_negations(&mut self) {
        for key in self.keys_snapshot() {
            let Some(positive) = key.strip_prefix(NEGATION_PREFIX) else {
                continue;
            };
            if positive.is_empty() || self.has_key(positive) {
                continue;
            }
            let negated = !self.raw(&key).is_some_and(interpret_bool);
            tracing::trace!(key = positive, negated, "derived from negation");
            self.insert_derived(positive.to_string(), bool_str(negated));
        }
    }
}
