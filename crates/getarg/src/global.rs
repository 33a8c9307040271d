//! Process-wide store: parsed once at startup, then frozen.

use std::ffi::OsString;
use std::sync::OnceLock;

use crate::store::ArgStore;

static GLOBAL: OnceLock<ArgStore> = OnceLock::new();

/// Parse the process arguments (without the program name) into the global
/// store and return it.
///
/// Arguments that are not valid UTF-8 are converted lossily; invalid
/// sequences become `U+FFFD`. Only the first call parses; later calls return
/// the frozen store.
pub fn init() -> &'static ArgStore {
    init_from(lossy_tokens(std::env::args_os().skip(1)))
}

/// Like [`init`], but from explicit tokens.
pub fn init_from<I>(tokens: I) -> &'static ArgStore
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    install(&GLOBAL, tokens).0
}

/// The global store, if [`init`] or [`init_from`] has run.
pub fn get() -> Option<&'static ArgStore> {
    GLOBAL.get()
}

fn lossy_tokens<I>(args: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
}

/// Initialise `cell` from `tokens` unless it is already set.
///
/// Returns the frozen store and whether this call built it.
fn install<I>(cell: &OnceLock<ArgStore>, tokens: I) -> (&ArgStore, bool)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut built = false;
    let store = cell.get_or_init(|| {
        built = true;
        ArgStore::parse(tokens)
    });
    if !built {
        tracing::debug!("argument store already initialized; tokens ignored");
    }
    (store, built)
}
