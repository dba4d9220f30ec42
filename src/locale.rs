//! System locale hook.
//!
//! Smart Poster title selection is locale driven, but locale lookup
//! belongs to the host environment. The codec only sees it through the
//! [`SystemLocale`] trait; [`EnvLocale`] is the default implementation for
//! hosted targets.

/// Source of the ambient locale used when picking a Smart Poster title.
///
/// The hook is invoked at most once per Smart Poster decode and its result
/// is never cached across calls, so implementations may return different
/// values over time.
pub trait SystemLocale {
    /// Returns a BCP-47-like tag such as `en-US`, or `None` when no locale
    /// is configured.
    fn system_locale(&self) -> Option<String>;
}

impl<F> SystemLocale for F
where
    F: Fn() -> Option<String>,
{
    fn system_locale(&self) -> Option<String> {
        self()
    }
}

/// Reads the locale from the usual POSIX environment variables, in the
/// order `LC_ALL`, `LC_MESSAGES`, `LANG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvLocale;

impl SystemLocale for EnvLocale {
    fn system_locale(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|var| normalize(&std::env::var(var).ok()?))
    }
}

/// `en_US.UTF-8` and friends to `en-US`. `C` and `POSIX` mean "no locale",
/// as does an empty value.
fn normalize(value: &str) -> Option<String> {
    let value = value.split(['.', '@']).next().unwrap_or_default();
    if value.is_empty() || value == "C" || value == "POSIX" {
        return None;
    }
    Some(value.replace('_', "-"))
}
