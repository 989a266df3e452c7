//! Command-line length ceilings per platform
//!
//! References:
//! - https://serverfault.com/questions/69430/what-is-the-maximum-length-of-a-command-line-in-mac-os-x
//! - https://support.microsoft.com/en-us/help/830473/command-prompt-cmd-exe-command-line-string-limitation
//! - https://unix.stackexchange.com/a/120652

/// `ARG_MAX` on macOS
pub const DARWIN_CEILING: usize = 262_144;
/// cmd.exe command-line string limit
pub const WIN32_CEILING: usize = 8_191;
/// Linux, BSD and anything else
pub const DEFAULT_CEILING: usize = 131_072;

/// Identifier of the running platform (`darwin`, `win32`, `linux`, `freebsd`, ...)
pub fn current() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// Maximum length of a single command line on `platform`.
///
/// Unknown identifiers fall through to [`DEFAULT_CEILING`].
pub fn ceiling(platform: &str) -> usize {
    match platform {
        "darwin" => DARWIN_CEILING,
        "win32" => WIN32_CEILING,
        _ => DEFAULT_CEILING,
    }
}

/// Ceiling for `platform` halved, leaving room for shell escaping
pub fn max_arg_length(platform: &str) -> usize {
    ceiling(platform) / 2
}
