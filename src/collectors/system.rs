//! System information collection (OS, kernel, user, session)

use crate::config::SourcePaths;
use crate::data::{OsInfo, UserInfo};
use crate::error::{PuppyfetchError, Result};
use crate::utils::{file::*, parsing::truncate_chars};
use log::debug;
use std::ffi::CStr;
use std::io;
use std::path::Path;

/// Lines of os-release examined before giving up on `PRETTY_NAME`.
pub const OS_RELEASE_SCAN_LIMIT: usize = 20;
/// Characters kept from the pretty name.
pub const PRETTY_NAME_MAX_CHARS: usize = 31;
/// Shown when `$USER` is not set.
pub const UNKNOWN_USER: &str = "<could not be determined>";

const FALLBACK_HOST_NAME_MAX: usize = 64;

/// Collect OS-related information.
///
/// Fails when os-release is present but malformed, or when `uname(2)` fails.
pub fn collect_os_info(paths: &SourcePaths) -> Result<OsInfo> {
    Ok(OsInfo {
        pretty_name: read_os_name(&paths.os_release)?,
        kernel_release: kernel_release()?,
    })
}

/// Collect user and environment information
pub fn collect_user_info(paths: &SourcePaths) -> UserInfo {
    UserInfo {
        username: get_username(),
        hostname: get_hostname(&paths.hostname),
        session_type: std::env::var("XDG_SESSION_TYPE").ok(),
    }
}

/// Pretty name from an os-release file. A missing file is an empty name;
/// a file without a usable `PRETTY_NAME` is fatal.
pub fn read_os_name(path: &Path) -> Result<String> {
    match read_optional(path) {
        Some(text) => parse_pretty_name(&text, path),
        None => Ok(String::new()),
    }
}

/// Find `PRETTY_NAME` within the first [`OS_RELEASE_SCAN_LIMIT`] lines.
pub fn parse_pretty_name(os_release: &str, path: &Path) -> Result<String> {
    let value = os_release
        .lines()
        .take(OS_RELEASE_SCAN_LIMIT)
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "PRETTY_NAME")
        .map(|(_, value)| unquote(value))
        .ok_or_else(|| PuppyfetchError::OsReleaseExhausted {
            path: path.to_path_buf(),
            limit: OS_RELEASE_SCAN_LIMIT,
        })?;

    if value.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return Err(PuppyfetchError::OsReleaseIntegrity(value.escape_debug().to_string()));
    }

    Ok(truncate_chars(value, PRETTY_NAME_MAX_CHARS))
}

/// Strip shell-style quoting from an os-release value. An unterminated quote
/// runs to the end of the line.
fn unquote(raw: &str) -> &str {
    let raw = raw.trim();
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            return rest.split(quote).next().unwrap_or(rest);
        }
    }
    raw
}

fn get_username() -> String {
    std::env::var("USER").unwrap_or_else(|_| UNKNOWN_USER.to_string())
}

/// Hostname from `gethostname(2)`, falling back to procfs, truncated to the
/// platform limit.
fn get_hostname(fallback: &Path) -> String {
    let max = host_name_max();
    hostname_from(gethostname(max), fallback, max)
}

/// Pick the hostname from a `gethostname(2)` result, reading `fallback` when
/// the call failed. Anything longer than `max` characters is cut.
pub fn hostname_from(raw: io::Result<String>, fallback: &Path, max: usize) -> String {
    let name = raw.or_else(|err| {
        debug!("gethostname failed ({}), reading {}", err, fallback.display());
        read_first_line(fallback)
    });

    match name {
        Ok(name) => truncate_chars(&name, max),
        Err(err) => {
            debug!("hostname unavailable: {}", err);
            String::new()
        }
    }
}

fn host_name_max() -> usize {
    let max = unsafe { libc::sysconf(libc::_SC_HOST_NAME_MAX) };
    if max > 0 {
        max as usize
    } else {
        FALLBACK_HOST_NAME_MAX
    }
}

fn gethostname(max: usize) -> io::Result<String> {
    let mut buf = vec![0u8; max + 1];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

/// Kernel release from `uname(2)`.
pub fn kernel_release() -> Result<String> {
    let mut name: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut name) } == -1 {
        let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
        return Err(PuppyfetchError::Uname(errno));
    }
    let release = unsafe { CStr::from_ptr(name.release.as_ptr()) };
    Ok(release.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<String> {
        parse_pretty_name(text, Path::new("/etc/os-release"))
    }

    #[test]
    fn finds_quoted_pretty_name() {
        assert_eq!(
            parse("ID=ubuntu\nPRETTY_NAME=\"Ubuntu 22.04 LTS\"\n").unwrap(),
            "Ubuntu 22.04 LTS"
        );
    }

    #[test]
    fn accepts_bare_and_single_quoted_values() {
        assert_eq!(parse("PRETTY_NAME=Alpine\n").unwrap(), "Alpine");
        assert_eq!(parse("PRETTY_NAME='Void Linux'\n").unwrap(), "Void Linux");
    }

    #[test]
    fn key_must_match_exactly() {
        let text = "PRETTY_NAME_EXTRA=\"nope\"\nPRETTY_NAME=\"Arch Linux\"\n";
        assert_eq!(parse(text).unwrap(), "Arch Linux");
    }

    #[test]
    fn long_names_are_truncated() {
        let name = parse("PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm) with extras\"\n").unwrap();
        assert_eq!(name.chars().count(), PRETTY_NAME_MAX_CHARS);
        assert_eq!(name, "Debian GNU/Linux 12 (bookworm) ");
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = parse("NAME=\"Fedora\"\nID=fedora\n").unwrap_err();
        assert!(matches!(err, PuppyfetchError::OsReleaseExhausted { limit: 20, .. }));
        assert_eq!(err.exit_code(), 25);
    }

    #[test]
    fn key_past_the_scan_limit_is_fatal() {
        let mut text = "X=1\n".repeat(OS_RELEASE_SCAN_LIMIT);
        text.push_str("PRETTY_NAME=\"Late\"\n");
        assert!(parse(&text).is_err());

        let mut text = "X=1\n".repeat(OS_RELEASE_SCAN_LIMIT - 1);
        text.push_str("PRETTY_NAME=\"Just In Time\"\n");
        assert_eq!(parse(&text).unwrap(), "Just In Time");
    }

    #[test]
    fn control_characters_fail_integrity_check() {
        let err = parse("PRETTY_NAME=\"evil\x1b[2J\"\n").unwrap_err();
        assert!(matches!(err, PuppyfetchError::OsReleaseIntegrity(_)));
        assert_eq!(err.exit_code(), 25);
    }

    #[test]
    fn tabs_in_pretty_name_are_kept() {
        assert_eq!(parse("PRETTY_NAME=\"Gentoo\tLinux\"\n").unwrap(), "Gentoo\tLinux");
    }

    #[test]
    fn long_hostname_is_cut_to_limit() {
        let dir = tempfile::tempdir().unwrap();
        let name = hostname_from(Ok("a".repeat(80)), &dir.path().join("hostname"), 64);
        assert_eq!(name, "a".repeat(64));
        assert_eq!(hostname_from(Ok("box".into()), &dir.path().join("hostname"), 64), "box");
    }

    #[test]
    fn failed_gethostname_reads_fallback_file() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("hostname");
        std::fs::write(&fallback, "from-procfs-node\n").unwrap();

        let failed = || -> io::Result<String> { Err(io::Error::from_raw_os_error(libc::ENAMETOOLONG)) };
        assert_eq!(hostname_from(failed(), &fallback, 64), "from-procfs-node");
        assert_eq!(hostname_from(failed(), &fallback, 4), "from");

        std::fs::remove_file(&fallback).unwrap();
        assert_eq!(hostname_from(failed(), &fallback, 64), "");
    }

    #[test]
    fn missing_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_os_name(&dir.path().join("os-release")).unwrap(), "");
    }

    #[test]
    fn kernel_release_is_reported() {
        assert!(!kernel_release().unwrap().is_empty());
    }
}
