//! Styled terminal output for `evergreen-ctl`.
//!
//! `anstream` strips the ANSI codes when the stream is not a terminal, so the
//! same calls work when output is piped into a file or another tool.
//!
//! The generated document never goes through these helpers; it is written raw.

use std::fmt::Display;
use std::io::Write;

use anstyle::{AnsiColor, Color, Effects, Style};

const PASS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const FAIL: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
const WARN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const HEADING: Style = Style::new().effects(Effects::BOLD.insert(Effects::UNDERLINE));
const KEY: Style = Style::new().effects(Effects::BOLD);
const MUTED: Style = Style::new().effects(Effects::DIMMED);

/// Help output palette for clap.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let accent = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
    clap::builder::Styles::styled()
        .header(accent.effects(Effects::BOLD))
        .usage(accent.effects(Effects::BOLD))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(FAIL.effects(Effects::BOLD))
        .valid(PASS)
        .invalid(WARN)
}

/// Green checkmark line on stdout.
pub(crate) fn success(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{PASS}✓ {msg}{PASS:#}").ok();
}

/// Red cross line on stderr.
pub(crate) fn error(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{FAIL}✗ {msg}{FAIL:#}").ok();
}

/// Yellow exclamation line on stdout.
pub(crate) fn warning(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{WARN}! {msg}{WARN:#}").ok();
}

pub(crate) fn header(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADING}{msg}{HEADING:#}").ok();
}

/// "  Key: value" with the key bolded.
pub(crate) fn label(name: impl Display, value: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {KEY}{name}:{KEY:#} {value}").ok();
}

/// Indented check result: checkmark when `ok`, cross otherwise.
pub(crate) fn check(ok: bool, msg: impl Display) {
    let mut out = anstream::stdout().lock();
    if ok {
        writeln!(out, "  {PASS}✓{PASS:#} {msg}").ok();
    } else {
        writeln!(out, "  {FAIL}✗{FAIL:#} {msg}").ok();
    }
}

pub(crate) fn hint(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{MUTED}{msg}{MUTED:#}").ok();
}

pub(crate) fn plain(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{msg}").ok();
}

pub(crate) fn blank() {
    let mut out = anstream::stdout().lock();
    writeln!(out).ok();
}
