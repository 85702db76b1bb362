// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color output resolution and the report color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Color output mode from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Resolve the effective color choice. `--no-color` wins over everything.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Color specs used by the text report.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Passing notebooks: green bold.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Failing, timed-out, or errored notebooks: red bold.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Skipped notebooks: yellow.
    pub fn skip() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Notebook names: plain, no emphasis.
    pub fn name() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
