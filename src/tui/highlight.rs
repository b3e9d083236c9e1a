//! Sample code → ratatui `Text` with syntect highlighting.
//!
//! Listings are shown verbatim: every source line becomes exactly one
//! `Line`, blank lines included, tabs expanded to four spaces (ratatui
//! renders `\t` as zero-width). Nothing is parsed beyond tokenizing for color.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::warn;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_HIGHLIGHT_THEME;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Language every built-in listing is written in.
const SAMPLE_LANGUAGE: &str = "python";

/// Highlights listings once per entry and hands out cached copies.
pub struct CodeHighlighter {
    theme: &'static Theme,
    cache: HashMap<&'static str, Text<'static>>,
}

impl CodeHighlighter {
    /// Unknown theme names fall back to the default theme.
    pub fn new(theme_name: &str) -> Self {
        let theme = match THEME_SET.themes.get(theme_name) {
            Some(theme) => theme,
            None => {
                warn!(
                    "Unknown highlight theme '{}', falling back to {}",
                    theme_name, DEFAULT_HIGHLIGHT_THEME
                );
                &THEME_SET.themes[DEFAULT_HIGHLIGHT_THEME]
            }
        };
        Self {
            theme,
            cache: HashMap::new(),
        }
    }

    /// Highlighted text for the listing stored under `key`.
    pub fn get(&mut self, key: &'static str, code: &str) -> &Text<'static> {
        let theme = self.theme;
        self.cache
            .entry(key)
            .or_insert_with(|| highlight(code, theme))
    }
}

fn highlight(code: &str, theme: &Theme) -> Text<'static> {
    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(SAMPLE_LANGUAGE) else {
        return plain(code);
    };
    let mut hl = HighlightLines::new(syntax, theme);
    let mut text = Text::default();

    for line in LinesWithEndings::from(code) {
        let Ok(ranges) = hl.highlight_line(line, &SYNTAX_SET) else {
            text.lines.push(plain_line(line));
            continue;
        };
        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(hl_style, frag)| {
                let content = frag.trim_end_matches('\n').replace('\t', "    ");
                if content.is_empty() {
                    return None;
                }
                let fg = Color::Rgb(
                    hl_style.foreground.r,
                    hl_style.foreground.g,
                    hl_style.foreground.b,
                );
                Some(Span::styled(content, Style::default().fg(fg)))
            })
            .collect();
        text.lines.push(Line::from(spans));
    }
    text
}

fn plain(code: &str) -> Text<'static> {
    Text::from(code.lines().map(plain_line).collect::<Vec<_>>())
}

fn plain_line(line: &str) -> Line<'static> {
    let content = line.trim_end_matches('\n').replace('\t', "    ");
    Line::from(Span::styled(content, Style::default().fg(Color::Green)))
}
