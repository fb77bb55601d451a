use std::fmt;

use crossterm::style::Stylize;
use dictionary::Word;
use unicode_width::UnicodeWidthStr;

const MAX_CONTENT_WIDTH: usize = 80;
const MIN_CONTENT_WIDTH: usize = 10;

const VERTICAL: char = '│';
const HORIZONTAL: &str = "─";

const DEFINITION_PREFIX: &str = "  ";
const EXAMPLE_PREFIX: &str = "    ";
const THESAURUS_PREFIX: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Border,
    Plain,
    Heading,
    Label,
    Example,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub content_width: usize,
    pub lines: Vec<RenderedLine>,
}

/// Interior width of the box for a terminal `available_width` columns wide.
pub fn content_width(available_width: usize) -> usize {
    available_width
        .saturating_sub(4)
        .min(MAX_CONTENT_WIDTH)
        .max(MIN_CONTENT_WIDTH)
}

pub fn render(entry: &Word, available_width: usize) -> RenderedBlock {
    let mut block = BlockBuilder::new(content_width(available_width));

    block.border('┌', '┐');
    let header = if entry.phonetic.is_empty() {
        entry.word.clone()
    } else {
        format!("{} {}", entry.word, entry.phonetic)
    };
    block.wrapped(&header, "", LineStyle::Heading);
    block.border('├', '┤');

    for (index, meaning) in entry.meanings.iter().enumerate() {
        if index != 0 {
            block.line("", LineStyle::Plain);
        }
        block.wrapped(&meaning.part_of_speech.to_string(), "", LineStyle::Label);
        for (number, definition) in meaning.definitions.iter().enumerate() {
            let text = format!("{}. {}", number + 1, definition.definition);
            block.wrapped(&text, DEFINITION_PREFIX, LineStyle::Plain);
            if let Some(example) = &definition.example {
                let text = format!("\"{example}\"");
                block.wrapped(&text, EXAMPLE_PREFIX, LineStyle::Example);
            }
        }
    }

    let synonyms = entry.all_synonyms().collect::<Vec<&str>>();
    if !synonyms.is_empty() {
        block.border('├', '┤');
        block.wrapped("Thesaurus", "", LineStyle::Label);
        block.wrapped(&synonyms.join(", "), THESAURUS_PREFIX, LineStyle::Plain);
    }

    block.border('└', '┘');
    block.finish()
}

/// Greedy word wrap at whitespace. No line (prefix included) gets wider than
/// `content_width - 2` columns, except a lone word that is wider on its own:
/// such a word is never split.
pub fn wrap(text: &str, prefix: &str, content_width: usize) -> Vec<String> {
    let limit = content_width.saturating_sub(2);
    let mut lines = Vec::new();
    let mut line = prefix.to_owned();
    let mut line_is_empty = true;
    for word in text.split_whitespace() {
        if !line_is_empty && line.width() + 1 + word.width() > limit {
            lines.push(std::mem::replace(&mut line, prefix.to_owned()));
            line_is_empty = true;
        }
        if !line_is_empty {
            line.push(' ');
        }
        line.push_str(word);
        line_is_empty = false;
    }
    lines.push(line);
    lines
}

struct BlockBuilder {
    content_width: usize,
    lines: Vec<RenderedLine>,
}

impl BlockBuilder {
    fn new(content_width: usize) -> Self {
        Self {
            content_width,
            lines: Vec::new(),
        }
    }

    fn border(&mut self, left: char, right: char) {
        let text = format!("{left}{}{right}", HORIZONTAL.repeat(self.content_width));
        self.lines.push(RenderedLine {
            text,
            style: LineStyle::Border,
        });
    }

    fn line(&mut self, content: &str, style: LineStyle) {
        let padding = (self.content_width - 1).saturating_sub(content.width());
        let text = format!("{VERTICAL} {content}{}{VERTICAL}", " ".repeat(padding));
        self.lines.push(RenderedLine { text, style });
    }

    fn wrapped(&mut self, text: &str, prefix: &str, style: LineStyle) {
        for line in wrap(text, prefix, self.content_width) {
            self.line(&line, style);
        }
    }

    fn finish(self) -> RenderedBlock {
        RenderedBlock {
            content_width: self.content_width,
            lines: self.lines,
        }
    }
}

impl RenderedLine {
    /// The line with terminal styling applied to everything between the borders.
    pub fn styled(&self) -> String {
        let inner = self
            .text
            .strip_prefix(VERTICAL)
            .and_then(|rest| rest.strip_suffix(VERTICAL));
        let Some(inner) = inner else {
            return self.text.clone();
        };
        let inner = match self.style {
            LineStyle::Border | LineStyle::Plain => return self.text.clone(),
            LineStyle::Heading => inner.bold(),
            LineStyle::Label => inner.cyan(),
            LineStyle::Example => inner.italic().dark_grey(),
        };
        format!("{VERTICAL}{inner}{VERTICAL}")
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}
