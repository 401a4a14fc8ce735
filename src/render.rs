//! Terminal presentation: renders the form, inline notices and the Markdown
//! report as ANSI-styled text. No business logic lives here.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::form::FormData;
use crate::session::SessionView;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const ITALIC: &str = "\x1b[3m";
const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Renders the results panel: loading line while busy, error panel on
/// failure, the Markdown report otherwise, and a placeholder before any
/// analysis has run.
pub fn report_panel(view: &SessionView) -> String {
    if view.analyze_busy {
        return format!("{DIM}Generating Analysis...{RESET}\n");
    }
    if let Some(message) = &view.analysis_error {
        return format!("{RED}{BOLD}An Error Occurred{RESET}\n{RED}{message}{RESET}\n");
    }
    match &view.report {
        Some(report) => markdown_to_ansi(report),
        None => format!(
            "{BOLD}Analysis Results{RESET}\n{DIM}Fill out the form to generate your optimized meta tags.{RESET}\n"
        ),
    }
}

/// One line per form field, empty values shown dimmed.
pub fn form_summary(form: &FormData) -> String {
    let rows = [
        ("URL", &form.url),
        ("Current Meta Title", &form.current_title),
        ("Current Meta Description", &form.current_description),
        ("Target Keywords", &form.keywords),
        ("Industry/Business Type", &form.industry),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        if value.is_empty() {
            out.push_str(&format!("{BOLD}{label}:{RESET} {DIM}(empty){RESET}\n"));
        } else {
            out.push_str(&format!("{BOLD}{label}:{RESET} {value}\n"));
        }
    }
    out
}

/// Inline notice shown under the URL field.
pub fn fetch_notice_line(message: &str) -> String {
    format!("{YELLOW}{message}{RESET}\n")
}

/// Converts Markdown to ANSI-styled terminal text.
///
/// Intentionally small: headings, emphasis, inline code, code blocks, lists
/// and rules cover everything the report template asks the model for. Any
/// other construct falls through as plain text.
pub fn markdown_to_ansi(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::new();
    let mut list_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                out.push('\n');
                out.push_str(BOLD);
                if matches!(level, HeadingLevel::H1 | HeadingLevel::H2 | HeadingLevel::H3) {
                    out.push_str(CYAN);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                out.push_str(RESET);
                out.push('\n');
            }
            Event::Start(Tag::Strong) => out.push_str(BOLD),
            Event::End(TagEnd::Strong) => out.push_str(RESET),
            Event::Start(Tag::Emphasis) => out.push_str(ITALIC),
            Event::End(TagEnd::Emphasis) => out.push_str(RESET),
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                out.push_str(&"  ".repeat(list_depth));
                out.push_str("- ");
            }
            Event::End(TagEnd::Item) => out.push('\n'),
            Event::End(TagEnd::Paragraph) => {
                out.push('\n');
                if list_depth == 0 {
                    out.push('\n');
                }
            }
            Event::Start(Tag::CodeBlock(_)) => out.push_str(DIM),
            Event::End(TagEnd::CodeBlock) => {
                out.push_str(RESET);
                out.push('\n');
            }
            Event::Code(code) => {
                out.push_str(DIM);
                out.push_str(&code);
                out.push_str(RESET);
            }
            Event::Text(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str("----------------------------------------\n"),
            _ => {}
        }
    }

    let trimmed = out.trim_start_matches('\n');
    format!("{}\n", trimmed.trim_end_matches('\n'))
}
