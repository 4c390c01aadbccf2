//! Rewriting of the statements between an arrow function's body delimiters.

use crate::config::ConvertOptions;
use crate::error::ConvertError;
use regex_lite::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Syntactic form of an arrow function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyForm {
    /// Brace-delimited statements with an explicit `return`.
    Block,
    /// A single expression returned implicitly.
    Expression,
}

impl BodyForm {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Expression => "expression",
        }
    }

    /// The form a conversion produces.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Block => Self::Expression,
            Self::Expression => Self::Block,
        }
    }
}

/// `return` keyword preceded by start-of-line or a non-word character,
/// followed by a space.
fn return_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\W)return ").expect("static pattern"))
}

fn has_return(line: &str) -> bool {
    return_re().is_match(line)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Decide which form a body is in: any `return` statement means block form.
#[must_use]
pub fn detect_form(body: &str) -> BodyForm {
    if body.lines().any(has_return) {
        BodyForm::Block
    } else {
        BodyForm::Expression
    }
}

/// Rewrite the interior lines of a multi-line body into the opposite form.
///
/// `body` holds whole lines only; the delimiters live on their own lines
/// outside it. Blank lines at either end are dropped, blank lines between
/// statements are kept as empty separators.
pub fn convert_body(body: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let lines = significant_lines(body);
    if lines.is_empty() {
        return Err(ConvertError::EmptyBody);
    }

    let converted = match detect_form(body) {
        BodyForm::Block => unwrap_return(&lines, options),
        BodyForm::Expression => wrap_return(&lines, options),
    };

    Ok(converted.join("\n"))
}

fn significant_lines(body: &str) -> Vec<&str> {
    let lines: Vec<&str> = body.lines().collect();
    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return Vec::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    lines[first..=last].to_vec()
}

/// Block → expression.
fn unwrap_return(lines: &[&str], options: &ConvertOptions) -> Vec<String> {
    let return_idx = lines.iter().position(|l| has_return(l)).unwrap_or(0);

    let mut out: Vec<String> = lines[..return_idx]
        .iter()
        .map(|line| comment_out(line, &options.comment_marker))
        .collect();

    let return_lines = &lines[return_idx..];
    if return_lines.len() > 1 {
        // `return (` opener and `);` closer are dropped.
        out.extend(
            return_lines[1..return_lines.len() - 1]
                .iter()
                .map(|line| dedent(line, options.indent_width).to_string()),
        );
    } else {
        out.push(strip_return(return_lines[0]));
    }

    out
}

/// Expression → block.
fn wrap_return(lines: &[&str], options: &ConvertOptions) -> Vec<String> {
    if lines.len() > 1 {
        let outer = leading_whitespace(lines[0]);
        let indent = options.indent();

        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push(format!("{outer}return ("));
        out.extend(lines.iter().map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        }));
        out.push(format!("{outer});"));
        out
    } else {
        let line = lines[0];
        let ws = leading_whitespace(line);
        let expr = line[ws.len()..].trim_end().trim_end_matches(';').trim_end();
        vec![format!("{ws}return {expr};")]
    }
}

fn comment_out(line: &str, marker: &str) -> String {
    if is_blank(line) {
        String::new()
    } else {
        format!("{marker} {}", line.trim_start())
    }
}

/// Remove up to `width` leading whitespace characters.
fn dedent(line: &str, width: usize) -> &str {
    let cut = line
        .char_indices()
        .take(width)
        .take_while(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    &line[cut..]
}

/// `  return x + 1;` → `  x + 1`
fn strip_return(line: &str) -> String {
    let unwrapped = return_re().replacen(line, 1, " ");
    match unwrapped.rfind(';') {
        Some(idx) => unwrapped[..idx].to_string(),
        None => unwrapped.into_owned(),
    }
}

/// Rewrite the text between delimiters that share one line.
///
/// Block bodies become a bare expression; statements ahead of the `return`
/// survive as a block comment. Expression bodies become `return <expr>;`
/// padded with single spaces.
pub fn convert_inline(inner: &str) -> Result<String, ConvertError> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Err(ConvertError::EmptyBody);
    }

    match return_re().find(inner) {
        Some(m) => {
            let before = inner[..m.start()].trim();
            let after = &inner[m.end()..];
            let expr = match after.rfind(';') {
                Some(idx) => &after[..idx],
                None => after,
            }
            .trim();

            if before.is_empty() {
                Ok(expr.to_string())
            } else {
                Ok(format!("/* {before} */ {expr}"))
            }
        }
        None => {
            let expr = inner.trim_end_matches(';').trim_end();
            Ok(format!(" return {expr}; "))
        }
    }
}
