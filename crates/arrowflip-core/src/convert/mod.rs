//! Arrow function body conversion.
//!
//! Flips an arrow function between block form (`=> { return x; }`) and
//! expression form (`=> (x)`) working only on the source text:
//!
//! 1. find the arrow token followed by `{` or `(`
//! 2. balance brackets to find the matching closer
//! 3. split into prefix / body / postfix regions
//! 4. rewrite each region and join them again
//!
//! There is no tokenizer behind this. Brackets inside strings, template
//! literals and comments are counted like code.

pub mod body;
pub mod brackets;

pub use body::{convert_body, convert_inline, detect_form, BodyForm};
pub use brackets::{closing_bracket, find_matching, swap_bracket};

use crate::config::ConvertOptions;
use crate::error::ConvertError;
use regex_lite::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Arrow token, at most one whitespace character, then the body opener.
fn arrow_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"=>\s?([{(])").expect("static pattern"))
}

/// How the body delimiters sit relative to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Opener ends its line, closer starts its line.
    Multiline,
    /// Opener and closer on the same line.
    Inline,
}

/// The source fragment split around the arrow function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions<'a> {
    /// Everything up to and including the opening bracket.
    pub prefix: &'a str,
    /// Text between the delimiters (whole lines for [`Layout::Multiline`]).
    pub body: &'a str,
    /// The closing bracket and everything after it.
    pub postfix: &'a str,
    /// Byte offset of the opening bracket in the source.
    pub open_idx: usize,
    /// Byte offset of the closing bracket in the source.
    pub close_idx: usize,
    pub layout: Layout,
}

/// Result of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The rewritten fragment (the input itself when nothing matched).
    pub output: String,
    /// Form the body was in; `None` when no arrow body was recognised.
    pub from: Option<BodyForm>,
    pub layout: Option<Layout>,
}

impl Conversion {
    /// Form the body is in after conversion.
    #[must_use]
    pub fn to(&self) -> Option<BodyForm> {
        self.from.map(BodyForm::opposite)
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.from.is_some()
    }
}

/// Converts one arrow function between block and expression body form.
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    source: &'a str,
    options: ConvertOptions,
}

impl<'a> Converter<'a> {
    /// Create a converter with default layout options.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ConvertOptions::default())
    }

    #[must_use]
    pub fn with_options(source: &'a str, options: ConvertOptions) -> Self {
        Self { source, options }
    }

    /// Convert the fragment, or return it unchanged if it has no arrow body.
    pub fn convert(&self) -> Result<String, ConvertError> {
        self.conversion().map(|c| c.output)
    }

    /// Convert the fragment and report what was converted.
    pub fn conversion(&self) -> Result<Conversion, ConvertError> {
        let Some(regions) = self.regions()? else {
            return Ok(Conversion {
                output: self.source.to_string(),
                from: None,
                layout: None,
            });
        };

        let prefix = convert_prefix(regions.prefix);
        let postfix = convert_postfix(regions.postfix);
        let output = match regions.layout {
            Layout::Multiline => {
                // Re-emit with the line ending the fragment already uses.
                let eol = if self.source.contains("\r\n") { "\r\n" } else { "\n" };
                let body = convert_body(regions.body, &self.options)?;
                let body = if eol == "\n" { body } else { body.replace('\n', eol) };
                [prefix, body, postfix].join(eol)
            }
            Layout::Inline => {
                let body = convert_inline(regions.body)?;
                format!("{prefix}{body}{postfix}")
            }
        };

        Ok(Conversion {
            output,
            from: Some(detect_form(regions.body)),
            layout: Some(regions.layout),
        })
    }

    /// Form the body is currently in, if an arrow body is present.
    pub fn form(&self) -> Result<Option<BodyForm>, ConvertError> {
        Ok(self.regions()?.map(|r| detect_form(r.body)))
    }

    /// Split the fragment into prefix, body and postfix.
    ///
    /// Returns `Ok(None)` when there is no arrow followed by `{` or `(`.
    pub fn regions(&self) -> Result<Option<Regions<'a>>, ConvertError> {
        let src = self.source;
        let Some(opener) = arrow_re().captures(src).and_then(|caps| caps.get(1)) else {
            return Ok(None);
        };

        let open_idx = opener.start();
        let close_idx = find_matching(src, open_idx)?;
        let open = char::from(src.as_bytes()[open_idx]);
        let close = char::from(src.as_bytes()[close_idx]);

        let Some(first_nl) = src[open_idx..close_idx].find('\n') else {
            return Ok(Some(Regions {
                prefix: &src[..=open_idx],
                body: &src[open_idx + 1..close_idx],
                postfix: &src[close_idx..],
                open_idx,
                close_idx,
                layout: Layout::Inline,
            }));
        };

        let body_start = open_idx + first_nl + 1;
        if !src[open_idx + 1..body_start].trim().is_empty() {
            return Err(ConvertError::OpenerNotAtLineEnd {
                open,
                offset: open_idx,
            });
        }

        // Never before `first_nl`, so `body_end + 1 >= body_start`.
        let body_end = src[..close_idx].rfind('\n').unwrap_or(body_start - 1);
        if !src[body_end + 1..close_idx].trim().is_empty() {
            return Err(ConvertError::CloserNotOnOwnLine {
                close,
                offset: close_idx,
            });
        }

        Ok(Some(Regions {
            prefix: src[..body_start].trim_end(),
            body: &src[body_start..body_end + 1],
            postfix: &src[body_end + 1..],
            open_idx,
            close_idx,
            layout: Layout::Multiline,
        }))
    }
}

/// Convert a fragment with default options.
pub fn convert(source: &str) -> Result<String, ConvertError> {
    Converter::new(source).convert()
}

/// Swap the opening bracket that ends the prefix.
#[must_use]
pub fn convert_prefix(prefix: &str) -> String {
    let mut chars = prefix.chars();
    match chars.next_back().and_then(swap_bracket) {
        Some(swapped) => format!("{}{swapped}", chars.as_str()),
        None => prefix.to_string(),
    }
}

/// Swap the first closing bracket of the postfix, keeping everything else.
#[must_use]
pub fn convert_postfix(postfix: &str) -> String {
    let Some(idx) = postfix.find(|c: char| c == '}' || c == ')') else {
        return postfix.to_string();
    };
    let bracket = char::from(postfix.as_bytes()[idx]);
    let swapped = swap_bracket(bracket).unwrap_or(bracket);
    format!("{}{swapped}{}", &postfix[..idx], &postfix[idx + 1..])
}
