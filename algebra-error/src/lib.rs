//! Diagnostics shared by the algebra crates.
//!
//! Each kind of failure is a type implementing [`ErrorKind`], usually through
//! `#[derive(ErrorKind)]` from `algebra-attrs`. A kind knows how to turn the source spans it is
//! attached to into an [`ariadne`] report.

pub use ariadne;

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::Debug, io, ops::Range};

/// Highlight color for expressions in messages and labels.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of error that can be reported against the source code it came from.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error, labelling the given spans.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;

    /// Prints the report to stderr.
    fn eprint(&self, src_id: &str, spans: &[Range<usize>], input: &str) -> io::Result<()> {
        self.build_report(src_id, spans).eprint((src_id, Source::from(input)))
    }

    /// Renders the report into a [`String`]. The color codes `ariadne` emits are kept.
    fn render(&self, src_id: &str, spans: &[Range<usize>], input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id, spans).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Assembles an error report. The derived [`ErrorKind`] implementations call this.
///
/// Labels are paired with spans in order; a label without a span is dropped, and an empty label
/// highlights its span without a message.
pub fn build_report<'a, L>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: impl IntoIterator<Item = L>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)>
where
    L: ToString,
{
    let offset = spans.first().map_or(0, |span| span.start);
    let labels = labels.into_iter()
        .zip(spans)
        .map(|(text, span)| {
            let text = text.to_string();
            let label = Label::new((src_id, span.clone())).with_color(EXPR);
            if text.is_empty() {
                label
            } else {
                label.with_message(text)
            }
        });

    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(labels);
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// An error kind together with the regions of source code it applies to.
#[derive(Debug)]
pub struct Error {
    /// Source regions the report highlights, in label order.
    pub spans: Vec<Range<usize>>,

    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// See [`ErrorKind::build_report`].
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Prints this error to stderr. `ariadne` reports have no `Display` implementation, so this
    /// goes through [`Report::eprint`].
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.kind.eprint(src_id, &self.spans, input)
    }

    /// Renders this error into a [`String`].
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        self.kind.render(src_id, &self.spans, input)
    }
}
