use crate::{
    case,
    model::{Conversion, ConversionMode, OutputRow, PropertySpec, Skip, SkippedLine, SourceShape},
    modes::{ModeEvent, ModeState},
    packs::LanguagePack,
    plans::DocPlan,
};
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("valid line break regex"));

pub struct RunContext<'a> {
    pub modes: &'a ModeState,
    pub pack: &'a dyn LanguagePack,
    pub plan: &'a dyn DocPlan,
}

/// Non-blank lines, trimmed, with their 1-based line numbers.
pub fn split_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    LINE_BREAK
        .split(text)
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn render(ctx: &RunContext<'_>, spec: &PropertySpec) -> Result<OutputRow, Skip> {
    ctx.pack
        .render_property(ctx.plan, spec)
        .map(OutputRow::new)
        .ok_or_else(|| Skip::UnsupportedType(format!("{:?}", spec.data_type)))
}

fn non_empty(s: String) -> Result<OutputRow, Skip> {
    if s.is_empty() { Err(Skip::EmptyResult) } else { Ok(OutputRow::new(s)) }
}

/// Converts one trimmed, non-blank line under the active modes.
pub fn convert_line(ctx: &RunContext<'_>, line: &str) -> Result<OutputRow, Skip> {
    let modes = ctx.modes;
    match modes.shape {
        SourceShape::NameOnly => match modes.mode {
            ConversionMode::Property => {
                let name = if modes.snake_to_pascal {
                    case::snake_to_pascal(&case::to_lower(line))
                } else {
                    line.to_string()
                };
                if name.is_empty() {
                    return Err(Skip::EmptyResult);
                }
                render(ctx, &PropertySpec::name_only(name))
            }
            mode => non_empty(case::convert_name(line, mode).unwrap_or_default()),
        },

        SourceShape::DefinitionRow => {
            if modes.mode != ConversionMode::Property {
                return Err(Skip::EmptyResult);
            }
            let spec = crate::definition::parse_row(line, modes.snake_to_pascal)?;
            render(ctx, &spec)
        }
    }
}

fn record(out: &mut Conversion, line_no: usize, res: Result<OutputRow, Skip>) {
    match res {
        Ok(row) => out.rows.push(row),
        Err(reason) => {
            tracing::debug!(line = line_no, %reason, "skipped");
            out.skipped.push(SkippedLine { line_no, reason });
        }
    }
}

fn summarize(out: &Conversion) {
    if !out.skipped.is_empty() {
        tracing::info!(rows = out.rows.len(), skipped = out.skipped.len(), "conversion finished with skips");
    }
}

/// Runs every non-blank line through [`convert_line`]. Blank input is
/// [`Skip::EmptyInput`]; otherwise failures of individual lines are collected
/// in [`Conversion::skipped`] and never abort the run.
pub fn convert_text(ctx: &RunContext<'_>, text: &str) -> Result<Conversion, Skip> {
    let mut lines = split_lines(text).peekable();
    if lines.peek().is_none() {
        return Err(Skip::EmptyInput);
    }

    let mut out = Conversion::default();
    for (line_no, line) in lines {
        record(&mut out, line_no, convert_line(ctx, line));
    }
    summarize(&out);
    Ok(out)
}

/// Feeds pre-split definition rows (e.g. spreadsheet rows) through the
/// definition path. Rows are numbered from `first_row_no`.
pub fn convert_fields<I, R, S>(ctx: &RunContext<'_>, rows: I, first_row_no: usize) -> Conversion
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = Conversion::default();
    for (i, fields) in rows.into_iter().enumerate() {
        let res = PropertySpec::from_fields(fields.as_ref(), ctx.modes.snake_to_pascal)
            .and_then(|spec| render(ctx, &spec));
        record(&mut out, first_row_no + i, res);
    }
    summarize(&out);
    out
}

/// Holds the mode selection and the rows of the last successful run.
#[derive(Debug, Default)]
pub struct Session {
    modes: ModeState,
    rows: Vec<OutputRow>,
}

impl Session {
    pub fn new() -> Self { Self::default() }
    pub fn modes(&self) -> &ModeState { &self.modes }
    pub fn rows(&self) -> &[OutputRow] { &self.rows }

    pub fn dispatch(&mut self, ev: ModeEvent) {
        self.modes.apply(ev);
    }

    /// Converts `text` and keeps the result only if it produced rows; blank
    /// input or an all-skipped run leaves the previous rows untouched.
    pub fn make(&mut self, pack: &dyn LanguagePack, plan: &dyn DocPlan, text: &str) -> Result<Conversion, Skip> {
        let ctx = RunContext { modes: &self.modes, pack, plan };
        let out = convert_text(&ctx, text)?;
        if !out.rows.is_empty() {
            self.rows = out.rows.clone();
        }
        Ok(out)
    }

    /// Same as [`Session::make`] for pre-split definition rows.
    pub fn make_from_fields<I, R, S>(
        &mut self,
        pack: &dyn LanguagePack,
        plan: &dyn DocPlan,
        rows: I,
        first_row_no: usize,
    ) -> Conversion
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let ctx = RunContext { modes: &self.modes, pack, plan };
        let out = convert_fields(&ctx, rows, first_row_no);
        if !out.rows.is_empty() {
            self.rows = out.rows.clone();
        }
        out
    }

    pub fn clear(&mut self) {
        self.modes.apply(ModeEvent::Clear);
        self.rows.clear();
    }
}
