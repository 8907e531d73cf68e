use std::io::Write;

use annotate_snippets::{Level, Renderer, Snippet};
use anyhow::Result;
use sieve_parser::tokenize;
use sieve_query::{CompileOptions, Compiler};

pub fn explain(out: &mut dyn Write, options: &CompileOptions, pattern: &str, json: bool) -> Result<()> {
    let tokens = tokenize(pattern, &options.tokenizer());

    if json {
        serde_json::to_writer_pretty(&mut *out, &tokens)?;
        writeln!(out)?;
        return Ok(());
    }

    let title = format!(
        "{} hole(s), {} non-empty literal segment(s)",
        tokens.holes().len(),
        tokens.segments().iter().filter(|s| !s.is_empty()).count()
    );
    let labels = tokens
        .holes()
        .iter()
        .map(|hole| match hole.name {
            Some(name) => format!("{} hole `{name}`", hole.kind),
            None => format!("{} hole", hole.kind),
        })
        .collect::<Vec<_>>();

    let message = Level::Info.title(&title).snippet(
        Snippet::source(pattern)
            .origin("PATTERN")
            .fold(false)
            .annotations(
                tokens
                    .holes()
                    .iter()
                    .zip(&labels)
                    .map(|(hole, label)| Level::Note.span(hole.span.into()).label(label)),
            ),
    );
    // The output stream strips styles when color is off.
    let renderer = Renderer::styled();
    writeln!(out, "{}", renderer.render(message))?;

    let assembly = Compiler::new(*options).assemble(pattern);
    writeln!(out, "regex: {assembly}")?;
    writeln!(out, "connectors: {}", assembly.connectors())?;
    Ok(())
}
