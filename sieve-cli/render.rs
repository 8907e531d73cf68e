use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize as _;
use sieve_parser::{join_pattern_values, looks_structural, tokenize};
use sieve_query::{CompileOptions, Compiler, Q};

pub fn compile(
    out: &mut dyn Write,
    options: &CompileOptions,
    patterns: &[String],
    simplify: bool,
    json: bool,
) -> Result<()> {
    let pattern = join_pattern_values(patterns);
    if tokenize(&pattern, &options.tokenizer()).is_literal() && looks_structural(&pattern) {
        tracing::warn!("`...` is literal text unless `--ellipsis` is given");
    }

    let compiler = Compiler::new(*options);
    let assembly = compiler.assemble(&pattern);
    let mut query = compiler.compile(&pattern)?;
    if simplify {
        query = query.simplify();
    }

    if json {
        #[derive(serde::Serialize)]
        struct Compiled<'a> {
            pattern: &'a str,
            regex: &'a str,
            connectors: usize,
            query: &'a Q,
        }
        serde_json::to_writer_pretty(
            &mut *out,
            &Compiled {
                pattern: &pattern,
                regex: assembly.as_str(),
                connectors: assembly.connectors(),
                query: &query,
            },
        )?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} {pattern}", "pattern:".bold())?;
    if query.is_const(true) {
        writeln!(out, "{} {}", "regex:".bold(), "(matches everything)".dimmed())?;
    } else {
        writeln!(out, "{} {assembly}", "regex:".bold())?;
    }
    writeln!(out, "{} {query}", "query:".bold())?;
    Ok(())
}
