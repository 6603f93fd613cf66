//! Token dump output.

use std::io::Write;

use bmc_lex::Token;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// One token as it appears in the JSON dump.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind().description(),
            text: token.text(),
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Writes `tokens` to `out` in the requested format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
