use std::io::Read;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::markup::{self, Selection, StyleEdit, StyleOp};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        None => crate::tui::run(cli.config.as_deref()),
        Some(Commands::Fmt(args)) => cmd_fmt(args, json),
        Some(Commands::Styles) => cmd_styles(json),
    }
}

// ---------------------------------------------------------------------------
// fmt
// ---------------------------------------------------------------------------

fn cmd_fmt(args: FmtArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("cannot read stdin: {}", e))?;

    let edit = format_text(&input, args.style, args.start, args.end);
    tracing::debug!(
        style = %args.style,
        direction = ?edit.direction,
        "formatted stdin"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&edit)?);
    } else {
        print!("{}", edit.text);
    }
    Ok(())
}

/// Toggle `op` on `start..end` of `input`; a missing end means the end of
/// the input.
pub fn format_text(input: &str, op: StyleOp, start: usize, end: Option<usize>) -> StyleEdit {
    let end = end.unwrap_or(input.len());
    markup::apply_style(input, Selection::new(start, end), op)
}

// ---------------------------------------------------------------------------
// styles
// ---------------------------------------------------------------------------

fn cmd_styles(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let styles: Vec<StyleJson> = StyleOp::ALL.into_iter().map(style_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&styles)?);
    } else {
        for op in StyleOp::ALL {
            println!("{}", format_style_line(op));
        }
    }
    Ok(())
}
