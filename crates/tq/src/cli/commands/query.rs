//! Implementation of `tq query`.

use std::process::ExitCode;

use tq_index::{Evaluate, Query, parse};

use crate::cli::{
    args::QueryCommand,
    context::CommandContext,
    output::{JsonReport, ReportStyle, dim, format_report, header, print_json},
};

/// Evaluates each expression against the source and prints its report.
pub fn run(ctx: &CommandContext, cmd: &QueryCommand) -> ExitCode {
    let queries = match parse_all(&cmd.expressions) {
        Ok(queries) => queries,
        Err(code) => return code,
    };

    if cmd.explain {
        explain(&cmd.expressions, &queries);
        return ExitCode::SUCCESS;
    }

    let index = match ctx.open_index(&cmd.source) {
        Ok(index) => index,
        Err(code) => return code,
    };
    let max_lines = cmd.limit.unwrap_or(ctx.config.report.max_lines);

    if cmd.json {
        let reports = queries
            .iter()
            .map(|query| JsonReport::new(&query.eval(&index), max_lines))
            .collect();
        return print_json(reports);
    }

    let style = ReportStyle {
        color: ctx.use_color(),
        max_lines,
    };
    for (i, query) in queries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format_report(query, &query.eval(&index), style));
    }

    ExitCode::SUCCESS
}

/// Parses every expression, failing on the first syntax error or empty expression.
fn parse_all(expressions: &[String]) -> Result<Vec<Query>, ExitCode> {
    expressions
        .iter()
        .map(|expr| match parse(expr) {
            Ok(Some(query)) => Ok(query),
            Ok(None) => {
                eprintln!("error: empty query expression");
                Err(ExitCode::FAILURE)
            }
            Err(e) => {
                eprintln!("error: {}", e.to_string().trim_end());
                Err(ExitCode::FAILURE)
            }
        })
        .collect()
}

/// Prints how each expression was parsed.
fn explain(expressions: &[String], queries: &[Query]) {
    for (expr, query) in expressions.iter().zip(queries) {
        println!("{}", header("Query:"));
        println!("   {expr}");
        println!();
        println!("{}", header("Rendered:"));
        println!("   {query}");
        println!();
        println!("{}", header("Parsed AST:"));
        for line in query.to_tree_string().lines() {
            println!("   {line}");
        }
        println!();
        let words = query.positive_words();
        if words.is_empty() {
            println!("{}", dim("(no highlighted words)"));
        } else {
            println!("{} {}", dim("highlights:"), words.join(", "));
        }
        println!();
    }
}
