// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, BufRead, Write};

use querys_core::{AnswerCache, Answerer, AskResponse, ClockSource, Database};

use crate::cli::OutputFormat;
use crate::display::format_ask;
use crate::error::{Error, Result};
use crate::llm::OllamaClient;
use crate::schema::ask::AskOutputJson;

use super::{open_store, print_json};

pub fn run(question: Option<String>, output: OutputFormat) -> Result<()> {
    let store = open_store()?;
    let question = match question {
        Some(q) => q,
        None => read_question(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let model = OllamaClient::new(&store.config.llm);
    run_impl(&store.db, &store.cache, &model, &question, output).map(|_| ())
}

/// Prompt on `prompt` and read one line from `input`.
pub(crate) fn read_question<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String> {
    write!(prompt, "Question: ")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::EmptyQuestion);
    }
    Ok(line.trim().to_string())
}

/// Answer `question` and print where the answer came from.
pub(crate) fn run_impl<C, A>(
    db: &Database,
    cache: &AnswerCache<C>,
    model: &A,
    question: &str,
    output: OutputFormat,
) -> Result<AskResponse>
where
    C: ClockSource,
    A: Answerer + ?Sized,
{
    let response = querys_core::ask(question, db, cache, model)?;
    tracing::debug!(source = %response.source, "question answered");

    match output {
        OutputFormat::Text => println!("{}", format_ask(&response)),
        OutputFormat::Json => print_json(&AskOutputJson::from(&response))?,
    }
    Ok(response)
}

#[cfg(test)]
#[path = "ask_tests.rs"]
mod tests;
