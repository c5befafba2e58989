// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use siftdex::{add_keywords, logging, term_tolerance, Index, QueryProcessor, SearchConfig};

mod cli;
use cli::display::{format_duration, json_answer, render_answer};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    cli.command.apply_overrides(&mut config);
    config.validate().context("invalid settings")?;
    logging::init(&config.logging);

    match cli.command {
        Commands::Search {
            csv,
            queries,
            fuzzy,
            json,
            ..
        } => run_search(&csv, &queries, fuzzy, json, &config),
        Commands::Fuzzy {
            keywords, queries, ..
        } => run_fuzzy(&keywords, &queries, &config),
        Commands::Stats { csv } => run_stats(&csv, &config),
    }
}

/// Read a file as text, replacing invalid UTF-8 with U+FFFD.
fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn build_index(path: &Path, config: &SearchConfig) -> Result<(Index, Duration)> {
    let text = read_text(path)?;

    #[cfg(feature = "parallel")]
    let spinner = {
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_message(format!("indexing {}", path.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };

    let start = Instant::now();
    let index = Index::from_csv(&text, config)
        .with_context(|| format!("indexing {}", path.display()))?;
    let elapsed = start.elapsed();

    #[cfg(feature = "parallel")]
    spinner.finish_and_clear();

    Ok((index, elapsed))
}

fn run_search(
    csv: &Path,
    queries: &[String],
    fuzzy: bool,
    json: bool,
    config: &SearchConfig,
) -> Result<()> {
    let (index, elapsed) = build_index(csv, config)?;
    if !json {
        eprintln!(
            "{} records, {} keywords indexed in {}",
            index.num_records(),
            index.num_keywords(),
            format_duration(elapsed)
        );
    }

    let processor = QueryProcessor::new(&index);
    let max_records = config.effective_max_results();
    let stdout = std::io::stdout();

    let answer_one = |query: &str| -> Result<()> {
        let answer = if fuzzy || QueryProcessor::has_wildcard(query) {
            processor.answer_fuzzy(query, max_records, config.fuzzy.max_ed)?
        } else {
            processor.answer(query, max_records)
        };
        let mut out = stdout.lock();
        if json {
            serde_json::to_writer(&mut out, &json_answer(&index, query, &answer))?;
            writeln!(out)?;
        } else {
            write!(out, "{}", render_answer(&index, query, &answer))?;
        }
        out.flush()?;
        Ok(())
    };

    if !queries.is_empty() {
        for query in queries {
            answer_one(query)?;
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading query from stdin")?;
        let query = line.trim();
        if query == "q" {
            break;
        }
        if !query.is_empty() {
            answer_one(query)?;
        }
    }
    Ok(())
}

fn run_fuzzy(keywords: &Path, queries: &Path, config: &SearchConfig) -> Result<()> {
    let start = Instant::now();
    let mut index = Index::new();
    add_keywords(&read_text(keywords)?, &mut index)
        .with_context(|| format!("reading keywords from {}", keywords.display()))?;
    index.build_ngrams(config.ngram_n)?;
    let build_time = start.elapsed();

    println!("Number of keywords: {}", index.num_keywords());
    println!("N-gram value: {}", config.ngram_n);
    println!("Index construction time: {}", format_duration(build_time));

    let query_text = read_text(queries)?;
    let mut num_queries = 0u32;
    let mut num_matches = 0usize;
    let mut query_time = Duration::ZERO;
    let mut verification_time = Duration::ZERO;
    for query in query_text.lines().filter(|q| !q.is_empty()) {
        let start = Instant::now();
        let tolerance = term_tolerance(query, config.fuzzy.max_ed);
        let found = index.approximate_matches(query, tolerance)?;
        query_time += start.elapsed();
        verification_time += found.avg_verification_time;
        num_matches += found.matches.len();
        num_queries += 1;
    }

    if num_queries == 0 {
        println!("No queries in {}", queries.display());
        return Ok(());
    }
    println!("Avg number of matches: {}", num_matches / num_queries as usize);
    println!("Avg query time: {}", format_duration(query_time / num_queries));
    println!(
        "Avg edit distance time: {}",
        format_duration(verification_time / num_queries)
    );
    Ok(())
}

fn run_stats(csv: &Path, config: &SearchConfig) -> Result<()> {
    let (index, elapsed) = build_index(csv, config)?;
    let avg = if index.num_records() > 0 {
        index.total_size() as f64 / index.num_records() as f64
    } else {
        0.0
    };
    println!("Records:      {}", index.num_records());
    println!("Keywords:     {}", index.num_keywords());
    println!("Items:        {}", index.num_items());
    println!("Total size:   {} bytes", index.total_size());
    println!("Avg record:   {:.1} bytes", avg);
    println!(
        "N-grams:      {} (n = {})",
        index.ngram_index().map_or(0, |g| g.len()),
        config.ngram_n
    );
    println!("Build time:   {}", format_duration(elapsed));
    Ok(())
}
