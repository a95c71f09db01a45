use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use catalog_core::selection::shows_navigation;
use catalog_core::{filter_entries, CatalogEntry};
use indicatif::{ProgressBar, ProgressStyle};

use crate::SourceArgs;

/// Load one batch, showing a spinner on stderr while the requests are in flight.
pub async fn load_batch(source: &SourceArgs) -> Result<Vec<CatalogEntry>> {
    let client = catalog_infra::default_http_client().context("Failed to build HTTP client")?;
    let loader = catalog_loader::http_loader(client, &source.api_base, &source.collection)
        .context("Invalid upstream configuration")?;
    let batch_size = source.batch_size();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Loading {batch_size} entries from {}", source.api_base));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = loader.load(batch_size).await;
    pb.finish_and_clear();

    match result {
        Ok(entries) => {
            tracing::info!("loaded {} entries", entries.len());
            Ok(entries)
        }
        Err(e) => {
            tracing::error!("catalog batch failed: {e}");
            anyhow::bail!(e.user_message())
        }
    }
}

pub fn write_list(out: &mut impl Write, entries: &[&CatalogEntry], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }
    for e in entries {
        writeln!(out, "#{:<5} {}", e.id, e.name)?;
    }
    Ok(())
}

pub fn write_detail(out: &mut impl Write, entry: &CatalogEntry, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?;
        return Ok(());
    }
    writeln!(out, ":: #{} {}", entry.id, entry.name)?;
    writeln!(out, "   Types:     {}", entry.categories.join(", "))?;
    writeln!(out, "   Weight:    {}", entry.weight_label())?;
    writeln!(out, "   Base XP:   {}", entry.base_experience)?;
    writeln!(out, "   Image:     {}", entry.image_url)?;
    Ok(())
}

pub async fn cmd_list(source: &SourceArgs, json: bool, out: &mut impl Write) -> Result<()> {
    let entries = load_batch(source).await?;
    let all: Vec<&CatalogEntry> = entries.iter().collect();
    write_list(out, &all, json)
}

pub async fn cmd_search(
    source: &SourceArgs,
    term: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let entries = load_batch(source).await?;
    let hits = filter_entries(&entries, term);

    if hits.is_empty() && !json {
        writeln!(out, "No results for \"{term}\"")?;
        return Ok(());
    }
    write_list(out, &hits, json)
}

/// Print one entry looked up by id or (case-insensitive) name, plus its neighbours in the
/// loaded batch so the output mirrors the overlay's prev/next.
pub async fn cmd_show(
    source: &SourceArgs,
    query: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let entries = load_batch(source).await?;
    let Some(pos) = find_entry(&entries, query) else {
        anyhow::bail!(
            "No entry matching \"{query}\" in the first {} entries",
            entries.len()
        );
    };

    write_detail(out, &entries[pos], json)?;

    if !json && shows_navigation(entries.len()) {
        let prev = &entries[catalog_core::selection::wrap_previous(pos, entries.len())];
        let next = &entries[catalog_core::selection::wrap_next(pos, entries.len())];
        writeln!(out, "   Prev/Next: {} / {}", prev.name, next.name)?;
    }
    Ok(())
}

pub fn find_entry(entries: &[CatalogEntry], query: &str) -> Option<usize> {
    if let Ok(id) = query.parse::<u32>() {
        return entries.iter().position(|e| e.id == id);
    }
    entries
        .iter()
        .position(|e| e.name.eq_ignore_ascii_case(query))
}
