pub mod classify;
pub mod flatten;
pub mod note;
pub mod order;
pub mod render;

use crate::config::NotesConfig;
use crate::error::{Result, TakeoutError};
use chrono::Utc;
use classify::NoteCategory;
use note::Note;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Switches that alter a conversion run without changing what gets rendered.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Compute everything but write and delete nothing.
    pub dry_run: bool,
    /// Stop after the first discovered note.
    pub single_note: bool,
    /// Remove each source file once its Markdown has been written.
    pub delete_originals: bool,
}

/// Counters for a complete conversion run.
#[derive(Debug, Serialize)]
pub struct ConversionSummary {
    pub total_notes: usize,
    pub unsorted: usize,
    pub archived: usize,
    pub trashed: usize,
    pub deleted_originals: usize,
    pub output_root: String,
}

/// A note rendered and routed, ready to land on disk.
struct ConvertedNote {
    category: NoteCategory,
    file_name: String,
    markdown: String,
}

/// Convert every exported note under the input directory into Markdown
/// files grouped by category beneath a fresh timestamped root.
#[instrument(skip(config, options))]
pub fn run(config: &NotesConfig, options: &RunOptions) -> Result<ConversionSummary> {
    info!("🚀 Starting notes conversion");
    println!("🚀 Starting notes conversion");

    let mut files = discover_note_files(&config.input_dir)?;
    if options.single_note {
        files.truncate(1);
    }
    info!(
        "📁 Found {} note files in {}",
        files.len(),
        config.input_dir.display()
    );
    println!(
        "📁 Found {} note files in {}",
        files.len(),
        config.input_dir.display()
    );

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let run_root = config.output_root.join(format!("notes_{timestamp}"));
    if !options.dry_run {
        // Every run root carries all three category directories, even the
        // ones no note lands in.
        for category in [
            NoteCategory::Trash,
            NoteCategory::Archive,
            NoteCategory::Unsorted,
        ] {
            fs::create_dir_all(run_root.join(category.dir_name()))?;
        }
    }

    let mut summary = ConversionSummary {
        total_notes: 0,
        unsorted: 0,
        archived: 0,
        trashed: 0,
        deleted_originals: 0,
        output_root: run_root.to_string_lossy().to_string(),
    };

    for (i, path) in files.iter().enumerate() {
        let converted = convert_note(path, config)?;
        let dest = run_root
            .join(converted.category.dir_name())
            .join(&converted.file_name);

        if options.dry_run {
            info!("Dry run: would write {}", dest.display());
        } else {
            fs::write(&dest, &converted.markdown)?;
            debug!("Wrote {}", dest.display());
        }

        summary.total_notes += 1;
        match converted.category {
            NoteCategory::Trash => summary.trashed += 1,
            NoteCategory::Archive => summary.archived += 1,
            NoteCategory::Unsorted => summary.unsorted += 1,
        }

        if options.delete_originals {
            if options.dry_run {
                info!("Dry run: would delete {}", path.display());
            } else {
                match fs::remove_file(path) {
                    Ok(()) => summary.deleted_originals += 1,
                    Err(e) => warn!("Failed to delete original {}: {}", path.display(), e),
                }
            }
        }

        if (i + 1) % 10 == 0 {
            debug!("Converted {}/{} notes", i + 1, files.len());
            println!("   Converted {}/{} notes", i + 1, files.len());
        }
    }

    info!(
        "✅ Converted {} notes ({} unsorted, {} archived, {} trashed)",
        summary.total_notes, summary.unsorted, summary.archived, summary.trashed
    );
    println!(
        "✅ Converted {} notes ({} unsorted, {} archived, {} trashed)",
        summary.total_notes, summary.unsorted, summary.archived, summary.trashed
    );

    Ok(summary)
}

/// All `.json` files directly under the input directory, in path order so
/// runs are repeatable.
fn discover_note_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir).map_err(|e| {
        TakeoutError::Config(format!(
            "Cannot read notes directory {}: {e}",
            input_dir.display()
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load, flatten, order and render a single note file.
fn convert_note(path: &Path, config: &NotesConfig) -> Result<ConvertedNote> {
    let raw = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
        TakeoutError::MalformedInput(format!("note {} is not valid JSON: {e}", path.display()))
    })?;
    let note = Note::from_value(value, path)?;

    let mut entries = flatten::flatten_metadata(&note.fields, &config.ignore_keys);
    order::order_entries(&mut entries, &config.priority_keys);
    let markdown = render::render_markdown(&note.title, &note.text_content, &entries);

    let category = NoteCategory::from_flags(note.is_trashed, note.is_archived);
    let file_name = format!("{}.md", render::normalize_title(&note.title));

    debug!("Converted note '{}' -> {}", note.title, category.dir_name());

    Ok(ConvertedNote {
        category,
        file_name,
        markdown,
    })
}
