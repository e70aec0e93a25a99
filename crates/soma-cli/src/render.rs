//! Terminal rendering of entities, resolutions and doctor reports.

use std::fmt::Write as _;
use std::sync::Arc;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use soma_corpus::CorpusReport;
use soma_model::{Category, Entity, IssueSeverity};
use soma_resolve::{Resolution, ResolvedReference, ResolvedVia};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One row per entity: id, name, kind, category.
pub fn entity_list_table(entities: &[&Arc<Entity>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Category"),
        header_cell("Levels"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for entity in entities {
        table.add_row(vec![
            id_cell(&entity.id),
            Cell::new(&entity.name),
            Cell::new(entity.kind()),
            Cell::new(entity.category),
            Cell::new(level_list(entity)),
        ]);
    }
    table
}

/// Field/value view of a single entity.
pub fn entity_table(entity: &Entity) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_detail_table_style(&mut table);
    let mut row = |field: &str, value: String| {
        table.add_row(vec![label_cell(field), Cell::new(value)]);
    };
    row("ID", entity.id.clone());
    row("Name", entity.name.clone());
    row("Kind", entity.kind().to_string());
    row(
        "Category",
        format!("{} ({})", entity.category.label(), entity.category),
    );
    row("Levels", level_list(entity));
    if !entity.alternate_names.is_empty() {
        row("Also known as", entity.alternate_names.join(", "));
    }
    for text in entity.text_fields() {
        row("Detail", text.to_string());
    }
    let lists = entity.list_fields();
    if !lists.is_empty() {
        row("Related", lists.join(", "));
    }
    for reference in &entity.cross_references {
        row(
            "See",
            format!(
                "{} ({}, {})",
                reference.target_id, reference.relationship, reference.label
            ),
        );
    }
    row(
        "Version",
        format!(
            "{} ({:?}, updated {})",
            entity.lifecycle.version, entity.lifecycle.status, entity.lifecycle.updated_at
        ),
    );
    table
}

pub fn categories_table(rows: &[(Category, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Label"),
        header_cell("Entities"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (category, count) in rows {
        table.add_row(vec![
            id_cell(category.as_str()),
            Cell::new(category.label()),
            Cell::new(count),
        ]);
    }
    table
}

/// Header lines, level content, key terms and cross references.
pub fn resolution_text(resolution: &Resolution) -> String {
    let entity = &resolution.entity;
    let content = &resolution.content;
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", entity.name, entity.category);
    let _ = writeln!(
        out,
        "Level: {} - {} (requested {})",
        resolution.served_level,
        resolution.served_level.name(),
        resolution.requested_level
    );
    let _ = writeln!(out, "Audience: {}", resolution.served_level.audience());
    match resolution.via {
        ResolvedVia::Direct => {}
        ResolvedVia::Alias => {
            let _ = writeln!(out, "Alias: {} -> {}", resolution.requested_id, entity.id);
        }
        ResolvedVia::Label => {
            let _ = writeln!(
                out,
                "Matched by name: {} -> {}",
                resolution.requested_id, entity.id
            );
        }
        ResolvedVia::Synthesized => {
            let _ = writeln!(out, "Note: generated placeholder, no curated content");
        }
    }
    if !resolution.is_exact_level() {
        let _ = writeln!(
            out,
            "Note: level {} is not available for this topic",
            resolution.requested_level
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", content.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", content.explanation);
    for analogy in &content.analogies {
        let _ = writeln!(out, "  ~ {analogy}");
    }
    if let Some(notes) = &content.clinical_notes {
        let _ = writeln!(out);
        let _ = writeln!(out, "Clinical notes: {notes}");
    }

    if !content.key_terms.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Term"), header_cell("Definition")]);
        apply_detail_table_style(&mut table);
        for term in &content.key_terms {
            table.add_row(vec![label_cell(&term.term), Cell::new(&term.definition)]);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{table}");
    }

    if !resolution.cross_references.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Related"),
            header_cell("Relationship"),
            header_cell("Label"),
        ]);
        apply_table_style(&mut table);
        for reference in &resolution.cross_references {
            let (target, relationship) = match reference {
                ResolvedReference::Resolved {
                    stub, relationship, ..
                } => (id_cell(&stub.id), *relationship),
                ResolvedReference::Unresolved {
                    target_id,
                    relationship,
                    ..
                } => (dim_cell(format!("{target_id} (not available)")), *relationship),
            };
            table.add_row(vec![
                target,
                Cell::new(relationship),
                Cell::new(reference.label()),
            ]);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{table}");
    }
    out
}

/// Pins, counts and the issue table of a doctor run.
pub fn doctor_text(report: &CorpusReport) -> String {
    let mut out = String::new();
    if let Some(pins) = &report.pins {
        let _ = writeln!(
            out,
            "Corpus {} (content schema {})",
            pins.corpus, pins.content_schema
        );
    }

    let counts = &report.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (item, count) in [
        ("Files", counts.files),
        ("Entities", counts.entities),
        ("Regions", counts.regions),
        ("Conditions", counts.conditions),
        ("Topics", counts.topics),
        ("Aliases", counts.aliases),
    ] {
        table.add_row(vec![label_cell(item), Cell::new(count)]);
    }
    table.add_row(vec![
        label_cell("Errors"),
        count_cell(counts.errors, IssueSeverity::Error),
    ]);
    table.add_row(vec![
        label_cell("Warnings"),
        count_cell(counts.warnings, IssueSeverity::Warning),
    ]);
    let _ = writeln!(out, "{table}");

    if report.issues.is_empty() {
        let _ = writeln!(out, "No issues found.");
        return out;
    }

    let mut issues: Vec<_> = report.issues.iter().collect();
    issues.sort_by(|a, b| {
        severity_rank(a.severity)
            .cmp(&severity_rank(b.severity))
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Severity"),
        header_cell("Check"),
        header_cell("Level"),
        header_cell("Message"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            id_cell(&issue.entity_id),
            severity_cell(issue.severity),
            Cell::new(&issue.check),
            issue.level.map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&issue.message),
        ]);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Issues:");
    let _ = writeln!(out, "{table}");
    out
}

fn level_list(entity: &Entity) -> String {
    let levels: Vec<String> = entity
        .available_levels()
        .map(|level| level.get().to_string())
        .collect();
    if levels.is_empty() {
        "-".to_string()
    } else {
        levels.join(",")
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 0,
        IssueSeverity::Warning => 1,
    }
}

fn severity_color(severity: IssueSeverity) -> Color {
    match severity {
        IssueSeverity::Error => Color::Red,
        IssueSeverity::Warning => Color::Yellow,
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    let label = match severity {
        IssueSeverity::Error => "error",
        IssueSeverity::Warning => "warning",
    };
    Cell::new(label)
        .fg(severity_color(severity))
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, severity: IssueSeverity) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(severity_color(severity))
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn id_cell(id: &str) -> Cell {
    Cell::new(id).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
