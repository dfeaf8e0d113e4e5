//! Terminal summaries rendered with comfy-table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{ChoicesResult, FieldTypesResult, MetadataResult, MissingResult, RecordsResult};

pub fn print_records_summary(result: &RecordsResult) {
    println!(
        "Exported {} records ({} columns) to {}",
        result.rows,
        result.columns,
        result.out.display()
    );
}

pub fn print_metadata_summary(result: &MetadataResult) {
    println!(
        "Exported metadata for {} fields to {}",
        result.fields,
        result.out.display()
    );
}

/// Per-category counts, zeros included, so an all-present expected set still
/// shows a full report.
pub fn print_missing_summary(result: &MissingResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in result.report.category_counts() {
        table.add_row(vec![Cell::new(category.label()), count_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.report.total_missing()).add_attribute(Attribute::Bold),
    ]);
    println!("Expected variables: {}", result.expected);
    println!("{table}");
    if let Some(present) = &result.present_types {
        let mut types_table = Table::new();
        types_table.set_header(vec![header_cell("Field"), header_cell("Type")]);
        apply_table_style(&mut types_table);
        for (name, field_type) in present {
            types_table.add_row(vec![Cell::new(name), Cell::new(field_type)]);
        }
        println!("Present expected variables:");
        println!("{types_table}");
    }
    println!("Report: {}", result.csv_path.display());
    println!("Summary: {}", result.json_path.display());
    if let Some(path) = &result.chart_path {
        println!("Chart: {}", path.display());
    }
}

pub fn print_field_types_summary(result: &FieldTypesResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field type"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &result.counts {
        table.add_row(vec![
            Cell::new(&summary.field_type),
            Cell::new(summary.count),
        ]);
    }
    println!("Fields in metadata: {}", result.total_fields);
    println!("{table}");
    println!("Distribution: {}", result.csv_path.display());
    if let Some(path) = &result.chart_path {
        println!("Chart: {}", path.display());
    }
    for (field_type, count, path) in &result.field_lists {
        println!("{field_type}: {count} fields -> {}", path.display());
    }
}

pub fn print_choices_summary(result: &ChoicesResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Form"),
        header_cell("Type"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for summary in &result.summaries {
        table.add_row(vec![
            Cell::new(&summary.field_name),
            Cell::new(&summary.form_name),
            Cell::new(&summary.field_type),
            Cell::new(summary.num_options),
        ]);
    }
    println!("{table}");
    println!("Saved: {}", result.out.display());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
