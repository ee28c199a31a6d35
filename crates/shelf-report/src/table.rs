use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shelf_model::Product;
use shelf_view::DisplayRow;

/// Build the two-column product table from a derived row sequence.
///
/// Category headers become a bold row across the name column; unstocked
/// products keep the original demo's red name styling.
pub fn render_table(rows: &[DisplayRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Price")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        match row {
            DisplayRow::CategoryHeader { category } => {
                table.add_row(vec![category_cell(category), Cell::new("")]);
            }
            DisplayRow::ProductLine { product } => {
                table.add_row(vec![name_cell(product), Cell::new(&product.price)]);
            }
        }
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn category_cell(category: &str) -> Cell {
    Cell::new(category).add_attribute(Attribute::Bold)
}

fn name_cell(product: &Product) -> Cell {
    if product.stocked {
        Cell::new(&product.name)
    } else {
        Cell::new(&product.name).fg(Color::Red)
    }
}
