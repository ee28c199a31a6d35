use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info, warn};

use shelf_model::{Catalog, load_catalog};
use shelf_report::{render_table, rows_to_json};
use shelf_view::{FilterCriteria, FilterSession, derive_rows};

use crate::cli::{BrowseArgs, CatalogArg, OutputArg, ShowArgs};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let catalog = resolve_catalog(&args.catalog)?;
    let criteria = FilterCriteria::new(args.filter.clone(), args.in_stock);
    let rows = derive_rows(catalog.products(), &criteria);
    info!(
        products = catalog.len(),
        rows = rows.len(),
        "derived display rows"
    );
    match args.output {
        OutputArg::Table => println!("{}", render_table(&rows)),
        OutputArg::Json => println!("{}", rows_to_json(&rows)?),
    }
    Ok(())
}

pub fn run_categories(args: &CatalogArg) -> Result<()> {
    let catalog = resolve_catalog(args)?;
    let mut table = Table::new();
    table.set_header(vec!["Category", "Products", "In stock"]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for category in catalog.categories() {
        let total = catalog
            .products()
            .iter()
            .filter(|p| p.category == category)
            .count();
        let stocked = catalog
            .products()
            .iter()
            .filter(|p| p.category == category && p.stocked)
            .count();
        table.add_row(vec![
            Cell::new(category),
            Cell::new(total),
            Cell::new(stocked),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_browse(args: &BrowseArgs) -> Result<()> {
    let catalog = resolve_catalog(&args.catalog)?;
    let criteria = FilterCriteria::new(args.filter.clone(), args.in_stock);
    let mut session = FilterSession::new(catalog, criteria);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render_session(&session);
    print_browse_help();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        match parse_command(&line) {
            BrowseCommand::Filter(text) => {
                session.set_filter_text(text);
                render_session(&session);
            }
            BrowseCommand::Stock(flag) => {
                session.set_in_stock_only(flag);
                render_session(&session);
            }
            BrowseCommand::Show => render_session(&session),
            BrowseCommand::Help => print_browse_help(),
            BrowseCommand::Quit => break,
            BrowseCommand::Empty => {}
            BrowseCommand::Unknown(input) => {
                warn!(input, "unknown browse command");
                eprintln!("unknown command: {input} (try `help`)");
            }
        }
    }
    debug!(
        derivations = session.derivation_count(),
        "browse session finished"
    );
    Ok(())
}

fn render_session(session: &FilterSession) {
    let criteria = session.criteria();
    println!(
        "filter: {:?}  in-stock only: {}",
        criteria.filter_text, criteria.in_stock_only
    );
    println!("{}", render_table(session.rows()));
}

fn print_browse_help() {
    println!("commands:");
    println!("  filter <text>   set the search text");
    println!("  filter          clear the search text");
    println!("  stock on|off    toggle the in-stock-only restriction");
    println!("  show            re-render the table");
    println!("  quit            exit");
}

/// One line of browse input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Filter(String),
    Stock(bool),
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> BrowseCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return BrowseCommand::Empty;
    }
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };
    match keyword {
        "filter" => BrowseCommand::Filter(rest.to_string()),
        "stock" => match rest {
            "on" => BrowseCommand::Stock(true),
            "off" => BrowseCommand::Stock(false),
            _ => BrowseCommand::Unknown(trimmed.to_string()),
        },
        "show" => BrowseCommand::Show,
        "help" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(trimmed.to_string()),
    }
}

fn resolve_catalog(args: &CatalogArg) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("load catalog from {}", path.display())),
        None => Ok(Catalog::seed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_with_text() {
        assert_eq!(
            parse_command("filter dragon fruit\n"),
            BrowseCommand::Filter("dragon fruit".to_string())
        );
    }

    #[test]
    fn bare_filter_clears_the_text() {
        assert_eq!(parse_command("filter"), BrowseCommand::Filter(String::new()));
    }

    #[test]
    fn parses_stock_toggle() {
        assert_eq!(parse_command("stock on"), BrowseCommand::Stock(true));
        assert_eq!(parse_command("stock off"), BrowseCommand::Stock(false));
        assert_eq!(
            parse_command("stock maybe"),
            BrowseCommand::Unknown("stock maybe".to_string())
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   \n"), BrowseCommand::Empty);
    }

    #[test]
    fn quit_and_exit_both_stop() {
        assert_eq!(parse_command("quit"), BrowseCommand::Quit);
        assert_eq!(parse_command("exit"), BrowseCommand::Quit);
    }
}
