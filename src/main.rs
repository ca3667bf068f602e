use anyhow::{anyhow, Context, Result};
use std::env;

use contract_registry::{default_log_level, init_logging, Catalog};

const USAGE: &str = "usage: contract-registry <demo | report <catalog.json> | export <catalog.json>>";

fn main() -> Result<()> {
    let _logger = init_logging(default_log_level()).map_err(|err| anyhow!(err))?;

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("demo") | None => run_demo()?,
        Some("report") => {
            let catalog = load(args.get(2))?;
            print_report(&catalog);
        }
        Some("export") => {
            let catalog = load(args.get(2))?;
            println!("{}", catalog.export_json_pretty()?);
        }
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   {}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn load(path: Option<&String>) -> Result<Catalog> {
    let path = path.ok_or_else(|| anyhow!("missing catalog path\n{}", USAGE))?;

    let mut catalog = Catalog::new();
    let summary = catalog
        .import_file(path)
        .with_context(|| format!("failed to import catalog from {}", path))?;
    eprintln!(
        "✓ Imported {} authors, {} books, {} contracts from {}",
        summary.authors, summary.books, summary.contracts, path
    );

    Ok(catalog)
}

fn run_demo() -> Result<()> {
    let mut catalog = Catalog::new();

    let jo = catalog.create_author("Jo");
    let li = catalog.create_author("Li");
    let x = catalog.create_book("X");

    catalog.sign_contract(jo, x, "2020-01-01", 100)?;
    catalog.sign_contract(li, x, "2020-01-01", 200)?;

    print_report(&catalog);
    Ok(())
}

fn print_report(catalog: &Catalog) {
    println!("📚 Contract Registry v{}", contract_registry::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n✍️  Authors");
    for author in catalog.authors() {
        let titles: Vec<&str> = catalog
            .author_books(author.id())
            .iter()
            .map(|b| b.title())
            .collect();
        println!(
            "  {} | {} contracts | royalties {} | books: {}",
            author.name(),
            catalog.author_contracts(author.id()).len(),
            catalog.total_royalties(author.id()),
            titles.join(", ")
        );
    }

    println!("\n📅 Contracts by date");
    let mut dates: Vec<&str> = Vec::new();
    for contract in catalog.contracts() {
        if !dates.contains(&contract.date()) {
            dates.push(contract.date());
        }
    }
    for date in dates {
        println!("  {}", date);
        for contract in catalog.contracts_by_date(date) {
            let author = catalog.author(contract.author()).map_or("?", |a| a.name());
            let book = catalog.book(contract.book()).map_or("?", |b| b.title());
            println!("    {} → {} ({})", author, book, contract.royalties());
        }
    }
}
