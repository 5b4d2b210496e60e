//! # Price Sheet
//!
//! Prints what every catalog tour costs for one to four travellers.
//!
//! ## Usage
//! ```bash
//! cargo run -p voyage-session --bin price-sheet
//! cargo run -p voyage-session --bin price-sheet -- --locale en
//! ```

use std::env;

use tracing::info;
use voyage_core::catalog::{CatalogProvider, StaticCatalog};
use voyage_core::pricing::quote;
use voyage_core::{BookingMode, Locale};
use voyage_session::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut locale = Locale::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--locale" | "-l" => {
                if i + 1 < args.len() {
                    locale = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Voyage Price Sheet");
                println!();
                println!("Usage: price-sheet [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -l, --locale <zh|en>   Display language (default: zh)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    let catalog = StaticCatalog::seeded();
    let tours = catalog.list_tours();
    info!(tours = tours.len(), %locale, "Printing price sheet");

    for tour in &tours {
        let status = tour.group_status();
        println!();
        println!("{} [{}] {}", tour.id, tour.category, tour.title.get(locale));
        println!(
            "  group {}/{} (min {}, {}%), cashback {}, commission {}",
            status.current,
            status.maximum,
            status.minimum,
            status.progress_percent,
            tour.cashback_rate,
            tour.commission_rate
        );

        for mode in [BookingMode::Group, BookingMode::Private] {
            for participants in 1..=4 {
                let q = quote(tour, mode, participants);
                println!(
                    "  {:<7} x{}  {:>12}/pp  {:>12}  {:<8} cashback {:>10}  commission {:>10}",
                    mode.to_string(),
                    participants,
                    q.final_price_per_person.to_string(),
                    q.total_price.to_string(),
                    q.localized_discount_label(locale),
                    q.cashback.to_string(),
                    q.commission.to_string()
                );
            }
        }
    }

    Ok(())
}
