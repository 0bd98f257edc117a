//! Interactive menu loop.

use anyhow::{anyhow, Result};
use biblio_catalog::{Book, CalendarDate};
use biblio_order::{TransactionError, TransactionKind};
use biblio_store::app_config::Config;
use biblio_store::Bookstore;
use chrono::{Datelike, Local};
use dialoguer::{Input, Select};
use uuid::Uuid;

use crate::output::Output;

const MENU_ITEMS: &[&str] = &[
    "Add book",
    "Display books",
    "Record order transaction",
    "Record sale transaction",
    "Display transactions",
    "Exit",
];

/// Run the menu loop until the user exits. All state is in-memory and lost
/// on exit.
pub fn run(config: &Config, output: &Output) -> Result<()> {
    let mut store = Bookstore::new();

    output.header(&config.store.name);

    loop {
        let choice = Select::new()
            .with_prompt("Bookstore Management System")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => add_book(&mut store, output)?,
            1 => display_books(&store, output),
            2 => record_transaction(&mut store, TransactionKind::Order, output)?,
            3 => record_transaction(&mut store, TransactionKind::Sale, output)?,
            4 => display_transactions(&store, output),
            _ => {
                output.info("Exiting...");
                return Ok(());
            }
        }
    }
}

fn add_book(store: &mut Bookstore, output: &Output) -> Result<()> {
    let title: String = Input::new().with_prompt("Book title").interact_text()?;
    let author: String = Input::new().with_prompt("Author").interact_text()?;
    let genre: String = Input::new().with_prompt("Genre").interact_text()?;
    let isbn: String = Input::new().with_prompt("ISBN").interact_text()?;
    let publication_date = prompt_date("Publication date (dd/mm/yyyy)", None)?;
    let quantity: u32 = Input::new().with_prompt("Quantity").interact_text()?;
    let price_cents: i64 = Input::new().with_prompt("Price (cents)").interact_text()?;

    store.add_book(Book::new(
        &title,
        &author,
        &genre,
        &isbn,
        publication_date,
        price_cents,
        quantity,
    ));
    output.success("Book added successfully");
    Ok(())
}

fn display_books(store: &Bookstore, output: &Output) {
    if store.catalog().is_empty() {
        output.info("The catalog is empty");
        return;
    }

    for book in store.catalog().books() {
        output.kv("Title", &book.title);
        output.kv("Author", &book.author);
        output.kv("Genre", &book.genre);
        output.kv("ISBN", &book.isbn);
        output.kv("Publication Date", &book.publication_date.to_string());
        output.kv("Price", &output.price(book.price_cents));
        output.kv("Quantity", &book.quantity.to_string());
        output.blank();
    }
}

fn record_transaction(
    store: &mut Bookstore,
    kind: TransactionKind,
    output: &Output,
) -> Result<()> {
    let id: String = Input::new()
        .with_prompt("Transaction ID")
        .default(Uuid::new_v4().to_string())
        .interact_text()?;
    let customer_id: String = Input::new().with_prompt("Customer ID").interact_text()?;
    let isbn: String = Input::new().with_prompt("ISBN").interact_text()?;

    let today = Local::now();
    let default_date = CalendarDate::new(today.day(), today.month(), today.year());
    let date = prompt_date("Transaction date (dd/mm/yyyy)", Some(default_date))?;

    let quantity: u32 = Input::new().with_prompt("Quantity").interact_text()?;

    let result = match kind {
        TransactionKind::Order => store.record_order(&id, date, &customer_id, &isbn, quantity),
        TransactionKind::Sale => store.record_sale(&id, date, &customer_id, &isbn, quantity),
    };

    match result {
        Ok(()) => match kind {
            TransactionKind::Order => output.success("Order processed successfully"),
            TransactionKind::Sale => output.success("Sale processed successfully"),
        },
        // Insufficient stock is a normal outcome; report it and continue
        Err(err @ TransactionError::InsufficientStock { .. }) => output.warn(&err.to_string()),
        Err(err) => output.error(&err.to_string()),
    }

    Ok(())
}

fn display_transactions(store: &Bookstore, output: &Output) {
    if store.transactions().is_empty() {
        output.info("No transactions recorded");
        return;
    }

    for transaction in store.transactions() {
        output.kv("Transaction ID", &transaction.id);
        output.kv("Kind", &format!("{:?}", transaction.kind));
        output.kv("Transaction Date", &transaction.transaction_date.to_string());
        output.kv("Status", &format!("{:?}", transaction.status));
        output.blank();
    }
}

/// Prompt for a dd/mm/yyyy date. The shape is validated and bad input
/// reprompts; calendar validity is not checked.
fn prompt_date(prompt: &str, default: Option<CalendarDate>) -> Result<CalendarDate> {
    let mut input = Input::<String>::new().with_prompt(prompt).validate_with(
        |value: &String| match parse_date(value) {
            Some(_) => Ok(()),
            None => Err("expected a date like 24/07/2021"),
        },
    );

    if let Some(date) = default {
        input = input.default(date.to_string());
    }

    let raw = input.interact_text()?;
    parse_date(&raw).ok_or_else(|| anyhow!("date failed to parse after validation: {}", raw))
}

fn parse_date(input: &str) -> Option<CalendarDate> {
    let mut parts = input.split('/');
    let day = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(CalendarDate::new(day, month, year))
}
