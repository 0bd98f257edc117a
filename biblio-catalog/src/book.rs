use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date as entered at the console (dd/mm/yyyy).
///
/// Stored exactly as given: no calendar validation is applied, so a date
/// like 31/02/2024 is representable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// A catalog entry
///
/// The ISBN is the intended unique key; the catalog itself never enforces
/// uniqueness. Prices are integer cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub publication_date: CalendarDate,
    pub price_cents: i64,
    pub quantity: u32,
}

impl Book {
    /// Create a book. Price (in cents) comes before quantity.
    pub fn new(
        title: &str,
        author: &str,
        genre: &str,
        isbn: &str,
        publication_date: CalendarDate,
        price_cents: i64,
        quantity: u32,
    ) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            isbn: isbn.to_string(),
            publication_date,
            price_cents,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_field_order() {
        // Price is the sixth argument, quantity the seventh
        let book = Book::new(
            "The Trial",
            "Franz Kafka",
            "Fiction",
            "978-0805209990",
            CalendarDate::new(26, 4, 1925),
            1999,
            3,
        );

        assert_eq!(book.price_cents, 1999);
        assert_eq!(book.quantity, 3);
    }

    #[test]
    fn test_date_display() {
        let date = CalendarDate::new(5, 3, 1987);
        assert_eq!(date.to_string(), "05/03/1987");
    }

    #[test]
    fn test_date_accepts_impossible_calendar_values() {
        // Calendar validity is not checked
        let date = CalendarDate::new(31, 2, 2024);
        assert_eq!(date.day, 31);
        assert_eq!(date.month, 2);
    }
}
