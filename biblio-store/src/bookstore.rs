use biblio_catalog::{Book, CalendarDate, Catalog};
use biblio_order::{Transaction, TransactionError};
use tracing::{info, warn};

/// The bookstore aggregate: one catalog and the log of recorded transactions
pub struct Bookstore {
    catalog: Catalog,
    transactions: Vec<Transaction>,
}

impl Bookstore {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            transactions: Vec::new(),
        }
    }

    /// Add a book to the owned catalog.
    pub fn add_book(&mut self, book: Book) {
        info!("Book added to catalog: {} ({})", book.title, book.isbn);
        self.catalog.add_book(book);
    }

    /// Record and process an order transaction.
    pub fn record_order(
        &mut self,
        id: &str,
        transaction_date: CalendarDate,
        customer_id: &str,
        isbn: &str,
        quantity: u32,
    ) -> Result<(), TransactionError> {
        self.record(Transaction::order(id, transaction_date, customer_id, isbn, quantity))
    }

    /// Record and process a sale transaction.
    pub fn record_sale(
        &mut self,
        id: &str,
        transaction_date: CalendarDate,
        customer_id: &str,
        isbn: &str,
        quantity: u32,
    ) -> Result<(), TransactionError> {
        self.record(Transaction::sale(id, transaction_date, customer_id, isbn, quantity))
    }

    /// Process a transaction against the catalog and append it to the log.
    ///
    /// A transaction rejected for insufficient stock is still recorded (with
    /// status `Rejected`) and the error is returned for reporting. A
    /// transaction whose ISBN is not in the catalog is not recorded at all.
    fn record(&mut self, mut transaction: Transaction) -> Result<(), TransactionError> {
        match transaction.process(&mut self.catalog) {
            Ok(()) => {
                info!("Transaction completed: {}", transaction.id);
                self.transactions.push(transaction);
                Ok(())
            }
            Err(err @ TransactionError::InsufficientStock { .. }) => {
                warn!("Transaction rejected: {}: {}", transaction.id, err);
                self.transactions.push(transaction);
                Err(err)
            }
            Err(err) => {
                warn!("Transaction dropped: {}: {}", transaction.id, err);
                Err(err)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl Default for Bookstore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_order::TransactionStatus;

    fn stocked_store(isbn: &str, quantity: u32) -> Bookstore {
        let mut store = Bookstore::new();
        store.add_book(Book::new(
            "Stocked",
            "Author",
            "Fiction",
            isbn,
            CalendarDate::new(1, 1, 2020),
            1200,
            quantity,
        ));
        store
    }

    #[test]
    fn test_record_order_appends_and_decrements() {
        let mut store = stocked_store("111", 5);

        store
            .record_order("t-1", CalendarDate::new(2, 2, 2024), "c-1", "111", 3)
            .unwrap();

        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].status, TransactionStatus::Completed);
        assert_eq!(store.catalog().find_by_isbn("111").unwrap().quantity, 2);
    }

    #[test]
    fn test_rejected_transaction_is_still_recorded() {
        let mut store = stocked_store("111", 2);

        let result = store.record_sale("t-2", CalendarDate::new(2, 2, 2024), "c-1", "111", 10);

        assert!(matches!(result, Err(TransactionError::InsufficientStock { .. })));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].status, TransactionStatus::Rejected);
        assert_eq!(store.catalog().find_by_isbn("111").unwrap().quantity, 2);
    }

    #[test]
    fn test_unknown_isbn_records_nothing() {
        let mut store = stocked_store("111", 5);

        let result = store.record_order("t-3", CalendarDate::new(2, 2, 2024), "c-1", "999", 1);

        assert!(matches!(result, Err(TransactionError::BookNotFound(_))));
        assert!(store.transactions().is_empty());
    }
}
