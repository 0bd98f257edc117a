use biblio_catalog::{CalendarDate, Catalog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of stock-affecting transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Order,
    Sale,
}

/// Transaction status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Rejected,
}

/// A record of a stock-affecting event against a catalog entry
///
/// Transactions reference the book by ISBN and mutate stock through the
/// catalog, so a processed decrement is visible on subsequent lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub customer_id: String,
    pub isbn: String,
    pub quantity: u32,
    pub transaction_date: CalendarDate,
    pub status: TransactionStatus,
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a pending order transaction.
    pub fn order(
        id: &str,
        transaction_date: CalendarDate,
        customer_id: &str,
        isbn: &str,
        quantity: u32,
    ) -> Self {
        Self::new(TransactionKind::Order, id, transaction_date, customer_id, isbn, quantity)
    }

    /// Create a pending sale transaction.
    pub fn sale(
        id: &str,
        transaction_date: CalendarDate,
        customer_id: &str,
        isbn: &str,
        quantity: u32,
    ) -> Self {
        Self::new(TransactionKind::Sale, id, transaction_date, customer_id, isbn, quantity)
    }

    fn new(
        kind: TransactionKind,
        id: &str,
        transaction_date: CalendarDate,
        customer_id: &str,
        isbn: &str,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            customer_id: customer_id.to_string(),
            isbn: isbn.to_string(),
            quantity,
            transaction_date,
            status: TransactionStatus::Pending,
            recorded_at: Utc::now(),
        }
    }

    /// Apply this transaction against catalog stock.
    ///
    /// Runs at most once: a transaction that already completed or was
    /// rejected cannot be processed again. On insufficient stock the book
    /// quantity is left unchanged and the transaction is marked rejected.
    pub fn process(&mut self, catalog: &mut Catalog) -> Result<(), TransactionError> {
        if self.status != TransactionStatus::Pending {
            return Err(TransactionError::AlreadyProcessed(self.id.clone()));
        }

        let book = catalog
            .find_by_isbn_mut(&self.isbn)
            .map_err(|_| TransactionError::BookNotFound(self.isbn.clone()))?;

        if book.quantity < self.quantity {
            self.status = TransactionStatus::Rejected;
            return Err(TransactionError::InsufficientStock {
                requested: self.quantity,
                available: book.quantity,
            });
        }

        book.quantity -= self.quantity;
        self.status = TransactionStatus::Completed;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: u32,
        available: u32,
    },

    #[error("Transaction already processed: {0}")]
    AlreadyProcessed(String),
}
