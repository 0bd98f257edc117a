//! Output formatting for the console menu.

use console::style;

/// Styled printer for menu output.
pub struct Output {
    currency: String,
}

impl Output {
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
        }
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print an empty separator line.
    pub fn blank(&self) {
        println!();
    }

    /// Format integer cents with the configured currency symbol.
    pub fn price(&self, cents: i64) -> String {
        format!("{}{}.{:02}", self.currency, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formatting() {
        let output = Output::new("$");
        assert_eq!(output.price(1999), "$19.99");
        assert_eq!(output.price(100), "$1.00");
        assert_eq!(output.price(5), "$0.05");
    }

    #[test]
    fn test_price_formatting_other_currency() {
        let output = Output::new("€");
        assert_eq!(output.price(250), "€2.50");
    }
}
