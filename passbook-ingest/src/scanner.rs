//! Right-to-left numeric field scanner.
//!
//! Statement rows end with `... <amount> <balance>`. Column widths do not
//! survive text extraction, so instead of slicing at fixed offsets we walk the
//! tokens from the right, take the last two numbers as balance and amount, and
//! stop at the first non-numeric token to the left of them. Everything between
//! the date and that point is description.
//!
//! Example:
//!   02-01-2024 SALARY CREDIT 50,000.00 60000.00
//!   |date     |description  |amount   |balance

use passbook_core::normalize;

/// A token that parsed as a number, and where it sat on the line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericToken {
    pub value: f64,
    pub index: usize,
}

/// Result of scanning one tokenized line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanOutcome {
    /// Fewer than two trailing numeric fields
    Rejected,
    /// `description_end` is exclusive: description tokens are `1..description_end`
    Found {
        balance: NumericToken,
        amount: NumericToken,
        description_end: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

#[derive(Debug, Default)]
struct Scan {
    balance: Option<NumericToken>,
    amount: Option<NumericToken>,
    boundary: Option<usize>,
}

impl Scan {
    fn step(&mut self, index: usize, value: Option<f64>) -> Step {
        if let Some(value) = value {
            let token = NumericToken { value, index };
            match (self.balance, self.amount) {
                (None, _) => self.balance = Some(token),
                (Some(_), None) => self.amount = Some(token),
                // further numbers to the left are neither kept nor description
                _ => {}
            }
        }

        if self.amount.is_none() {
            return match value {
                Some(_) => Step::Continue,
                None => Step::Stop,
            };
        }

        match value {
            None => {
                self.boundary = Some(index + 1);
                Step::Stop
            }
            Some(_) if index == 1 => {
                self.boundary = Some(1);
                Step::Stop
            }
            Some(_) => Step::Continue,
        }
    }

    fn finish(self) -> ScanOutcome {
        match (self.balance, self.amount) {
            (Some(balance), Some(amount)) => ScanOutcome::Found {
                balance,
                amount,
                // only hit if the walk ended without locating the boundary
                description_end: self.boundary.unwrap_or(amount.index),
            },
            _ => ScanOutcome::Rejected,
        }
    }
}

/// Scan `tokens` (index 0 is the date) from the right for balance and amount.
pub fn scan(tokens: &[&str]) -> ScanOutcome {
    let mut state = Scan::default();
    for index in (1..tokens.len()).rev() {
        if state.step(index, normalize(tokens[index])) == Step::Stop {
            break;
        }
    }
    state.finish()
}

/// Description tokens `1..end` joined with single spaces. May be empty.
pub fn description(tokens: &[&str], end: usize) -> String {
    tokens.get(1..end).map(|t| t.join(" ")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(tokens: &[&str]) -> (f64, f64, usize) {
        match scan(tokens) {
            ScanOutcome::Found {
                balance,
                amount,
                description_end,
            } => (balance.value, amount.value, description_end),
            ScanOutcome::Rejected => panic!("expected a match for {tokens:?}"),
        }
    }

    #[test]
    fn test_two_trailing_numbers() {
        let toks = ["03-01-2024", "RENT", "PAYMENT", "15000.00", "45000.00"];
        let (bal, amt, end) = found(&toks);
        assert_eq!(bal, 45000.0);
        assert_eq!(amt, 15000.0);
        assert_eq!(end, 3);
        assert_eq!(description(&toks, end), "RENT PAYMENT");
    }

    #[test]
    fn test_indices_recorded() {
        let toks = ["02-01-2024", "SALARY", "50,000.00", "60000.00"];
        match scan(&toks) {
            ScanOutcome::Found { balance, amount, .. } => {
                assert_eq!(balance.index, 3);
                assert_eq!(amount.index, 2);
            }
            ScanOutcome::Rejected => panic!("should match"),
        }
    }

    #[test]
    fn test_single_number_rejected() {
        assert_eq!(scan(&["01-01-2024", "100.00"]), ScanOutcome::Rejected);
        assert_eq!(scan(&["01-01-2024", "OPENING", "100.00"]), ScanOutcome::Rejected);
    }

    #[test]
    fn test_date_only_rejected() {
        assert_eq!(scan(&["01-01-2024"]), ScanOutcome::Rejected);
        assert_eq!(scan(&[]), ScanOutcome::Rejected);
    }

    #[test]
    fn test_trailing_text_rejects_line() {
        // a word after the last number means this is not an amount/balance row
        let toks = ["01-01-2024", "ATM", "2000", "98000", "Cr"];
        assert_eq!(scan(&toks), ScanOutcome::Rejected);
    }

    #[test]
    fn test_null_marker_breaks_numeric_run() {
        let toks = ["01-01-2024", "UPI", "-", "250.00", "9750.00"];
        let (_, amt, end) = found(&toks);
        assert_eq!(amt, 250.0);
        assert_eq!(end, 3);
        assert_eq!(description(&toks, end), "UPI -");
    }

    #[test]
    fn test_third_number_is_skipped_not_description() {
        let toks = ["01-01-2024", "CHQ", "000123", "500.00", "1500.00"];
        let (bal, amt, end) = found(&toks);
        assert_eq!((bal, amt), (1500.0, 500.0));
        assert_eq!(end, 2);
        assert_eq!(description(&toks, end), "CHQ");
    }

    #[test]
    fn test_numbers_right_after_date_give_empty_description() {
        let toks = ["01-01-2024", "100", "200"];
        let (bal, amt, end) = found(&toks);
        assert_eq!((bal, amt, end), (200.0, 100.0, 1));
        assert_eq!(description(&toks, end), "");
    }

    #[test]
    fn test_all_numeric_after_date() {
        let toks = ["01-01-2024", "7", "100", "200"];
        let (bal, amt, end) = found(&toks);
        assert_eq!((bal, amt, end), (200.0, 100.0, 1));
    }

    #[test]
    fn test_boundary_fallback_uses_amount_index() {
        // `scan` always locates the boundary once two numbers are held; the
        // fallback is exercised directly on the state
        let state = Scan {
            balance: Some(NumericToken { value: 2.0, index: 4 }),
            amount: Some(NumericToken { value: 1.0, index: 3 }),
            boundary: None,
        };
        match state.finish() {
            ScanOutcome::Found { description_end, .. } => assert_eq!(description_end, 3),
            ScanOutcome::Rejected => panic!("two numbers held"),
        }
    }

    #[test]
    fn test_description_out_of_range_is_empty() {
        assert_eq!(description(&["01-01-2024"], 3), "");
        assert_eq!(description(&["01-01-2024", "A"], 0), "");
    }
}
