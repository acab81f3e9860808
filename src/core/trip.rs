//! A trip owns its expenses and answers the aggregation and budget queries.

use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

use super::expense::{Expense, ExpenseCategory, MethodTotals, TripKind};

#[derive(Debug, Error, PartialEq)]
pub enum TripError {
    #[error("no active trip: today's date is outside the trip window")]
    NoActiveTrip,
    #[error("trip start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("daily budget must be non-negative, got {0}")]
    NegativeBudget(f64),
    #[error("expense amount must be non-negative, got {0}")]
    NegativeAmount(f64),
}

/// Expected versus actual spend as of a given date. All fields are zero when
/// the trip has not started yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub days_elapsed: i64,
    pub expected_spend: f64,
    pub actual_spend: f64,
}

impl BudgetStatus {
    /// Positive means under budget (savings), negative means overspent.
    pub fn variance(&self) -> f64 {
        self.expected_spend - self.actual_spend
    }
}

#[derive(Debug)]
pub struct Trip {
    pub kind: TripKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_budget: f64,
    /// Currency expenses are incurred in at the destination.
    pub currency: String,
    expenses: Vec<Expense>,
}

impl Trip {
    pub fn new(
        kind: TripKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_budget: f64,
        currency: &str,
    ) -> Result<Self, TripError> {
        if start_date > end_date {
            return Err(TripError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        if daily_budget < 0.0 {
            return Err(TripError::NegativeBudget(daily_budget));
        }
        Ok(Trip {
            kind,
            start_date,
            end_date,
            daily_budget,
            currency: currency.to_string(),
            expenses: Vec::new(),
        })
    }

    /// Whether `today` falls inside the trip window, inclusive on both ends.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Converted totals per day, broken down by payment method. Days without
    /// expenses do not appear in the map.
    pub fn totals_by_day(&self) -> HashMap<NaiveDate, MethodTotals> {
        let mut report: HashMap<NaiveDate, MethodTotals> = HashMap::new();
        for expense in &self.expenses {
            report
                .entry(expense.date)
                .or_default()
                .record(expense.method, expense.converted_amount);
        }
        report
    }

    /// Converted totals per category, broken down by payment method.
    pub fn totals_by_category(&self) -> HashMap<ExpenseCategory, MethodTotals> {
        let mut report: HashMap<ExpenseCategory, MethodTotals> = HashMap::new();
        for expense in &self.expenses {
            report
                .entry(expense.category)
                .or_default()
                .record(expense.method, expense.converted_amount);
        }
        report
    }

    /// Budget figures accumulated up to `as_of`, capped at the trip end.
    /// Only expenses dated inside `[start_date, min(as_of, end_date)]` count
    /// towards the actual spend.
    pub fn budget_status(&self, as_of: NaiveDate) -> BudgetStatus {
        if as_of < self.start_date {
            return BudgetStatus {
                days_elapsed: 0,
                expected_spend: 0.0,
                actual_spend: 0.0,
            };
        }

        let effective_end = self.end_date.min(as_of);
        let days_elapsed = (effective_end - self.start_date).num_days() + 1;
        let expected_spend = days_elapsed as f64 * self.daily_budget;
        let actual_spend = self
            .expenses
            .iter()
            .filter(|e| self.start_date <= e.date && e.date <= effective_end)
            .map(|e| e.converted_amount)
            .sum();

        BudgetStatus {
            days_elapsed,
            expected_spend,
            actual_spend,
        }
    }

    /// Signed budget difference as of `as_of`: positive means under budget.
    pub fn budget_variance(&self, as_of: NaiveDate) -> f64 {
        self.budget_status(as_of).variance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expense::PaymentMethod;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(start: NaiveDate, end: NaiveDate, daily_budget: f64) -> Trip {
        Trip::new(TripKind::Domestic, start, end, daily_budget, "COP").unwrap()
    }

    fn expense(
        date: NaiveDate,
        amount: f64,
        category: ExpenseCategory,
        method: PaymentMethod,
    ) -> Expense {
        Expense::new(date, amount, category, method, amount)
    }

    #[test]
    fn rejects_inverted_date_range() {
        let result = Trip::new(
            TripKind::Domestic,
            date(2025, 6, 10),
            date(2025, 6, 1),
            100_000.0,
            "COP",
        );
        assert_eq!(
            result.unwrap_err(),
            TripError::InvalidDateRange {
                start: date(2025, 6, 10),
                end: date(2025, 6, 1),
            }
        );
    }

    #[test]
    fn rejects_negative_budget() {
        let result = Trip::new(
            TripKind::Domestic,
            date(2025, 6, 1),
            date(2025, 6, 10),
            -1.0,
            "COP",
        );
        assert_eq!(result.unwrap_err(), TripError::NegativeBudget(-1.0));
    }

    #[test]
    fn active_window_is_inclusive() {
        let trip = trip(date(2025, 6, 1), date(2025, 6, 5), 100_000.0);
        assert!(!trip.is_active(date(2025, 5, 31)));
        assert!(trip.is_active(date(2025, 6, 1)));
        assert!(trip.is_active(date(2025, 6, 5)));
        assert!(!trip.is_active(date(2025, 6, 6)));
    }

    #[test]
    fn totals_by_category_groups_per_method() {
        let mut trip = trip(date(2025, 6, 1), date(2025, 6, 10), 100_000.0);
        trip.add_expense(expense(
            date(2025, 6, 1),
            50_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Cash,
        ));
        trip.add_expense(expense(
            date(2025, 6, 1),
            70_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Card,
        ));
        trip.add_expense(expense(
            date(2025, 6, 2),
            30_000.0,
            ExpenseCategory::Transport,
            PaymentMethod::Cash,
        ));

        let report = trip.totals_by_category();
        assert_eq!(report.len(), 2);

        let food = report[&ExpenseCategory::Food];
        assert_eq!(food.cash, 50_000.0);
        assert_eq!(food.card, 70_000.0);
        assert_eq!(food.total, 120_000.0);

        let transport = report[&ExpenseCategory::Transport];
        assert_eq!(transport.cash, 30_000.0);
        assert_eq!(transport.card, 0.0);
        assert_eq!(transport.total, 30_000.0);
    }

    #[test]
    fn totals_by_day_groups_per_method() {
        let mut trip = trip(date(2025, 6, 1), date(2025, 6, 10), 100_000.0);
        trip.add_expense(expense(
            date(2025, 6, 1),
            20_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Card,
        ));
        trip.add_expense(expense(
            date(2025, 6, 1),
            10_000.0,
            ExpenseCategory::Transport,
            PaymentMethod::Cash,
        ));
        trip.add_expense(expense(
            date(2025, 6, 2),
            15_000.0,
            ExpenseCategory::Entertainment,
            PaymentMethod::Card,
        ));

        let report = trip.totals_by_day();
        assert_eq!(report.len(), 2);

        let day1 = report[&date(2025, 6, 1)];
        assert_eq!(day1.cash, 10_000.0);
        assert_eq!(day1.card, 20_000.0);
        assert_eq!(day1.total, 30_000.0);

        let day2 = report[&date(2025, 6, 2)];
        assert_eq!(day2.cash, 0.0);
        assert_eq!(day2.card, 15_000.0);
        assert_eq!(day2.total, 15_000.0);
    }

    #[test]
    fn per_group_totals_are_consistent() {
        let mut trip = trip(date(2025, 6, 1), date(2025, 6, 10), 100_000.0);
        trip.add_expense(expense(
            date(2025, 6, 1),
            12_500.0,
            ExpenseCategory::Shopping,
            PaymentMethod::Cash,
        ));
        trip.add_expense(expense(
            date(2025, 6, 1),
            7_300.0,
            ExpenseCategory::Shopping,
            PaymentMethod::Card,
        ));
        trip.add_expense(expense(
            date(2025, 6, 3),
            9_900.0,
            ExpenseCategory::Lodging,
            PaymentMethod::Card,
        ));

        for totals in trip.totals_by_day().values() {
            assert!((totals.cash + totals.card - totals.total).abs() < 1e-9);
        }
        for totals in trip.totals_by_category().values() {
            assert!((totals.cash + totals.card - totals.total).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_trip_has_empty_reports() {
        let trip = trip(date(2025, 6, 1), date(2025, 6, 5), 50_000.0);
        assert!(trip.totals_by_day().is_empty());
        assert!(trip.totals_by_category().is_empty());
    }

    #[test]
    fn variance_is_zero_before_trip_starts() {
        let mut trip = trip(date(2025, 6, 1), date(2025, 6, 5), 50_000.0);
        trip.add_expense(expense(
            date(2025, 6, 1),
            10_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Cash,
        ));
        assert_eq!(trip.budget_variance(date(2025, 5, 31)), 0.0);
    }

    #[test]
    fn variance_without_expenses_is_full_expected_budget() {
        let trip = trip(date(2025, 6, 1), date(2025, 6, 5), 50_000.0);
        // 3 elapsed days * 50000
        assert_eq!(trip.budget_variance(date(2025, 6, 3)), 150_000.0);
    }

    #[test]
    fn variance_caps_elapsed_days_at_trip_end() {
        let trip = trip(date(2025, 6, 1), date(2025, 6, 5), 50_000.0);
        let status = trip.budget_status(date(2025, 6, 30));
        assert_eq!(status.days_elapsed, 5);
        assert_eq!(status.expected_spend, 250_000.0);
    }

    #[test]
    fn variance_excludes_expenses_after_as_of_date() {
        let mut trip = trip(date(2025, 6, 1), date(2025, 6, 10), 100_000.0);
        trip.add_expense(expense(
            date(2025, 6, 1),
            90_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Cash,
        ));
        trip.add_expense(expense(
            date(2025, 6, 2),
            110_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Card,
        ));
        // Dated after the as-of date, must not count.
        trip.add_expense(expense(
            date(2025, 6, 4),
            100_000.0,
            ExpenseCategory::Food,
            PaymentMethod::Cash,
        ));

        // 3 days * 100000 expected, 200000 spent
        assert_eq!(trip.budget_variance(date(2025, 6, 3)), 100_000.0);
    }

    #[test]
    fn overspending_yields_negative_variance() {
        let mut trip = trip(date(2025, 6, 1), date(2025, 6, 5), 50_000.0);
        trip.add_expense(expense(
            date(2025, 6, 1),
            80_000.0,
            ExpenseCategory::Entertainment,
            PaymentMethod::Card,
        ));
        assert_eq!(trip.budget_variance(date(2025, 6, 1)), -30_000.0);
    }
}
