//! Expense records and the per-group totals accumulator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripKind {
    Domestic,
    International,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Transport,
    Lodging,
    Food,
    Entertainment,
    Shopping,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseCategory::Transport => write!(f, "Transport"),
            ExpenseCategory::Lodging => write!(f, "Lodging"),
            ExpenseCategory::Food => write!(f, "Food"),
            ExpenseCategory::Entertainment => write!(f, "Entertainment"),
            ExpenseCategory::Shopping => write!(f, "Shopping"),
        }
    }
}

/// A single dated expenditure. `converted_amount` is the value in the home
/// currency; it is fixed at construction, so an expense can never be stored
/// without it.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub original_amount: f64,
    pub category: ExpenseCategory,
    pub method: PaymentMethod,
    pub converted_amount: f64,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        original_amount: f64,
        category: ExpenseCategory,
        method: PaymentMethod,
        converted_amount: f64,
    ) -> Self {
        Expense {
            date,
            original_amount,
            category,
            method,
            converted_amount,
        }
    }
}

/// Totals for one report group, broken down by payment method.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MethodTotals {
    pub cash: f64,
    pub card: f64,
    pub total: f64,
}

impl MethodTotals {
    pub fn record(&mut self, method: PaymentMethod, amount: f64) {
        match method {
            PaymentMethod::Cash => self.cash += amount,
            PaymentMethod::Card => self.card += amount,
        }
        self.total += amount;
    }
}
