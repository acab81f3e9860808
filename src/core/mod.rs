//! Core business logic abstractions

pub mod clock;
pub mod currency;
pub mod expense;
pub mod trip;

// Re-export main types for cleaner imports
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{Conversion, CurrencyRateProvider};
pub use expense::{Expense, ExpenseCategory, MethodTotals, PaymentMethod, TripKind};
pub use trip::{BudgetStatus, Trip, TripError};
