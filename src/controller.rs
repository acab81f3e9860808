//! Orchestrates the trip lifecycle: one active trip, expense registration
//! through the currency converter, and report access.

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

use crate::core::currency::{self, Conversion, CurrencyRateProvider};
use crate::core::{
    Clock, Expense, ExpenseCategory, MethodTotals, PaymentMethod, Trip, TripError, TripKind,
};

pub struct TripController {
    trip: Option<Trip>,
    rates: Box<dyn CurrencyRateProvider>,
    clock: Box<dyn Clock>,
    home_currency: String,
}

impl TripController {
    pub fn new(
        rates: Box<dyn CurrencyRateProvider>,
        clock: Box<dyn Clock>,
        home_currency: &str,
    ) -> Self {
        TripController {
            trip: None,
            rates,
            clock,
            home_currency: home_currency.to_string(),
        }
    }

    /// Starts a new trip, replacing any previous one.
    pub fn start_trip(
        &mut self,
        kind: TripKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_budget: f64,
        currency: &str,
    ) -> Result<(), TripError> {
        let trip = Trip::new(kind, start_date, end_date, daily_budget, currency)?;
        debug!(?start_date, ?end_date, daily_budget, currency, "Trip started");
        self.trip = Some(trip);
        Ok(())
    }

    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_ref()
    }

    /// Registers an expense on the active trip. The gate is against today's
    /// real date, not the expense date: registration is only allowed while
    /// the trip is underway. The expense amount is converted from the trip's
    /// currency into the home currency before it is stored.
    pub async fn register_expense(
        &mut self,
        date: NaiveDate,
        amount: f64,
        category: ExpenseCategory,
        method: PaymentMethod,
    ) -> Result<Conversion, TripError> {
        if amount < 0.0 {
            return Err(TripError::NegativeAmount(amount));
        }

        let today = self.clock.today();
        let trip = match self.trip.as_mut() {
            Some(trip) if trip.is_active(today) => trip,
            _ => return Err(TripError::NoActiveTrip),
        };

        let conversion =
            currency::convert(self.rates.as_ref(), amount, &trip.currency, &self.home_currency)
                .await;
        trip.add_expense(Expense::new(
            date,
            amount,
            category,
            method,
            conversion.amount(),
        ));
        Ok(conversion)
    }

    pub fn totals_by_day(&self) -> Result<HashMap<NaiveDate, MethodTotals>, TripError> {
        self.trip
            .as_ref()
            .map(Trip::totals_by_day)
            .ok_or(TripError::NoActiveTrip)
    }

    pub fn totals_by_category(&self) -> Result<HashMap<ExpenseCategory, MethodTotals>, TripError> {
        self.trip
            .as_ref()
            .map(Trip::totals_by_category)
            .ok_or(TripError::NoActiveTrip)
    }

    /// How much the trip is over budget as of `as_of`: the negation of
    /// [`Trip::budget_variance`], so positive means overspent.
    pub fn overspend(&self, as_of: NaiveDate) -> Result<f64, TripError> {
        self.trip
            .as_ref()
            .map(|trip| -trip.budget_variance(as_of))
            .ok_or(TripError::NoActiveTrip)
    }
}
