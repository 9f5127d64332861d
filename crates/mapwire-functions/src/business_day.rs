// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business-day arithmetic backed by the shared [`BusinessCalendar`].

use std::sync::Arc;

use chrono::NaiveDate;
use mapwire_core::{MapperFunction, MapwireError, Value, ValueType};
use mapwire_registry::{mapper_function, Wiring, WiringError};

use crate::calendar::BusinessCalendar;

fn date_arg(function: &str, args: &[Value], index: usize) -> Result<NaiveDate, MapwireError> {
    args.get(index)
        .and_then(Value::as_date)
        .ok_or_else(|| MapwireError::InvalidArgument {
            function: function.to_string(),
            index,
            expected: ValueType::Date,
            found: args.get(index).map_or(ValueType::Void, Value::value_type),
        })
}

/// `isBusinessDay(date)`.
pub struct IsBusinessDay {
    calendar: Arc<BusinessCalendar>,
}

impl IsBusinessDay {
    pub fn new(calendar: Arc<BusinessCalendar>) -> Self {
        Self { calendar }
    }

    fn configure(wiring: &mut Wiring) -> Result<Box<dyn MapperFunction>, WiringError> {
        Ok(Box::new(Self::new(wiring.dependency()?)))
    }
}

impl MapperFunction for IsBusinessDay {
    fn name(&self) -> &str {
        "isBusinessDay"
    }

    fn return_type(&self) -> ValueType {
        ValueType::Bool
    }

    fn parameter_types(&self) -> Option<&[ValueType]> {
        Some(&[ValueType::Date])
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, MapwireError> {
        let date = date_arg(self.name(), args, 0)?;
        Ok(Value::Bool(self.calendar.is_business_day(date)))
    }
}

mapper_function! {
    IsBusinessDay {
        setter_class: [BusinessCalendar],
        configure: IsBusinessDay::configure,
    }
}

/// `addBusinessDays(date, n)`.
pub struct AddBusinessDays {
    calendar: Arc<BusinessCalendar>,
}

impl AddBusinessDays {
    pub fn new(calendar: Arc<BusinessCalendar>) -> Self {
        Self { calendar }
    }

    fn configure(wiring: &mut Wiring) -> Result<Box<dyn MapperFunction>, WiringError> {
        Ok(Box::new(Self::new(wiring.dependency()?)))
    }
}

impl MapperFunction for AddBusinessDays {
    fn name(&self) -> &str {
        "addBusinessDays"
    }

    fn return_type(&self) -> ValueType {
        ValueType::Date
    }

    fn parameter_types(&self) -> Option<&[ValueType]> {
        Some(&[ValueType::Date, ValueType::Int])
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, MapwireError> {
        let date = date_arg(self.name(), args, 0)?;
        let days = args
            .get(1)
            .and_then(Value::as_int)
            .ok_or_else(|| MapwireError::InvalidArgument {
                function: self.name().to_string(),
                index: 1,
                expected: ValueType::Int,
                found: args.get(1).map_or(ValueType::Void, Value::value_type),
            })?;
        self.calendar
            .add_business_days(date, days)
            .map(Value::Date)
            .ok_or_else(|| MapwireError::Evaluation {
                function: self.name().to_string(),
                message: format!("cannot move {days} business days from {date}"),
            })
    }
}

mapper_function! {
    AddBusinessDays {
        setter_class: [BusinessCalendar],
        configure: AddBusinessDays::configure,
    }
}
