// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `getCutOffDate()`: the configured reporting cut-off date.

use chrono::NaiveDate;
use mapwire_core::types::DATE_FORMAT;
use mapwire_core::{MapperFunction, MapwireError, Value, ValueType};
use mapwire_registry::{mapper_function, Wiring, WiringError};

/// Returns `attributes.cut_off_date` as a date.
#[derive(Debug, Clone)]
pub struct GetCutOffDate {
    cut_off_date: String,
    date: NaiveDate,
}

impl GetCutOffDate {
    /// Build from the raw `YYYY-MM-DD` attribute value.
    pub fn new(cut_off_date: impl Into<String>) -> Result<Self, WiringError> {
        let cut_off_date = cut_off_date.into();
        let date = NaiveDate::parse_from_str(cut_off_date.trim(), DATE_FORMAT).map_err(|e| {
            WiringError::construction(format!(
                "cut_off_date `{cut_off_date}` is not a YYYY-MM-DD date: {e}"
            ))
        })?;
        Ok(Self { cut_off_date, date })
    }

    fn configure(wiring: &mut Wiring) -> Result<Box<dyn MapperFunction>, WiringError> {
        let raw: String = wiring.attribute("cut_off_date")?;
        Ok(Box::new(Self::new(raw)?))
    }

    /// The attribute value as configured.
    pub fn cut_off_date(&self) -> &str {
        &self.cut_off_date
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl MapperFunction for GetCutOffDate {
    fn name(&self) -> &str {
        "getCutOffDate"
    }

    fn return_type(&self) -> ValueType {
        ValueType::Date
    }

    fn parameter_types(&self) -> Option<&[ValueType]> {
        Some(&[])
    }

    fn evaluate(&self, _args: &[Value]) -> Result<Value, MapwireError> {
        Ok(Value::Date(self.date))
    }
}

mapper_function! {
    GetCutOffDate {
        setter_attribute: ["cut_off_date"],
        configure: GetCutOffDate::configure,
    }
}
