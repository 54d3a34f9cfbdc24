//! Payment terms (condición de pago)

use core_kernel::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer settles the invoice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentTerms {
    /// Paid on issuance (contado)
    #[default]
    Cash,
    /// Paid within the given number of days
    Credit { days: u16 },
}

impl PaymentTerms {
    /// The terms offered by default, in display order
    pub fn standard_options() -> Vec<PaymentTerms> {
        vec![
            PaymentTerms::Cash,
            PaymentTerms::Credit { days: 15 },
            PaymentTerms::Credit { days: 30 },
            PaymentTerms::Credit { days: 60 },
            PaymentTerms::Credit { days: 90 },
        ]
    }

    /// Returns true for credit terms
    pub fn is_credit(&self) -> bool {
        matches!(self, PaymentTerms::Credit { .. })
    }

    /// Display label, e.g. "Contado" or "Crédito 30 días"
    pub fn label(&self) -> String {
        match self {
            PaymentTerms::Cash => "Contado".to_string(),
            PaymentTerms::Credit { days } => format!("Crédito {} días", days),
        }
    }
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PaymentTerms {
    type Err = CoreError;

    /// Parses a label. Accents and case are optional: "credito 30 dias" works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('é', "e").replace('í', "i");

        if normalized == "contado" {
            return Ok(PaymentTerms::Cash);
        }

        let days = normalized
            .strip_prefix("credito")
            .map(|rest| rest.trim().trim_end_matches("dias").trim())
            .and_then(|days| days.parse::<u16>().ok())
            .filter(|days| *days > 0)
            .ok_or_else(|| CoreError::unknown_value("payment terms", s))?;

        Ok(PaymentTerms::Credit { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip() {
        for terms in PaymentTerms::standard_options() {
            assert_eq!(terms.label().parse::<PaymentTerms>().unwrap(), terms);
        }
    }

    #[test]
    fn test_parse_without_accents() {
        assert_eq!(
            "credito 45 dias".parse::<PaymentTerms>().unwrap(),
            PaymentTerms::Credit { days: 45 }
        );
        assert_eq!("CONTADO".parse::<PaymentTerms>().unwrap(), PaymentTerms::Cash);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("Crédito 0 días".parse::<PaymentTerms>().is_err());
        assert!("a plazo".parse::<PaymentTerms>().is_err());
    }

    #[test]
    fn test_default_is_cash() {
        assert_eq!(PaymentTerms::default(), PaymentTerms::Cash);
        assert!(!PaymentTerms::Cash.is_credit());
    }
}
