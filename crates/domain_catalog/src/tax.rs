//! IVA tax categories

use core_kernel::{CoreError, Rate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IVA bracket a product or line item is billed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCategory {
    /// Exempt from IVA
    #[serde(rename = "exentas")]
    Exempt,
    /// 5% bracket
    #[serde(rename = "iva5")]
    Iva5,
    /// 10% bracket
    #[serde(rename = "iva10")]
    Iva10,
}

impl TaxCategory {
    /// All categories in display order
    pub const ALL: [TaxCategory; 3] = [TaxCategory::Exempt, TaxCategory::Iva5, TaxCategory::Iva10];

    /// Tax rate charged on the bracket subtotal
    pub fn rate(&self) -> Rate {
        match self {
            TaxCategory::Exempt => Rate::zero(),
            TaxCategory::Iva5 => Rate::new(dec!(0.05)),
            TaxCategory::Iva10 => Rate::new(dec!(0.10)),
        }
    }

    /// Wire name used by the invoicing service
    pub fn code(&self) -> &'static str {
        match self {
            TaxCategory::Exempt => "exentas",
            TaxCategory::Iva5 => "iva5",
            TaxCategory::Iva10 => "iva10",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            TaxCategory::Exempt => "Exentas",
            TaxCategory::Iva5 => "IVA 5%",
            TaxCategory::Iva10 => "IVA 10%",
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaxCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxCategory::ALL
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown_value("tax category", s))
    }
}
