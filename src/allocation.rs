//! Age-based stock/bond allocation guide

use serde::Serialize;

/// Suggested split between growth and defensive assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub age: u32,
    pub stocks_pct: u32,
    pub bonds_pct: u32,
    pub explanation: String,
}

/// Upper age bound (inclusive) and stock percentage, youngest first
const GLIDE_PATH: [(u32, u32); 4] = [(30, 85), (40, 75), (50, 65), (60, 55)];

/// Stock share for anyone past the last bound
const FINAL_STOCKS_PCT: u32 = 45;

/// Allocation for a given age
pub fn allocation_for_age(age: u32) -> Allocation {
    let stocks_pct = GLIDE_PATH
        .iter()
        .find(|&&(max_age, _)| age <= max_age)
        .map_or(FINAL_STOCKS_PCT, |&(_, pct)| pct);
    let bonds_pct = 100 - stocks_pct;

    let explanation = match age {
        0..=30 => format!(
            "At age {}, you're young! Maximize growth with {}% in stocks. Time is on your side to ride out volatility.",
            age, stocks_pct
        ),
        31..=40 => format!(
            "At age {}, maintain strong stock allocation ({}%) for continued growth while building some stability.",
            age, stocks_pct
        ),
        41..=50 => format!(
            "At age {}, balance growth and stability with {}% stocks and {}% bonds/cash.",
            age, stocks_pct, bonds_pct
        ),
        51..=60 => format!(
            "At age {}, approaching retirement. Shift toward stability with {}% in bonds/cash.",
            age, bonds_pct
        ),
        _ => format!(
            "At age {}, prioritize capital preservation with {}% in bonds/cash while maintaining {}% stocks for growth.",
            age, bonds_pct, stocks_pct
        ),
    };

    Allocation {
        age,
        stocks_pct,
        bonds_pct,
        explanation,
    }
}
