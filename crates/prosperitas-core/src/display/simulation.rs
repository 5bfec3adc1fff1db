//! Growth simulation formatting.

use std::fmt;

use crate::models::{GrowthSnapshot, GrowthSummary};

/// Whole currency amount formatted as `R$ 12.345`.
pub struct Currency(pub i64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}R$ {grouped}")
    }
}

/// Year-by-year table of a simulation.
pub struct GrowthTable<'a>(pub &'a [GrowthSnapshot]);

impl fmt::Display for GrowthTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Year | Total | Contributed | Interest |")?;
        writeln!(f, "|-----:|------:|------------:|---------:|")?;
        for s in self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                s.year,
                Currency(s.total),
                Currency(s.contributed),
                Currency(s.interest)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for GrowthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## After {} years", self.years)?;
        writeln!(f)?;
        writeln!(f, "- Final balance: {}", Currency(self.final_total))?;
        writeln!(f, "- Contributed: {}", Currency(self.total_contributed))?;
        writeln!(f, "- Interest earned: {}", Currency(self.total_interest))
    }
}
