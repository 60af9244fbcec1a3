use crate::labeling::LabelCounts;
use std::fmt;

/// Text report formatter for the label distribution
pub struct DistributionReport<'a> {
    counts: &'a LabelCounts,
}

impl<'a> DistributionReport<'a> {
    /// Creates a new distribution report
    pub fn new(counts: &'a LabelCounts) -> Self {
        Self { counts }
    }
}

impl<'a> fmt::Display for DistributionReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Label Distribution")?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(f, "cancer         {}", self.counts.cancer)?;
        writeln!(f, "nonmalignant   {}", self.counts.non_malignant)?;
        writeln!(f)?;
        write!(f, "total          {}", self.counts.total())?;
        Ok(())
    }
}
