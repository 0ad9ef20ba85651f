//! Free-space query abstraction and derived metrics
//!
//! Platform-specific implementations of [`DiskSpace`] are in `src/platform/`.

use crate::constants::BYTES_PER_GB;
use crate::utils::QueryError;
use num_format::{Locale, ToFormattedString};

/// Raw figures returned by the free-space primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryResult {
    /// Bytes available to the calling user
    pub available: u64,
    /// Total capacity in bytes
    pub total: u64,
}

/// Free-space primitive for a mounted or UNC path
#[async_trait::async_trait]
pub trait DiskSpace: Send + Sync {
    /// Query available/total bytes for a path that ends with a separator
    async fn free_space(&self, path: &str) -> Result<QueryResult, QueryError>;
}

/// Usage figures for a volume with non-zero capacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskUsage {
    available: u64,
    total: u64,
}

impl TryFrom<QueryResult> for DiskUsage {
    type Error = QueryError;

    fn try_from(result: QueryResult) -> Result<Self, Self::Error> {
        if result.total == 0 {
            return Err(QueryError::ZeroCapacity);
        }

        Ok(DiskUsage {
            available: result.available,
            total: result.total,
        })
    }
}

impl DiskUsage {
    pub fn available(&self) -> u64 {
        self.available
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Capacity in binary gigabytes
    pub fn size_gb(&self) -> f64 {
        self.total as f64 / BYTES_PER_GB as f64
    }

    /// Fraction of capacity in use, `0.0..=1.0`
    pub fn percent_used(&self) -> f64 {
        self.total.saturating_sub(self.available) as f64 / self.total as f64
    }
}

/// Query a path and validate the figures
///
/// An empty path is rejected without calling the primitive.
pub async fn query_usage(disk: &dyn DiskSpace, path: &str) -> Result<DiskUsage, QueryError> {
    if path.is_empty() {
        return Err(QueryError::EmptyPath);
    }

    disk.free_space(path).await.and_then(DiskUsage::try_from)
}

/// Format with two decimals and `,` digit grouping, e.g. `1,862.52`
///
/// Ties round away from zero (`1.125` → `1.13`), as .NET `N2` does.
pub fn format_gb(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", rounded);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    match whole.parse::<u64>() {
        Ok(whole) => format!("{}.{}", whole.to_formatted_string(&Locale::en), fraction),
        // Negative or out-of-range values are shown ungrouped
        Err(_) => fixed.clone(),
    }
}

/// Format a fraction as a percentage with two decimals, e.g. `0.41` → `41.00%`
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_gb(fraction * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_session::MockDiskSpace;

    #[test]
    fn zero_capacity_is_a_query_error() {
        let result = QueryResult {
            available: 0,
            total: 0,
        };
        assert_eq!(DiskUsage::try_from(result), Err(QueryError::ZeroCapacity));
    }

    #[test]
    fn derived_metrics() {
        let usage = DiskUsage::try_from(QueryResult {
            available: 60 * BYTES_PER_GB,
            total: 100 * BYTES_PER_GB,
        })
        .expect("non-zero capacity");

        assert_eq!(usage.size_gb(), 100.0);
        assert!((usage.percent_used() - 0.40).abs() < f64::EPSILON);
    }

    #[test]
    fn available_above_total_clamps_to_empty() {
        let usage = DiskUsage::try_from(QueryResult {
            available: 20,
            total: 10,
        })
        .expect("non-zero capacity");
        assert_eq!(usage.percent_used(), 0.0);
    }

    #[test]
    fn format_gb_groups_thousands() {
        assert_eq!(format_gb(238.4712), "238.47");
        assert_eq!(format_gb(1862.519), "1,862.52");
        assert_eq!(format_gb(1234567.0), "1,234,567.00");
        assert_eq!(format_gb(0.004), "0.00");
    }

    #[test]
    fn format_rounds_ties_away_from_zero() {
        assert_eq!(format_gb(1.125), "1.13");
        assert_eq!(format_gb(2.625), "2.63");
        assert_eq!(format_percent(0.02625), "2.63%");

        // 1152 MiB is exactly 1.125 GiB
        let usage = DiskUsage::try_from(QueryResult {
            available: 0,
            total: 1152 * 1024 * 1024,
        })
        .expect("non-zero capacity");
        assert_eq!(format_gb(usage.size_gb()), "1.13");
    }

    #[tokio::test]
    async fn empty_path_fails_without_querying() {
        let disk = MockDiskSpace::new().with_volume("", 1, 2);
        assert_eq!(query_usage(&disk, "").await, Err(QueryError::EmptyPath));
        assert!(disk.calls().is_empty());
    }

    #[test]
    fn format_percent_scales_fraction() {
        assert_eq!(format_percent(0.41), "41.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(0.1234), "12.34%");
    }
}
