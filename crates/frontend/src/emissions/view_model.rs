//! Pure shaping of analytics responses for rendering.

use contracts::emissions::{HeatmapCell, NamedValue};
use contracts::enums::{IndustryType, ResourceType};

/// Dense industry × resource matrix built from sparse heatmap cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapGrid {
    pub industries: Vec<String>,
    pub resources: Vec<String>,
    /// `values[row][col]`, `None` where the backend sent no cell
    pub values: Vec<Vec<Option<f64>>>,
    pub max: f64,
}

impl HeatmapGrid {
    /// Rows and columns keep first-seen order; duplicate cells are summed.
    pub fn from_cells(cells: &[HeatmapCell]) -> Self {
        let mut industries: Vec<String> = Vec::new();
        let mut resources: Vec<String> = Vec::new();
        for cell in cells {
            if !industries.contains(&cell.industry) {
                industries.push(cell.industry.clone());
            }
            if !resources.contains(&cell.resource) {
                resources.push(cell.resource.clone());
            }
        }

        let mut values = vec![vec![None; resources.len()]; industries.len()];
        for cell in cells {
            let row = industries.iter().position(|i| *i == cell.industry);
            let col = resources.iter().position(|r| *r == cell.resource);
            if let (Some(row), Some(col)) = (row, col) {
                let slot = &mut values[row][col];
                *slot = Some(slot.unwrap_or(0.0) + cell.value);
            }
        }

        let max = values
            .iter()
            .flatten()
            .flatten()
            .fold(0.0_f64, |acc, v| acc.max(*v));

        Self {
            industries,
            resources,
            values,
            max,
        }
    }

    /// Cell intensity in `0.0..=1.0`
    pub fn intensity(&self, row: usize, col: usize) -> f64 {
        match self.values.get(row).and_then(|r| r.get(col)).copied().flatten() {
            Some(v) if self.max > 0.0 => (v / self.max).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Bar row with its share of the total, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct BarShare {
    pub name: String,
    pub value: f64,
    pub percent: f64,
}

/// Sorted descending by value. A zero total yields 0% everywhere.
pub fn bar_shares(items: &[NamedValue]) -> Vec<BarShare> {
    let total: f64 = items.iter().map(|i| i.value).sum();
    let mut shares: Vec<BarShare> = items
        .iter()
        .map(|i| BarShare {
            name: i.name.clone(),
            value: i.value,
            percent: if total > 0.0 { i.value / total * 100.0 } else { 0.0 },
        })
        .collect();
    shares.sort_by(|a, b| b.value.total_cmp(&a.value));
    shares
}

/// Chinese label for an industry code; unknown codes are shown as sent.
pub fn industry_label(code: &str) -> String {
    IndustryType::from_code(code)
        .map(|i| i.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn resource_label(code: &str) -> String {
    ResourceType::from_code(code)
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(industry: &str, resource: &str, value: f64) -> HeatmapCell {
        HeatmapCell {
            industry: industry.into(),
            resource: resource.into(),
            value,
        }
    }

    #[test]
    fn test_heatmap_grid_layout() {
        let grid = HeatmapGrid::from_cells(&[
            cell("energy", "coal", 400.0),
            cell("energy", "gas", 100.0),
            cell("mining", "coal", 200.0),
        ]);

        assert_eq!(grid.industries, vec!["energy", "mining"]);
        assert_eq!(grid.resources, vec!["coal", "gas"]);
        assert_eq!(grid.values[1][1], None);
        assert_eq!(grid.max, 400.0);
        assert_eq!(grid.intensity(1, 0), 0.5);
        assert_eq!(grid.intensity(1, 1), 0.0);
        assert_eq!(grid.intensity(9, 9), 0.0);
    }

    #[test]
    fn test_heatmap_duplicates_are_summed() {
        let grid = HeatmapGrid::from_cells(&[cell("energy", "coal", 1.5), cell("energy", "coal", 2.5)]);
        assert_eq!(grid.values, vec![vec![Some(4.0)]]);
    }

    #[test]
    fn test_empty_heatmap() {
        let grid = HeatmapGrid::from_cells(&[]);
        assert!(grid.industries.is_empty());
        assert_eq!(grid.max, 0.0);
    }

    #[test]
    fn test_bar_shares_sorted_with_percent() {
        let shares = bar_shares(&[
            NamedValue { name: "oil".into(), value: 25.0 },
            NamedValue { name: "coal".into(), value: 75.0 },
        ]);
        assert_eq!(shares[0].name, "coal");
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[1].percent, 25.0);
    }

    #[test]
    fn test_bar_shares_zero_total() {
        let shares = bar_shares(&[NamedValue { name: "nuclear".into(), value: 0.0 }]);
        assert_eq!(shares[0].percent, 0.0);
    }

    #[test]
    fn test_labels_fall_back_to_code() {
        assert_eq!(industry_label("energy"), "能源");
        assert_eq!(industry_label("钢铁"), "钢铁");
        assert_eq!(resource_label("coal"), "煤炭");
        assert_eq!(resource_label("hydrogen"), "hydrogen");
    }
}
