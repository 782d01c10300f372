use crate::allocator;
use crate::requirements;
use crate::types::{CutList, PlanConfig};

/// Turns a room layout into a purchasing and cutting plan.
///
/// Pure and deterministic: the same configuration always yields the same
/// `CutList`, so callers searching over candidate row offsets can score each
/// one with a fresh `plan()` call, concurrently if they like.
pub struct CutPlanner {
    config: PlanConfig,
}

impl CutPlanner {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn plan(&self) -> CutList {
        let requirements = requirements::generate(&self.config);
        let allocation = allocator::allocate(&self.config, &requirements);

        let efficiency = if allocation.total_material > 0.0 {
            (allocation.total_material - allocation.waste) / allocation.total_material * 100.0
        } else {
            0.0
        };

        CutList {
            full_planks: allocation.full_planks,
            unique_cuts: allocation.cuts.len(),
            cuts: allocation.cuts,
            offcuts: allocation.offcuts,
            waste: allocation.waste,
            total_material: allocation.total_material,
            efficiency,
            requirements,
            plank_allocations: allocation.plank_allocations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardPosition, Point};

    fn room(width: f64, height: f64, offsets: Vec<f64>) -> PlanConfig {
        PlanConfig {
            room_polygon: vec![Point::new(0.0, 0.0), Point::new(width, height)],
            row_offsets: offsets,
            ..PlanConfig::default()
        }
    }

    /// Checks the accounting identities that must hold for any plan.
    fn assert_plan_consistent(config: &PlanConfig, plan: &CutList) {
        assert_eq!(
            plan.total_material,
            plan.full_planks as f64 * config.plank_full_length
        );
        assert!(plan.waste >= 0.0 && plan.waste <= plan.total_material);
        assert!(plan.efficiency >= 0.0 && plan.efficiency <= 100.0);
        assert_eq!(plan.unique_cuts, plan.cuts.len());

        // Each requirement is either an uncut full plank or one histogram entry.
        let exact = plan
            .requirements
            .iter()
            .filter(|r| f64::from(r.length) == config.plank_full_length)
            .count();
        let histogram_total: u32 = plan.cuts.values().sum();
        assert_eq!(exact + histogram_total as usize, plan.requirements.len());

        for offcut in &plan.offcuts {
            assert!(offcut.length >= config.min_cut_length);
            assert_eq!(offcut.allocated, offcut.allocated_to.is_some());
        }
    }

    #[test]
    fn test_single_exact_board_room() {
        let config = room(190.0, 2400.0, vec![]);
        let plan = CutPlanner::new(config.clone()).plan();
        assert_plan_consistent(&config, &plan);

        assert_eq!(plan.requirements.len(), 1);
        assert_eq!(plan.requirements[0].position, BoardPosition::Full);
        assert_eq!(plan.full_planks, 1);
        assert!(plan.cuts.is_empty());
        assert_eq!(plan.waste, 0.0);
        assert_eq!(plan.total_material, 2400.0);
        assert_eq!(plan.efficiency, 100.0);
    }

    #[test]
    fn test_room_with_trailing_cut() {
        let config = room(190.0, 3000.0, vec![]);
        let plan = CutPlanner::new(config.clone()).plan();
        assert_plan_consistent(&config, &plan);

        assert_eq!(plan.full_planks, 2);
        assert_eq!(plan.cuts.get(&600), Some(&1));
        assert_eq!(plan.total_material, 4800.0);
        assert_eq!(plan.waste, 1800.0);
        assert!((plan.efficiency - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_staggered_rows_reuse_offcuts() {
        // Two rows, second shifted so its end cut can come from the first
        // row's offcut.
        let config = room(380.0, 3000.0, vec![0.0, -1200.0]);
        let plan = CutPlanner::new(config.clone()).plan();
        assert_plan_consistent(&config, &plan);

        assert!(plan.offcuts.iter().any(|o| o.allocated));
        assert!(plan.efficiency > 62.5);
    }

    #[test]
    fn test_flat_room_yields_empty_plan() {
        let config = room(1000.0, 0.0, vec![]);
        let plan = CutPlanner::new(config.clone()).plan();
        assert_plan_consistent(&config, &plan);

        assert!(plan.requirements.is_empty());
        assert_eq!(plan.total_material, 0.0);
        assert_eq!(plan.efficiency, 0.0);
    }

    #[test]
    fn test_degenerate_polygon_falls_back_to_defaults() {
        let config = PlanConfig {
            room_polygon: vec![],
            ..PlanConfig::default()
        };
        let plan = CutPlanner::new(config.clone()).plan();
        assert_plan_consistent(&config, &plan);

        // 5000 / 190 = 26.3 -> 27 rows over a 4000-high room.
        assert_eq!(
            plan.requirements
                .iter()
                .map(|r| r.row_index)
                .max()
                .unwrap(),
            26
        );
        assert!(plan.full_planks > 0);
    }

    #[test]
    fn test_identical_configs_give_identical_plans() {
        let config = room(950.0, 4321.0, vec![-300.0, -900.0, -150.0, 0.0, -2000.0]);
        let first = CutPlanner::new(config.clone()).plan();
        let second = CutPlanner::new(config).plan();
        assert_eq!(first, second);
    }

    #[test]
    fn test_varied_offsets_stay_consistent() {
        for shift in [0.0, -123.0, -600.0, -1199.5, -2399.0] {
            let config = room(760.0, 3456.0, vec![shift, shift / 2.0, 0.0, shift]);
            let plan = CutPlanner::new(config.clone()).plan();
            assert_plan_consistent(&config, &plan);
        }
    }
}
