use std::collections::BTreeMap;

use crate::types::{CutRequirement, CutTarget, Offcut, PlanConfig, PlankAllocation};

/// Raw allocator output, folded into a `CutList` by the planner.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub full_planks: usize,
    pub cuts: BTreeMap<u32, u32>,
    pub offcuts: Vec<Offcut>,
    pub waste: f64,
    pub total_material: f64,
    pub plank_allocations: Vec<PlankAllocation>,
}

/// Assigns every requirement to a purchased plank or a pooled offcut.
///
/// Greedy largest-first: requirements are taken in descending length order
/// (stable, so equal lengths keep their layout order) and each one claims the
/// first pooled offcut long enough for the piece plus one kerf. First-fit, not
/// best-fit; the scan order decides which physical plank a piece comes from,
/// so the pool must stay in insertion order.
///
/// A requirement exactly one plank long consumes a whole plank with no cut at
/// all: no histogram entry, no kerf loss, no offcut, and no allocation record.
pub fn allocate(config: &PlanConfig, requirements: &[CutRequirement]) -> Allocation {
    let plank_length = config.plank_full_length;
    let kerf = config.saw_kerf;
    let min_cut_length = config.min_cut_length;

    let mut sorted: Vec<&CutRequirement> = requirements.iter().collect();
    sorted.sort_by(|a, b| b.length.cmp(&a.length));

    let mut full_planks = 0;
    let mut cuts: BTreeMap<u32, u32> = BTreeMap::new();
    let mut waste = 0.0;
    let mut total_material = 0.0;

    let mut pool: Vec<Offcut> = Vec::new();
    let mut plank_allocations: Vec<PlankAllocation> = Vec::new();
    let mut current_plank = 0usize;

    for req in sorted {
        let length = f64::from(req.length);

        if length == plank_length {
            // Laid whole, never touches the saw.
            full_planks += 1;
            total_material += plank_length;
            continue;
        }

        let reusable = pool
            .iter()
            .position(|o| !o.allocated && o.length >= length + kerf);

        if let Some(idx) = reusable {
            pool[idx].allocated = true;
            pool[idx].allocated_to = Some(CutTarget {
                row_index: req.row_index,
                board_index: req.board_index,
            });
            let source = pool[idx].clone();

            *cuts.entry(req.length).or_insert(0) += 1;

            // Plank numbers are assigned in the same order the records are
            // pushed, so plank n lives at index n - 1.
            if let Some(allocation) = plank_allocations.get_mut(source.source_plank - 1) {
                allocation.cuts.push(req.length);
            }

            let remainder = source.length - length - kerf;
            if remainder >= min_cut_length {
                pool.push(Offcut {
                    length: remainder,
                    source_row: source.source_row,
                    source_board: source.source_board,
                    source_plank: source.source_plank,
                    allocated: false,
                    allocated_to: None,
                });
            } else if remainder > 0.0 {
                waste += remainder;
            }
            waste += kerf;
        } else {
            current_plank += 1;
            full_planks += 1;
            total_material += plank_length;

            *cuts.entry(req.length).or_insert(0) += 1;

            plank_allocations.push(PlankAllocation {
                plank_number: current_plank,
                cuts: vec![req.length],
                offcut_length: 0.0,
            });

            let offcut_length = plank_length - length - kerf;
            if offcut_length >= min_cut_length {
                pool.push(Offcut {
                    length: offcut_length,
                    source_row: req.row_index,
                    source_board: req.board_index,
                    source_plank: current_plank,
                    allocated: false,
                    allocated_to: None,
                });
            } else if offcut_length > 0.0 {
                waste += offcut_length;
            }
            waste += kerf;
        }
    }

    // Whatever is still free in the pool is material bought but never laid.
    for offcut in &pool {
        if !offcut.allocated {
            waste += offcut.length;
            if let Some(allocation) = plank_allocations.get_mut(offcut.source_plank - 1) {
                allocation.offcut_length = offcut.length;
            }
        }
    }

    Allocation {
        full_planks,
        cuts,
        offcuts: pool,
        waste,
        total_material,
        plank_allocations,
    }
}
