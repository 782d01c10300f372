use clap::Parser;
use plank_planner::planner::CutPlanner;
use plank_planner::render;
use plank_planner::requirements;
use plank_planner::types::{PlanConfig, Point};

#[derive(Parser)]
#[command(
    name = "plank_planner",
    about = "Flooring plank cutting-stock planner"
)]
struct Cli {
    /// Room dimensions (WxH in mm, e.g. 5000x4000)
    #[arg(long)]
    room: String,

    /// Full plank length in mm
    #[arg(long, default_value_t = 2400.0)]
    plank_length: f64,

    /// Plank width in mm
    #[arg(long, default_value_t = 190.0)]
    plank_width: f64,

    /// Blade kerf in mm (material lost per cut)
    #[arg(long, default_value_t = 3.0)]
    kerf: f64,

    /// Minimum usable cut/offcut length in mm
    #[arg(long, default_value_t = 300.0)]
    min_cut: f64,

    /// Per-row start offsets in mm (e.g. --offsets -300 -600 0)
    #[arg(long, num_args = 0.., allow_negative_numbers = true)]
    offsets: Vec<f64>,

    /// Show ASCII cut sheet for each plank
    #[arg(long)]
    layout: bool,
}

fn parse_room(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!("invalid room '{}', expected WxH", s));
    }
    let width = parts[0]
        .parse::<f64>()
        .map_err(|_| format!("invalid width in '{}'", s))?;
    let height = parts[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid height in '{}'", s))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("room dimensions must be positive in '{}'", s));
    }
    Ok((width, height))
}

fn main() {
    let cli = Cli::parse();

    let (room_width, room_height) = parse_room(&cli.room).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if cli.plank_length <= 0.0 || cli.plank_width <= 0.0 || cli.kerf < 0.0 || cli.min_cut < 0.0 {
        eprintln!("Error: plank dimensions must be positive and kerf/min-cut non-negative");
        std::process::exit(1);
    }

    let config = PlanConfig {
        room_polygon: vec![
            Point::new(0.0, 0.0),
            Point::new(room_width, 0.0),
            Point::new(room_width, room_height),
            Point::new(0.0, room_height),
        ],
        plank_full_length: cli.plank_length,
        plank_width: cli.plank_width,
        saw_kerf: cli.kerf,
        min_cut_length: cli.min_cut,
        row_offsets: cli.offsets,
    };

    let rows = requirements::num_rows(&config);
    let plan = CutPlanner::new(config.clone()).plan();

    println!(
        "Layout: {} board{} across {} row{}",
        plan.requirements.len(),
        if plan.requirements.len() == 1 { "" } else { "s" },
        rows,
        if rows == 1 { "" } else { "s" },
    );

    if !plan.cuts.is_empty() {
        println!("Cuts ({} unique):", plan.unique_cuts);
        for (length, count) in &plan.cuts {
            println!("  {} mm x {}", length, count);
        }
    }

    for allocation in &plan.plank_allocations {
        let cuts: Vec<String> = allocation.cuts.iter().map(|c| c.to_string()).collect();
        print!("Plank {}: cuts {}", allocation.plank_number, cuts.join(", "));
        if allocation.offcut_length > 0.0 {
            print!("; offcut {:.0} mm", allocation.offcut_length);
        }
        println!();
        if cli.layout {
            print!(
                "{}",
                render::render_plank(allocation, config.plank_full_length, config.saw_kerf)
            );
        }
    }

    println!(
        "Summary: {} plank{} purchased, {:.0} mm waste, {:.1}% efficiency",
        plan.full_planks,
        if plan.full_planks == 1 { "" } else { "s" },
        plan.waste,
        plan.efficiency,
    );
}
