use box_counting::raster::BinaryGrid;
use box_counting::{run_sweep, BoxSchedule, Feature};

fn main() {
    env_logger::init();
    // Demo stub: box-counts a synthetic Sierpinski carpet
    let side = 243usize;
    let mut grid = BinaryGrid::new(side, side);
    for y in 0..side {
        for x in 0..side {
            grid.set(x, y, u8::from(in_carpet(x, y)));
        }
    }

    let mut root = Feature::new(grid);
    let schedule = BoxSchedule::Explicit {
        sizes: vec![[3, 3], [9, 9], [27, 27], [81, 81]],
    };
    let report = schedule
        .sizes()
        .and_then(|sizes| run_sweep(&mut root, &sizes).map_err(|e| e.to_string()));
    match report {
        Ok(report) => {
            for p in &report.points {
                println!("side={:.1} count={}", p.box_side, p.count);
            }
            println!("total_ms={:.3}", report.total_ms);
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}

fn in_carpet(mut x: usize, mut y: usize) -> bool {
    while x > 0 || y > 0 {
        if x % 3 == 1 && y % 3 == 1 {
            return false;
        }
        x /= 3;
        y /= 3;
    }
    true
}
