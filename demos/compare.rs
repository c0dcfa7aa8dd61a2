use std::time::Instant;
use terrain_pathfinding::{Movement, Pathfinder, Point, Strategy, TerrainGraph, TerrainGrid};

// Runs both strategies on the same hilly terrain and reports cost, expanded cells and time.

fn main() {
    const N: i32 = 40;
    let mut grid = TerrainGrid::new(N as usize, N as usize, 0.0);
    grid.set_movement("c".parse::<Movement>().unwrap());
    for x in 0..N {
        for y in 0..N {
            let (fx, fy) = (x as f64 / 6.0, y as f64 / 9.0);
            grid.set_elevation(Point::new(x, y), 2.0 + fx.sin() * fy.cos() * 2.0).unwrap();
        }
    }
    for y in 5..N - 5 {
        grid.set_blocked(Point::new(N / 2, y), true).unwrap();
    }
    grid.update();

    for name in ["dijkstra", "astar"] {
        let strategy: Strategy = name.parse().unwrap();
        let started = Instant::now();
        let result = Pathfinder::new(strategy).find_path(&grid).unwrap();
        let elapsed = started.elapsed();
        println!("{}", strategy);
        println!(
            "PathCost, {}, Uncovered, {}, TimeTaken, {}",
            result.cost,
            result.expanded,
            elapsed.as_millis()
        );
        for y in 0..N {
            let row = (0..N)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == grid.start() {
                        'S'
                    } else if p == grid.goal() {
                        'G'
                    } else if result.path.contains(&p) {
                        '*'
                    } else if grid.is_blocked(&p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            println!("{}", row);
        }
    }
}
