use grid_astar::render::{GridView, PathView, ScoreView, SolutionView};
use grid_astar::{AStar, Coord, Size};
use std::process;

// (row, col)
const BLOCKS: &[(i32, i32)] = &[(0, 1), (1, 1), (1, 2), (1, 3), (2, 3), (2, 2)];

fn main() {
    env_logger::init();

    let blocks = BLOCKS.iter().map(|&(row, col)| Coord::new(col, row));
    let start = Coord::new(3, 3);
    let goal = Coord::new(0, 0);
    let mut astar = match AStar::new(Size::new(4, 4), start, goal, blocks) {
        Ok(astar) => astar,
        Err(error) => {
            eprintln!("invalid search: {}", error);
            process::exit(1);
        }
    };

    print!("{}", GridView(&astar));
    println!();

    astar.process();

    print!("{}", ScoreView(&astar));
    println!();

    match astar.reconstruct_path() {
        Some(path) => {
            println!("{}", PathView(&path));
            println!("Cost: {}", path.cost());
            println!();
            print!("{}", SolutionView(&astar));
        }
        None => println!("No possible path"),
    }
}
