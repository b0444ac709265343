use crate::astar::AStar;
use crate::render::*;
use grid_2d::{Coord, Size};

fn reference_demo() -> AStar {
    let blocks = [(0, 1), (1, 1), (1, 2), (1, 3), (2, 3), (2, 2)]
        .iter()
        .map(|&(row, col)| Coord::new(col, row))
        .collect::<Vec<_>>();
    AStar::new(Size::new(4, 4), Coord::new(3, 3), Coord::new(0, 0), blocks).unwrap()
}

#[test]
fn grid_table() {
    let astar = reference_demo();
    let expected = "Grid:\n\
                    DE  BL  0   0   \n\
                    0   BL  BL  BL  \n\
                    0   0   BL  BL  \n\
                    0   0   0   SO  \n";
    assert_eq!(GridView(&astar).to_string(), expected);
}

#[test]
fn solution_table_and_path() {
    let mut astar = reference_demo();
    astar.process();
    let path = astar.reconstruct_path().unwrap();
    assert_eq!(
        PathView(&path).to_string(),
        "Path: [0,0]->[1,0]->[2,1]->[3,2]->[3,3]"
    );
    let expected = "Solution:\n\
                    DE  BL  0   0   \n\
                    X   BL  BL  BL  \n\
                    0   X   BL  BL  \n\
                    0   0   X   SO  \n";
    assert_eq!(SolutionView(&astar).to_string(), expected);
}

#[test]
fn score_table() {
    let no_blocks = Vec::<Coord>::new();
    let mut astar = AStar::new(Size::new(3, 1), Coord::new(0, 0), Coord::new(1, 0), no_blocks).unwrap();
    assert_eq!(ScoreView(&astar).to_string(), "Scores for cell:\n1   -   -   \n");
    astar.process();
    // the search stops before reaching the cell beyond the goal
    assert_eq!(ScoreView(&astar).to_string(), "Scores for cell:\n1   10  -   \n");

    let mut astar = AStar::new(
        Size::new(3, 1),
        Coord::new(0, 0),
        Coord::new(2, 0),
        vec![Coord::new(1, 0)],
    )
    .unwrap();
    astar.process();
    assert_eq!(ScoreView(&astar).to_string(), "Scores for cell:\n2   BL  -   \n");
}
