//! Generation invariants checked on freshly generated mazes

use std::collections::VecDeque;

use rand::{SeedableRng, rngs::StdRng};

use maze_rl::{Action, GridPos, Maze, MazeConfig, generate};

fn config(width: usize, height: usize, min: usize) -> MazeConfig {
    MazeConfig {
        width,
        height,
        min_shortest_length: min,
        max_attempts: 2000,
    }
}

/// Independent BFS, written against the public grid API only.
fn bfs(maze: &Maze, from: GridPos, to: GridPos) -> Option<usize> {
    let grid = maze.grid();
    let mut dist = vec![None; grid.width() * grid.height()];
    let index = |p: GridPos| p.row * grid.width() + p.col;
    let mut queue = VecDeque::from([from]);
    dist[index(from)] = Some(0);
    while let Some(pos) = queue.pop_front() {
        if pos == to {
            return dist[index(pos)];
        }
        for action in Action::ALL {
            if let Some(next) = grid.neighbor(pos, action) {
                if grid.is_free(next) && dist[index(next)].is_none() {
                    dist[index(next)] = dist[index(pos)].map(|d| d + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

#[test]
fn free_cell_graph_is_a_spanning_tree() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        let maze = generate(&config(13, 11, 5), &mut rng).unwrap();
        let grid = maze.grid();
        let free: Vec<GridPos> = grid.free_cells().collect();

        let mut edges = 0usize;
        for &pos in &free {
            for action in [Action::Down, Action::Right] {
                if let Some(next) = grid.neighbor(pos, action) {
                    if grid.is_free(next) {
                        edges += 1;
                    }
                }
            }
        }
        assert_eq!(edges, free.len() - 1);

        // Connectivity: every free cell is reachable from the start.
        for &pos in &free {
            assert!(bfs(&maze, maze.start(), pos).is_some());
        }
    }
}

#[test]
fn stored_shortest_length_matches_independent_bfs() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..10 {
        let maze = generate(&config(15, 15, 20), &mut rng).unwrap();
        assert_eq!(bfs(&maze, maze.start(), maze.goal()), Some(maze.shortest_length()));
        assert!(maze.shortest_length() >= 20);
    }
}

#[test]
fn even_dimensions_are_rounded_up_to_odd() {
    let mut rng = StdRng::seed_from_u64(5);
    let maze = generate(&config(14, 10, 4), &mut rng).unwrap();
    assert_eq!(maze.grid().width(), 15);
    assert_eq!(maze.grid().height(), 11);
}

#[test]
fn unsatisfiable_bound_surfaces_generation_infeasible() {
    let mut rng = StdRng::seed_from_u64(8);
    let tight = MazeConfig {
        width: 7,
        height: 7,
        min_shortest_length: 500,
        max_attempts: 25,
    };
    match generate(&tight, &mut rng) {
        Err(maze_rl::Error::GenerationInfeasible { attempts, .. }) => assert_eq!(attempts, 25),
        other => panic!("expected GenerationInfeasible, got {other:?}"),
    }
}
