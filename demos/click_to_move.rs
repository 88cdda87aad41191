use tile_pathing::{Cell, GridConfig, Session};

// In this demo an agent on a generated 8x8 grid is sent to the opposite corner, the way a
// click-to-move scene would drive the engine. Each printed line corresponds to one tick,
// which a real game loop would schedule every `step_interval`.
//
// - # marks an obstacle
// - . marks a walkable cell

fn main() {
    let config = GridConfig::new(8, 8).with_obstacle_rate(0.2).with_seed(17);
    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Could not set up the grid: {e}");
            return;
        }
    };
    println!("{}", session.grid());
    let goal = Cell::new(7, 7);
    match session.request_path(goal) {
        Ok(0) => println!("{} cannot be reached from {}", goal, session.agent_cell()),
        Ok(steps) => {
            println!("Walking {} steps every {:?}:", steps, session.config().step_interval);
            while let Some(cell) = session.tick() {
                println!("{:>3}: {}", session.move_count(), cell);
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}
