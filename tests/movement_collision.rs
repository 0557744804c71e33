use mazecast::prelude::*;
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(turn_left, turn_right, forward, backward, run)| InputState {
            turn_left,
            turn_right,
            forward,
            backward,
            run,
        },
    )
}

proptest! {
    #[test]
    fn player_never_enters_a_wall(
        inputs in proptest::collection::vec(action_strategy(), 1..200),
        dt in 0.0f32..0.25,
    ) {
        let grid = Grid::default_map().unwrap();
        let controller = MovementController::default();
        let mut pose = Pose::default();

        for input in &inputs {
            pose = controller.update(pose, input, dt, &grid);
            let (col, row) = pose.cell();
            prop_assert_eq!(grid.cell_at(col, row), Some(Cell::Empty));
        }
    }

    #[test]
    fn run_modifier_never_changes_the_pose(
        angle in -10.0f32..10.0,
        dt in 0.0f32..0.25,
        forward in any::<bool>(),
        backward in any::<bool>(),
    ) {
        let grid = Grid::default_map().unwrap();
        let controller = MovementController::default();
        let pose = Pose::new(1.5, 1.5, angle);

        let walk = InputState { forward, backward, ..InputState::default() };
        let run = InputState { run: true, ..walk };

        prop_assert_eq!(
            controller.update(pose, &walk, dt, &grid),
            controller.update(pose, &run, dt, &grid)
        );
    }
}

#[test]
fn walking_into_a_wall_leaves_pose_unchanged() {
    let grid = Grid::default_map().unwrap();
    let controller = MovementController::default();
    // Cell (5, 3) is wall; face east from just inside (4, 3).
    let pose = Pose::new(4.95, 3.5, 0.0);

    let after = controller.update(pose, &InputState::with(&[Action::MoveForward]), 0.1, &grid);
    assert_eq!(after, pose);
}
