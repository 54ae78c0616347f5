use workout_stats::error::WorkoutError;
use workout_stats::pipeline::dispatch::read_package;
use workout_stats::types::workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

#[test]
fn codes_map_to_kinds() {
    assert_eq!(WorkoutKind::from_code("RUN"), Some(WorkoutKind::Running));
    assert_eq!(WorkoutKind::from_code("WLK"), Some(WorkoutKind::SportsWalking));
    assert_eq!(WorkoutKind::from_code("SWM"), Some(WorkoutKind::Swimming));
    assert_eq!(WorkoutKind::from_code("run"), None);

    for kind in [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ] {
        assert_eq!(WorkoutKind::from_code(kind.code()), Some(kind));
    }
}

#[test]
fn dispatch_matches_direct_construction() {
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("run");
    assert_eq!(
        run,
        Workout::Running(Running::new(15000, 1.0, 75.0).expect("running"))
    );

    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walk");
    assert_eq!(
        walk,
        Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0).expect("walking"))
    );

    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swim");
    assert_eq!(
        swim,
        Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40.0).expect("swimming"))
    );
    assert_eq!(swim.kind(), WorkoutKind::Swimming);
}

#[test]
fn unknown_code_is_rejected_every_time() {
    for _ in 0..3 {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).expect_err("unknown code");
        assert_eq!(err, WorkoutError::InvalidWorkoutType("XYZ".to_string()));
        assert!(err.to_string().contains("invalid workout type"));
    }
}

#[test]
fn wrong_value_count_is_rejected() {
    let err = read_package("WLK", &[9000.0, 1.0, 75.0]).expect_err("missing height");
    assert_eq!(
        err,
        WorkoutError::WrongArity {
            kind: WorkoutKind::SportsWalking,
            expected: 4,
            got: 3,
        }
    );
    assert!(read_package("RUN", &[]).is_err());
}

#[test]
fn fractional_action_count_is_rejected() {
    let err = read_package("RUN", &[100.5, 1.0, 75.0]).expect_err("fractional steps");
    assert_eq!(err, WorkoutError::InvalidActionCount(100.5));
    assert!(read_package("RUN", &[-1.0, 1.0, 75.0]).is_err());
}

#[test]
fn zero_duration_package_is_rejected() {
    let err = read_package("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).expect_err("zero duration");
    assert!(matches!(err, WorkoutError::NonPositive { field: "duration", .. }));
}
