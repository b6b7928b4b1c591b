//! Integration tests for command handlers
//!
//! Handlers open the database themselves, so these tests run a whole flow
//! inside one test against a temp-file database selected via the
//! environment override.

use rotation_lab::{
    cli::ReportArgs,
    commands::{
        handle_fatigue, handle_generate, handle_lineups, handle_minutes, handle_roster_add,
        handle_roster_remove, handle_roster_seed, handle_rotation_assign, handle_rotation_clear,
        handle_rotation_new, RosterAddParams,
    },
    storage::RotationDatabase,
    PlayerId, Position, RotationError, RotationId, Skill, DB_PATH_ENV_VAR,
};

#[tokio::test]
async fn test_full_command_flow() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(DB_PATH_ENV_VAR, dir.path().join("cli.db"));

    // Build the roster: the demo five plus one custom bench player
    handle_roster_seed().await.unwrap();
    handle_roster_add(RosterAddParams {
        id: None,
        name: "Chris Lee".to_string(),
        number: 23,
        positions: vec![Position::SmallForward, Position::PowerForward],
        skills: vec![Skill::Energy],
        target: 16,
        max: 20,
        consecutive: 5,
    })
    .await
    .unwrap();

    let db = RotationDatabase::new().unwrap();
    let roster = db.list_players().unwrap();
    assert_eq!(roster.len(), 6);
    assert!(roster.iter().any(|p| p.id.as_str() == "chris-lee"));
    drop(db);

    // Build a rotation by hand, then overwrite it with a generated pattern
    let rotation_id = RotationId::new("r-test");
    handle_rotation_new(Some(rotation_id.clone()), "Test Game".to_string())
        .await
        .unwrap();
    handle_rotation_assign(rotation_id.clone(), PlayerId::new("p1"), 0, 720, false)
        .await
        .unwrap();

    // Overlapping assignment is rejected and leaves the snapshot unchanged
    let err = handle_rotation_assign(rotation_id.clone(), PlayerId::new("p1"), 600, 900, false)
        .await
        .unwrap_err();
    assert!(matches!(err, RotationError::OverlapConflict { .. }));

    // Assignments must reference rostered players
    let err = handle_rotation_assign(rotation_id.clone(), PlayerId::new("nobody"), 0, 60, false)
        .await
        .unwrap_err();
    assert!(matches!(err, RotationError::UnknownPlayer { .. }));

    handle_rotation_clear(rotation_id.clone(), PlayerId::new("p1"))
        .await
        .unwrap();
    handle_generate(rotation_id.clone(), None, false).await.unwrap();

    let db = RotationDatabase::new().unwrap();
    let rotation = db.load_rotation(&rotation_id).unwrap().unwrap();
    assert_eq!(rotation.player_assignments.len(), 6);
    drop(db);

    // Every report runs over the generated snapshot
    let args = |json| ReportArgs {
        rotation: rotation_id.clone(),
        json,
    };
    handle_fatigue(args(false)).await.unwrap();
    handle_minutes(args(true)).await.unwrap();
    handle_lineups(args(false), Some(7)).await.unwrap();

    // Reports against a missing snapshot fail with the snapshot id
    let err = handle_minutes(ReportArgs {
        rotation: RotationId::new("missing"),
        json: false,
    })
    .await
    .unwrap_err();
    assert!(matches!(err, RotationError::RotationNotFound { .. }));

    handle_roster_remove(PlayerId::new("chris-lee")).await.unwrap();
    let err = handle_roster_remove(PlayerId::new("chris-lee"))
        .await
        .unwrap_err();
    assert!(matches!(err, RotationError::PlayerNotFound { .. }));

    std::env::remove_var(DB_PATH_ENV_VAR);
}
