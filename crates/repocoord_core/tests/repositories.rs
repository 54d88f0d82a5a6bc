use repocoord_core::db::open_db_in_memory;
use repocoord_core::{
    DbError, Executor, OtpxEntity, OtpxRepository, RepoError, XptoEntity, XptoRepository,
};
use rusqlite::types::Value;
use rusqlite::Connection;

#[test]
fn create_assigns_sequential_ids_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = XptoRepository::new(&conn);

    let mut first = XptoEntity::new("first");
    let mut second = XptoEntity::new("second");
    assert!(!first.is_persisted());

    repo.create(&mut first).unwrap();
    repo.create(&mut second).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.is_persisted());
    assert_eq!(label_of(&conn, second.id), "second");
    assert_eq!(repo.statement_count(), 2);
}

#[test]
fn update_upserts_single_otpx_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = OtpxRepository::new(&conn);

    repo.update(OtpxEntity::new("first")).unwrap();
    repo.update(OtpxEntity::new("second")).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM otpx;", [], |row| row.get(0))
        .unwrap();
    let note: String = conn
        .query_row("SELECT note FROM otpx WHERE slot = 1;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(note, "second");
}

#[test]
fn update_takes_entity_by_value_and_leaves_caller_copy_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = OtpxRepository::new(&conn);
    let entity = OtpxEntity::new("kept");

    repo.update(entity.clone()).unwrap();

    assert_eq!(entity, OtpxEntity::new("kept"));
}

#[test]
fn update_with_empty_note_reports_db_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = OtpxRepository::new(&conn);

    let err = repo.update(OtpxEntity::new("")).unwrap_err();

    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert_eq!(repo.statement_count(), 1);
}

#[test]
fn create_failure_leaves_entity_id_unassigned() {
    let conn = Connection::open_in_memory().unwrap();
    let repo = XptoRepository::new(&conn);
    let mut entity = XptoEntity::new("no schema");

    let err = repo.create(&mut entity).unwrap_err();

    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(entity.id, 0);
}

#[test]
fn executor_query_returns_typed_rows() {
    let conn = open_db_in_memory().unwrap();
    Executor::execute(
        &conn,
        "INSERT INTO xpto (label) VALUES (?1), (?2);",
        &[Value::Text("a".to_string()), Value::Text("b".to_string())],
    )
    .unwrap();

    let rows = Executor::query(&conn, "SELECT id, label FROM xpto ORDER BY id;", &[]).unwrap();

    assert_eq!(
        rows,
        vec![
            vec![Value::Integer(1), Value::Text("a".to_string())],
            vec![Value::Integer(2), Value::Text("b".to_string())],
        ]
    );
}

fn label_of(conn: &Connection, id: u64) -> String {
    conn.query_row(
        "SELECT label FROM xpto WHERE id = ?1;",
        [i64::try_from(id).unwrap()],
        |row| row.get(0),
    )
    .unwrap()
}
