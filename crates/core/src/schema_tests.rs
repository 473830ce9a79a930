// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn attached() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    ensure_namespace(&conn, &NamespaceLocation::Memory).unwrap();
    conn
}

#[test]
fn empty_store_gets_one_namespace_and_one_table() {
    let conn = attached();
    apply_schema(&conn).unwrap();

    assert_eq!(namespaces(&conn).unwrap(), vec!["public".to_string()]);
    assert_eq!(tables(&conn).unwrap(), vec!["querys".to_string()]);

    let cols = columns(&conn).unwrap();
    let names: Vec<_> = cols.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["score", "title", "body", "answer"]);
    assert_eq!(cols[0].decl_type, "INTEGER");
    assert!(cols[1..].iter().all(|c| c.decl_type == "TEXT"));
}

#[test]
fn every_column_is_nullable_without_key() {
    let conn = attached();
    apply_schema(&conn).unwrap();

    for col in columns(&conn).unwrap() {
        assert!(!col.not_null, "{} should be nullable", col.name);
        assert!(!col.primary_key, "{} should not be a key", col.name);
    }
}

#[test]
fn no_index_exists_after_apply() {
    let conn = attached();
    apply_schema(&conn).unwrap();

    assert!(indexes(&conn).unwrap().is_empty());
}

#[test]
fn indexes_reports_an_index_on_title_when_one_is_added() {
    let conn = attached();
    apply_schema(&conn).unwrap();
    conn.execute_batch("CREATE INDEX public.idx_title ON querys(title)")
        .unwrap();

    let idx = indexes(&conn).unwrap();
    assert_eq!(idx.len(), 1);
    assert_eq!(idx[0].name, "idx_title");
    assert_eq!(idx[0].table, "querys");
    assert_eq!(idx[0].columns, vec!["title".to_string()]);
}

#[test]
fn ensure_namespace_is_idempotent() {
    let conn = Connection::open_in_memory().unwrap();

    assert!(ensure_namespace(&conn, &NamespaceLocation::Memory).unwrap());
    assert!(!ensure_namespace(&conn, &NamespaceLocation::Memory).unwrap());
    assert_eq!(namespaces(&conn).unwrap(), vec!["public".to_string()]);
}

#[test]
fn reapply_keeps_existing_rows() {
    let conn = attached();
    apply_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO public.querys (score, title, body, answer) VALUES (5, 't', 'b', 'a')",
        [],
    )
    .unwrap();

    apply_schema(&conn).unwrap();
    apply_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM public.querys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(tables(&conn).unwrap().len(), 1);
}

#[test]
fn file_namespace_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("public.db");
    let location = NamespaceLocation::File(path.clone());

    {
        let conn = Connection::open_in_memory().unwrap();
        ensure_namespace(&conn, &location).unwrap();
        apply_schema(&conn).unwrap();
        conn.execute("INSERT INTO public.querys (title) VALUES ('kept')", [])
            .unwrap();
    }
    assert!(path.exists());

    let conn = Connection::open_in_memory().unwrap();
    ensure_namespace(&conn, &location).unwrap();
    apply_schema(&conn).unwrap();
    let title: String = conn
        .query_row("SELECT title FROM public.querys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, "kept");
}

#[parameterized(
    wrong_type = {
        "CREATE TABLE public.querys (score TEXT, title TEXT, body TEXT, answer TEXT)",
        "type TEXT"
    },
    not_null = {
        "CREATE TABLE public.querys (score INTEGER, title TEXT NOT NULL, body TEXT, answer TEXT)",
        "NOT NULL"
    },
    primary_key = {
        "CREATE TABLE public.querys (score INTEGER PRIMARY KEY, title TEXT, body TEXT, answer TEXT)",
        "primary key"
    },
    missing_column = {
        "CREATE TABLE public.querys (score INTEGER, title TEXT, body TEXT)",
        "3 columns"
    },
    renamed_column = {
        "CREATE TABLE public.querys (score INTEGER, heading TEXT, body TEXT, answer TEXT)",
        "'heading'"
    },
)]
fn conflicting_table_is_rejected(existing: &str, reason: &str) {
    let conn = attached();
    conn.execute_batch(existing).unwrap();

    let err = apply_schema(&conn).unwrap_err();
    let Error::SchemaConflict { object, reason: r } = &err else {
        unreachable!("expected SchemaConflict, got {err:?}");
    };
    assert_eq!(object.as_str(), "public.querys");
    assert!(r.contains(reason), "unexpected reason: {r}");
}

#[test]
fn verify_without_table_is_a_conflict() {
    let conn = attached();
    let err = verify_schema(&conn).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn declared_sql_has_no_active_index_statement() {
    let active: Vec<_> = SCHEMA
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with("--"))
        .filter(|l| l.to_uppercase().contains("CREATE INDEX"))
        .collect();
    assert!(active.is_empty());
}

#[test]
fn describe_collects_layout() {
    let conn = attached();
    apply_schema(&conn).unwrap();

    let layout = describe(&conn).unwrap();
    assert_eq!(layout.namespaces, vec!["public".to_string()]);
    assert_eq!(layout.tables, vec!["querys".to_string()]);
    assert_eq!(layout.columns.len(), 4);
    assert!(layout.indexes.is_empty());
}
