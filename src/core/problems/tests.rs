//! Problem store tests.

use tempfile::TempDir;

use super::{Problem, ProblemStore};
use crate::core::analyze::AnalysisResult;
use crate::core::persistence::StoreError;

fn analysis(problem_type: &str, subject: &str) -> AnalysisResult {
    AnalysisResult {
        problem_type: problem_type.to_string(),
        subject: subject.to_string(),
        solution: "1단계: 정리\n내용\n답: 3".to_string(),
    }
}

fn problem_with_id(id: &str) -> Problem {
    let mut p = Problem::new("photo.jpg", analysis("수학-방정식", "수학"));
    p.id = id.to_string();
    p
}

#[test]
fn empty_dir_lists_nothing() {
    let tmp = TempDir::new().unwrap();
    let store = ProblemStore::at(tmp.path());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn save_prepends_newest_first() {
    let tmp = TempDir::new().unwrap();
    let store = ProblemStore::at(tmp.path());
    store.save(&problem_with_id("aaaa-1")).unwrap();
    store.save(&problem_with_id("bbbb-2")).unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["bbbb-2", "aaaa-1"]);
}

#[test]
fn save_replaces_same_id() {
    let tmp = TempDir::new().unwrap();
    let store = ProblemStore::at(tmp.path());
    let mut p = problem_with_id("aaaa-1");
    store.save(&p).unwrap();
    p.problem_type = "수학-함수".to_string();
    store.save(&p).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].problem_type, "수학-함수");
}

#[test]
fn get_by_full_id_and_unique_prefix() {
    let tmp = TempDir::new().unwrap();
    let store = ProblemStore::at(tmp.path());
    store.save(&problem_with_id("abc-123")).unwrap();
    store.save(&problem_with_id("abd-456")).unwrap();

    assert_eq!(store.get("abc-123").unwrap().id, "abc-123");
    assert_eq!(store.get("abd").unwrap().id, "abd-456");
    assert!(matches!(store.get("ab"), Err(StoreError::Ambiguous(_))));
    assert!(matches!(store.get("zzz"), Err(StoreError::NotFound(_))));
    assert!(matches!(store.get(""), Err(StoreError::NotFound(_))));
}

#[test]
fn delete_removes_record() {
    let tmp = TempDir::new().unwrap();
    let store = ProblemStore::at(tmp.path());
    store.save(&problem_with_id("aaaa-1")).unwrap();
    store.save(&problem_with_id("bbbb-2")).unwrap();

    let removed = store.delete("aaaa").unwrap();
    assert_eq!(removed.id, "aaaa-1");
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["bbbb-2"]);
    assert!(matches!(store.delete("aaaa-1"), Err(StoreError::NotFound(_))));
}

#[test]
fn records_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let original = problem_with_id("aaaa-1");
    ProblemStore::at(tmp.path()).save(&original).unwrap();

    let reopened = ProblemStore::at(tmp.path()).get("aaaa-1").unwrap();
    assert_eq!(reopened, original);
}

#[test]
fn new_problem_drops_blank_subject() {
    let p = Problem::new("photo.jpg", analysis("영어-문법", "  "));
    assert_eq!(p.subject, None);
    assert_eq!(p.id.len(), 36);
    assert_eq!(p.short_id().len(), 8);
}

#[test]
fn optional_fields_are_omitted_on_disk() {
    let tmp = TempDir::new().unwrap();
    let store = ProblemStore::at(tmp.path());
    let mut p = problem_with_id("aaaa-1");
    p.subject = None;
    store.save(&p).unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("problems.json")).unwrap();
    assert!(!raw.contains("image_url"));
    assert!(!raw.contains("subject"));
}
