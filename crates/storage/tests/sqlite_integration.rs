use interview_core::model::{Category, Question, QuestionDraft, QuestionId};
use storage::import::parse_questions;
use storage::repository::{QuestionRepository, Storage};
use storage::sqlite::SqliteRepository;

fn build_question(id: u64, category: Category, prompt: &str) -> Question {
    QuestionDraft {
        id: QuestionId::new(id),
        category,
        prompt: prompt.into(),
        topic: "Networking".into(),
        answer: "A".into(),
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn sqlite_roundtrip_keeps_categories_apart() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.upsert_question(&build_question(1, Category::Easy, "easy one"))
        .await
        .unwrap();
    repo.upsert_question(&build_question(1, Category::Hard, "hard one"))
        .await
        .unwrap();
    repo.upsert_question(&build_question(2, Category::Easy, "easy two"))
        .await
        .unwrap();

    let all = repo.list_questions().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].category(), Category::Easy);
    assert_eq!(all[1].category(), Category::Hard);
    assert_eq!(all[2].id(), QuestionId::new(2));

    let easy = repo.list_by_category(Category::Easy).await.unwrap();
    let prompts: Vec<&str> = easy.iter().map(Question::prompt).collect();
    assert_eq!(prompts, vec!["easy one", "easy two"]);
}

#[tokio::test]
async fn sqlite_upsert_replaces_text() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.migrate().await.expect("migrations are idempotent");

    repo.upsert_question(&build_question(4, Category::Medium, "before"))
        .await
        .unwrap();
    repo.upsert_question(&build_question(4, Category::Medium, "after"))
        .await
        .unwrap();

    let medium = repo.list_by_category(Category::Medium).await.unwrap();
    assert_eq!(medium.len(), 1);
    assert_eq!(medium[0].prompt(), "after");
}

#[tokio::test]
async fn imported_table_lands_in_storage() {
    let table = "\
Question Number,Interview Question,Topic,Answer,Difficulty
1,What is a VLAN?,Switching,A broadcast domain.,easy
2,What is OSPF?,Routing,A link-state protocol.,medium
";
    let report = parse_questions(table.as_bytes()).unwrap();
    let storage = Storage::sqlite("sqlite:file:memdb_import?mode=memory&cache=shared")
        .await
        .expect("sqlite storage");

    storage
        .questions
        .upsert_questions(&report.questions)
        .await
        .unwrap();

    let stored = storage.questions.list_questions().await.unwrap();
    assert_eq!(stored, report.questions);
}
