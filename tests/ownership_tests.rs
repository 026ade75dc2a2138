mod common;

use edu_server::{
    errors::AppError,
    models::domain::{CourseSection, Lesson, Quiz},
    repositories::{LessonRepository, QuizRepository, SectionRepository},
    services::OwnershipService,
};

use common::{make_owner, seed_quiz, seed_user, InMemoryStore};

#[tokio::test]
async fn owner_of_the_course_owns_its_quizzes() {
    let store = InMemoryStore::new();
    let seeded = seed_quiz(&store, "move").await;
    let owner = seed_user(&store, "alice", "secret").await;
    make_owner(&store, &owner, &seeded.course).await;

    let service = OwnershipService::new(store.repositories().ownership);
    assert!(service.is_owner(&owner.id, &seeded.quiz.id).await.unwrap());
    assert!(service.require_quiz_owner(&owner.id, &seeded.quiz.id).await.is_ok());
}

#[tokio::test]
async fn ownership_reaches_quizzes_in_every_section_and_lesson() {
    let store = InMemoryStore::new();
    let seeded = seed_quiz(&store, "move").await;
    let owner = seed_user(&store, "alice", "secret").await;
    make_owner(&store, &owner, &seeded.course).await;

    let second_section = store
        .create_many(vec![CourseSection::new(&seeded.course.id, "Advanced", 2)])
        .await
        .unwrap()
        .remove(0);
    let second_lesson = LessonRepository::create(
        store.as_ref(),
        Lesson::new(&second_section.id, "Lifetimes", "", 1),
    )
    .await
    .unwrap();
    let second_quiz = store
        .create_quiz(Quiz::new(&second_lesson.id, "Lifetimes check"))
        .await
        .unwrap();

    let service = OwnershipService::new(store.repositories().ownership);
    assert!(service.is_owner(&owner.id, &second_quiz.id).await.unwrap());
}

#[tokio::test]
async fn owning_another_course_grants_nothing() {
    let store = InMemoryStore::new();
    let mine = seed_quiz(&store, "move").await;
    let theirs = seed_quiz(&store, "ref").await;
    let user = seed_user(&store, "bob", "secret").await;
    make_owner(&store, &user, &mine.course).await;

    let service = OwnershipService::new(store.repositories().ownership);
    assert!(!service.is_owner(&user.id, &theirs.quiz.id).await.unwrap());

    let result = service.require_quiz_owner(&user.id, &theirs.quiz.id).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn missing_quiz_looks_the_same_as_someone_elses() {
    let store = InMemoryStore::new();
    let user = seed_user(&store, "bob", "secret").await;

    let service = OwnershipService::new(store.repositories().ownership);
    let result = service.require_quiz_owner(&user.id, "no-such-quiz").await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn broken_chain_is_not_owned() {
    let store = InMemoryStore::new();
    let seeded = seed_quiz(&store, "move").await;
    let owner = seed_user(&store, "alice", "secret").await;
    make_owner(&store, &owner, &seeded.course).await;

    SectionRepository::delete(store.as_ref(), &seeded.section.id)
        .await
        .unwrap();

    let service = OwnershipService::new(store.repositories().ownership);
    assert!(!service.is_owner(&owner.id, &seeded.quiz.id).await.unwrap());
}
