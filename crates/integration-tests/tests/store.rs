//! Repository tests against a dedicated test database.
//!
//! These run directly against `PostgreSQL` (no server process) and truncate
//! tables, so point them at a throwaway database via
//! `CAMPUS_TEST_DATABASE_URL` with migrations applied.

use secrecy::SecretString;
use sqlx::PgPool;

use campus_core::UserRole;
use campus_server::db::{
    self, CategoryRepository, CourseRepository, EnrollmentRepository, UserRepository,
};

async fn test_pool() -> PgPool {
    let url = std::env::var("CAMPUS_TEST_DATABASE_URL")
        .expect("CAMPUS_TEST_DATABASE_URL must point at a throwaway database");
    db::create_pool(&SecretString::from(url))
        .await
        .expect("database reachable")
}

async fn truncate_all(pool: &PgPool) {
    sqlx::query("TRUNCATE enrollments, courses, categories, users RESTART IDENTITY CASCADE")
        .execute(pool)
        .await
        .expect("truncate");
}

async fn insert_user(pool: &PgPool, auth_id: &str, email: &str, role: UserRole) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (auth_id, email, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(auth_id)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("insert user")
}

async fn insert_course(pool: &PgPool, owner: &str, title: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO courses (owner_auth_id, title) VALUES ($1, $2) RETURNING id",
    )
    .bind(owner)
    .bind(title)
    .fetch_one(pool)
    .await
    .expect("insert course")
}

#[tokio::test]
#[ignore = "Requires a dedicated test database"]
async fn test_counts_follow_inserts() {
    let pool = test_pool().await;
    truncate_all(&pool).await;

    // Empty store counts to zero everywhere.
    let courses = CourseRepository::new(&pool).count().await.expect("count");
    let students = UserRepository::new(&pool)
        .count_by_role(UserRole::User)
        .await
        .expect("count");
    let enrollments = EnrollmentRepository::new(&pool).count().await.expect("count");
    assert_eq!((courses, students, enrollments), (0, 0, 0));

    // One of each moves every counter to one.
    let user_id = insert_user(&pool, "ext_student", "student@example.com", UserRole::User).await;
    let course_id = insert_course(&pool, "ext_author", "Intro to Rust").await;
    sqlx::query("INSERT INTO enrollments (user_id, course_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(course_id)
        .execute(&pool)
        .await
        .expect("insert enrollment");

    let courses = CourseRepository::new(&pool).count().await.expect("count");
    let students = UserRepository::new(&pool)
        .count_by_role(UserRole::User)
        .await
        .expect("count");
    let enrollments = EnrollmentRepository::new(&pool).count().await.expect("count");
    assert_eq!((courses, students, enrollments), (1, 1, 1));

    // Admins are not students.
    insert_user(&pool, "ext_admin", "admin@example.com", UserRole::Admin).await;
    let students = UserRepository::new(&pool)
        .count_by_role(UserRole::User)
        .await
        .expect("count");
    assert_eq!(students, 1);
}

#[tokio::test]
#[ignore = "Requires a dedicated test database"]
async fn test_admin_shortlist_newest_first_capped_at_limit() {
    let pool = test_pool().await;
    truncate_all(&pool).await;

    for i in 0..7 {
        insert_user(
            &pool,
            &format!("ext_admin_{i}"),
            &format!("admin{i}@example.com"),
            UserRole::Admin,
        )
        .await;
        // Distinct created_at values so the ordering is observable.
        sqlx::query("UPDATE users SET created_at = now() + make_interval(secs => id::float8) WHERE auth_id = $1")
            .bind(format!("ext_admin_{i}"))
            .execute(&pool)
            .await
            .expect("stamp created_at");
    }

    let admins = UserRepository::new(&pool)
        .list_admins(5)
        .await
        .expect("list admins");

    assert_eq!(admins.len(), 5);
    assert!(admins.iter().all(|u| u.role == UserRole::Admin));
    for pair in admins.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
    // The two oldest admins fall off the shortlist.
    assert!(admins.iter().all(|u| u.auth_id != "ext_admin_0"));
    assert!(admins.iter().all(|u| u.auth_id != "ext_admin_1"));
}

#[tokio::test]
#[ignore = "Requires a dedicated test database"]
async fn test_categories_ordered_by_name_then_id() {
    let pool = test_pool().await;
    truncate_all(&pool).await;

    let repo = CategoryRepository::new(&pool);
    repo.create("Music", "Mic", "#ff8800").await.expect("create");
    repo.create("Art", "Brush", "#00ff00").await.expect("create");
    repo.create("Math", "Sigma", "#0000ff").await.expect("create");

    let categories = repo.list_all().await.expect("list");
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Math", "Music"]);
}

#[tokio::test]
#[ignore = "Requires a dedicated test database"]
async fn test_duplicate_category_name_is_conflict() {
    let pool = test_pool().await;
    truncate_all(&pool).await;

    let repo = CategoryRepository::new(&pool);
    repo.create("Science", "Flask", "#112233").await.expect("create");

    let err = repo
        .create("Science", "Flask", "#112233")
        .await
        .expect_err("duplicate must be rejected");
    assert!(matches!(
        err,
        campus_server::db::RepositoryError::Conflict(_)
    ));
}
