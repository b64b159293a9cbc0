/// Integration tests for the Ticklist API
///
/// These drive the real router end-to-end over the in-memory store:
/// registration, login, session cookies, task CRUD, per-user isolation,
/// and the anonymous-redirect behavior.

mod common;

use axum::http::StatusCode;
use common::{body_json, flash_cookie_from, location, session_cookie_from, TestContext};
use ticklist_shared::store::UserStore;

#[tokio::test]
async fn test_register_establishes_session_and_redirects() {
    let ctx = TestContext::new();

    let response = ctx
        .post_form("/register", "email=a@x.com&password=pw", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/a@x.com");
    assert!(session_cookie_from(&response).is_some());
}

#[tokio::test]
async fn test_register_duplicate_email_redirects_to_login() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "pw").await;

    let response = ctx
        .post_form("/register", "email=a@x.com&password=other", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let flash = flash_cookie_from(&response).expect("duplicate email should set a notice");
    assert_eq!(flash, "flash=email_exists");
    assert!(session_cookie_from(&response).is_none());

    // No second row was created.
    let user = ctx
        .store
        .find_user_by_email("a@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, 1);

    // The notice shows on the login view and is consumed there.
    let login_view = ctx.get("/login", Some(&flash)).await;
    let json = body_json(login_view).await;
    assert_eq!(
        json["notice"],
        "You've already signed up with that email, log in instead!"
    );
}

#[tokio::test]
async fn test_register_invalid_email_redirects_back() {
    let ctx = TestContext::new();

    let response = ctx
        .post_form("/register", "email=not-an-email&password=pw", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/register");
    assert_eq!(
        flash_cookie_from(&response).as_deref(),
        Some("flash=invalid_email")
    );
}

#[tokio::test]
async fn test_register_then_login_same_identity() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "pw").await;

    let response = ctx
        .post_form("/login", "email=a@x.com&password=pw", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/a@x.com");

    let cookie = session_cookie_from(&response).unwrap();
    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["view"], "tasks");
    assert_eq!(view["user_email"], "a@x.com");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let ctx = TestContext::new();

    let response = ctx
        .post_form("/login", "email=nobody@x.com&password=pw", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(
        flash_cookie_from(&response).as_deref(),
        Some("flash=email_not_found")
    );
    assert!(session_cookie_from(&response).is_none());

    let login_view = ctx.get("/login", Some("flash=email_not_found")).await;
    let json = body_json(login_view).await;
    assert_eq!(json["notice"], "This email doesn't exist, please try again.");
}

#[tokio::test]
async fn test_login_wrong_password_never_establishes_session() {
    let ctx = TestContext::new();
    ctx.register("a@x.com", "pw").await;

    let response = ctx
        .post_form("/login", "email=a@x.com&password=wrong", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(
        flash_cookie_from(&response).as_deref(),
        Some("flash=password_incorrect")
    );
    assert!(session_cookie_from(&response).is_none());
}

#[tokio::test]
async fn test_index_redirects_when_authenticated() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;

    let anonymous = ctx.get("/", None).await;
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert_eq!(body_json(anonymous).await["view"], "landing");

    let authenticated = ctx.get("/", Some(&cookie)).await;
    assert_eq!(authenticated.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&authenticated), "/a@x.com");
}

#[tokio::test]
async fn test_task_view_ignores_path_email() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;
    ctx.post_form("/new_task", "task=mine", Some(&cookie)).await;

    // Browsing someone else's URL still shows the session user's tasks.
    let view = body_json(ctx.get("/b@x.com", Some(&cookie)).await).await;
    assert_eq!(view["user_email"], "a@x.com");
    assert_eq!(view["all_tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_anonymous_task_view_falls_back_to_landing() {
    let ctx = TestContext::new();

    let response = ctx.get("/a@x.com", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["view"], "landing");
}

#[tokio::test]
async fn test_anonymous_mutations_redirect_home() {
    let ctx = TestContext::new();

    for response in [
        ctx.post_form("/new_task", "task=x", None).await,
        ctx.get("/check_task/1/", None).await,
        ctx.get("/delete/1/", None).await,
    ] {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn test_add_task_empty_description_is_noop() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;

    let response = ctx.post_form("/new_task", "task=", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/a@x.com");
    let flash = flash_cookie_from(&response).unwrap();
    assert_eq!(flash, "flash=empty_task");

    let with_flash = format!("{}; {}", cookie, flash);
    let view = body_json(ctx.get("/a@x.com", Some(&with_flash)).await).await;
    assert_eq!(view["all_tasks"].as_array().unwrap().len(), 0);
    assert_eq!(view["notice"], "Please add a task!");
}

#[tokio::test]
async fn test_toggle_is_involution() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;
    ctx.post_form("/new_task", "task=buy+milk", Some(&cookie))
        .await;

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    let id = view["all_tasks"][0]["id"].as_i64().unwrap();

    let ack = ctx
        .get(&format!("/check_task/{}/", id), Some(&cookie))
        .await;
    assert_eq!(ack.status(), StatusCode::OK);
    assert_eq!(body_json(ack).await["message"], "Task status updated");

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["active_tasks"].as_array().unwrap().len(), 0);
    assert_eq!(view["completed_tasks"].as_array().unwrap().len(), 1);

    ctx.get(&format!("/check_task/{}/", id), Some(&cookie))
        .await;

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["active_tasks"].as_array().unwrap().len(), 1);
    assert_eq!(view["completed_tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_toggle_unknown_task_is_404() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;

    let response = ctx.get("/check_task/999/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;
    ctx.post_form("/new_task", "task=buy+milk", Some(&cookie))
        .await;

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    let id = view["all_tasks"][0]["id"].as_i64().unwrap();

    let first = ctx.get(&format!("/delete/{}/", id), Some(&cookie)).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&first), "/a@x.com");

    // Deleting again is a silent no-op.
    let second = ctx.get(&format!("/delete/{}/", id), Some(&cookie)).await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["all_tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_tasks_are_isolated_between_users() {
    let ctx = TestContext::new();
    let cookie_a = ctx.register("a@x.com", "pw").await;
    ctx.post_form("/new_task", "task=secret", Some(&cookie_a))
        .await;

    let view_a = body_json(ctx.get("/a@x.com", Some(&cookie_a)).await).await;
    let task_id = view_a["all_tasks"][0]["id"].as_i64().unwrap();

    let cookie_b = ctx.register("b@x.com", "pw").await;

    // B sees nothing.
    let view_b = body_json(ctx.get("/b@x.com", Some(&cookie_b)).await).await;
    assert_eq!(view_b["all_tasks"].as_array().unwrap().len(), 0);

    // B cannot toggle A's task by guessing its id.
    let toggle = ctx
        .get(&format!("/check_task/{}/", task_id), Some(&cookie_b))
        .await;
    assert_eq!(toggle.status(), StatusCode::NOT_FOUND);

    // B's delete of A's task is a no-op.
    ctx.get(&format!("/delete/{}/", task_id), Some(&cookie_b))
        .await;
    let view_a = body_json(ctx.get("/a@x.com", Some(&cookie_a)).await).await;
    assert_eq!(view_a["all_tasks"].as_array().unwrap().len(), 1);
    assert_eq!(view_a["all_tasks"][0]["is_active"], true);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let ctx = TestContext::new();
    let cookie = ctx.register("a@x.com", "pw").await;

    let response = ctx.get("/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    // The old cookie no longer authenticates; the server-side row is gone.
    let home = ctx.get("/", Some(&cookie)).await;
    assert_eq!(home.status(), StatusCode::OK);
    assert_eq!(body_json(home).await["view"], "landing");
}

#[tokio::test]
async fn test_end_to_end_flow() {
    let ctx = TestContext::new();

    // Register → one active task → toggle → delete → empty again.
    let cookie = ctx.register("a@x.com", "pw").await;
    ctx.post_form("/new_task", "task=buy+milk", Some(&cookie))
        .await;

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["active_tasks"].as_array().unwrap().len(), 1);
    assert_eq!(view["completed_tasks"].as_array().unwrap().len(), 0);
    assert_eq!(view["active_tasks"][0]["description"], "buy milk");

    let id = view["all_tasks"][0]["id"].as_i64().unwrap();
    ctx.get(&format!("/check_task/{}/", id), Some(&cookie))
        .await;

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["active_tasks"].as_array().unwrap().len(), 0);
    assert_eq!(view["completed_tasks"].as_array().unwrap().len(), 1);

    ctx.get(&format!("/delete/{}/", id), Some(&cookie)).await;

    let view = body_json(ctx.get("/a@x.com", Some(&cookie)).await).await;
    assert_eq!(view["all_tasks"].as_array().unwrap().len(), 0);
    assert_eq!(view["active_tasks"].as_array().unwrap().len(), 0);
    assert_eq!(view["completed_tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let response = ctx.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "connected");
}
