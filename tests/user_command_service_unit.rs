mod support;

use quill_core::application::{
    commands::users::{
        ChangePasswordCommand, LoginUserCommand, RegisterUserCommand, UpdateProfileCommand,
    },
    error::ApplicationError,
};
use support::{SEED_PASSWORD, TestApp};

fn registration(username: &str, email: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: "analytical-engine".to_string(),
        repassword: "analytical-engine".to_string(),
    }
}

fn login(username: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// 登録したユーザーはログインでき、空のプロフィールが作られる
#[tokio::test]
async fn register_then_login() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;

    let user = commands
        .register(registration("ada", "ada@example.com"))
        .await
        .unwrap();
    assert_eq!(user.username, "ada");
    assert!(user.is_active);

    let result = commands
        .login(login("ada", "analytical-engine"))
        .await
        .unwrap();
    assert_eq!(result.message, "Login successful! Welcome, ada");
    assert_eq!(result.user.id, user.id);

    let authenticated = app.services.authenticate(&result.token.token).await.unwrap();
    let profile = app.services.user_queries.profile(&authenticated).await.unwrap();
    assert_eq!(profile.user.email, "ada@example.com");
    assert!(profile.detail.title.is_none());
}

/// ユーザー名またはメールアドレスの重複は Conflict
#[tokio::test]
async fn duplicate_identity_is_a_conflict() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;
    commands
        .register(registration("ada", "ada@example.com"))
        .await
        .unwrap();

    let same_name = commands
        .register(registration("ada", "other@example.com"))
        .await;
    assert!(matches!(same_name, Err(ApplicationError::Conflict(_))));

    let same_email = commands
        .register(registration("grace", "ada@example.com"))
        .await;
    assert!(matches!(same_email, Err(ApplicationError::Conflict(_))));
}

/// 確認用パスワードの不一致と弱いパスワードは検証エラー
#[tokio::test]
async fn password_rules_are_enforced_on_registration() {
    let app = TestApp::new();
    let commands = &app.services.user_commands;

    let mut mismatch = registration("ada", "ada@example.com");
    mismatch.repassword = "different-secret".to_string();
    assert!(matches!(
        commands.register(mismatch).await,
        Err(ApplicationError::Validation(msg)) if msg == "Passwords do not match."
    ));

    let mut numeric = registration("ada", "ada@example.com");
    numeric.password = "12345678".to_string();
    numeric.repassword = "12345678".to_string();
    assert!(matches!(
        commands.register(numeric).await,
        Err(ApplicationError::Validation(_))
    ));
}

/// 誤ったパスワードや存在しないユーザーは同じ Unauthorized になる
#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let app = TestApp::new();
    app.seed_user("writer").await;
    let commands = &app.services.user_commands;

    let wrong_password = commands.login(login("writer", "nope-nope-1")).await;
    let unknown_user = commands.login(login("ghost", SEED_PASSWORD)).await;

    for result in [wrong_password, unknown_user] {
        assert!(matches!(
            result,
            Err(ApplicationError::Unauthorized(msg)) if msg == "Check your information and try again!"
        ));
    }
}

/// 無効化されたアカウントはログインできない
#[tokio::test]
async fn inactive_account_cannot_log_in() {
    let app = TestApp::new();
    let user = app.seed_user("sleeper").await;
    app.catalog.deactivate_user(i64::from(user.id));

    let result = app
        .services
        .user_commands
        .login(login("sleeper", SEED_PASSWORD))
        .await;
    assert!(matches!(result, Err(ApplicationError::Forbidden(_))));
}

/// ログアウト後のトークンは拒否される
#[tokio::test]
async fn logout_revokes_the_session() {
    let app = TestApp::new();
    app.seed_user("writer").await;

    let login_result = app
        .services
        .user_commands
        .login(login("writer", SEED_PASSWORD))
        .await
        .unwrap();
    let token = login_result.token.token;

    let actor = app.services.authenticate(&token).await.unwrap();
    app.services.user_commands.logout(&actor).await.unwrap();

    assert!(matches!(
        app.services.authenticate(&token).await,
        Err(ApplicationError::Unauthorized(_))
    ));
}

/// 旧パスワードの確認後に新しいパスワードへ切り替わる
#[tokio::test]
async fn change_password_requires_the_old_one() {
    let app = TestApp::new();
    let user = app.seed_user("writer").await;
    let commands = &app.services.user_commands;

    let wrong_old = commands
        .change_password(
            &user,
            ChangePasswordCommand {
                old_password: "not-my-password".to_string(),
                new_password1: "brand-new-secret".to_string(),
                new_password2: "brand-new-secret".to_string(),
            },
        )
        .await;
    assert!(matches!(wrong_old, Err(ApplicationError::Validation(_))));

    commands
        .change_password(
            &user,
            ChangePasswordCommand {
                old_password: SEED_PASSWORD.to_string(),
                new_password1: "brand-new-secret".to_string(),
                new_password2: "brand-new-secret".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(commands.login(login("writer", SEED_PASSWORD)).await.is_err());
    assert!(commands.login(login("writer", "brand-new-secret")).await.is_ok());
}

/// プロフィール更新: 空欄はクリア、他人のユーザー名は Conflict
#[tokio::test]
async fn profile_update_clears_blanks_and_guards_identity() {
    let app = TestApp::new();
    let user = app.seed_user("writer").await;
    app.seed_user("taken").await;
    let commands = &app.services.user_commands;

    let update = |username: &str, title: Option<&str>| UpdateProfileCommand {
        first_name: "New".to_string(),
        last_name: "Name".to_string(),
        username: username.to_string(),
        email: "writer@example.com".to_string(),
        title: title.map(str::to_string),
        description: Some("Writes about Rust".to_string()),
    };

    let profile = commands
        .update_profile(&user, update("writer", Some("Editor")))
        .await
        .unwrap();
    assert_eq!(profile.user.first_name, "New");
    assert_eq!(profile.detail.title.as_deref(), Some("Editor"));

    let cleared = commands
        .update_profile(&user, update("writer", Some("   ")))
        .await
        .unwrap();
    assert!(cleared.detail.title.is_none());
    assert_eq!(cleared.detail.description.as_deref(), Some("Writes about Rust"));

    let conflict = commands.update_profile(&user, update("taken", None)).await;
    assert!(matches!(conflict, Err(ApplicationError::Conflict(_))));
}
