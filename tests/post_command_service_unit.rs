mod support;

use quill_core::application::{
    commands::posts::{
        CreateCommentCommand, CreatePostCommand, DeletePostCommand, UpdatePostCommand,
        UploadPostImageCommand,
    },
    error::ApplicationError,
    ports::media::MediaUpload,
};
use support::{TestApp, actor};

fn update_command(slug: &str, category_id: i64, title: &str) -> UpdatePostCommand {
    UpdatePostCommand {
        slug: slug.to_string(),
        category_id,
        tag_ids: Vec::new(),
        title: title.to_string(),
        content: "updated body".to_string(),
        available: true,
    }
}

/// 同じタイトルの投稿には `-1`, `-2` の接尾辞が付く
#[tokio::test]
async fn duplicate_titles_receive_numbered_slugs() {
    let app = TestApp::new();
    let author = app.seed_user("writer").await;
    let category = app.seed_category("Rust").await;

    let first = app
        .seed_post(&author, category.id, "Hello World", "one", true)
        .await;
    let second = app
        .seed_post(&author, category.id, "Hello World", "two", true)
        .await;
    let third = app
        .seed_post(&author, category.id, "Hello World", "three", true)
        .await;

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");
    assert_eq!(third.slug, "hello-world-2");
}

/// タイトルが変わらない更新ではスラッグを維持し、変わればスラッグを再生成する
#[tokio::test]
async fn slug_follows_title_changes_only() {
    let app = TestApp::new();
    let author = app.seed_user("writer").await;
    let category = app.seed_category("Rust").await;
    let post = app
        .seed_post(&author, category.id, "Ownership Basics", "body", true)
        .await;

    let kept = app
        .services
        .post_commands
        .update_post(&author, update_command(&post.slug, category.id, "Ownership Basics"))
        .await
        .unwrap();
    assert_eq!(kept.slug, "ownership-basics");
    assert_eq!(kept.content, "updated body");

    let renamed = app
        .services
        .post_commands
        .update_post(&author, update_command(&kept.slug, category.id, "Borrowing Rules"))
        .await
        .unwrap();
    assert_eq!(renamed.slug, "borrowing-rules");
    assert_eq!(renamed.id, post.id);
}

/// 他人の投稿の更新・削除は存在しない投稿と同じく NotFound になる
#[tokio::test]
async fn non_owner_cannot_update_or_delete() {
    let app = TestApp::new();
    let owner = app.seed_user("owner").await;
    let intruder = app.seed_user("intruder").await;
    let category = app.seed_category("Rust").await;
    let post = app
        .seed_post(&owner, category.id, "Private Thoughts", "body", true)
        .await;

    let update = app
        .services
        .post_commands
        .update_post(&intruder, update_command(&post.slug, category.id, "Hijacked"))
        .await;
    assert!(matches!(update, Err(ApplicationError::NotFound(_))));

    let delete = app
        .services
        .post_commands
        .delete_post(&intruder, DeletePostCommand { id: post.id })
        .await;
    assert!(matches!(delete, Err(ApplicationError::NotFound(_))));
    assert_eq!(app.catalog.post_count(), 1);
}

/// 削除するとコメントも一緒に消える
#[tokio::test]
async fn deleting_a_post_removes_its_comments() {
    let app = TestApp::new();
    let owner = app.seed_user("owner").await;
    let reader = app.seed_user("reader").await;
    let category = app.seed_category("Rust").await;
    let post = app
        .seed_post(&owner, category.id, "Discuss Me", "body", true)
        .await;

    let comment = app
        .services
        .post_commands
        .add_comment(
            &reader,
            CreateCommentCommand {
                post_id: post.id,
                content: "Nice post".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.author_username, "reader");
    assert_eq!(app.catalog.comment_count(), 1);

    app.services
        .post_commands
        .delete_post(&owner, DeletePostCommand { id: post.id })
        .await
        .unwrap();
    assert_eq!(app.catalog.post_count(), 0);
    assert_eq!(app.catalog.comment_count(), 0);
}

/// 存在しない投稿へのコメントは NotFound
#[tokio::test]
async fn commenting_on_missing_post_is_not_found() {
    let app = TestApp::new();
    let reader = app.seed_user("reader").await;

    let result = app
        .services
        .post_commands
        .add_comment(
            &reader,
            CreateCommentCommand {
                post_id: 404,
                content: "hello?".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

/// 未知のカテゴリやタイトル超過は検証エラー
#[tokio::test]
async fn invalid_post_input_is_rejected() {
    let app = TestApp::new();
    let author = app.seed_user("writer").await;
    let category = app.seed_category("Rust").await;

    let unknown_category = CreatePostCommand::builder()
        .category(9999)
        .title("Orphan")
        .content("body")
        .build()
        .unwrap();
    let result = app
        .services
        .post_commands
        .create_post(&author, unknown_category)
        .await;
    assert!(matches!(result, Err(ApplicationError::Validation(_))));

    let long_title = CreatePostCommand::builder()
        .category(category.id)
        .title("x".repeat(76))
        .content("body")
        .build()
        .unwrap();
    let result = app.services.post_commands.create_post(&author, long_title).await;
    assert!(result.is_err());
    assert_eq!(app.catalog.post_count(), 0);
}

/// 画像アップロードは投稿の image に保存パスを設定する
#[tokio::test]
async fn uploading_an_image_sets_the_post_image() {
    let app = TestApp::new();
    let author = app.seed_user("writer").await;
    let category = app.seed_category("Rust").await;
    let post = app
        .seed_post(&author, category.id, "With Picture", "body", true)
        .await;

    let updated = app
        .services
        .post_commands
        .upload_image(
            &author,
            UploadPostImageCommand {
                post_id: post.id,
                upload: MediaUpload {
                    file_name: Some("cover.png".to_string()),
                    content_type: Some("image/png".to_string()),
                    bytes: bytes::Bytes::from_static(b"\x89PNG"),
                },
            },
        )
        .await
        .unwrap();

    let image = updated.image.expect("image path");
    assert!(image.starts_with("posts/"));
    assert!(image.ends_with(".png"));
    assert_eq!(app.media.stored(), vec![image]);

    let stranger = actor(999, "stranger");
    let denied = app
        .services
        .post_commands
        .upload_image(
            &stranger,
            UploadPostImageCommand {
                post_id: post.id,
                upload: MediaUpload {
                    file_name: Some("x.png".to_string()),
                    content_type: None,
                    bytes: bytes::Bytes::from_static(b"x"),
                },
            },
        )
        .await;
    assert!(matches!(denied, Err(ApplicationError::NotFound(_))));
}
