// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::controllers::pages::home,
        super::controllers::pages::about,
        super::controllers::pages::contact_page,
        super::controllers::pages::send_contact,
        super::controllers::posts::list_posts,
        super::controllers::posts::list_by_category,
        super::controllers::posts::list_by_tag,
        super::controllers::posts::search,
        super::controllers::posts::post_detail,
        super::controllers::posts::create_form,
        super::controllers::posts::create_post,
        super::controllers::posts::update_form,
        super::controllers::posts::update_post,
        super::controllers::posts::delete_post,
        super::controllers::posts::upload_image,
        super::controllers::comments::add_comment,
        super::controllers::users::register,
        super::controllers::users::login,
        super::controllers::users::logout,
        super::controllers::users::profile_detail,
        super::controllers::users::profile_form,
        super::controllers::users::update_profile,
        super::controllers::users::upload_avatar,
        super::controllers::users::change_password,
        super::controllers::users::authors,
        super::controllers::users::author_detail,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            super::error::ErrorResponse,
            super::controllers::requests::ContactRequest,
            super::controllers::requests::PostFormRequest,
            super::controllers::requests::CommentRequest,
            super::controllers::requests::RegisterRequest,
            super::controllers::requests::LoginRequest,
            super::controllers::requests::ProfileUpdateRequest,
            super::controllers::requests::ChangePasswordRequest,
            super::controllers::requests::ImageUploadForm,
            crate::application::dto::HomePageDto,
            crate::application::dto::AboutPageDto,
            crate::application::dto::PostListPageDto,
            crate::application::dto::SearchPageDto,
            crate::application::dto::PostDetailPageDto,
            crate::application::dto::PostFormContextDto,
            crate::application::dto::ProfilePageDto,
            crate::application::dto::AuthorsPageDto,
            crate::application::dto::AuthorDetailPageDto,
            crate::application::dto::MessageDto,
            crate::application::dto::SidebarDto,
            crate::application::dto::PostDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::TagDto,
            crate::application::dto::UserDto,
            crate::application::dto::UserDetailDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::LoginResultDto
        )
    ),
    tags(
        (name = "Pages", description = "Home, about and contact"),
        (name = "Posts", description = "Catalog browsing, post management and comments"),
        (name = "Users", description = "Accounts, profiles and authors"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Quill API",
        description = "Blogging platform backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:8000") {
            urls.push("http://localhost:8000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_and_account_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/",
            "/posts",
            "/posts/{category_slug}/{id}/{slug}",
            "/posts/search",
            "/posts/comment/{post_id}",
            "/user/login",
            "/user/detail/{id}",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
