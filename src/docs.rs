use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use notebook_core::{ErrorResponse, FieldError};
use notebook_models::{
    AuthTokenResponse, CreateNoteDto, DeleteNoteResponse, LoginRequest, Note, RegisterRequest,
    UpdateNoteDto, UserProfile,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_profile,
        crate::modules::notes::controller::list_notes,
        crate::modules::notes::controller::create_note,
        crate::modules::notes::controller::update_note,
        crate::modules::notes::controller::delete_note,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthTokenResponse,
            UserProfile,
            Note,
            CreateNoteDto,
            UpdateNoteDto,
            DeleteNoteResponse,
            ErrorResponse,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and profile"),
        (name = "Notes", description = "Personal notes owned by the authenticated user")
    ),
    info(
        title = "Notebook API",
        version = "0.1.0",
        description = "A small notes backend built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/auth/register",
            "/auth/login",
            "/auth/profile",
            "/notes",
            "/notes/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
