//! Playlist API routes (`/api/playlists`)

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::warn;

use super::errors::ApiError;
use crate::core::validation::{validate_new, validate_update};
use crate::core::PlaylistService;
use crate::models::{Playlist, PlaylistPayload};

type ApiResult = Result<HttpResponse, ApiError>;

/// 204 for an empty list, 200 with the list otherwise
fn list_response(playlists: Vec<Playlist>) -> HttpResponse {
    if playlists.is_empty() {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Ok().json(playlists)
    }
}

/// GET /api/playlists
#[get("")]
pub async fn get_all_playlists(service: web::Data<PlaylistService>) -> ApiResult {
    let playlists = service.get_all_playlists().await?;
    Ok(list_response(playlists))
}

/// GET /api/playlists/title/{title}
#[get("/title/{title}")]
pub async fn get_playlists_by_title(
    service: web::Data<PlaylistService>,
    path: web::Path<String>,
) -> ApiResult {
    let playlists = service.get_playlists_by_title(&path).await?;
    Ok(list_response(playlists))
}

/// GET /api/playlists/{id}
#[get("/{id}")]
pub async fn get_playlist_by_id(
    service: web::Data<PlaylistService>,
    path: web::Path<i64>,
) -> ApiResult {
    let playlist = service.get_playlist_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(playlist))
}

/// POST /api/playlists
#[post("")]
pub async fn create_playlist(
    service: web::Data<PlaylistService>,
    body: web::Json<PlaylistPayload>,
) -> ApiResult {
    let input = validate_new(body.into_inner()).map_err(|errors| {
        warn!("Rejected new playlist: {} violation(s)", errors.len());
        ApiError::Validation(errors)
    })?;

    let playlist = service.create_playlist(input).await?;
    Ok(HttpResponse::Created().json(playlist))
}

/// PUT /api/playlists
#[put("")]
pub async fn update_playlist(
    service: web::Data<PlaylistService>,
    body: web::Json<PlaylistPayload>,
) -> ApiResult {
    let input = validate_update(body.into_inner()).map_err(|errors| {
        warn!("Rejected playlist update: {} violation(s)", errors.len());
        ApiError::Validation(errors)
    })?;

    let playlist = service.update_playlist(input).await?;
    Ok(HttpResponse::Ok().json(playlist))
}

/// DELETE /api/playlists/{id}
#[delete("/{id}")]
pub async fn delete_playlist_by_id(
    service: web::Data<PlaylistService>,
    path: web::Path<i64>,
) -> ApiResult {
    service.delete_playlist_by_id(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure playlist routes. `/title/{title}` must be registered before
/// `/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(get_all_playlists)
    .service(get_playlists_by_title)
    .service(get_playlist_by_id)
    .service(create_playlist)
    .service(update_playlist)
    .service(delete_playlist_by_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::models::{Song, SongCategory};
    use crate::stores::{MemoryPlaylistStore, MemorySongCatalog, SongLookup};

    async fn service_with_songs() -> (PlaylistService, Vec<Song>) {
        let catalog = Arc::new(MemorySongCatalog::new());
        let mut songs = Vec::new();
        for (title, artist) in [
            ("For The Lover That I Lost", "Sam Smith"),
            ("Summer Rain", "Lean Bridges"),
        ] {
            let song = Song::new(title, "Live At Abbey Road Studios", SongCategory::Pop, artist, "3:01");
            songs.push(catalog.create_song(&song).await.unwrap());
        }

        let store = Arc::new(MemoryPlaylistStore::new());
        (PlaylistService::new(store, catalog), songs)
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($service))
                    .configure(crate::api::configure),
            )
            .await
        };
    }

    fn body(title: &str, description: &str, song_ids: &[i64]) -> Value {
        json!({
            "title": title,
            "description": description,
            "songs": song_ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>(),
        })
    }

    #[actix_web::test]
    async fn test_get_all_empty_is_no_content() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::get().uri("/api/playlists").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let (service, songs) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(body("Playlist1", "Description Playlist1", &[songs[0].id, songs[1].id]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["songs"][1]["artistName"], "Lean Bridges");

        let req = test::TestRequest::get().uri("/api/playlists").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["title"], "Playlist1");
        assert_eq!(list[0]["description"], "Description Playlist1");
    }

    #[actix_web::test]
    async fn test_get_by_title() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(body("Playlist1", "Description Playlist1", &[]))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/playlists/title/Playlist")
            .to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found[0]["title"], "Playlist1");

        let req = test::TestRequest::get()
            .uri("/api/playlists/title/No%20Title")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_get_by_id_not_found() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::get().uri("/api/playlists/1000").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not found playlist with id = 1000");
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::get().uri("/api/playlists/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_with_short_title() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(body("S", "Description Playlist1", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fieldErrors"][0]["field"], "title");
        assert_eq!(
            body["fieldErrors"][0]["message"],
            "Size: title must be between 3 and 50 characters"
        );
    }

    #[actix_web::test]
    async fn test_create_with_null_description() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(json!({ "title": "Playlist1", "description": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["fieldErrors"][0]["message"],
            "NotBlank: description must not be null or blank"
        );
    }

    #[actix_web::test]
    async fn test_create_with_unknown_song() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(body("Playlist1", "Description Playlist1", &[42]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not found song with id = 42");

        let req = test::TestRequest::get().uri("/api/playlists").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn test_update_keeps_songs_when_list_empty() {
        let (service, songs) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(body("Playlist1", "Description Playlist1", &[songs[0].id, songs[1].id]))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let mut update = body("Playlist Renamed", "Description Playlist1", &[]);
        update["id"] = created["id"].clone();
        let req = test::TestRequest::put()
            .uri("/api/playlists")
            .set_json(update)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["title"], "Playlist Renamed");
        assert_eq!(updated["songs"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_update_missing_playlist() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let mut update = body("Playlist1", "Description Playlist1", &[]);
        update["id"] = json!(5000);
        let req = test::TestRequest::put()
            .uri("/api/playlists")
            .set_json(update)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not found playlist with id = 5000");
    }

    #[actix_web::test]
    async fn test_update_without_id() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::put()
            .uri("/api/playlists")
            .set_json(body("Playlist1", "Description Playlist1", &[]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fieldErrors"][0]["field"], "id");
    }

    #[actix_web::test]
    async fn test_delete_then_get() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(body("Playlist1", "Description Playlist1", &[]))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/playlists/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/playlists/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not found playlist with id = 1");
    }

    #[actix_web::test]
    async fn test_delete_missing_playlist() {
        let (service, _) = service_with_songs().await;
        let app = app!(service);

        let req = test::TestRequest::delete().uri("/api/playlists/5000").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
