//! Integration tests for the REST surface
//!
//! Each test builds the full router over a fresh in-memory store seeded with
//! the demo catalog and drives it with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use movie_catalog::config::Config;
use movie_catalog::db::{Database, seed};
use movie_catalog::{AppState, build_app};

async fn test_app() -> Router {
    test_app_with_db().await.0
}

/// App plus a handle on its store, for tests that need rows the API cannot create
async fn test_app_with_db() -> (Router, Database) {
    let db = Database::in_memory().await.unwrap();
    seed::seed_demo_catalog(db.pool()).await.unwrap();
    let config = Config {
        page_size: 3,
        ..Config::default()
    };
    (build_app(AppState::new(&config, db.clone())), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

// ============================================================================
// Movies
// ============================================================================

mod movies {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_first_page_sorted_by_rating() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movies/1").await;

        assert_eq!(status, StatusCode::OK);
        let movies = body.as_array().unwrap();
        assert_eq!(movies.len(), 3);

        let ratings: Vec<f64> = movies.iter().map(|m| m["rating"].as_f64().unwrap()).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(movies[0]["title"], "The Long Harbor");
        assert_eq!(movies[0]["actors"], json!(["Ana Ruiz", "Morgan Hale", "Tomas Berg"]));
        assert_eq!(movies[0]["genres"], json!(["Crime", "Drama"]));
    }

    #[tokio::test]
    async fn test_page_past_end_is_404() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movies/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error_msg": "404: Página não encontrada." }));
    }

    #[tokio::test]
    async fn test_page_zero_is_first_page() {
        let app = test_app().await;
        assert_eq!(get(&app, "/movies/0").await, get(&app, "/movies/1").await);
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_400() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movies/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error_msg": "Número de página inválido: 'abc'" }));
    }

    #[tokio::test]
    async fn test_get_movie() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movie/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 2,
                "title": "Glass Orchard",
                "year": 2010,
                "runtime": 148,
                "synopsis": "A botanist discovers her greenhouse grows memories.",
                "poster": null,
                "rating": 8.8,
                "votes": 1_900_000,
                "imdb_id": "tt9000002",
                "actors": ["Ana Ruiz", "Chloe Park"],
                "genres": ["Drama", "Fantasy"]
            })
        );
    }

    #[tokio::test]
    async fn test_missing_movie_is_404() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movie/404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error_msg": "404: Filme com ID especificado não encontrado." }));
    }

    #[tokio::test]
    async fn test_search_movies() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movies/search/quiet").await;

        assert_eq!(status, StatusCode::OK);
        let movies = body.as_array().unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0]["title"], "The Quiet Cartographer");
        assert_eq!(movies[0]["actors"], json!(["Morgan Hale"]));
    }

    #[tokio::test]
    async fn test_search_with_encoded_space() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movies/search/paper%20moon").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["title"], "Night of the Paper Moon");
    }

    #[tokio::test]
    async fn test_search_accented_title() {
        let (app, db) = test_app_with_db().await;
        sqlx::query("INSERT INTO movies (title, year, rating) VALUES ('Élan Vital', 2004, 6.4)")
            .execute(db.pool())
            .await
            .unwrap();

        let (status, body) = get(&app, "/movies/search/%C3%89lan").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["title"], "Élan Vital");
        assert_eq!(body[0]["actors"], json!([]));
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let app = test_app().await;
        let (status, _) = get(&app, "/movies/search/%25").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(&app, "/movies/search/_").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_without_results_is_404() {
        let app = test_app().await;
        let (status, body) = get(&app, "/movies/search/zzz-no-match").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error_msg": "Nenhum resultado para sua busca." }));
    }
}

// ============================================================================
// Genres
// ============================================================================

mod genres {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_movies_by_genre() {
        let app = test_app().await;
        let (status, body) = get(&app, "/genres/Comedy").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "genre": "Comedy", "movies": ["Brass Weather", "Lantern Season"] })
        );
    }

    #[tokio::test]
    async fn test_unknown_genre_is_404() {
        let app = test_app().await;
        let (status, body) = get(&app, "/genres/Western").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error_msg": "404: Gênero pesquisado não existe." })
        );
    }
}

// ============================================================================
// Actors
// ============================================================================

mod actors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_get_actor() {
        let app = test_app().await;
        let (status, body) = get(&app, "/actor/4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "name": "Chloe Park", "movies": ["Glass Orchard", "Lantern Season"] })
        );
    }

    #[tokio::test]
    async fn test_missing_actor_uses_msg_key() {
        let app = test_app().await;
        let (status, body) = get(&app, "/actor/404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "msg": "ID do ator não encontrado." }));
    }

    #[tokio::test]
    async fn test_search_actors() {
        let app = test_app().await;
        let (status, body) = get(&app, "/actors/search/vale").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 5, "name": "Idris Vale", "movies": ["Brass Weather"] }])
        );

        let (status, body) = get(&app, "/actors/search/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "msg": "Nenhum ator encontrado na busca." }));
    }

    #[tokio::test]
    async fn test_search_accented_name() {
        let app = test_app().await;
        let (status, body) =
            send(&app, Method::POST, "/actors", Some(json!({ "name": "Émile Zola" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id_added"].clone();

        let (status, body) = get(&app, "/actors/search/%C3%89mile").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": id, "name": "Émile Zola", "movies": [] }]));
    }

    #[tokio::test]
    async fn test_create_then_get_actor() {
        let app = test_app().await;
        let (status, body) =
            send(&app, Method::POST, "/actors", Some(json!({ "name": "Jane Doe" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["msg"], "Ator adicionado com sucesso!");
        let id = body["id_added"].as_i64().unwrap();

        let (status, body) = get(&app, &format!("/actor/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "name": "Jane Doe", "movies": [] }));
    }

    #[tokio::test]
    async fn test_create_actor_validation() {
        let app = test_app().await;

        let (status, body) =
            send(&app, Method::POST, "/actors", Some(json!({ "name": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error_msg": "O nome do ator não pode ser vazio." }));

        let (status, body) = send(&app, Method::POST, "/actors", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error_msg"]
                .as_str()
                .unwrap()
                .starts_with("Corpo da requisição inválido")
        );
    }

    #[tokio::test]
    async fn test_rename_actor() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/actors",
            Some(json!({ "id": 3, "name": "Tomas Bergman" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "msg": "ID 3 alterado com sucesso!" }));

        let (_, body) = get(&app, "/actor/3").await;
        assert_eq!(body["name"], "Tomas Bergman");
    }

    #[tokio::test]
    async fn test_rename_accepts_string_id_and_is_idempotent() {
        let app = test_app().await;
        let payload = json!({ "id": "2", "name": "Ana Ruiz" });

        for _ in 0..2 {
            let (status, _) = send(&app, Method::PUT, "/actors", Some(payload.clone())).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (_, body) = get(&app, "/actor/2").await;
        assert_eq!(body["name"], "Ana Ruiz");
    }

    #[tokio::test]
    async fn test_rename_missing_actor_is_404() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/actors",
            Some(json!({ "id": 404, "name": "Ghost" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error_msg": "404: ID informado não encontrado para modificação." })
        );
    }

    #[tokio::test]
    async fn test_delete_actor_cascades_participations() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::DELETE, "/actors/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "msg": "Ator removido com sucesso!", "id_removed": 1 })
        );

        let (status, _) = get(&app, "/actor/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, movie) = get(&app, "/movie/1").await;
        assert_eq!(movie["actors"], json!(["Ana Ruiz", "Tomas Berg"]));

        let (status, body) = send(&app, Method::DELETE, "/actors/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error_msg": "ID não encontrado para remoção." }));
    }

    #[tokio::test]
    async fn test_delete_actor_with_bad_id_is_400() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::DELETE, "/actors/one", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error_msg": "ID do ator inválido: 'one'" }));
    }
}

// ============================================================================
// Participations
// ============================================================================

mod participations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_link_then_unlink() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::POST, "/participations/5/7", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["msg"], "Participação adicionada com sucesso!");
        let id = body["id_added"].clone();

        let (_, actor) = get(&app, "/actor/5").await;
        assert_eq!(actor["movies"], json!(["Brass Weather", "Lantern Season"]));

        let (status, body) = send(&app, Method::DELETE, "/participations/5/7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "msg": "Participação removida com sucesso!", "id_removed": id })
        );

        let (status, body) = send(&app, Method::DELETE, "/participations/5/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error_msg": "Tupla não encontrada para remoção." })
        );
    }

    #[tokio::test]
    async fn test_link_requires_existing_actor_and_movie() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::POST, "/participations/404/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error_msg": "404: Ator com ID especificado não encontrado." }));

        let (status, _) = send(&app, Method::POST, "/participations/1/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_link_is_409() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::POST, "/participations/1/1", None).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error_msg"].as_str().unwrap().contains("já está vinculado"));
    }

    #[tokio::test]
    async fn test_malformed_ids_are_400() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::POST, "/participations/x/1", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error_msg": "ID do ator inválido: 'x'" }));
    }
}

// ============================================================================
// Health
// ============================================================================

mod health {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_health_and_readiness() {
        let app = test_app().await;

        let (status, body) = get(&app, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = get(&app, "/readyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ready": true, "database": true }));
    }
}
