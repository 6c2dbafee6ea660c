//! Demo catalog seed data.
//!
//! Inserts a small fixed set of movies, genres, actors and links. Uses
//! INSERT OR IGNORE with explicit ids so re-runs are idempotent (existing
//! rows are preserved).

use sqlx::SqlitePool;
use tracing::info;

struct MovieRow {
    id: i64,
    title: &'static str,
    year: i32,
    runtime: i32,
    synopsis: &'static str,
    rating: f64,
    votes: i64,
    imdb_id: &'static str,
}

const MOVIES: &[MovieRow] = &[
    MovieRow {
        id: 1,
        title: "The Long Harbor",
        year: 1994,
        runtime: 142,
        synopsis: "Two dock workers keep a failing port alive through one hard winter.",
        rating: 9.1,
        votes: 2_100_000,
        imdb_id: "tt9000001",
    },
    MovieRow {
        id: 2,
        title: "Glass Orchard",
        year: 2010,
        runtime: 148,
        synopsis: "A botanist discovers her greenhouse grows memories.",
        rating: 8.8,
        votes: 1_900_000,
        imdb_id: "tt9000002",
    },
    MovieRow {
        id: 3,
        title: "Night of the Paper Moon",
        year: 1972,
        runtime: 175,
        synopsis: "A forger is pulled into one last job by the family he left.",
        rating: 8.7,
        votes: 1_500_000,
        imdb_id: "tt9000003",
    },
    MovieRow {
        id: 4,
        title: "Salt Line",
        year: 2019,
        runtime: 132,
        synopsis: "A coastal town bets everything on a desalination plant.",
        rating: 8.5,
        votes: 800_000,
        imdb_id: "tt9000004",
    },
    MovieRow {
        id: 5,
        title: "Brass Weather",
        year: 2001,
        runtime: 101,
        synopsis: "A marching band tours a country that no longer wants music.",
        rating: 7.9,
        votes: 400_000,
        imdb_id: "tt9000005",
    },
    MovieRow {
        id: 6,
        title: "The Quiet Cartographer",
        year: 1988,
        runtime: 117,
        synopsis: "A mapmaker charts a city that rearranges itself each night.",
        rating: 7.6,
        votes: 250_000,
        imdb_id: "tt9000006",
    },
    MovieRow {
        id: 7,
        title: "Lantern Season",
        year: 2015,
        runtime: 96,
        synopsis: "Three siblings return home for a festival none of them liked.",
        rating: 7.2,
        votes: 120_000,
        imdb_id: "tt9000007",
    },
];

const GENRES: &[(i64, &str)] = &[
    (1, "Drama"),
    (2, "Crime"),
    (3, "Fantasy"),
    (4, "Comedy"),
    (5, "Mystery"),
];

/// (movie_id, genre_id)
const MOVIE_GENRES: &[(i64, i64)] = &[
    (1, 1),
    (1, 2),
    (2, 3),
    (2, 1),
    (3, 2),
    (3, 1),
    (4, 1),
    (5, 4),
    (6, 5),
    (6, 3),
    (7, 4),
    (7, 1),
];

const ACTORS: &[(i64, &str)] = &[
    (1, "Morgan Hale"),
    (2, "Ana Ruiz"),
    (3, "Tomas Berg"),
    (4, "Chloe Park"),
    (5, "Idris Vale"),
];

/// (actor_id, movie_id)
const PARTICIPATIONS: &[(i64, i64)] = &[
    (1, 1),
    (1, 3),
    (1, 6),
    (2, 1),
    (2, 2),
    (3, 1),
    (3, 4),
    (4, 2),
    (4, 7),
    (5, 5),
];

/// Seed the demo catalog. Returns the number of rows inserted.
pub async fn seed_demo_catalog(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for movie in MOVIES {
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO movies (id, title, year, runtime, synopsis, poster, rating, votes, imdb_id)
            VALUES (?, ?, ?, ?, ?, NULL, ?, ?, ?)
            "#,
        )
        .bind(movie.id)
        .bind(movie.title)
        .bind(movie.year)
        .bind(movie.runtime)
        .bind(movie.synopsis)
        .bind(movie.rating)
        .bind(movie.votes)
        .bind(movie.imdb_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for &(id, name) in GENRES {
        inserted += sqlx::query("INSERT OR IGNORE INTO genres (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    for &(movie_id, genre_id) in MOVIE_GENRES {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO movie_genres (movie_id, genre_id) VALUES (?, ?)",
        )
        .bind(movie_id)
        .bind(genre_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for &(id, name) in ACTORS {
        inserted += sqlx::query("INSERT OR IGNORE INTO actors (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    for &(actor_id, movie_id) in PARTICIPATIONS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO participations (actor_id, movie_id) VALUES (?, ?)",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    info!(rows = inserted, "Demo catalog seeded");
    Ok(inserted)
}
