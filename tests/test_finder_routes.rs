
use serde::Deserialize;
use test_startup::*;

#[derive(Deserialize, Debug, Clone)]
struct Movie {
    title: String,
    img_url: String,
    imdb_id: String,
    imdb_url: String,
}

#[derive(Deserialize, Debug)]
struct FinderView {
    query: String,
    state: String,
    is_loading: bool,
    has_error: bool,
    error_message: Option<String>,
    preview: Option<Movie>,
    can_submit: bool,
    can_add: bool,
    submit_label: String,
}

#[derive(Deserialize, Debug)]
struct AddedMovie {
    added: bool,
    movie: Movie,
    movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn search_for(app: &TestApp, title: &str) -> FinderView {
    let res = app.set_query(title).await;
    assert!(res.status().is_success());
    let res = app.search().await;
    assert!(res.status().is_success());
    res.json::<Data<FinderView>>()
        .await
        .expect("Failed to parse the response body")
        .data
}

#[actix_rt::test]
async fn fresh_finder_is_idle() {
    let app = spawn_app().await;
    let body: Data<FinderView> = serde_json::from_value(app.get_json("/finder").await).unwrap();
    let view = body.data;
    assert_eq!(view.state, "idle");
    assert_eq!(view.query, "");
    assert!(!view.can_submit);
    assert!(!view.can_add);
    assert_eq!(view.submit_label, "Find a movie");
}

#[actix_rt::test]
async fn search_and_add_forrest_gump() {
    let app = spawn_app().await;

    let view = search_for(&app, "Forrest Gump").await;
    assert_eq!(view.state, "found");
    assert!(!view.is_loading);
    assert!(!view.has_error);
    assert!(view.can_add);
    assert_eq!(view.submit_label, "Search again");
    let preview = view.preview.expect("preview should be shown");
    assert_eq!(preview.title, "Forrest Gump");
    assert_eq!(preview.imdb_id, "tt0109830");
    assert!(preview.imdb_url.contains("tt0109830"));

    let res = app.add().await;
    assert!(res.status().is_success());
    let added = res.json::<Data<AddedMovie>>().await.unwrap().data;
    assert!(added.added);
    assert_eq!(added.movie.imdb_id, "tt0109830");
    assert_eq!(added.movies.len(), 1);

    let list: Data<Vec<Movie>> = serde_json::from_value(app.get_json("/movies").await).unwrap();
    assert_eq!(list.data.len(), 1);
    assert_eq!(list.data[0].imdb_id, "tt0109830");

    let finder: Data<FinderView> = serde_json::from_value(app.get_json("/finder").await).unwrap();
    assert_eq!(finder.data.query, "");
    assert!(finder.data.preview.is_none());
    assert_eq!(finder.data.state, "idle");
}

#[actix_rt::test]
async fn adding_the_same_movie_twice_lists_it_once() {
    let app = spawn_app().await;

    for expected_added in [true, false] {
        search_for(&app, "Forrest Gump").await;
        let added = app.add().await.json::<Data<AddedMovie>>().await.unwrap().data;
        assert_eq!(added.added, expected_added);
        assert_eq!(added.movies.len(), 1);
    }
}

#[actix_rt::test]
async fn missing_poster_uses_placeholder() {
    let app = spawn_app().await;
    let view = search_for(&app, "Lost Reel").await;
    let preview = view.preview.unwrap();
    assert_eq!(
        preview.img_url,
        "https://via.placeholder.com/360x270.png?text=no%20preview"
    );
    assert_eq!(preview.imdb_url, "https://www.imdb.com/title/tt0000404");
}

#[actix_rt::test]
async fn unknown_title_shows_error() {
    let app = spawn_app().await;
    let view = search_for(&app, "zzzzz-no-such-movie").await;
    assert_eq!(view.state, "not_found");
    assert!(view.has_error);
    assert_eq!(
        view.error_message.as_deref(),
        Some("Can't find a movie with such a title")
    );
    assert!(view.preview.is_none());
    assert!(!view.can_add);

    let res = app.add().await;
    assert_eq!(res.status().as_u16(), 409);
    let list: Data<Vec<Movie>> = serde_json::from_value(app.get_json("/movies").await).unwrap();
    assert!(list.data.is_empty());
}

#[actix_rt::test]
async fn error_replaces_previous_preview() {
    let app = spawn_app().await;
    search_for(&app, "Forrest Gump").await;
    let view = search_for(&app, "zzzzz-no-such-movie").await;
    assert!(view.has_error);
    assert!(view.preview.is_none());
}

#[actix_rt::test]
async fn typing_clears_the_error() {
    let app = spawn_app().await;
    let view = search_for(&app, "zzzzz-no-such-movie").await;
    assert!(view.has_error);

    let res = app.set_query("zzzzz-no-such-movie2").await;
    let view = res.json::<Data<FinderView>>().await.unwrap().data;
    assert!(!view.has_error);
    assert!(view.error_message.is_none());
    assert!(view.can_submit);
}

#[actix_rt::test]
async fn empty_query_cannot_be_submitted() {
    let app = spawn_app().await;
    app.set_query("   ").await;
    let res = app.search().await;
    assert_eq!(res.status().as_u16(), 400);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "title can't be empty");
}

#[actix_rt::test]
async fn unreadable_response_shows_error() {
    let app = spawn_app().await;
    let view = search_for(&app, "Garbled").await;
    assert!(view.has_error);
    assert!(!view.is_loading);
}

#[actix_rt::test]
async fn unreachable_service_shows_error() {
    let app = spawn_app_with_unreachable_omdb().await;
    let view = search_for(&app, "Forrest Gump").await;
    assert_eq!(view.state, "not_found");
    assert!(view.has_error);
    assert!(!view.is_loading);
    assert!(view.preview.is_none());
}
