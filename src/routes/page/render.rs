use crate::domain::{FinderView, Movie};

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_movie_card(movie: &Movie) -> String {
    format!(
        r#"<div class="card" data-cy="movieCard">
  <div class="card-image">
    <figure class="image is-4by3">
      <img data-cy="movieImage" src="{img_url}" alt="Film logo">
    </figure>
  </div>
  <div class="card-content">
    <p class="title is-8" data-cy="movieTitle">{title}</p>
    <div class="content" data-cy="movieDescription">{description}</div>
    <a href="{imdb_url}" data-cy="movieURL">IMDb</a>
  </div>
</div>"#,
        img_url = escape_html(&movie.img_url),
        title = escape_html(&movie.title),
        description = escape_html(&movie.description),
        imdb_url = escape_html(&movie.imdb_url),
    )
}

fn render_movie_list(movies: &[Movie]) -> String {
    let cards: String = movies.iter().map(render_movie_card).collect();
    format!(r#"<div class="movies">{}</div>"#, cards)
}

fn render_finder(view: &FinderView) -> String {
    let input_class = if view.has_error { "input is-danger" } else { "input" };
    let error = match view.error_message {
        Some(message) => format!(
            r#"<p class="help is-danger" data-cy="errorMessage">{}</p>"#,
            escape_html(message)
        ),
        None => String::new(),
    };
    let search_class = if view.is_loading {
        "button is-light is-loading"
    } else {
        "button is-light"
    };
    let add_button = if view.can_add {
        r#"<form class="control" method="post" action="/add">
  <button data-cy="addButton" type="submit" class="button is-primary">Add to the list</button>
</form>"#
    } else {
        ""
    };
    let preview = match &view.preview {
        Some(movie) => format!(
            r#"<div class="container" data-cy="previewContainer">
  <h2 class="title">Preview</h2>
  {}
</div>"#,
            render_movie_card(movie)
        ),
        None => String::new(),
    };

    let disabled = if view.can_submit { "" } else { " disabled" };

    // Editing the title hides a shown error, toggles the search button and
    // stores the query so a reload reflects it.
    format!(
        r#"<form class="find-movie" id="find-movie" method="post" action="/search">
  <div class="field">
    <label class="label" for="movie-title">Movie title</label>
    <div class="control">
      <input data-cy="titleField" type="text" id="movie-title" name="query"
        placeholder="Enter a title to search" class="{input_class}" value="{query}" required
        oninput="queryEdited(this)">
    </div>
    {error}
  </div>
</form>
<div class="field is-grouped">
  <div class="control">
    <button data-cy="searchButton" type="submit" form="find-movie" class="{search_class}"{disabled}>{label}</button>
  </div>
  {add_button}
</div>
{preview}
<script>
function queryEdited(input) {{
  input.classList.remove('is-danger');
  var error = document.querySelector('[data-cy=errorMessage]');
  if (error) {{ error.remove(); }}
  document.querySelector('[data-cy=searchButton]').disabled = !input.value.trim();
  fetch('/finder/query', {{
    method: 'PUT',
    headers: {{ 'Content-Type': 'application/json' }},
    body: JSON.stringify({{ query: input.value }})
  }});
}}
</script>"#,
        input_class = input_class,
        query = escape_html(&view.query),
        error = error,
        search_class = search_class,
        disabled = disabled,
        label = view.submit_label,
        add_button = add_button,
        preview = preview,
    )
}

/// Two-pane page: accepted movies on the left, the finder in the sidebar.
pub fn render_page(movies: &[Movie], view: &FinderView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Movies list</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css">
</head>
<body>
<div class="page">
  <div class="page-content">
    {list}
  </div>
  <div class="sidebar">
    {finder}
  </div>
</div>
</body>
</html>"#,
        list = render_movie_list(movies),
        finder = render_finder(view),
    )
}
