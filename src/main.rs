mod card;
mod config;
mod data;
mod date;
mod errors;
mod event;
mod page;

use config::Config;
use data::Dataset;
use errors::*;
use page::{Page, Selection};

type State = std::sync::Arc<Dataset>;

#[tokio::main]
async fn main() -> Result {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let dataset = match config.data_file {
        Some(ref path) => {
            log::info!("Loading podcasts from {path}");
            Dataset::from_file(path)?
        }
        None => {
            log::info!("Using embedded podcasts");
            Dataset::embedded()?
        }
    };

    let app = axum::Router::new()
        .route("/", axum::routing::get(index))
        .with_state(State::new(dataset));

    let bind = config.bind();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    log::info!("Listening on {bind}");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn index(
    axum::extract::State(dataset): axum::extract::State<State>,
    axum::extract::Query(selection): axum::extract::Query<Selection>,
) -> Result<axum::response::Html<String>> {
    let mut page = Page::new(&dataset)?;
    page.apply(&selection);

    Ok(axum::response::Html(page.render()?.into_string()))
}
