use crate::card::Card;
use crate::data::{Dataset, Podcast};
use crate::event::{Click, PodcastSelected};

static STYLES: &str = r#"
body {
    margin: 0;
    font-family: sans-serif;
    background: #f4f4f4;
}
header {
    padding: 1rem 2rem;
    background: #222;
    color: white;
}
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1.5rem;
    padding: 2rem;
}
.grid > a {
    color: inherit;
    text-decoration: none;
}
.modal {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
}
.modal.hidden {
    display: none;
}
.backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
}
.modal-content {
    position: relative;
    background: white;
    border-radius: 8px;
    padding: 1.5rem;
    width: min(600px, 90vw);
    max-height: 90vh;
    overflow-y: auto;
}
.modal-content img {
    width: 100%;
    border-radius: 6px;
}
.close {
    position: absolute;
    top: 0.5rem;
    right: 1rem;
    font-size: 1.5rem;
    color: #333;
    text-decoration: none;
}
.tag {
    background: #eee;
    padding: 0.3rem 0.6rem;
    margin-right: 0.5rem;
    border-radius: 4px;
    display: inline-block;
    font-size: 0.8rem;
}
#seasonList {
    list-style: none;
    padding: 0;
}
#seasonList li {
    padding: 0.5rem 0;
    border-bottom: 1px solid #eee;
}
"#;

/// Where a click on the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ModalTarget {
    Backdrop,
    Content,
    CloseButton,
}

/// Query string of a page request: the activated card and, optionally, where
/// a click on the modal landed afterwards.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct Selection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click: Option<ModalTarget>,
}

impl Selection {
    pub fn href(&self) -> crate::Result<String> {
        Ok(format!("/?{}", serde_urlencoded::to_string(self)?))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SeasonEntry {
    pub title: String,
    pub episodes: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ModalContent {
    pub title: String,
    pub image: String,
    pub description: String,
    pub genres: Vec<String>,
    pub updated: String,
    pub seasons: Vec<SeasonEntry>,
}

#[derive(Debug, Default)]
pub(crate) struct Modal {
    open: bool,
    podcast: Option<String>,
    content: ModalContent,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    fn href(&self, click: ModalTarget) -> crate::Result<String> {
        Selection {
            podcast: self.podcast.clone(),
            click: Some(click),
        }
        .href()
    }
}

/// Cards in dataset order. Selection events from any card are handled here
/// rather than on each card.
#[derive(Debug, Default)]
pub(crate) struct Grid {
    cards: Vec<Card>,
}

impl Grid {
    fn append(&mut self, mut card: Card) -> crate::Result {
        card.connect()?;
        self.cards.push(card);

        Ok(())
    }

    /// Clicks the card whose `id` attribute is `id` and returns the
    /// notification that bubbled up to the grid.
    fn click(&self, id: &str) -> Option<PodcastSelected> {
        let card = self.cards.iter().find(|x| x.attribute("id") == Some(id))?;
        let mut click = Click::new();

        let event = card.handle_click(&mut click);
        debug_assert!(click.propagation_stopped());

        Some(event)
    }

    fn markup(&self) -> crate::Result<maud::Markup> {
        let mut links = Vec::with_capacity(self.cards.len());

        for card in &self.cards {
            let selection = Selection {
                podcast: card.attribute("id").map(str::to_string),
                click: None,
            };
            links.push((selection.href()?, card));
        }

        Ok(maud::html! {
            @for (href, card) in &links {
                a href=(href) {
                    (card.host())
                }
            }
        })
    }
}

/// Owns the grid and the detail modal for one dataset.
pub(crate) struct Page<'a> {
    dataset: &'a Dataset,
    grid: Grid,
    modal: Modal,
}

impl<'a> Page<'a> {
    pub fn new(dataset: &'a Dataset) -> crate::Result<Self> {
        let mut grid = Grid::default();

        for podcast in &dataset.podcasts {
            let genres = serde_json::to_string(&dataset.genre_titles(&podcast.genres))
                .map_err(crate::Error::Encoding)?;

            let mut card = Card::new();
            card.set_attribute("id", podcast.id.as_str())?;
            card.set_attribute("cover", &podcast.image)?;
            card.set_attribute("title", &podcast.title)?;
            card.set_attribute("genres", &genres)?;
            card.set_attribute("seasons", &podcast.seasons.to_string())?;
            card.set_attribute("updated", &podcast.updated)?;

            grid.append(card)?;
        }

        Ok(Self {
            dataset,
            grid,
            modal: Modal::default(),
        })
    }

    /// Replays the user interaction carried by a request.
    pub fn apply(&mut self, selection: &Selection) {
        if let Some(ref id) = selection.podcast {
            self.activate(id);
        }

        if let Some(target) = selection.click {
            self.click_modal(target);
        }
    }

    /// User activation of the card with the given id.
    pub fn activate(&mut self, id: &str) {
        if let Some(event) = self.grid.click(id) {
            self.on_podcast_selected(&event);
        }
    }

    pub fn on_podcast_selected(&mut self, event: &PodcastSelected) {
        let dataset = self.dataset;

        if let Some(podcast) = dataset.podcast(&event.id) {
            self.open_modal(podcast);
        }
    }

    pub fn open_modal(&mut self, podcast: &Podcast) {
        let description = podcast
            .description
            .as_deref()
            .filter(|x| !x.is_empty())
            .unwrap_or("No description available.");

        self.modal.content = ModalContent {
            title: podcast.title.clone(),
            image: podcast.image.clone(),
            description: description.to_string(),
            genres: self.dataset.genre_titles(&podcast.genres),
            updated: format!("Last updated: {}", crate::date::short(&podcast.updated)),
            seasons: self
                .dataset
                .seasons_of(&podcast.id)
                .into_iter()
                .map(|x| SeasonEntry {
                    title: x.title.clone(),
                    episodes: x.episodes,
                })
                .collect(),
        };
        self.modal.podcast = Some(podcast.id.to_string());
        self.modal.open = true;

        log::debug!("modal opened for podcast {}", podcast.id);
    }

    pub fn close_modal(&mut self) {
        self.modal.open = false;

        log::debug!("modal closed");
    }

    pub fn click_modal(&mut self, target: ModalTarget) {
        match target {
            ModalTarget::Backdrop | ModalTarget::CloseButton => self.close_modal(),
            ModalTarget::Content => (),
        }
    }

    pub fn render(&self) -> crate::Result<maud::Markup> {
        let content = self.modal.content();
        let grid = self.grid.markup()?;
        let backdrop = self.modal.href(ModalTarget::Backdrop)?;
        let close = self.modal.href(ModalTarget::CloseButton)?;

        Ok(maud::html! {
            (maud::DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Podcasts" }
                    style { (maud::PreEscaped(STYLES)) }
                }
                body {
                    header {
                        h1 { "Podcasts" }
                    }
                    main id="podcastGrid" class="grid" {
                        (grid)
                    }
                    div id="modal" class=(if self.modal.is_open() { "modal" } else { "modal hidden" }) {
                        a class="backdrop" href=(backdrop) aria-label="Close" {}
                        div class="modal-content" {
                            a id="closeModal" class="close" href=(close) aria-label="Close" { "×" }
                            h2 id="modalTitle" { (content.title) }
                            img id="modalImage" src=(content.image) alt=(content.title);
                            p id="modalDesc" { (content.description) }
                            div id="modalGenres" class="tags" {
                                @for genre in &content.genres {
                                    span class="tag" { (genre) }
                                }
                            }
                            p id="modalUpdated" { (content.updated) }
                            h3 { "Seasons" }
                            ul id="seasonList" {
                                @for season in &content.seasons {
                                    li {
                                        strong { (season.title) }
                                        p { (season.episodes) " episodes" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    impl Page<'_> {
        fn grid(&self) -> &Grid {
            &self.grid
        }

        fn modal(&self) -> &Modal {
            &self.modal
        }
    }

    impl Grid {
        fn cards(&self) -> &[Card] {
            &self.cards
        }
    }

    fn dataset() -> Dataset {
        Dataset::parse(
            r#"{
                "podcasts": [
                    {"id": 3, "title": "Three", "image": "3.jpg", "description": "Third", "genres": [1, 99], "seasons": 1, "updated": "2022-11-03T07:00:00.000Z"},
                    {"id": "5", "title": "Five", "image": "5.jpg", "genres": [2], "seasons": 0, "updated": "bogus"},
                    {"id": "8", "title": "Eight", "image": "8.jpg", "description": "", "genres": [], "updated": "2020-02-29"}
                ],
                "genres": [
                    {"id": 1, "title": "History"},
                    {"id": 2, "title": "Comedy"}
                ],
                "seasons": [
                    {"podcastId": "3", "title": "Season 1", "episodes": 8},
                    {"podcastId": 8, "title": "Pilot", "episodes": 1},
                    {"podcastId": "8", "title": "Return", "episodes": 12}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn grid_follows_dataset() {
        let dataset = dataset();
        let page = Page::new(&dataset).unwrap();
        let cards = page.grid().cards();

        let ids: Vec<_> = cards.iter().map(|x| x.attribute("id").unwrap()).collect();
        assert_eq!(ids, vec!["3", "5", "8"]);
        assert!(cards.iter().all(Card::is_connected));

        assert_eq!(cards[0].attribute("genres"), Some(r#"["History","Unknown"]"#));
        assert_eq!(cards[0].attribute("seasons"), Some("1"));
        assert_eq!(cards[0].attribute("cover"), Some("3.jpg"));
        assert!(cards[0].shadow().contains(r#"<span class="tag">Unknown</span>"#));
        assert_eq!(cards[2].attribute("genres"), Some("[]"));
    }

    #[test]
    fn activation_opens_modal() {
        let dataset = dataset();
        let mut page = Page::new(&dataset).unwrap();
        assert!(!page.modal().is_open());

        page.activate("3");

        assert!(page.modal().is_open());
        assert_eq!(
            page.modal().content(),
            &ModalContent {
                title: "Three".to_string(),
                image: "3.jpg".to_string(),
                description: "Third".to_string(),
                genres: vec!["History".to_string(), "Unknown".to_string()],
                updated: "Last updated: Nov 3, 2022".to_string(),
                seasons: vec![SeasonEntry {
                    title: "Season 1".to_string(),
                    episodes: 8,
                }],
            }
        );

        let html = page.render().unwrap().into_string();
        assert!(html.contains(r#"<div id="modal" class="modal">"#));
        assert!(html.contains("<li><strong>Season 1</strong><p>8 episodes</p></li>"));
    }

    #[test]
    fn selection_replaces_content() {
        let dataset = dataset();
        let mut page = Page::new(&dataset).unwrap();

        page.activate("8");
        assert_eq!(page.modal().content().seasons.len(), 2);
        assert_eq!(page.modal().content().description, "No description available.");

        page.activate("5");
        let content = page.modal().content();
        assert_eq!(content.title, "Five");
        assert!(content.seasons.is_empty());
        assert_eq!(content.description, "No description available.");
        assert_eq!(content.updated, "Last updated: Invalid Date");
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let dataset = dataset();
        let mut page = Page::new(&dataset).unwrap();

        page.on_podcast_selected(&PodcastSelected::new("404"));
        assert!(!page.modal().is_open());

        page.activate("404");
        assert!(!page.modal().is_open());

        page.activate("3");
        page.on_podcast_selected(&PodcastSelected::new("404"));
        assert!(page.modal().is_open());
        assert_eq!(page.modal().content().title, "Three");
    }

    #[test]
    fn backdrop_closes() {
        let dataset = dataset();
        let mut page = Page::new(&dataset).unwrap();
        page.activate("3");

        page.click_modal(ModalTarget::Content);
        assert!(page.modal().is_open());

        page.click_modal(ModalTarget::Backdrop);
        assert!(!page.modal().is_open());
    }

    #[test]
    fn close_button() {
        let dataset = dataset();
        let mut page = Page::new(&dataset).unwrap();
        page.activate("3");

        page.click_modal(ModalTarget::CloseButton);

        assert!(!page.modal().is_open());
        assert!(page
            .render()
            .unwrap()
            .into_string()
            .contains(r#"<div id="modal" class="modal hidden">"#));
    }

    #[test]
    fn document_layout() {
        let dataset = dataset();
        let page = Page::new(&dataset).unwrap();
        let html = page.render().unwrap().into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        for id in [
            "podcastGrid",
            "modal",
            "closeModal",
            "modalTitle",
            "modalImage",
            "modalDesc",
            "modalGenres",
            "modalUpdated",
            "seasonList",
        ] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        assert_eq!(html.matches("<podcast-card").count(), 3);
        assert!(html.contains(r#"<a href="/?podcast=5"><podcast-card id="5""#));
    }

    #[test]
    fn request_replays_clicks() {
        let dataset = dataset();

        let mut page = Page::new(&dataset).unwrap();
        page.apply(&Selection {
            podcast: Some("3".to_string()),
            click: Some(ModalTarget::Content),
        });
        assert!(page.modal().is_open());

        let mut page = Page::new(&dataset).unwrap();
        page.apply(&Selection {
            podcast: Some("3".to_string()),
            click: Some(ModalTarget::Backdrop),
        });
        assert!(!page.modal().is_open());
        assert_eq!(page.modal().content().title, "Three");

        let mut page = Page::new(&dataset).unwrap();
        page.apply(&Selection::default());
        assert!(!page.modal().is_open());
    }

    #[test]
    fn href_encoding() {
        let href = |podcast: &str, click| {
            Selection {
                podcast: Some(podcast.to_string()),
                click,
            }
            .href()
            .unwrap()
        };

        assert_eq!(href("3", None), "/?podcast=3");
        assert_eq!(href("a+b", None), "/?podcast=a%2Bb");
        assert_eq!(href("x&y", None), "/?podcast=x%26y");
        assert_eq!(href("c#d", None), "/?podcast=c%23d");
        assert_eq!(href("3", Some(ModalTarget::CloseButton)), "/?podcast=3&click=close-button");
        assert_eq!(Selection::default().href().unwrap(), "/?");
    }

    #[test]
    fn modal_links() {
        let dataset = dataset();
        let mut page = Page::new(&dataset).unwrap();
        page.activate("3");

        let html = page.render().unwrap().into_string();

        assert!(html.contains(
            r#"<a class="backdrop" href="/?podcast=3&amp;click=backdrop" aria-label="Close"></a><div class="modal-content"><a id="closeModal" class="close" href="/?podcast=3&amp;click=close-button""#
        ));
    }
}
