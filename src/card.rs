use crate::event::{Click, PodcastSelected};

pub(crate) const TAG: &str = "podcast-card";

/// Attributes whose changes trigger a render.
pub(crate) const OBSERVED_ATTRIBUTES: [&str; 6] = ["cover", "title", "genres", "seasons", "updated", "id"];

static STYLES: &str = r#"
:host {
    display: block;
}
.card {
    background: white;
    padding: 1rem;
    border-radius: 8px;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
    cursor: pointer;
    transition: transform 0.2s;
}
.card:hover {
    transform: scale(1.02);
}
img {
    width: 100%;
    border-radius: 6px;
}
h3 {
    margin: 0.5rem 0;
    font-size: 1rem;
}
p {
    margin: 0;
    font-size: 0.8rem;
    color: #555;
}
.tags {
    margin: 0.5rem 0;
}
.tag {
    background: #eee;
    padding: 0.3rem 0.6rem;
    margin-right: 0.5rem;
    margin-top: 0.5rem;
    border-radius: 4px;
    display: inline-block;
    font-size: 0.8rem;
}
.updated-text {
    font-size: 0.8rem;
    color: #555;
}
"#;

/// Podcast summary card, configured only through string attributes.
///
/// The rendered subtree is a function of the attributes: every change of an
/// observed attribute re-renders it in full, and so does attaching the card to
/// a document.
#[derive(Debug, Default)]
pub(crate) struct Card {
    attributes: std::collections::BTreeMap<String, String>,
    shadow: String,
    connected: bool,
    renders: usize,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) -> crate::Result<bool> {
        let old = self.attributes.insert(name.to_string(), value.to_string());

        self.attribute_changed(name, old.as_deref(), Some(value))
    }

    /// Returns `true` when the change caused a render.
    fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) -> crate::Result<bool> {
        if !OBSERVED_ATTRIBUTES.contains(&name) || old == new {
            return Ok(false);
        }

        self.render()?;

        Ok(true)
    }

    pub fn connect(&mut self) -> crate::Result {
        if !self.connected {
            self.connected = true;
            self.render()?;
        }

        Ok(())
    }

    /// On a malformed `genres` attribute the previous subtree is kept and the
    /// decoding error is returned.
    pub fn render(&mut self) -> crate::Result {
        let view = View::new(self)?;

        self.shadow = view.markup().into_string();
        self.renders += 1;
        log::trace!("{} '{}' rendered {} times", TAG, view.title, self.renders);

        Ok(())
    }

    pub fn handle_click(&self, click: &mut Click) -> PodcastSelected {
        click.stop_propagation();

        let event = PodcastSelected::new(self.attribute("id").unwrap_or_default());
        log::debug!("{} dispatched {} for '{}'", TAG, event.name(), event.id);

        event
    }

    /// The host element, with its attributes and a declarative shadow root
    /// holding the last rendered subtree.
    pub fn host(&self) -> maud::Markup {
        maud::html! {
            podcast-card
                id=[self.attribute("id")]
                cover=[self.attribute("cover")]
                title=[self.attribute("title")]
                genres=[self.attribute("genres")]
                seasons=[self.attribute("seasons")]
                updated=[self.attribute("updated")]
            {
                template shadowrootmode="open" {
                    style { (maud::PreEscaped(STYLES)) }
                    div class="card" { (maud::PreEscaped(&self.shadow)) }
                }
            }
        }
    }
}

#[derive(Debug)]
struct View {
    cover: String,
    title: String,
    genres: Vec<String>,
    seasons: String,
    updated: String,
}

impl View {
    fn new(card: &Card) -> crate::Result<Self> {
        let value = |name: &str| card.attribute(name).filter(|x| !x.is_empty());

        let genres = match value("genres") {
            Some(json) => serde_json::from_str(json).map_err(crate::Error::Genres)?,
            None => Vec::new(),
        };

        Ok(Self {
            cover: value("cover").unwrap_or_default().to_string(),
            title: value("title").unwrap_or("Untitled").to_string(),
            genres,
            seasons: value("seasons").unwrap_or("0").to_string(),
            updated: crate::date::short(value("updated").unwrap_or_default()),
        })
    }

    fn markup(&self) -> maud::Markup {
        maud::html! {
            img src=(self.cover) alt={ "Podcast cover for " (self.title) };
            h3 { (self.title) }
            div class="tags" {
                @for genre in &self.genres {
                    span class="tag" { (genre) }
                }
            }
            p { (self.seasons) " seasons" }
            p class="updated-text" { "Last updated: " (self.updated) }
        }
    }
}
