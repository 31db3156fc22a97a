static EMBEDDED: &str = include_str!("../data/podcasts.json");

pub(crate) const UNKNOWN_GENRE: &str = "Unknown";

/// Podcast and season identifier.
///
/// The dataset mixes numeric and string ids; both decode into the same string
/// form so that `3` and `"3"` compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(from = "RawId")]
pub(crate) struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub(crate) struct Podcast {
    pub id: Id,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Vec<u32>,
    #[serde(default)]
    pub seasons: u32,
    pub updated: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub(crate) struct Genre {
    pub id: u32,
    pub title: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Season {
    pub podcast_id: Id,
    pub title: String,
    pub episodes: u32,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub(crate) struct Dataset {
    pub podcasts: Vec<Podcast>,
    pub genres: Vec<Genre>,
    pub seasons: Vec<Season>,
}

impl Dataset {
    pub fn embedded() -> crate::Result<Self> {
        Self::parse(EMBEDDED)
    }

    pub fn from_file(path: &str) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> crate::Result<Self> {
        serde_json::from_str(contents).map_err(crate::Error::Dataset)
    }

    /// Resolves genre ids to titles, keeping order. Unknown ids become "Unknown".
    pub fn genre_titles(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .map(|id| {
                self.genres
                    .iter()
                    .find(|genre| genre.id == *id)
                    .map_or_else(|| UNKNOWN_GENRE.to_string(), |genre| genre.title.clone())
            })
            .collect()
    }

    pub fn podcast(&self, id: &str) -> Option<&Podcast> {
        self.podcasts.iter().find(|x| x.id.as_str() == id)
    }

    pub fn seasons_of(&self, id: &Id) -> Vec<&Season> {
        self.seasons.iter().filter(|x| &x.podcast_id == id).collect()
    }
}
