use serde::{Deserialize, Serialize};

use super::{image_url, null_as_default, MovieDetails};

/// Minimal cached record of a movie, as persisted in the favorites slot.
///
/// Field names follow the catalog API (`poster_path`, `vote_average`, ...) so the
/// stored blob keeps the same shape the browser client wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
}

impl MovieSummary {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: 0.0,
            release_date: String::new(),
            overview: String::new(),
        }
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = date.into();
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    /// Full poster URL at the given size (see `POSTER_SIZE`, `THUMB_SIZE`).
    pub fn poster_url(&self, size: &str) -> Option<String> {
        image_url(size, self.poster_path.as_deref())
    }

    /// Year component of `release_date`, if it has one.
    pub fn release_year(&self) -> Option<i32> {
        release_year(&self.release_date)
    }

    /// Vote average rounded to one decimal, e.g. `"8.4"`.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }
}

impl From<&MovieDetails> for MovieSummary {
    fn from(details: &MovieDetails) -> Self {
        Self {
            id: details.id,
            title: details.title.clone(),
            poster_path: details.poster_path.clone(),
            vote_average: details.vote_average,
            release_date: details.release_date.clone(),
            overview: details.overview.clone(),
        }
    }
}

pub(crate) fn release_year(date: &str) -> Option<i32> {
    let year = date.get(..4)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}
