use serde::{Deserialize, Serialize};

use super::summary::release_year;
use super::{image_url, null_as_default, MovieSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
}

/// Full catalog record for a single movie, as returned by `GET /movie/{id}`.
///
/// Unknown upstream fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

impl MovieDetails {
    /// Snapshot the fields kept when the movie is favorited.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary::from(self)
    }

    pub fn backdrop_url(&self, size: &str) -> Option<String> {
        image_url(size, self.backdrop_path.as_deref())
    }

    pub fn poster_url(&self, size: &str) -> Option<String> {
        image_url(size, self.poster_path.as_deref())
    }

    pub fn release_year(&self) -> Option<i32> {
        release_year(&self.release_date)
    }

    /// Runtime as `"2h 28m"`, `"45m"`, or `None` when unknown or zero.
    pub fn runtime_label(&self) -> Option<String> {
        let minutes = self.runtime.filter(|m| *m > 0)?;
        let (hours, rest) = (minutes / 60, minutes % 60);
        if hours == 0 {
            Some(format!("{}m", rest))
        } else {
            Some(format!("{}h {}m", hours, rest))
        }
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}
