use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// Number of genres a recommendation request must carry.
pub const GENRE_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub usuario_id: String,
    pub senha: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            usuario_id: username.into(),
            senha: password.into(),
        }
    }
}

/// Body of a `/login` answer. Success carries `token`, failure carries `error`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub token: Option<String>,
    /// Shown to the user as-is, whatever JSON type the backend used.
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub main_genre: String,
    pub rating: f64,
}

/// Raw values of the add-book form.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub main_genre: String,
    /// `None` when the form value has no numeric prefix; sent as `null`.
    pub rating: Option<f64>,
}

impl From<BookForm> for NewBook {
    fn from(form: BookForm) -> Self {
        NewBook {
            rating: parse_float(&form.rating),
            title: form.title,
            author: form.author,
            main_genre: form.genre,
        }
    }
}

/// Genres picked for a recommendation. Serializes as the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSelection {
    generos: Vec<String>,
}

impl GenreSelection {
    /// Collapses duplicates (keeping first occurrence order) and requires
    /// exactly [`GENRE_COUNT`] distinct genres.
    pub fn new<I, S>(selected: I) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut generos: Vec<String> = Vec::new();
        for genre in selected {
            let genre = genre.into();
            if !generos.contains(&genre) {
                generos.push(genre);
            }
        }
        if generos.len() != GENRE_COUNT {
            return Err(ClientError::GenreCount {
                expected: GENRE_COUNT,
                got: generos.len(),
            });
        }
        Ok(GenreSelection { generos })
    }

    pub fn genres(&self) -> &[String] {
        &self.generos
    }
}

/// One element of a recommendation answer. Fields keep the JSON value the
/// backend sent; `None` means the field was absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendedBook {
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub rating: Option<Value>,
}

impl RecommendedBook {
    pub fn new(title: impl Into<Value>, author: impl Into<Value>, rating: impl Into<Value>) -> Self {
        RecommendedBook {
            title: Some(title.into()),
            author: Some(author.into()),
            rating: Some(rating.into()),
        }
    }

    /// Reads the fields off any JSON element; non-objects have none.
    pub fn from_json(item: &Value) -> Self {
        RecommendedBook {
            title: item.get("title").cloned(),
            author: item.get("author").cloned(),
            rating: item.get("rating").cloned(),
        }
    }
}

/// Parses the longest numeric prefix of `input`, skipping leading whitespace,
/// the way an HTML form's rating text is read. Returns `None` when no digits
/// are found.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}
