// tests/support/builders.rs
use bytes::Bytes;

pub const BOUNDARY: &str = "cinemawords-test-boundary";

/// A `multipart/form-data` body assembled by hand.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Bytes {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Bytes::from(self.body)
    }
}

/// Article form values with sensible defaults for a valid review.
#[derive(Clone)]
pub struct ArticleFormBuilder {
    fields: Vec<(String, String)>,
    cover: Option<(String, Vec<u8>)>,
}

impl ArticleFormBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            fields: vec![
                ("title".into(), title.into()),
                ("article_type".into(), "review".into()),
                ("category".into(), String::new()),
                ("subject_title".into(), format!("{title} (the film)")),
                ("subject_year".into(), "1995".into()),
                ("director".into(), "Michael Mann".into()),
                ("rating".into(), String::new()),
                ("excerpt".into(), format!("A short take on {title}.")),
                ("body".into(), format!("The long version of {title}.")),
                ("cover_image_url".into(), String::new()),
            ],
            cover: None,
        }
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((name.into(), value.into())),
        }
        self
    }

    pub fn kind(self, kind: &str) -> Self {
        self.set("article_type", kind)
    }

    pub fn rating(self, rating: &str) -> Self {
        self.set("rating", rating)
    }

    pub fn category(self, id: i64) -> Self {
        self.set("category", &id.to_string())
    }

    pub fn excerpt(self, excerpt: &str) -> Self {
        self.set("excerpt", excerpt)
    }

    pub fn cover(mut self, file_name: &str, bytes: &[u8]) -> Self {
        self.cover = Some((file_name.into(), bytes.to_vec()));
        self
    }

    pub fn build(self) -> MultipartBody {
        let mut body = MultipartBody::new();
        for (name, value) in &self.fields {
            body = body.text(name, value);
        }
        match &self.cover {
            Some((file_name, bytes)) => body.file("cover_image", file_name, "image/png", bytes),
            None => body.file("cover_image", "", "application/octet-stream", b""),
        }
    }
}
