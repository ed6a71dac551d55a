use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for CoachError {
    fn from(e: tera::Error) -> Self {
        CoachError::TemplateRender(e.to_string())
    }
}
