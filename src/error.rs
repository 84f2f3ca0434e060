use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Short reason suitable for a run record.
    pub fn reason(&self) -> String {
        match self {
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                "interpreter not found".to_string()
            }
            Self::Spawn { source, .. } => source.to_string(),
        }
    }
}
