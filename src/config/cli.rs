use crate::adapters::json::parse_sequence;
use crate::domain::model::Value;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where the CLI reads its JSON document from.
#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_arg(input: Option<&str>) -> Self {
        match input {
            Some(path) if path != "-" => InputSource::File(PathBuf::from(path)),
            _ => InputSource::Stdin,
        }
    }

    pub async fn read_to_string(&self) -> Result<String> {
        match self {
            InputSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            InputSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
        }
    }

    pub async fn read_values(&self) -> Result<Vec<Value>> {
        let text = self.read_to_string().await?;
        tracing::debug!("Read {} bytes from {:?}", text.len(), self);
        parse_sequence(&text)
    }
}
